mod components;
mod config;
mod model;
mod render;
mod routes;
mod speech;
mod state;
mod timer;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
