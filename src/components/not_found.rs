use super::bubbles::{BubbleField, BubbleLayout};
use crate::routes::Route;
use crate::util::cerr;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|loc| loc.path().to_string())
        .unwrap_or_default();

    {
        let path = path.clone();
        use_effect_with(path, move |path| {
            cerr(&format!(
                "404 Error: User attempted to access non-existent route: {}",
                path
            ));
            || ()
        });
    }

    html! {
        <div style="position:relative; min-height:100vh; overflow:hidden; display:flex; align-items:center; justify-content:center; padding:16px; background:linear-gradient(#0b3d5c, #06243a);">
            <div style="background:rgba(22,27,34,0.85); border:1px solid rgba(88,166,255,0.3); border-radius:12px; padding:32px; text-align:center; z-index:1;">
                <h1 style="margin:0 0 16px 0; font-size:36px; color:#58a6ff;">{"404"}</h1>
                <p style="margin:0 0 16px 0; font-size:20px; opacity:0.8;">{"Oops! This ocean area is unexplored"}</p>
                <Link<Route> to={Route::Home}>
                    <span style="display:inline-block; padding:12px 24px; border-radius:8px; background:#d4af37; color:#0e1116; font-weight:700;">
                        {"Return to Ocean Adventure"}
                    </span>
                </Link<Route>>
            </div>
            <BubbleField count={20} layout={BubbleLayout::Floor} />
        </div>
    }
}
