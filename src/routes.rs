use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{not_found::NotFound, word_match_game::WordMatchGame};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <WordMatchGame /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_to_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/404"), Some(Route::NotFound));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::Home.to_path(), "/");
    }
}
