use crate::config::{GameConfig, SpeechSettings};
use crate::model::WordList;
use crate::routes::{Route, switch};
use crate::util::cerr;
use yew::prelude::*;
use yew_router::prelude::*;

// Shared, read-only game inputs (so pages can reach them without prop drilling)
#[derive(Clone, PartialEq)]
pub struct GameContext {
    pub words: WordList,
    pub config: GameConfig,
    pub speech: SpeechSettings,
}

#[function_component(App)]
pub fn app() -> Html {
    let loaded = use_memo((), |_| {
        WordList::bundled().map_err(|e| {
            cerr(&format!("failed to load word list: {}", e));
            e.to_string()
        })
    });

    match &*loaded {
        Ok(words) => {
            let ctx = GameContext {
                words: words.clone(),
                config: GameConfig::default(),
                speech: SpeechSettings::default(),
            };
            html! {
                <ContextProvider<GameContext> context={ctx}>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </ContextProvider<GameContext>>
            }
        }
        Err(msg) => html! {
            <div style="min-height:100vh; display:flex; align-items:center; justify-content:center;">
                <div style="background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; max-width:420px;">
                    <h2 style="margin:0 0 12px 0; color:#f85149;">{"The ocean is closed"}</h2>
                    <p style="margin:4px 0; opacity:0.85;">{"The word list could not be loaded."}</p>
                    <p style="margin:4px 0; font-size:12px; opacity:0.6;">{ msg.clone() }</p>
                </div>
            </div>
        },
    }
}
