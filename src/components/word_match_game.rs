use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use super::app::GameContext;
use super::{
    feedback_banner::FeedbackBanner, game_stats::GameStats, mermaid_reveal::MermaidReveal,
    ocean_canvas::OceanCanvas, tts_button::TtsButton, victory_screen::VictoryScreen,
    word_choice::WordChoice,
};
use crate::config::{AUTO_SPEAK_KEY, GameConfig, SpeechSettings};
use crate::model::{GameAction, GameState, WordList};
use crate::speech::{self, Utterance};
use crate::timer::{Interval, Timeout};
use crate::util::{clog, load_flag, now_ms, save_flag};

/// Route entry: pulls the shared inputs from context.
#[function_component(WordMatchGame)]
pub fn word_match_game() -> Html {
    match use_context::<GameContext>() {
        Some(ctx) => html! {
            <GameView words={ctx.words} config={ctx.config} speech={ctx.speech} />
        },
        None => html! { <p>{"Game data is not available."}</p> },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub words: WordList,
    pub config: GameConfig,
    pub speech: SpeechSettings,
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let state = {
        let words = props.words.clone();
        let config = props.config;
        use_reducer(move || GameState::new(words, config, now_ms()))
    };
    let auto_speak = use_state(|| load_flag(AUTO_SPEAK_KEY, true));
    let speaking = use_state(|| false);
    let utterance: Rc<RefCell<Option<Utterance>>> = use_mut_ref(|| None);
    let speech_supported = use_memo((), |_| speech::is_supported());

    let speak = {
        let speaking = speaking.clone();
        let utterance = utterance.clone();
        let settings = props.speech;
        Callback::from(move |word: AttrValue| {
            let done = {
                let speaking = speaking.clone();
                move || speaking.set(false)
            };
            let u = speech::speak(&word, settings, done);
            speaking.set(u.is_some());
            // replacing the old utterance detaches its handler
            *utterance.borrow_mut() = u;
        })
    };

    // Effect: elapsed-time ticker while the round runs; log the finish
    {
        let state = state.clone();
        let period = props.config.tick_interval_ms;
        use_effect_with(state.is_complete, move |complete| {
            let ticker = if *complete {
                clog(&format!(
                    "round complete: score={} accuracy={}% time={}",
                    state.score,
                    state.accuracy(),
                    state.formatted_time()
                ));
                None
            } else {
                Interval::start(period, move || {
                    state.dispatch(GameAction::Tick { now_ms: now_ms() })
                })
            };
            move || drop(ticker)
        });
    }
    // Effect: apply the pending answer once the feedback window closes
    {
        let state = state.clone();
        let delay = props.config.feedback_delay_ms;
        use_effect_with(state.pending.map(|p| p.id), move |pending| {
            let timeout = pending.and_then(|answer_id| {
                Timeout::start(delay, move || {
                    state.dispatch(GameAction::Resolve { answer_id })
                })
            });
            move || drop(timeout)
        });
    }
    // Effect: speak each new word as it is presented
    {
        let speak = speak.clone();
        let target = AttrValue::from(state.current_word().target.clone());
        let enabled = *auto_speak && !state.is_complete;
        use_effect_with((state.current_word_index, state.is_complete), move |_| {
            if enabled {
                speak.emit(target);
            }
            || ()
        });
    }
    // Effect: silence speech on unmount
    {
        let utterance = utterance.clone();
        use_effect_with((), move |_| {
            move || {
                utterance.borrow_mut().take();
                speech::cancel();
            }
        });
    }

    let on_select = {
        let state = state.clone();
        Callback::from(move |choice: usize| state.dispatch(GameAction::Select { choice }))
    };
    let on_restart = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(GameAction::Reset { now_ms: now_ms() }))
    };
    let toggle_auto_speak = {
        let auto_speak = auto_speak.clone();
        Callback::from(move |_| {
            let next = !*auto_speak;
            save_flag(AUTO_SPEAK_KEY, next);
            auto_speak.set(next);
        })
    };

    if state.is_complete {
        return html! {
            <VictoryScreen
                score={state.score}
                accuracy={state.accuracy()}
                time_elapsed={state.formatted_time()}
                {on_restart}
            />
        };
    }

    let word = state.current_word();
    let on_speak = {
        let speak = speak.clone();
        let target = AttrValue::from(word.target.clone());
        Callback::from(move |_| speak.emit(target.clone()))
    };
    let answering = state.is_answering();
    let card_style = "background:rgba(22,27,34,0.8); border:1px solid rgba(88,166,255,0.3); border-radius:12px; padding:24px; width:100%; box-sizing:border-box;";

    html! {
        <div style="position:relative; min-height:100vh; padding:16px; display:flex; flex-direction:column; box-sizing:border-box;">
            <div style="position:fixed; inset:0; pointer-events:none; z-index:-1;">
                <OceanCanvas />
            </div>
            <div style="margin-bottom:24px;">
                <GameStats
                    score={state.score}
                    accuracy={state.accuracy()}
                    time_elapsed={state.formatted_time()}
                    current_word={state.current_word_index + 1}
                    total_words={state.total_words()}
                />
            </div>
            <div style="flex:1; display:flex; flex-wrap:wrap; gap:32px; align-items:center; justify-content:center; max-width:1100px; margin:0 auto; width:100%;">
                <div style="flex:1; min-width:300px; display:flex; flex-direction:column; align-items:center;">
                    <div style={card_style}>
                        <h2 style="margin:0 0 12px 0; text-align:center; color:#58a6ff;">{"Help Reveal the Mermaid! 🧜‍♀️"}</h2>
                        <p style="margin:0 0 16px 0; text-align:center; opacity:0.7;">{"Listen to the word and choose the correct spelling!"}</p>
                        <MermaidReveal
                            revealed_parts={state.revealed_parts}
                            total_parts={state.total_parts()}
                            is_complete={state.is_complete}
                        />
                    </div>
                </div>
                <div style="flex:1; min-width:300px; max-width:420px; display:flex; flex-direction:column; align-items:center; gap:24px;">
                    <div style={card_style}>
                        <div style="text-align:center; display:flex; flex-direction:column; gap:12px;">
                            <h3 style="margin:0; font-weight:400; opacity:0.7;">{"Find the word:"}</h3>
                            <div style="display:flex; align-items:center; justify-content:center; gap:16px;">
                                <div style="font-size:30px; font-weight:700; color:#58a6ff;">{ format!("\"{}\"", word.target) }</div>
                                <TtsButton
                                    disabled={answering}
                                    speaking={*speaking}
                                    supported={*speech_supported}
                                    {on_speak}
                                />
                            </div>
                            <label style="font-size:13px; opacity:0.7; display:flex; gap:6px; align-items:center; justify-content:center;">
                                <input type="checkbox" checked={*auto_speak} onchange={toggle_auto_speak} />
                                {"Speak each new word automatically"}
                            </label>
                        </div>
                    </div>
                    <div style="display:grid; grid-template-columns:1fr 1fr; gap:16px; width:100%;">
                        { for word.choices.iter().enumerate().map(|(index, choice)| html! {
                            <WordChoice
                                key={index}
                                word={AttrValue::from(choice.clone())}
                                {index}
                                feedback={if state.selected_choice() == Some(index) { state.feedback() } else { None }}
                                disabled={answering}
                                on_select={on_select.clone()}
                            />
                        }) }
                    </div>
                    <FeedbackBanner feedback={state.feedback()} />
                </div>
            </div>
        </div>
    }
}
