use super::mermaid_reveal::mermaid_art;
use super::ocean_canvas::OceanCanvas;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VictoryScreenProps {
    pub score: u32,
    pub accuracy: u32,
    pub time_elapsed: String,
    pub on_restart: Callback<()>,
}

#[function_component]
pub fn VictoryScreen(props: &VictoryScreenProps) -> Html {
    // sparkle positions (left%, top%, delay s), rolled once
    let sparkles = use_state(|| {
        (0..6)
            .map(|_| {
                (
                    js_sys::Math::random() * 100.0,
                    js_sys::Math::random() * 100.0,
                    js_sys::Math::random() * 2.0,
                )
            })
            .collect::<Vec<_>>()
    });
    let restart_btn = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stat = |value: String, label: &'static str, color: &'static str| {
        html! {
            <div>
                <div style={format!("font-size:24px; font-weight:700; color:{};", color)}>{ value }</div>
                <div style="font-size:13px; opacity:0.7;">{ label }</div>
            </div>
        }
    };
    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:32px; text-align:center; padding:16px;">
            <div style="position:fixed; inset:0; pointer-events:none; z-index:-1;">
                <OceanCanvas />
            </div>
            <div>
                <div style="font-size:64px;">{"🏆"}</div>
                <h1 style="margin:8px 0; font-size:36px; color:#58a6ff;">{"Mermaid Rescued! 🧜‍♀️"}</h1>
                <p style="margin:0 auto; font-size:18px; opacity:0.8; max-width:420px;">
                    {"Congratulations! You've helped reveal the beautiful mermaid by matching all the ocean words!"}
                </p>
            </div>
            <div style="position:relative;">
                <div style="width:192px; height:192px; border-radius:24px; overflow:hidden; animation:owm-dance 2s ease-in-out infinite;">
                    { mermaid_art() }
                </div>
                { for sparkles.iter().map(|(left, top, delay)| html! {
                    <span style={format!(
                        "position:absolute; left:{:.1}%; top:{:.1}%; font-size:16px; animation:owm-pulse 1.5s ease-in-out infinite; animation-delay:{:.2}s;",
                        left, top, delay
                    )}>{"⭐"}</span>
                }) }
            </div>
            <div style="background:rgba(22,27,34,0.85); border:1px solid rgba(88,166,255,0.3); border-radius:12px; padding:24px; min-width:320px;">
                <h3 style="margin:0 0 16px 0; color:#58a6ff;">{"Final Results"}</h3>
                <div style="display:grid; grid-template-columns:repeat(3, 1fr); gap:16px;">
                    { stat(props.score.to_string(), "Points", "#d4af37") }
                    { stat(format!("{}%", props.accuracy), "Accuracy", "#2ea043") }
                    { stat(props.time_elapsed.clone(), "Time", "#58a6ff") }
                </div>
            </div>
            <button onclick={restart_btn} style="padding:12px 32px; font-size:18px; border-radius:10px; background:#d4af37; color:#0e1116; border:none; font-weight:700; cursor:pointer;">
                {"↻ Play Again"}
            </button>
        </div>
    }
}
