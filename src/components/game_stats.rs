use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameStatsProps {
    pub score: u32,
    pub accuracy: u32,
    pub time_elapsed: String,
    /// 1-based position of the word on screen.
    pub current_word: usize,
    pub total_words: usize,
}

#[function_component]
pub fn GameStats(props: &GameStatsProps) -> Html {
    let card_style = "background:rgba(22,27,34,0.8); border:1px solid rgba(88,166,255,0.3); border-radius:8px; padding:8px 16px; min-width:90px; text-align:center;";
    let value_style = "font-size:24px; font-weight:700; font-variant-numeric:tabular-nums;";
    let label_style = "font-size:13px; opacity:0.7;";
    html! {
        <div style="display:flex; gap:16px; justify-content:center; flex-wrap:wrap;">
            <div style={card_style}>
                <div style={format!("{} color:#d4af37;", value_style)}>{ props.score }</div>
                <div style={label_style}>{"Score"}</div>
            </div>
            <div style={card_style}>
                <div style={format!("{} color:#2ea043;", value_style)}>{ format!("{}%", props.accuracy) }</div>
                <div style={label_style}>{"Accuracy"}</div>
            </div>
            <div style={card_style}>
                <div style={format!("{} color:#58a6ff;", value_style)}>{ props.time_elapsed.clone() }</div>
                <div style={label_style}>{"Time"}</div>
            </div>
            <div style={card_style}>
                <div style={format!("{} color:#f0883e;", value_style)}>{ format!("{}/{}", props.current_word, props.total_words) }</div>
                <div style={label_style}>{"Words"}</div>
            </div>
        </div>
    }
}
