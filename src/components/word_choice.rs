use crate::model::Feedback;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WordChoiceProps {
    pub word: AttrValue,
    pub index: usize,
    /// Feedback for this button; only set on the selected choice.
    pub feedback: Option<Feedback>,
    pub disabled: bool,
    pub on_select: Callback<usize>,
}

#[function_component(WordChoice)]
pub fn word_choice(props: &WordChoiceProps) -> Html {
    let onclick = {
        let cb = props.on_select.clone();
        let index = props.index;
        Callback::from(move |_| cb.emit(index))
    };
    let (bg, border) = match props.feedback {
        Some(Feedback::Correct) => ("#1f6f3a", "#2ea043"),
        Some(Feedback::Incorrect) => ("#6e1d1a", "#f85149"),
        None => ("#161b22", "#30363d"),
    };
    html! {
        <button
            {onclick}
            disabled={props.disabled}
            style={format!(
                "height:64px; font-size:20px; font-weight:700; border-radius:16px; background:{}; border:2px solid {}; color:#e6edf3; cursor:{}; opacity:{};",
                bg, border,
                if props.disabled { "default" } else { "pointer" },
                if props.disabled && props.feedback.is_none() { "0.6" } else { "1" },
            )}
        >
            { props.word.clone() }
        </button>
    }
}
