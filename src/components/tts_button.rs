use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TtsButtonProps {
    pub disabled: bool,
    pub speaking: bool,
    /// False when the browser has no speech synthesis.
    pub supported: bool,
    pub on_speak: Callback<()>,
}

#[function_component(TtsButton)]
pub fn tts_button(props: &TtsButtonProps) -> Html {
    let onclick = {
        let cb = props.on_speak.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let disabled = props.disabled || props.speaking || !props.supported;
    let title = if props.supported {
        "Hear the word again"
    } else {
        "Speech is not available in this browser"
    };
    html! {
        <button
            {onclick}
            {disabled}
            title={title}
            style="width:48px; height:48px; border-radius:50%; font-size:20px; background:#f0883e; border:none; cursor:pointer;"
        >
            { if props.speaking { "🔇" } else { "🔊" } }
        </button>
    }
}
