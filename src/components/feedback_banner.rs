use crate::model::Feedback;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedbackBannerProps {
    pub feedback: Option<Feedback>,
}

#[function_component]
pub fn FeedbackBanner(props: &FeedbackBannerProps) -> Html {
    let Some(feedback) = props.feedback else {
        return html! {};
    };
    let (msg, color, bg) = match feedback {
        Feedback::Correct => ("🌟 Excellent! Part revealed!", "#d4af37", "rgba(212,175,55,0.15)"),
        Feedback::Incorrect => ("💫 Try again! You can do it!", "#f85149", "rgba(248,81,73,0.2)"),
    };
    html! {
        <div style={format!("width:100%; padding:16px; text-align:center; border-radius:12px; border:1px solid {}; background:{};", color, bg)}>
            <div style={format!("font-size:18px; font-weight:700; color:{};", color)}>{ msg }</div>
        </div>
    }
}
