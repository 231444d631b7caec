use super::bubbles::{BubbleField, BubbleLayout};
use crate::model::reveal_percent;
use yew::prelude::*;

/// The hidden picture, drawn inline so no image asset is needed.
pub fn mermaid_art() -> Html {
    html! {
        <svg viewBox="0 0 200 200" width="100%" height="100%" preserveAspectRatio="xMidYMid slice">
            <defs>
                <linearGradient id="owm-sea" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0" stop-color="#0b3d5c" />
                    <stop offset="1" stop-color="#06243a" />
                </linearGradient>
                <linearGradient id="owm-tail" x1="0" y1="0" x2="1" y2="1">
                    <stop offset="0" stop-color="#2ec4b6" />
                    <stop offset="1" stop-color="#7b5cff" />
                </linearGradient>
            </defs>
            <rect x="0" y="0" width="200" height="200" fill="url(#owm-sea)" />
            // hair
            <path d="M78 52 C70 80 64 110 74 128 C84 112 86 90 100 78 C114 90 116 112 126 128 C136 110 130 80 122 52 Z" fill="#e85d75" />
            // head and body
            <circle cx="100" cy="56" r="20" fill="#f6c9a8" />
            <path d="M86 76 Q100 70 114 76 L118 112 Q100 120 82 112 Z" fill="#f6c9a8" />
            <path d="M86 88 Q93 82 100 88 Q107 82 114 88 L114 96 Q100 100 86 96 Z" fill="#d4af37" />
            // tail
            <path d="M82 112 Q100 124 118 112 Q124 146 106 168 Q100 176 96 168 Q80 146 82 112 Z" fill="url(#owm-tail)" />
            <path d="M98 166 Q78 176 70 192 Q90 188 100 176 Q110 188 130 192 Q122 176 102 166 Z" fill="#7b5cff" />
            // face
            <circle cx="93" cy="54" r="2" fill="#1b1f24" />
            <circle cx="107" cy="54" r="2" fill="#1b1f24" />
            <path d="M94 63 Q100 68 106 63" stroke="#c0392b" stroke-width="2" fill="none" />
        </svg>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MermaidRevealProps {
    pub revealed_parts: u32,
    pub total_parts: u32,
    pub is_complete: bool,
}

#[function_component(MermaidReveal)]
pub fn mermaid_reveal(props: &MermaidRevealProps) -> Html {
    let pct = reveal_percent(props.revealed_parts, props.total_parts);
    let dance = if props.is_complete {
        " animation:owm-dance 2s ease-in-out infinite;"
    } else {
        ""
    };
    html! {
        <div style="position:relative; width:256px; height:256px; margin:0 auto 32px auto;">
            <div style="position:absolute; inset:0; border-radius:24px; overflow:hidden; background:linear-gradient(#0b3d5c, #06243a);">
                <BubbleField count={15} layout={BubbleLayout::Scattered} />
            </div>
            <div style="position:absolute; inset:16px; border-radius:16px; overflow:hidden;">
                <div style="position:absolute; inset:0; opacity:0.2; filter:blur(4px);">{ mermaid_art() }</div>
                <div style={format!("position:absolute; inset:0; transition:all 1s; clip-path:inset({:.2}% 0 0 0);{}", 100.0 - pct, dance)}>
                    { mermaid_art() }
                </div>
                <div style={format!("position:absolute; inset:0; transition:all 1s; background:linear-gradient(rgba(88,166,255,0.4), rgba(88,166,255,0.2)); clip-path:inset(0 0 {:.2}% 0);", pct)} />
            </div>
            <div style="position:absolute; bottom:-28px; left:50%; transform:translateX(-50%); display:flex; gap:8px;">
                { for (0..props.total_parts).map(|i| {
                    let lit = i < props.revealed_parts;
                    html! {
                        <div style={format!(
                            "width:12px; height:12px; border-radius:50%; transition:all 0.3s; {}",
                            if lit { "background:#d4af37; box-shadow:0 0 6px #d4af37;" } else { "background:rgba(110,118,129,0.5); border:2px solid #6e7681;" }
                        )} />
                    }
                }) }
            </div>
        </div>
    }
}
