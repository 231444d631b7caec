use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BubbleSize {
    Small,
    Medium,
    Large,
}

impl BubbleSize {
    fn px(self) -> u32 {
        match self {
            BubbleSize::Small => 6,
            BubbleSize::Medium => 12,
            BubbleSize::Large => 20,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub size: BubbleSize,
    /// Percent of container width.
    pub left: f64,
    /// Percent of container height.
    pub bottom: f64,
    /// Animation delay in seconds.
    pub delay: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BubbleLayout {
    /// Sizes cycle small/medium/large; spread over the whole box.
    Scattered,
    /// Mostly small, hugging the bottom edge.
    Floor,
}

pub fn random_bubbles(count: usize, layout: BubbleLayout) -> Vec<Bubble> {
    let rand = js_sys::Math::random;
    (0..count)
        .map(|i| match layout {
            BubbleLayout::Scattered => Bubble {
                size: [BubbleSize::Small, BubbleSize::Medium, BubbleSize::Large][i % 3],
                left: rand() * 85.0 + 5.0,
                bottom: rand() * 90.0 + 5.0,
                delay: rand() * 6.0,
            },
            BubbleLayout::Floor => Bubble {
                size: if i % 3 == 0 {
                    BubbleSize::Large
                } else if i % 2 == 0 {
                    BubbleSize::Medium
                } else {
                    BubbleSize::Small
                },
                left: rand() * 100.0,
                bottom: rand() * 25.0 - 10.0,
                delay: rand() * 6.0,
            },
        })
        .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct BubbleFieldProps {
    pub count: usize,
    pub layout: BubbleLayout,
}

/// Decorative rising bubbles; positions are rolled once per mount.
#[function_component(BubbleField)]
pub fn bubble_field(props: &BubbleFieldProps) -> Html {
    let layout = props.layout;
    let count = props.count;
    let bubbles = use_state(move || random_bubbles(count, layout));
    html! {
        <>
            { for bubbles.iter().map(|b| {
                let px = b.size.px();
                html! {
                    <div style={format!(
                        "position:absolute; left:{:.2}%; bottom:{:.2}%; width:{}px; height:{}px; border-radius:50%; background:radial-gradient(circle at 30% 30%, rgba(255,255,255,0.8), rgba(173,216,230,0.25)); border:1px solid rgba(255,255,255,0.35); animation:owm-float 6s ease-in-out infinite; animation-delay:{:.2}s; pointer-events:none;",
                        b.left, b.bottom, px, px, b.delay
                    )} />
                }
            }) }
        </>
    }
}
