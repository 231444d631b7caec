use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::OceanConfig;
use crate::render::draw_school;
use crate::state::School;
use crate::timer::AnimationLoop;

#[derive(Properties, PartialEq, Clone)]
pub struct OceanCanvasProps {
    #[prop_or(OceanConfig::default())]
    pub config: OceanConfig,
}

/// Background layer of swimming creatures. Purely decorative.
#[function_component(OceanCanvas)]
pub fn ocean_canvas(props: &OceanCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.config, move |cfg| {
            let cfg = *cfg;
            let ctx = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                canvas.set_width(cfg.width as u32);
                canvas.set_height(cfg.height as u32);
                canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            });
            let frame_loop = ctx.and_then(|ctx| {
                let mut school = School::spawn(&cfg, js_sys::Math::random);
                AnimationLoop::start(move |ts| {
                    school.step(ts);
                    draw_school(&ctx, &school, ts);
                })
            });
            move || drop(frame_loop)
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            style="position:absolute; inset:0; width:100%; height:100%; pointer-events:none; opacity:0.5;"
        />
    }
}
