// Browser timer handles. Each one owns its JS callback and cancels itself on
// drop, so a component effect only has to hold the handle and drop it in the
// cleanup closure.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub struct Interval {
    id: i32,
    _cb: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: u32, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .ok()?;
        Some(Self { id, _cb: cb })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

pub struct Timeout {
    id: i32,
    _cb: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn start(delay_ms: u32, f: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let mut f = Some(f);
        let cb = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .ok()?;
        Some(Self { id, _cb: cb })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls `f` with the frame timestamp on every animation frame until dropped.
pub struct AnimationLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    pub fn start(mut f: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        {
            let raf_id = raf_id.clone();
            let callback_loop = callback.clone();
            let window_loop = window.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
                f(ts);
                // cleared by drop; stop rescheduling
                let next = match &*callback_loop.borrow() {
                    Some(cb) => window_loop
                        .request_animation_frame(cb.as_ref().unchecked_ref())
                        .ok(),
                    None => None,
                };
                raf_id.set(next);
            }) as Box<dyn FnMut(f64)>));
        }
        let first = match &*callback.borrow() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
            None => None,
        };
        raf_id.set(first);
        Some(Self { raf_id, callback })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(window), Some(id)) = (web_sys::window(), self.raf_id.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        // breaks the closure's reference to itself
        self.callback.borrow_mut().take();
    }
}
