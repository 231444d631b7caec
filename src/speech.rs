//! Text-to-speech through the Web Speech API.
//!
//! Every entry point is a no-op when the browser has no `speechSynthesis`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

use crate::config::SpeechSettings;
use crate::util::clog;

/// An utterance handed to the browser. Keeps its end/error handler alive;
/// dropping it detaches the handler so late events are ignored.
pub struct Utterance {
    inner: SpeechSynthesisUtterance,
    _on_done: Closure<dyn FnMut()>,
}

impl Drop for Utterance {
    fn drop(&mut self) {
        self.inner.set_onend(None);
        self.inner.set_onerror(None);
    }
}

// The getter yields `undefined` rather than an error when the API is absent.
fn is_present(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_null()
}

fn synth() -> Option<SpeechSynthesis> {
    let synth = web_sys::window()?.speech_synthesis().ok()?;
    is_present(&synth).then_some(synth)
}

pub fn is_supported() -> bool {
    synth().is_some()
}

pub fn cancel() {
    if let Some(s) = synth() {
        s.cancel();
    }
}

/// Cancels whatever is being spoken and starts `text`. `on_done` runs once the
/// utterance ends or fails. Returns `None` (without calling `on_done`) when
/// speech is unavailable.
pub fn speak(
    text: &str,
    settings: SpeechSettings,
    on_done: impl FnMut() + 'static,
) -> Option<Utterance> {
    let Some(synth) = synth() else {
        clog("speech synthesis unavailable; skipping");
        return None;
    };
    let inner = SpeechSynthesisUtterance::new_with_text(text).ok()?;
    inner.set_rate(settings.rate);
    inner.set_pitch(settings.pitch);
    inner.set_volume(settings.volume);

    let on_done = Closure::wrap(Box::new(on_done) as Box<dyn FnMut()>);
    inner.set_onend(Some(on_done.as_ref().unchecked_ref()));
    inner.set_onerror(Some(on_done.as_ref().unchecked_ref()));

    synth.cancel();
    synth.speak(&inner);
    Some(Utterance {
        inner,
        _on_done: on_done,
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_values_are_not_present() {
        assert!(!is_present(&JsValue::UNDEFINED));
        assert!(!is_present(&JsValue::NULL));
        assert!(is_present(&js_sys::Object::new().into()));
    }

    #[wasm_bindgen_test]
    fn undefined_synth_is_unsupported() {
        let raw: SpeechSynthesis = JsValue::UNDEFINED.unchecked_into();
        assert!(!is_present(&raw));
    }

    #[wasm_bindgen_test]
    fn cancel_never_throws() {
        cancel();
        assert_eq!(is_supported(), synth().is_some());
    }
}
