// Small helpers shared by the components: time formatting, console logging,
// and the localStorage flag used for settings.

use wasm_bindgen::JsValue;

/// Formats elapsed milliseconds as `m:ss`.
pub fn format_elapsed(ms: f64) -> String {
    let secs = (ms.max(0.0) / 1000.0).floor() as u64;
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cerr(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_flag(key: &str, default: bool) -> bool {
    storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .map(|v| parse_flag(&v, default))
        .unwrap_or(default)
}

pub fn save_flag(key: &str, value: bool) {
    if let Some(store) = storage() {
        let _ = store.set_item(key, if value { "1" } else { "0" });
    }
}

fn parse_flag(raw: &str, default: bool) -> bool {
    match raw {
        "1" | "true" => true,
        "0" | "false" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_minutes_and_padded_seconds() {
        assert_eq!(format_elapsed(0.0), "0:00");
        assert_eq!(format_elapsed(9_999.0), "0:09");
        assert_eq!(format_elapsed(60_000.0), "1:00");
        assert_eq!(format_elapsed(754_321.0), "12:34");
        assert_eq!(format_elapsed(-50.0), "0:00");
    }

    #[test]
    fn flags_parse_with_fallback() {
        assert!(parse_flag("1", false));
        assert!(parse_flag("true", false));
        assert!(!parse_flag("0", true));
        assert!(parse_flag("garbage", true));
        assert!(!parse_flag("", false));
    }
}
