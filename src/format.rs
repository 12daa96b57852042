use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

use crate::types::Timestamp;

/// Link target for a pad: the current page URL with `<prefix><name>` appended.
pub fn pad_url(base_url: &str, prefix: &str, name: &str) -> String {
    format!("{base_url}{prefix}{name}")
}

/// Viewer locale, falling back when the browser reports none.
pub fn resolve_locale(language: Option<String>, fallback: &str) -> String {
    language
        .filter(|lang| !lang.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// `Intl.DateTimeFormat` options: numeric date, hour and minute.
pub const VISIT_TIME_OPTIONS: [(&str, &str); 5] = [
    ("year", "numeric"),
    ("month", "2-digit"),
    ("day", "2-digit"),
    ("hour", "2-digit"),
    ("minute", "2-digit"),
];

pub fn visit_time_options() -> Result<Object, JsValue> {
    let options = Object::new();
    for (key, value) in VISIT_TIME_OPTIONS {
        Reflect::set(&options, &key.into(), &value.into())?;
    }
    Ok(options)
}

/// The stored value exactly as the browser's `Date` constructor should see it.
fn date_input(timestamp: Option<&Timestamp>) -> JsValue {
    match timestamp {
        Some(Timestamp::Epoch(ms)) => JsValue::from_f64(*ms),
        Some(Timestamp::Text(text)) => JsValue::from_str(text),
        None => JsValue::from_f64(f64::NAN),
    }
}

/// Format a visit time with the browser's locale rules. A value the browser
/// can't read renders as its invalid-date text.
pub fn format_visit_time(timestamp: Option<&Timestamp>, locale: &str, options: &Object) -> String {
    let date = js_sys::Date::new(&date_input(timestamp));
    date.to_locale_date_string(locale, options).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_url_appends_prefix_and_name() {
        assert_eq!(
            pad_url("https://pads.example.org/", "p/", "alpha"),
            "https://pads.example.org/p/alpha"
        );
    }

    #[test]
    fn locale_falls_back() {
        assert_eq!(resolve_locale(Some("de-DE".into()), "en-US"), "de-DE");
        assert_eq!(resolve_locale(None, "en-US"), "en-US");
        assert_eq!(resolve_locale(Some(String::new()), "en-US"), "en-US");
    }

    #[test]
    fn options_ask_for_numeric_fields() {
        assert_eq!(
            VISIT_TIME_OPTIONS,
            [
                ("year", "numeric"),
                ("month", "2-digit"),
                ("day", "2-digit"),
                ("hour", "2-digit"),
                ("minute", "2-digit"),
            ]
        );
    }
}
