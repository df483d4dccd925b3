//! Time Formatting
//!
//! Rewrites server-rendered timestamps in the visitor's locale.

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom;

/// Elements whose `datetime` attribute is shown as local time
const TIME_SELECTOR: &str = ".creation-time, .due-time";

/// `Intl.DateTimeFormat` options
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DateTimeFormatOptions {
    year: &'static str,
    month: &'static str,
    day: &'static str,
    hour: &'static str,
    minute: &'static str,
    hour12: bool,
}

const OPTIONS: DateTimeFormatOptions = DateTimeFormatOptions {
    year: "numeric",
    month: "2-digit",
    day: "2-digit",
    hour: "2-digit",
    minute: "2-digit",
    hour12: false,
};

/// Format an ISO timestamp; `None` if the browser can't parse it
pub fn format_local(raw: &str) -> Option<String> {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return None;
    }
    let options = serde_wasm_bindgen::to_value(&OPTIONS).ok()?;
    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_string());
    Some(String::from(date.to_locale_string(&locale, &options)))
}

pub fn format_times(document: &Document) {
    for element in dom::query_all(document, TIME_SELECTOR) {
        let Some(raw) = element.get_attribute("datetime") else {
            continue;
        };
        match format_local(&raw) {
            Some(text) => element.set_text_content(Some(&text)),
            None => log::debug!("unparseable datetime {:?}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_serialize_as_intl_keys() {
        let value = serde_json::to_value(&OPTIONS).unwrap();
        assert_eq!(value["month"], "2-digit");
        assert_eq!(value["hour12"], false);
        assert_eq!(value.as_object().map(|o| o.len()), Some(6));
    }
}
