use serde::Deserialize;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid recent pads config: {0}")]
    Invalid(String),
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Identifiers the widget uses to find its pieces on the index page.
///
/// Every field can be overridden from JS with a camelCase key; missing
/// keys keep the defaults below.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub container_id: String,
    pub storage_key: String,
    pub heading_l10n_id: String,
    pub empty_heading_l10n_id: String,
    pub placeholder_l10n_id: String,
    pub placeholder_input_selector: String,
    pub pad_path_prefix: String,
    pub fallback_locale: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            container_id: "recent-pads".to_string(),
            storage_key: "recentPads".to_string(),
            heading_l10n_id: "index.recentPads".to_string(),
            empty_heading_l10n_id: "index.recentPadsEmpty".to_string(),
            placeholder_l10n_id: "index.placeholderPadEnter".to_string(),
            placeholder_input_selector: "#go2Name input".to_string(),
            pad_path_prefix: "p/".to_string(),
            fallback_locale: "en-US".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn heading_selector(&self) -> String {
        l10n_selector(&self.heading_l10n_id)
    }

    pub fn placeholder_label_selector(&self) -> String {
        l10n_selector(&self.placeholder_l10n_id)
    }
}

/// Attribute selector for an element carrying the given localization marker.
pub fn l10n_selector(l10n_id: &str) -> String {
    format!("[data-l10n-id=\"{l10n_id}\"]")
}
