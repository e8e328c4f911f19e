//! Page Configuration
//!
//! Reads an optional JSON `TrackerConfig` embedded in the host page.

use calorie_core::TrackerConfig;

/// Id of the `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "tracker-config";

/// Load the embedded config, defaults when absent or invalid
pub fn load_page_config() -> TrackerConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    config_from_text(text.as_deref())
}

fn config_from_text(text: Option<&str>) -> TrackerConfig {
    match text.map(str::trim) {
        None | Some("") => TrackerConfig::default(),
        Some(json) => TrackerConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, err);
            TrackerConfig::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_core::IdPolicy;

    #[test]
    fn test_missing_config_is_default() {
        assert_eq!(config_from_text(None), TrackerConfig::default());
        assert_eq!(config_from_text(Some("  \n")), TrackerConfig::default());
    }

    #[test]
    fn test_embedded_config() {
        let config = config_from_text(Some(r#" {"id_policy": "reassign"} "#));
        assert_eq!(config.id_policy, IdPolicy::Reassign);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        assert_eq!(config_from_text(Some("{oops")), TrackerConfig::default());
    }
}
