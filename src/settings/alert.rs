//! Alert payloads handed to the host UI.
//!
//! Titles and messages are i18n tokens of the form `[[namespace:key]]`;
//! the host resolves them.

use serde::{Deserialize, Serialize};

/// i18n namespace for this plugin's strings.
pub const I18N_NAMESPACE: &str = "communities";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Success,
    Error,
}

/// `{type, id, title, message}` alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub id: String,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn success(id: &str, title_key: &str, message_key: &str) -> Self {
        Self::new(AlertType::Success, id, title_key, message_key)
    }

    pub fn error(id: &str, title_key: &str, message_key: &str) -> Self {
        Self::new(AlertType::Error, id, title_key, message_key)
    }

    pub fn is_error(&self) -> bool {
        self.alert_type == AlertType::Error
    }

    fn new(alert_type: AlertType, id: &str, title_key: &str, message_key: &str) -> Self {
        Self {
            alert_type,
            id: id.to_string(),
            title: i18n_token(title_key),
            message: i18n_token(message_key),
        }
    }
}

/// Build a `[[namespace:key]]` token in the plugin namespace.
pub fn i18n_token(key: &str) -> String {
    format!("[[{}:{}]]", I18N_NAMESPACE, key)
}
