//! Admin credentials panel.
//!
//! Loads and saves the two credential fields through a [`SettingsStore`],
//! validating against the `plugin-settings` schema before anything is
//! written. Any field failure yields one aggregate alert, not per-field
//! detail.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::error::SettingsError;
use crate::logging::structured::LogContext;
use crate::schema::builtin::{plugin_settings_schema, PLUGIN_SETTINGS_SCHEMA};
use crate::schema::definition::Schema;
use crate::validation::validator::validate_with;

use super::alert::Alert;
use super::store::SettingsStore;

pub const ALERT_SAVED: &str = "settings-saved";
pub const ALERT_INVALID: &str = "settings-invalid";
pub const ALERT_SAVE_FAILED: &str = "settings-save-failed";

/// Credential form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Form binding between the admin page and the settings store.
pub struct CredentialsPanel<S: SettingsStore> {
    store: S,
    namespace: String,
    schema: Arc<Schema>,
}

impl<S: SettingsStore> CredentialsPanel<S> {
    pub fn new(store: S, namespace: &str) -> Self {
        Self::with_schema(store, namespace, Arc::new(plugin_settings_schema()))
    }

    /// Use a schema taken from a registry instead of the built-in one.
    pub fn with_schema(store: S, namespace: &str, schema: Arc<Schema>) -> Self {
        Self {
            store,
            namespace: namespace.to_string(),
            schema,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current credentials; missing or non-string values load as empty.
    pub fn load(&self) -> Result<Credentials, SettingsError> {
        let values = self.store.load(&self.namespace)?;
        let field = |key: &str| {
            values
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Ok(Credentials {
            client_id: field("clientId"),
            client_secret: field("clientSecret"),
        })
    }

    /// Validate and persist credentials, returning the alert to show.
    pub fn save(&self, credentials: &Credentials) -> Alert {
        let ctx = LogContext::new(&self.namespace).with_schema(PLUGIN_SETTINGS_SCHEMA);

        let record = match serde_json::to_value(credentials) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return self.save_failed(&ctx, "credentials did not serialize to an object"),
            Err(e) => return self.save_failed(&ctx, &SettingsError::from(e).to_string()),
        };

        let result = validate_with(&self.schema, &record, &ValidatorConfig::default(), &ctx);
        if !result.is_valid() {
            log::info!(
                "{} SETTINGS_REJECTED namespace={} errors={}",
                ctx,
                self.namespace,
                result.summary()
            );
            return Alert::error(ALERT_INVALID, "settings.invalid", "settings.missing-fields");
        }

        match self.store.save(&self.namespace, &record) {
            Ok(()) => {
                log::info!("{} SETTINGS_SAVED namespace={}", ctx, self.namespace);
                Alert::success(ALERT_SAVED, "settings.saved", "settings.saved-message")
            }
            Err(e) => self.save_failed(&ctx, &e.to_string()),
        }
    }

    fn save_failed(&self, ctx: &LogContext, error: &str) -> Alert {
        log::error!(
            "{} SETTINGS_SAVE_FAILED namespace={} error={}",
            ctx,
            self.namespace,
            error
        );
        Alert::error(ALERT_SAVE_FAILED, "settings.error", "settings.save-failed")
    }
}
