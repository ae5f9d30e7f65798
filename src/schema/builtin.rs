//! Built-in plugin schemas.

use crate::error::RegistryResult;

use super::definition::Schema;
use super::descriptor::{NumberConstraint, StringConstraint};
use super::registry::SchemaRegistry;

pub const COMMUNITY_SCHEMA: &str = "community";
pub const SUBCATEGORY_SCHEMA: &str = "subcategory";
pub const MEMBER_CHANGE_SCHEMA: &str = "member-change";
pub const PLUGIN_SETTINGS_SCHEMA: &str = "plugin-settings";

/// Roles a member can be moved to.
pub const MEMBER_ROLES: &[&str] = &["owner", "manager", "member", "banned"];

/// Minimum length for community and subcategory names.
pub const MIN_NAME_LENGTH: usize = 3;

/// A community being created or renamed.
pub fn community_schema() -> Schema {
    Schema::builder()
        .field("name", StringConstraint::required().min_length(MIN_NAME_LENGTH))
        .field("description", StringConstraint::optional())
        .field("cid", NumberConstraint::optional())
        .build()
}

/// A subcategory nested under a parent community category.
pub fn subcategory_schema() -> Schema {
    Schema::builder()
        .field("name", StringConstraint::required().min_length(MIN_NAME_LENGTH))
        .field("description", StringConstraint::optional())
        .field("parentCid", NumberConstraint::required())
        .build()
}

/// A change of one member's role within a community.
pub fn member_change_schema() -> Schema {
    Schema::builder()
        .field("cid", NumberConstraint::required())
        .field("targetUid", NumberConstraint::required())
        .field(
            "newRole",
            StringConstraint::required().one_of(MEMBER_ROLES.iter().copied()),
        )
        .build()
}

/// Credentials collected by the admin settings panel.
pub fn plugin_settings_schema() -> Schema {
    Schema::builder()
        .field("clientId", StringConstraint::required().min_length(1))
        .field("clientSecret", StringConstraint::required().min_length(1))
        .build()
}

/// All built-in schemas with their registry names.
pub fn builtin_schemas() -> Vec<(&'static str, Schema)> {
    vec![
        (COMMUNITY_SCHEMA, community_schema()),
        (SUBCATEGORY_SCHEMA, subcategory_schema()),
        (MEMBER_CHANGE_SCHEMA, member_change_schema()),
        (PLUGIN_SETTINGS_SCHEMA, plugin_settings_schema()),
    ]
}

/// Register every built-in schema.
pub fn install_builtin_schemas(registry: &mut SchemaRegistry) -> RegistryResult<()> {
    for (name, schema) in builtin_schemas() {
        registry.register(name, schema)?;
    }
    Ok(())
}
