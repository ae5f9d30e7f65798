//! Record validation.
//!
//! Each declared field is checked in schema order:
//! 1. presence (`required`)
//! 2. primitive type
//! 3. `minLength` (strings)
//! 4. `enum` membership
//!
//! A type mismatch stops checks for that field only. Every declared field is
//! always evaluated, so the caller gets the full error list in one pass.
//! Bad record data never produces an `Err`.

use serde_json::{Map, Value};

use crate::config::{UnknownFieldPolicy, ValidatorConfig};
use crate::error::RegistryResult;
use crate::logging::structured::LogContext;
use crate::schema::definition::Schema;
use crate::schema::descriptor::{
    BooleanConstraint, ConstraintDescriptor, NumberConstraint, StringConstraint,
};
use crate::schema::registry::SchemaRegistry;

use super::result::{ErrorKind, FieldError, ValidationResult};
use super::value::{as_number, json_type_name, numbers_equal, string_length};

/// An input record: field name to JSON value.
pub type Record = Map<String, Value>;

/// Validate with the default (permissive) configuration.
pub fn validate(schema: &Schema, record: &Record) -> ValidationResult {
    validate_with(
        schema,
        record,
        &ValidatorConfig::default(),
        &LogContext::detached(),
    )
}

/// Validate a record against a schema.
pub fn validate_with(
    schema: &Schema,
    record: &Record,
    config: &ValidatorConfig,
    ctx: &LogContext,
) -> ValidationResult {
    let mut errors = Vec::new();

    for rule in schema.fields() {
        check_field(&rule.name, &rule.constraint, record.get(&rule.name), &mut errors, ctx);
    }

    if config.unknown_fields == UnknownFieldPolicy::Strict {
        for key in record.keys() {
            if !schema.contains_field(key) {
                log::debug!("{} FIELD_CHECK field={} failed=unknownField", ctx, key);
                errors.push(FieldError::new(key, ErrorKind::UnknownField));
            }
        }
    }

    let result = ValidationResult::from_errors(errors);

    if result.is_valid() {
        log::debug!("{} VALIDATION_PASSED fields={}", ctx, schema.len());
    } else {
        log::info!(
            "{} VALIDATION_FAILED errors={} detail={}",
            ctx,
            result.errors.len(),
            result.summary()
        );
    }

    result
}

/// Look up a schema by name, then validate.
///
/// Only the lookup can fail.
pub fn validate_named(
    registry: &SchemaRegistry,
    name: &str,
    record: &Record,
    config: &ValidatorConfig,
    ctx: &LogContext,
) -> RegistryResult<ValidationResult> {
    let schema = registry.get(name)?;
    Ok(validate_with(&schema, record, config, &ctx.with_schema(name)))
}

/// Check one declared field, appending any violations.
fn check_field(
    name: &str,
    constraint: &ConstraintDescriptor,
    value: Option<&Value>,
    errors: &mut Vec<FieldError>,
    ctx: &LogContext,
) {
    let value = match value {
        Some(v) => v,
        None => {
            if constraint.is_required() {
                log::debug!("{} FIELD_CHECK field={} failed=required", ctx, name);
                errors.push(FieldError::new(name, ErrorKind::Required));
            }
            return;
        }
    };

    let before = errors.len();
    match constraint {
        ConstraintDescriptor::String(c) => check_string(name, c, value, errors),
        ConstraintDescriptor::Number(c) => check_number(name, c, value, errors),
        ConstraintDescriptor::Boolean(c) => check_boolean(name, c, value, errors),
    }

    for error in &errors[before..] {
        log::debug!(
            "{} FIELD_CHECK field={} failed={} expected={} actual={}",
            ctx,
            name,
            error.kind,
            constraint.type_name(),
            json_type_name(value)
        );
    }
}

fn check_string(name: &str, c: &StringConstraint, value: &Value, errors: &mut Vec<FieldError>) {
    let s = match value.as_str() {
        Some(s) => s,
        None => {
            errors.push(FieldError::new(name, ErrorKind::Type));
            return;
        }
    };

    if let Some(min) = c.min_length {
        if string_length(s) < min {
            errors.push(FieldError::new(name, ErrorKind::MinLength));
        }
    }

    if let Some(allowed) = &c.allowed {
        if !allowed.iter().any(|a| a == s) {
            errors.push(FieldError::new(name, ErrorKind::Enum));
        }
    }
}

fn check_number(name: &str, c: &NumberConstraint, value: &Value, errors: &mut Vec<FieldError>) {
    let n = match as_number(value) {
        Some(n) => n,
        None => {
            errors.push(FieldError::new(name, ErrorKind::Type));
            return;
        }
    };

    if let Some(allowed) = &c.allowed {
        if !allowed.iter().any(|a| numbers_equal(a, n)) {
            errors.push(FieldError::new(name, ErrorKind::Enum));
        }
    }
}

fn check_boolean(name: &str, c: &BooleanConstraint, value: &Value, errors: &mut Vec<FieldError>) {
    let b = match value.as_bool() {
        Some(b) => b,
        None => {
            errors.push(FieldError::new(name, ErrorKind::Type));
            return;
        }
    };

    if let Some(allowed) = &c.allowed {
        if !allowed.contains(&b) {
            errors.push(FieldError::new(name, ErrorKind::Enum));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::schema::builtin::{install_builtin_schemas, member_change_schema, MEMBER_ROLES};
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    fn name_schema() -> Schema {
        Schema::builder()
            .field("name", StringConstraint::required().min_length(3))
            .build()
    }

    #[test]
    fn test_min_length_violation() {
        let result = validate(&name_schema(), &record(json!({"name": "Go"})));
        assert!(!result.is_valid());
        assert_eq!(result.errors, vec![FieldError::new("name", ErrorKind::MinLength)]);
    }

    #[test]
    fn test_min_length_satisfied() {
        let result = validate(&name_schema(), &record(json!({"name": "Golang"})));
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_min_length_boundary() {
        let schema = name_schema();
        assert!(!validate(&schema, &record(json!({"name": "ab"}))).is_valid());
        assert!(validate(&schema, &record(json!({"name": "abc"}))).is_valid());
    }

    #[test]
    fn test_enum_violation() {
        let result = validate(&member_change_schema(), &record(json!({
            "cid": 1, "targetUid": 7, "newRole": "admin"
        })));
        assert_eq!(result.errors, vec![FieldError::new("newRole", ErrorKind::Enum)]);
    }

    #[test]
    fn test_enum_accepts_every_role() {
        for role in MEMBER_ROLES {
            let result = validate(&member_change_schema(), &record(json!({
                "cid": 1, "targetUid": 7, "newRole": role
            })));
            assert!(result.is_valid(), "role {} rejected", role);
        }
    }

    #[test]
    fn test_enum_is_case_sensitive() {
        let result = validate(&member_change_schema(), &record(json!({
            "cid": 1, "targetUid": 7, "newRole": "Manager"
        })));
        assert!(result.has_error("newRole", ErrorKind::Enum));
    }

    #[test]
    fn test_missing_required_number() {
        let schema = Schema::builder()
            .field("cid", NumberConstraint::required())
            .build();
        let result = validate(&schema, &record(json!({})));
        assert_eq!(result.errors, vec![FieldError::new("cid", ErrorKind::Required)]);
    }

    #[test]
    fn test_missing_optional_field_is_skipped() {
        let schema = Schema::builder()
            .field("description", StringConstraint::optional().min_length(10))
            .build();
        assert!(validate(&schema, &record(json!({}))).is_valid());
    }

    #[test]
    fn test_numeric_string_is_type_error() {
        let schema = Schema::builder()
            .field("cid", NumberConstraint::required())
            .build();
        let result = validate(&schema, &record(json!({"cid": "42"})));
        assert_eq!(result.errors, vec![FieldError::new("cid", ErrorKind::Type)]);
    }

    #[test]
    fn test_null_is_type_error_not_absence() {
        let schema = Schema::builder()
            .field("description", StringConstraint::optional())
            .build();
        let result = validate(&schema, &record(json!({"description": null})));
        assert_eq!(result.errors, vec![FieldError::new("description", ErrorKind::Type)]);
    }

    #[test]
    fn test_type_check_precedes_enum() {
        let result = validate(&member_change_schema(), &record(json!({
            "cid": 1, "targetUid": 7, "newRole": 3
        })));
        assert_eq!(result.errors, vec![FieldError::new("newRole", ErrorKind::Type)]);
    }

    #[test]
    fn test_min_length_and_enum_both_reported() {
        let schema = Schema::builder()
            .field("code", StringConstraint::required().min_length(4).one_of(["alpha", "beta"]))
            .build();
        let result = validate(&schema, &record(json!({"code": "xy"})));
        assert_eq!(
            result.errors,
            vec![
                FieldError::new("code", ErrorKind::MinLength),
                FieldError::new("code", ErrorKind::Enum),
            ]
        );
    }

    #[test]
    fn test_errors_follow_declared_order() {
        let schema = Schema::builder()
            .field("zeta", NumberConstraint::required())
            .field("alpha", StringConstraint::required())
            .field("mid", BooleanConstraint::required())
            .build();
        let result = validate(&schema, &record(json!({"mid": "yes"})));
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_number_and_boolean_enums() {
        let schema = Schema::builder()
            .field("level", NumberConstraint::required().one_of([1, 2]))
            .field("flag", BooleanConstraint::required().one_of([true]))
            .build();

        assert!(validate(&schema, &record(json!({"level": 2, "flag": true}))).is_valid());

        let result = validate(&schema, &record(json!({"level": 3, "flag": false})));
        assert_eq!(
            result.errors,
            vec![
                FieldError::new("level", ErrorKind::Enum),
                FieldError::new("flag", ErrorKind::Enum),
            ]
        );
    }

    #[test]
    fn test_large_integer_ids_compare_exactly() {
        let big = 1u64 << 53;
        let schema = Schema::builder()
            .field("cid", NumberConstraint::required().one_of([big]))
            .build();

        assert!(validate(&schema, &record(json!({"cid": big}))).is_valid());
        assert_eq!(
            validate(&schema, &record(json!({"cid": big + 1}))).errors,
            vec![FieldError::new("cid", ErrorKind::Enum)]
        );
        // Integral float still matches an integer entry
        let small = Schema::builder()
            .field("level", NumberConstraint::required().one_of([2]))
            .build();
        assert!(validate(&small, &record(json!({"level": 2.0}))).is_valid());
    }

    #[test]
    fn test_unknown_fields_permissive() {
        let result = validate(&name_schema(), &record(json!({"name": "Golang", "extra": 1})));
        assert!(result.is_valid());
    }

    #[test]
    fn test_unknown_fields_strict() {
        let result = validate_with(
            &name_schema(),
            &record(json!({"name": "Go", "extra": 1, "other": true})),
            &ValidatorConfig::strict(),
            &LogContext::new("req-1"),
        );
        assert_eq!(
            result.errors,
            vec![
                FieldError::new("name", ErrorKind::MinLength),
                FieldError::new("extra", ErrorKind::UnknownField),
                FieldError::new("other", ErrorKind::UnknownField),
            ]
        );
    }

    #[test]
    fn test_validate_named() {
        let mut registry = SchemaRegistry::new();
        install_builtin_schemas(&mut registry).unwrap();
        let ctx = LogContext::new("req-9");

        let result = validate_named(
            &registry,
            "community",
            &record(json!({"name": "Rustaceans"})),
            &ValidatorConfig::default(),
            &ctx,
        )
        .unwrap();
        assert!(result.is_valid());

        let err = validate_named(
            &registry,
            "forum",
            &record(json!({})),
            &ValidatorConfig::default(),
            &ctx,
        )
        .unwrap_err();
        assert_eq!(err, RegistryError::UnknownSchema("forum".to_string()));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let schema = member_change_schema();
        let input = record(json!({"cid": "x", "newRole": "admin", "junk": []}));
        let first = validate(&schema, &input);
        for _ in 0..10 {
            assert_eq!(validate(&schema, &input), first);
        }
    }
}
