//! Field constraint descriptors.
//!
//! One variant per primitive kind, each carrying only the constraints that
//! apply to it. `minLength` exists on strings only, so a length rule on a
//! number field cannot be expressed.
//!
//! JSON form: `{"type": "string", "required": true, "minLength": 3, "enum": [..]}`.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Validation rule for a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConstraintDescriptor {
    String(StringConstraint),
    Number(NumberConstraint),
    Boolean(BooleanConstraint),
}

impl ConstraintDescriptor {
    /// Returns the primitive type name used in schema definitions.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConstraintDescriptor::String(_) => "string",
            ConstraintDescriptor::Number(_) => "number",
            ConstraintDescriptor::Boolean(_) => "boolean",
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            ConstraintDescriptor::String(c) => c.required,
            ConstraintDescriptor::Number(c) => c.required,
            ConstraintDescriptor::Boolean(c) => c.required,
        }
    }

    /// Check the descriptor itself (not a value).
    ///
    /// Rejects empty enum lists, which no value could ever satisfy.
    pub fn check_structure(&self) -> Result<(), String> {
        match self {
            ConstraintDescriptor::String(c) => {
                if matches!(&c.allowed, Some(values) if values.is_empty()) {
                    return Err("enum must list at least one value".into());
                }
            }
            ConstraintDescriptor::Number(c) => {
                if matches!(&c.allowed, Some(values) if values.is_empty()) {
                    return Err("enum must list at least one value".into());
                }
            }
            ConstraintDescriptor::Boolean(c) => {
                if matches!(&c.allowed, Some(values) if values.is_empty()) {
                    return Err("enum must list at least one value".into());
                }
            }
        }
        Ok(())
    }
}

/// Constraints for a `string` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StringConstraint {
    #[serde(default)]
    pub required: bool,
    /// Minimum length in Unicode scalar values.
    #[serde(rename = "minLength", default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

impl StringConstraint {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn optional() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Constraints for a `number` field.
///
/// Enum entries keep their JSON representation so large integer ids compare
/// exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberConstraint {
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Number>>,
}

impl NumberConstraint {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn optional() -> Self {
        Self::default()
    }

    pub fn one_of<I, N>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Constraints for a `boolean` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BooleanConstraint {
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<bool>>,
}

impl BooleanConstraint {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn optional() -> Self {
        Self::default()
    }

    pub fn one_of<I: IntoIterator<Item = bool>>(mut self, values: I) -> Self {
        self.allowed = Some(values.into_iter().collect());
        self
    }
}

impl From<StringConstraint> for ConstraintDescriptor {
    fn from(c: StringConstraint) -> Self {
        ConstraintDescriptor::String(c)
    }
}

impl From<NumberConstraint> for ConstraintDescriptor {
    fn from(c: NumberConstraint) -> Self {
        ConstraintDescriptor::Number(c)
    }
}

impl From<BooleanConstraint> for ConstraintDescriptor {
    fn from(c: BooleanConstraint) -> Self {
        ConstraintDescriptor::Boolean(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_string_descriptor() {
        let desc: ConstraintDescriptor = serde_json::from_value(json!({
            "type": "string",
            "required": true,
            "minLength": 3
        }))
        .unwrap();

        assert_eq!(
            desc,
            ConstraintDescriptor::String(StringConstraint::required().min_length(3))
        );
        assert!(desc.is_required());
        assert_eq!(desc.type_name(), "string");
    }

    #[test]
    fn test_required_defaults_to_false() {
        let desc: ConstraintDescriptor =
            serde_json::from_value(json!({"type": "number"})).unwrap();
        assert!(!desc.is_required());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: Result<ConstraintDescriptor, _> =
            serde_json::from_value(json!({"type": "date", "required": true}));
        assert!(result.is_err());
    }

    #[test]
    fn test_min_length_on_number_rejected() {
        let result: Result<ConstraintDescriptor, _> =
            serde_json::from_value(json!({"type": "number", "minLength": 3}));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_form() {
        let desc: ConstraintDescriptor = StringConstraint::required()
            .one_of(["owner", "member"])
            .into();
        assert_eq!(
            serde_json::to_value(&desc).unwrap(),
            json!({"type": "string", "required": true, "enum": ["owner", "member"]})
        );
    }

    #[test]
    fn test_check_structure() {
        let empty_enum: ConstraintDescriptor =
            StringConstraint::optional().one_of(Vec::<String>::new()).into();
        assert!(empty_enum.check_structure().is_err());

        let empty_numbers: ConstraintDescriptor =
            NumberConstraint::optional().one_of(Vec::<u64>::new()).into();
        assert!(empty_numbers.check_structure().is_err());

        let ok: ConstraintDescriptor = BooleanConstraint::required().one_of([true]).into();
        assert!(ok.check_structure().is_ok());
    }
}
