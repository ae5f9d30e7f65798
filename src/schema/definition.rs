//! Schema definitions.
//!
//! A schema is an ordered list of field rules. Declared order is kept so
//! validation errors come out in a reproducible order.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use super::descriptor::ConstraintDescriptor;

/// A single declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: String,
    pub constraint: ConstraintDescriptor,
}

/// Immutable mapping from field name to constraint descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<FieldRule>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Parse a schema from its JSON definition.
    ///
    /// Duplicate field names survive parsing and are caught by
    /// [`Schema::check_structure`] at registration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fields in declared order.
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&ConstraintDescriptor> {
        self.fields
            .iter()
            .find(|rule| rule.name == name)
            .map(|rule| &rule.constraint)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|rule| rule.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate the schema structure itself (not a record).
    pub fn check_structure(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for rule in &self.fields {
            if rule.name.is_empty() {
                return Err("field names must not be empty".into());
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(format!("field '{}' is declared more than once", rule.name));
            }
            rule.constraint
                .check_structure()
                .map_err(|reason| format!("field '{}': {}", rule.name, reason))?;
        }
        Ok(())
    }

    /// Hex SHA-256 of the schema's canonical JSON form.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let canonical = serde_json::to_vec(self)?;
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        Ok(hex::encode(hasher.finalize()))
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for rule in &self.fields {
            map.serialize_entry(&rule.name, &rule.constraint)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SchemaVisitor;

        impl<'de> Visitor<'de> for SchemaVisitor {
            type Value = Schema;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field name to constraint descriptor")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Schema, A::Error> {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, constraint)) =
                    access.next_entry::<String, ConstraintDescriptor>()?
                {
                    fields.push(FieldRule { name, constraint });
                }
                Ok(Schema { fields })
            }
        }

        deserializer.deserialize_map(SchemaVisitor)
    }
}

/// A `{ "<schema name>": { <fields> }, ... }` document, in file order.
///
/// Repeated schema names are kept, not collapsed, so the registry can reject
/// them instead of silently keeping the last one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    pub entries: Vec<(String, Schema)>,
}

impl SchemaDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<'de> Deserialize<'de> for SchemaDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = SchemaDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of schema name to schema definition")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<SchemaDocument, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Schema>()? {
                    entries.push(entry);
                }
                Ok(SchemaDocument { entries })
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

/// Collects field rules in declaration order.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldRule>,
}

impl SchemaBuilder {
    pub fn field(mut self, name: &str, constraint: impl Into<ConstraintDescriptor>) -> Self {
        self.fields.push(FieldRule {
            name: name.to_string(),
            constraint: constraint.into(),
        });
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}
