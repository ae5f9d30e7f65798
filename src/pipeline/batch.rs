//! Batch validation of JSON payloads.
//!
//! Each payload is parsed, checked to be a JSON object, then validated.
//! A bad payload never aborts the batch; it is rejected with a reason.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::error::RegistryResult;
use crate::schema::definition::Schema;
use crate::schema::registry::SchemaRegistry;
use crate::validation::result::FieldError;
use crate::validation::validator::validate_with;
use crate::validation::value::json_type_name;

use super::context::BatchContext;

/// Why a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// Payload is not valid JSON, or is not a JSON object.
    Malformed { detail: String },
    /// Payload parsed but failed schema validation.
    Invalid { errors: Vec<FieldError> },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Malformed { detail } => write!(f, "malformed: {}", detail),
            Rejection::Invalid { errors } => write!(f, "invalid: {} field error(s)", errors.len()),
        }
    }
}

/// Result of validating a single payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutcome {
    pub index: usize,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

/// Result of validating a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub batch_id: String,
    pub received_count: usize,
    pub accepted_count: usize,
    pub rejected_count: usize,
    pub records: Vec<RecordOutcome>,
}

/// Validate a batch of JSON payloads against one schema.
pub fn validate_batch(
    ctx: &BatchContext,
    schema: &Schema,
    payloads: &[String],
    config: &ValidatorConfig,
) -> BatchResult {
    let mut records = Vec::with_capacity(payloads.len());
    let mut accepted = 0;
    let mut rejected = 0;

    for (index, payload) in payloads.iter().enumerate() {
        let outcome = validate_payload(ctx, schema, index, payload, config);

        if outcome.accepted {
            accepted += 1;
        } else {
            rejected += 1;
        }

        records.push(outcome);
    }

    log::info!(
        "{} BATCH_COMPLETE received={} accepted={} rejected={}",
        ctx.log_context(),
        payloads.len(),
        accepted,
        rejected
    );

    BatchResult {
        batch_id: ctx.batch_id.clone(),
        received_count: payloads.len(),
        accepted_count: accepted,
        rejected_count: rejected,
        records,
    }
}

/// Look up the batch's schema by name, then validate the batch.
pub fn validate_batch_named(
    registry: &SchemaRegistry,
    ctx: &BatchContext,
    payloads: &[String],
    config: &ValidatorConfig,
) -> RegistryResult<BatchResult> {
    let schema = registry.get(&ctx.schema_name)?;
    Ok(validate_batch(ctx, &schema, payloads, config))
}

fn validate_payload(
    ctx: &BatchContext,
    schema: &Schema,
    index: usize,
    payload: &str,
    config: &ValidatorConfig,
) -> RecordOutcome {
    let log_ctx = ctx.record_context(index);

    let record = match serde_json::from_str::<Value>(payload) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            log::warn!(
                "{} RECORD_MALFORMED reason=not_an_object type={}",
                log_ctx,
                json_type_name(&other)
            );
            return rejected(
                index,
                Rejection::Malformed {
                    detail: "expected a JSON object".to_string(),
                },
            );
        }
        Err(e) => {
            log::warn!("{} RECORD_PARSE_FAILED error={}", log_ctx, e);
            return rejected(
                index,
                Rejection::Malformed {
                    detail: format!("JSON parse error: {}", e),
                },
            );
        }
    };

    let result = validate_with(schema, &record, config, &log_ctx);
    if result.is_valid() {
        RecordOutcome {
            index,
            accepted: true,
            rejection: None,
        }
    } else {
        rejected(
            index,
            Rejection::Invalid {
                errors: result.errors,
            },
        )
    }
}

fn rejected(index: usize, rejection: Rejection) -> RecordOutcome {
    RecordOutcome {
        index,
        accepted: false,
        rejection: Some(rejection),
    }
}
