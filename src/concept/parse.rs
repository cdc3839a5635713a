use crate::catalog::ProductConcept;
use crate::concept::prompt::CONCEPT_FIELDS;
use crate::foundation::error::GenerationError;

const FENCE: &str = "```";

/// Remove one Markdown code fence wrapping the reply, if present.
///
/// An optional `json` language tag after the opening fence is dropped. A reply that
/// opens a fence without closing it is rejected.
pub fn strip_code_fence(reply: &str) -> Result<&str, GenerationError> {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix(FENCE) else {
        return Ok(trimmed);
    };
    let Some(end) = rest.find(FENCE) else {
        return Err(GenerationError::MalformedReply(
            "unterminated code fence".to_string(),
        ));
    };
    let body = &rest[..end];
    let body = body.strip_prefix("json").unwrap_or(body);
    Ok(body.trim())
}

/// Parse the model's text into a concept. Missing keys become placeholders.
pub fn parse_concept_reply(reply: &str) -> Result<ProductConcept, GenerationError> {
    let body = strip_code_fence(reply)?;
    if body.is_empty() {
        return Err(GenerationError::MalformedReply("empty reply".to_string()));
    }
    let value: serde_json::Value = serde_json::from_str(body)?;
    let Some(object) = value.as_object() else {
        return Err(GenerationError::MalformedReply(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    };
    let missing = missing_fields(object);
    if !missing.is_empty() {
        tracing::debug!(?missing, "reply lacks concept fields, using placeholders");
    }
    Ok(serde_json::from_value(value)?)
}

fn missing_fields(object: &serde_json::Map<String, serde_json::Value>) -> Vec<&'static str> {
    CONCEPT_FIELDS
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect()
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/concept/parse.rs"]
mod tests;
