/// Convenience result type used across One Spark.
pub type SparkResult<T> = Result<T, SparkError>;

/// Top-level error taxonomy used by the pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum SparkError {
    /// Invalid catalog, configuration or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The concept generator could not produce a concept.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Errors while laying out or rasterizing a card.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SparkError {
    /// Build a [`SparkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SparkError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SparkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Every way the generative concept source can fail.
///
/// The pipeline never surfaces these to the caller: each one is recovered by the
/// placeholder concept. They stay typed so the fallback can log what happened.
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    /// No API key was configured.
    #[error("missing api credentials (set ANTHROPIC_API_KEY)")]
    MissingCredentials,

    /// Transport-level failure (DNS, TLS, connection reset, client build).
    #[error("request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("api returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The API envelope or the model text did not have the expected shape.
    #[error("malformed reply: {0}")]
    MalformedReply(String),

    /// The model text was not valid JSON.
    #[error("invalid concept json: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
