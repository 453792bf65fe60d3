use fixwatch_core_types::RunId;
use thiserror::Error;

/// Result type alias using FixwatchError
pub type Result<T> = std::result::Result<T, FixwatchError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Record parsing/normalization
    InvalidInput,
    InvalidDate,
    InvalidTime,
    InvalidRecord,

    // Classification
    InvalidRuleTable,

    // Configuration
    InvalidConfig,
    InvalidSchema,

    // Baseline / commit
    EmptySnapshot,
    Concurrency,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidDate => "ERR_INVALID_DATE",
            ExErrorKind::InvalidTime => "ERR_INVALID_TIME",
            ExErrorKind::InvalidRecord => "ERR_INVALID_RECORD",
            ExErrorKind::InvalidRuleTable => "ERR_INVALID_RULE_TABLE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::InvalidSchema => "ERR_INVALID_SCHEMA",
            ExErrorKind::EmptySnapshot => "ERR_EMPTY_SNAPSHOT",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity, file path, run) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    path: Option<String>,
    run_id: Option<RunId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            path: None,
            run_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a fixture key, a rule index, a column name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add run correlation context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for fixture processing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FixwatchError {
    // ===== Record Errors =====
    /// Date text did not match any accepted day-month-year form
    #[error("Unparseable date: '{value}'")]
    InvalidDate { value: String },

    /// Time text is neither a zero sentinel nor H:MM / HH:MM
    #[error("Unparseable time: '{value}'")]
    InvalidTime { value: String },

    /// Ground column holds something other than Home/Away/Neutral
    #[error("Unknown ground: '{value}'")]
    InvalidGround { value: String },

    /// Event type column holds an unknown label
    #[error("Unknown event type: '{value}'")]
    InvalidEventType { value: String },

    /// A tabular row is missing a required column
    #[error("Row is missing column '{column}'")]
    MissingColumn { column: String },

    // ===== Classification Errors =====
    /// A rule in the classifier table is malformed
    #[error("Rule {index} is invalid: {reason}")]
    InvalidRule { index: usize, reason: String },

    // ===== Configuration Errors =====
    /// Column schema is malformed (duplicate or empty column names)
    #[error("Invalid schema: {reason}")]
    InvalidSchema { reason: String },

    /// Organization settings are unusable
    #[error("Invalid organization config: {reason}")]
    InvalidOrganization { reason: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<FixwatchError> for ExError {
    fn from(err: FixwatchError) -> Self {
        match err {
            FixwatchError::InvalidDate { value } => ExError::new(ExErrorKind::InvalidDate)
                .with_entity_id(value)
                .with_message("Unparseable fixture date"),

            FixwatchError::InvalidTime { value } => ExError::new(ExErrorKind::InvalidTime)
                .with_entity_id(value)
                .with_message("Unparseable fixture time"),

            FixwatchError::InvalidGround { value } => ExError::new(ExErrorKind::InvalidRecord)
                .with_entity_id(value)
                .with_message("Unknown ground"),

            FixwatchError::InvalidEventType { value } => {
                ExError::new(ExErrorKind::InvalidRecord)
                    .with_entity_id(value)
                    .with_message("Unknown event type")
            }

            FixwatchError::MissingColumn { column } => ExError::new(ExErrorKind::InvalidRecord)
                .with_entity_id(column)
                .with_message("Row is missing a column"),

            FixwatchError::InvalidRule { index, reason } => {
                ExError::new(ExErrorKind::InvalidRuleTable)
                    .with_entity_id(format!("rule[{}]", index))
                    .with_message(reason)
            }

            FixwatchError::InvalidSchema { reason } => {
                ExError::new(ExErrorKind::InvalidSchema).with_message(reason)
            }

            FixwatchError::InvalidOrganization { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            FixwatchError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for FixwatchError {
    fn from(err: serde_json::Error) -> Self {
        FixwatchError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ExErrorKind::InvalidDate.code(), "ERR_INVALID_DATE");
        assert_eq!(ExErrorKind::EmptySnapshot.code(), "ERR_EMPTY_SNAPSHOT");
        assert_eq!(ExErrorKind::Concurrency.code(), "ERR_CONCURRENCY");
    }

    #[test]
    fn test_domain_error_converts_with_kind() {
        let err: ExError = FixwatchError::InvalidTime {
            value: "25:99".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::InvalidTime);
        assert_eq!(err.entity_id(), Some("25:99"));
    }

    #[test]
    fn test_rule_error_carries_index() {
        let err: ExError = FixwatchError::InvalidRule {
            index: 3,
            reason: "empty needle".to_string(),
        }
        .into();
        assert_eq!(err.code(), "ERR_INVALID_RULE_TABLE");
        assert_eq!(err.entity_id(), Some("rule[3]"));
    }

    #[test]
    fn test_display_includes_code_op_and_path() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("commit_baseline")
            .with_path("baseline.csv")
            .with_message("disk full");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_IO]"));
        assert!(rendered.contains("commit_baseline"));
        assert!(rendered.contains("baseline.csv"));
        assert!(rendered.contains("disk full"));
    }
}
