use quill_core_types::RequestId;
use thiserror::Error;

/// Result type alias using QuillError
pub type Result<T> = std::result::Result<T, QuillError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The analytical operations (`diff`, `diversity`) never fail; every kind
/// here belongs to an edge of the system: decoding caller bytes, reading
/// files, parsing configuration, or encoding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    /// Input bytes are not valid UTF-8
    InvalidEncoding,

    // Configuration
    /// Config file is malformed or carries inconsistent thresholds
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,

    /// A report did not survive its own JSON round-trip
    DeterminismViolation,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidEncoding => "ERR_INVALID_ENCODING",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and enough
/// context (operation, subject, request) to make a CLI message useful.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    subject: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            subject: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the subject the error is about (a file path, `"old"`/`"new"` side, a config key)
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the subject, if any
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(subject) = &self.subject {
            write!(f, " ({})", subject)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised at the edges of Quill
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuillError {
    /// Input text for one side of a comparison is not UTF-8
    #[error("Input '{which}' is not valid UTF-8: {reason}")]
    InvalidUtf8 { which: String, reason: String },

    /// A file could not be read
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// Config file is not valid TOML or has the wrong shape
    #[error("Failed to parse config: {message}")]
    ConfigParse { message: String },

    /// Diversity thresholds are inconsistent
    #[error("Invalid diversity thresholds: {reason}")]
    InvalidThresholds { reason: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<QuillError> for ExError {
    fn from(err: QuillError) -> Self {
        let message = err.to_string();
        match err {
            QuillError::InvalidUtf8 { which, .. } => ExError::new(ExErrorKind::InvalidEncoding)
                .with_subject(which)
                .with_message(message),

            QuillError::Io { path, .. } => ExError::new(ExErrorKind::Io)
                .with_subject(path)
                .with_message(message),

            QuillError::ConfigParse { .. } | QuillError::InvalidThresholds { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            QuillError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            QuillError::Internal { .. } => ExError::new(ExErrorKind::Internal).with_message(message),
        }
    }
}
