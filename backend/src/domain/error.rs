//! Domain-level error taxonomy.
//!
//! These errors are transport and storage agnostic. Outbound adapters map
//! driver failures into an [`ErrorKind`]; inbound adapters map the kind to a
//! protocol-specific envelope. Callers branch on [`Error::kind`], never on the
//! rendered message.

use std::fmt;

/// Closed set of failure categories understood by every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The supplied username failed validation.
    InvalidUsername,
    /// Storage rejected the write because the username is taken.
    UsernameExists,
    /// Storage rejected the write on an integrity constraint with no
    /// dedicated kind.
    UnknownConflict,
    /// No user matches the identifier or username.
    UserNotFound,
    /// Any other failure: connectivity, timeouts, decoding.
    Internal,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::InvalidUsername,
        Self::UsernameExists,
        Self::UnknownConflict,
        Self::UserNotFound,
        Self::Internal,
    ];

    /// Short human-readable description of the kind.
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidUsername => "invalid username",
            Self::UsernameExists => "username already exists",
            Self::UnknownConflict => "unknown conflict",
            Self::UserNotFound => "user not found",
            Self::Internal => "internal error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Domain error value.
///
/// ## Invariants
/// - `kind` is fixed at construction; attaching detail or context never
///   changes it.
/// - `detail` carries lower-level diagnostic text for logs.
/// - `context` lists call-site annotations, outermost first.
///
/// # Examples
/// ```
/// use user_service::domain::{Error, ErrorKind};
///
/// let err = Error::username_exists("Key (username)=(alice) already exists.")
///     .context("repo");
/// assert!(err.is(ErrorKind::UsernameExists));
/// assert_eq!(
///     err.to_string(),
///     "repo: username already exists: Key (username)=(alice) already exists."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    detail: Option<String>,
    context: Vec<String>,
}

impl Error {
    /// Create an error of the given kind with no detail.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            detail: None,
            context: Vec::new(),
        }
    }

    /// Attach lower-level detail text, replacing any previous detail.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Wrap the error with call-site context, keeping its kind.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.insert(0, context.into());
        self
    }

    /// The failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether this error belongs to `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Diagnostic detail from the layer that produced the error.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Convenience constructor for [`ErrorKind::InvalidUsername`].
    pub fn invalid_username(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidUsername).with_detail(detail)
    }

    /// Convenience constructor for [`ErrorKind::UsernameExists`].
    pub fn username_exists(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::UsernameExists).with_detail(detail)
    }

    /// Convenience constructor for [`ErrorKind::UnknownConflict`].
    pub fn unknown_conflict(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownConflict).with_detail(detail)
    }

    /// Convenience constructor for [`ErrorKind::UserNotFound`].
    pub fn user_not_found(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::UserNotFound).with_detail(detail)
    }

    /// Convenience constructor for [`ErrorKind::Internal`].
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal).with_detail(detail)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for context in &self.context {
            write!(f, "{context}: ")?;
        }
        f.write_str(self.kind.description())?;
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
