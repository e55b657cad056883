use thiserror::Error;
use tracing::{error, warn};

/// Error severity for host display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // lookup misses, show an empty state
    Warning,  // recoverable, caller can retry with other input
    Error,    // a single example failed to render
    Critical, // programmer error
}

/// A producer failed while rendering one example.
///
/// The failure is scoped to a single `(component, label)` key and never
/// crosses the render boundary as a panic.
#[derive(Error, Debug)]
#[error("Rendering '{component}' / '{label}' failed: {cause:#}")]
pub struct RenderFailure {
    pub component: String,
    pub label: String,
    #[source]
    pub cause: anyhow::Error,
}

impl RenderFailure {
    pub fn new(
        component: impl Into<String>,
        label: impl Into<String>,
        cause: anyhow::Error,
    ) -> Self {
        Self {
            component: component.into(),
            label: label.into(),
            cause,
        }
    }
}

/// Domain-specific errors for the story catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Example '{label}' is already registered for component '{component}'")]
    DuplicateLabel { component: String, label: String },

    #[error("Component '{component}' is not registered")]
    ComponentNotFound { component: String },

    #[error("Component '{component}' has no example '{label}'")]
    ExampleNotFound { component: String, label: String },

    #[error("Operation '{operation}' is not supported on a read-only catalog view")]
    UnsupportedOperation { operation: &'static str },

    #[error(transparent)]
    Render(#[from] RenderFailure),
}

impl CatalogError {
    pub fn duplicate_label(component: &str, label: &str) -> Self {
        Self::DuplicateLabel {
            component: component.to_string(),
            label: label.to_string(),
        }
    }

    pub fn component_not_found(component: &str) -> Self {
        Self::ComponentNotFound {
            component: component.to_string(),
        }
    }

    pub fn example_not_found(component: &str, label: &str) -> Self {
        Self::ExampleNotFound {
            component: component.to_string(),
            label: label.to_string(),
        }
    }

    /// True for both component and example lookup misses
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ComponentNotFound { .. } | Self::ExampleNotFound { .. }
        )
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateLabel { .. } => ErrorSeverity::Warning,
            Self::ComponentNotFound { .. } => ErrorSeverity::Info,
            Self::ExampleNotFound { .. } => ErrorSeverity::Info,
            Self::UnsupportedOperation { .. } => ErrorSeverity::Critical,
            Self::Render(_) => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateLabel { component, label } => {
                format!("{} already has an example named \"{}\"", component, label)
            }
            Self::ComponentNotFound { component } => format!("No stories for {}", component),
            Self::ExampleNotFound { component, label } => {
                format!("{} has no example named \"{}\"", component, label)
            }
            Self::UnsupportedOperation { operation } => {
                format!("The catalog is read-only ({})", operation)
            }
            Self::Render(failure) => format!("Could not render this example: {}", failure.cause),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the host doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use story_catalog::error::ResultExt;
///
/// let config = std::fs::read_to_string(path).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
