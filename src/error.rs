//! Error type shared by the formatters and the JNI bridge.

/// Message carried by [`HudError::IllegalArgument`] for invalid durations.
pub const DURATION_ILLEGAL_ARGUMENT: &str = "Duration must be greater than zero.";

#[derive(Debug, thiserror::Error)]
pub enum HudError {
    #[error("{0}")]
    IllegalArgument(&'static str),

    #[error("No maneuver icon for key '{0}'")]
    ManeuverNotFound(String),

    #[error("Arrival time is out of range")]
    ArrivalOutOfRange,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HudError {
    /// Java exception class thrown when this error crosses the JNI boundary.
    pub fn java_exception_class(&self) -> &'static str {
        match self {
            HudError::IllegalArgument(_) | HudError::Json(_) => {
                "java/lang/IllegalArgumentException"
            }
            HudError::ManeuverNotFound(_) => "java/util/NoSuchElementException",
            HudError::ArrivalOutOfRange => "java/lang/ArithmeticException",
        }
    }
}
