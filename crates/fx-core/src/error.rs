use thiserror::Error;

/// Failures surfaced by the effect engines.
///
/// None of these are fatal to the page: the ticker drops the task that
/// reported one and keeps driving everything else.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FxError {
    #[error("invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("surface operation `{op}` failed: {detail}")]
    Surface { op: &'static str, detail: String },
}

pub type FxResult<T> = Result<T, FxError>;

impl FxError {
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    pub fn surface(op: &'static str, detail: impl Into<String>) -> Self {
        Self::Surface {
            op,
            detail: detail.into(),
        }
    }
}
