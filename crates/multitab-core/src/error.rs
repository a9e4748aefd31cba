use thiserror::Error;

/// Internal consistency errors.
///
/// Every variant indicates that a lifecycle invariant was violated by the
/// host wiring, not by user input. User input problems are reported through
/// `ValidationReport` and never become a `MultitabError`. An error aborts
/// only the current event handler; no partial mutation survives because the
/// structural swap-in is always the last mutating step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MultitabError {
    #[error("tab {0} not found")]
    TabNotFound(usize),

    #[error("checkbox {0} not found")]
    CheckboxNotFound(usize),

    #[error("saved-values index {index} out of bounds (len {len})")]
    StoreIndexOutOfBounds { index: usize, len: usize },

    #[error("unknown field name: {0}")]
    UnknownField(String),
}

impl MultitabError {
    /// Stable error code for the JS boundary.
    pub fn code(&self) -> &'static str {
        match self {
            MultitabError::TabNotFound(_) => "TAB_NOT_FOUND",
            MultitabError::CheckboxNotFound(_) => "CHECKBOX_NOT_FOUND",
            MultitabError::StoreIndexOutOfBounds { .. } => "STORE_INDEX_OUT_OF_BOUNDS",
            MultitabError::UnknownField(_) => "UNKNOWN_FIELD",
        }
    }
}
