use thiserror::Error;

#[derive(Debug, Error)]
pub enum MixError {
    // customer is the index into the order list, reported 1-based
    #[error("order {} is malformed: {reason}", .customer + 1)]
    MalformedOrder { customer: usize, reason: String },

    #[error("order file is empty, expected the number of curries on the first line")]
    MissingCurryCount,

    #[error("invalid number of curries '{0}'")]
    InvalidCurryCount(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MixError {
    pub fn malformed(customer: usize, reason: impl Into<String>) -> Self {
        MixError::MalformedOrder { customer, reason: reason.into() }
    }
}
