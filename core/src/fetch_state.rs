use crate::error::{ApiError, ErrorCode};
use crate::types::Customer;

/// What the last failed fetch reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&ApiError> for FetchFailure {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code(),
            message: err.message().to_string(),
        }
    }
}

/// Lifecycle phase of the customer list. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Error(FetchFailure),
    /// Customers in response order; may be empty.
    Data(Vec<Customer>),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            FetchState::Error(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn customers(&self) -> Option<&[Customer]> {
        match self {
            FetchState::Data(customers) => Some(customers),
            _ => None,
        }
    }
}
