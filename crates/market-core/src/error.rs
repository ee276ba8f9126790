//! Error types shared by the backend contract and the view logic.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    /// Carries the prompt shown to the user.
    #[error("{0}")]
    AuthRequired(&'static str),

    #[error("Idea not found")]
    NotFound,

    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("System Error: Could not identify the seller. Please try again later or contact support.")]
    SellerUnknown,

    #[error("You cannot message yourself.")]
    SelfContact,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type MarketResult<T> = Result<T, MarketError>;

impl MarketError {
    pub fn login_to_like() -> Self {
        Self::AuthRequired("Please log in to like ideas.")
    }

    pub fn login_to_save() -> Self {
        Self::AuthRequired("Please log in to save items")
    }

    pub fn login_to_message() -> Self {
        Self::AuthRequired("Please log in to message the seller.")
    }

    /// True for errors that are a user-facing prompt rather than a failure.
    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::AuthRequired(_) | Self::SelfContact)
    }
}
