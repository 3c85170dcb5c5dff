use rust_decimal::Decimal;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every failure the domain can produce maps onto one of these four
/// kinds. Callers embedding the crate translate them at their own
/// boundary (HTTP status, CLI exit code, ...); nothing here leaks a
/// transport concern.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules and command input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation not allowed in the entity's current lifecycle state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Payment amount exceeds the invoice's remaining balance
    #[error("Payment amount {amount} exceeds invoice balance {balance}")]
    InsufficientPayment { amount: Decimal, balance: Decimal },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        AppError::InvalidState(msg.into())
    }

    pub fn insufficient_payment(amount: Decimal, balance: Decimal) -> Self {
        AppError::InsufficientPayment { amount, balance }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }
}
