//! Error types for the point ledger.

/// Result type for point ledger operations.
pub type Result<T> = std::result::Result<T, PointError>;

/// Errors that can occur in point ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum PointError {
    /// The amount was missing, zero, or negative.
    #[error("invalid amount")]
    InvalidAmount,

    /// The user id failed validation.
    #[error("invalid user id: {user_id}")]
    InvalidUserId {
        /// The rejected user id.
        user_id: i64,
    },

    /// No balance record exists for the user.
    #[error("user not found: {user_id}")]
    UserNotFound {
        /// The user id with no balance record.
        user_id: i64,
    },

    /// Accepting the charge would push the balance to or past the ceiling.
    #[error("balance ceiling exceeded: balance={balance}, amount={amount}")]
    BalanceCeilingExceeded {
        /// Balance before the charge.
        balance: i64,
        /// The rejected charge amount.
        amount: i64,
    },

    /// The spend exceeds the current balance.
    #[error("insufficient balance: balance={balance}, required={required}")]
    InsufficientBalance {
        /// Current balance.
        balance: i64,
        /// Requested spend.
        required: i64,
    },

    /// Storage failure.
    #[error("storage error: {0}")]
    Storage(String),
}
