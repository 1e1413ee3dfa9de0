//! Error taxonomy for the swap interface backend
//!
//! Every endpoint returns `Result<T>` with a candid-serializable error so the
//! UI can render the failure. Domain enums carry enough context to display
//! without consulting logs; the top-level `SwapError` groups them.

use candid::{CandidType, Deserialize, Nat};
use serde::Serialize;
use std::fmt;

pub type Result<T> = std::result::Result<T, SwapError>;

#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum SwapError {
    Session(SessionError),
    Quote(QuoteError),
    Trading(TradingError),
    Query(QueryError),
    Validation(ValidationError),
    Calculation(CalculationError),
    System(SystemError),
    Other(String),
}

/// Account/session preconditions
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// No connected account - the anonymous principal cannot submit a swap
    NoAccount,
}

/// Quote acquisition failures - downstream renders a neutral zero, never stale data
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum QuoteError {
    QuoteUnavailable { reason: String },
    ReservesUnavailable { reason: String },
}

/// Failures while executing the approve/swap sequence
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum TradingError {
    ApprovalFailed {
        token: String,
        amount: String,
        reason: String,
    },
    SwapFailed {
        direction: String,
        amount: Nat,
        reason: String,
    },
    InvalidSwapAmount {
        reason: String,
    },
}

/// Read-only inter-canister query failures
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum QueryError {
    CanisterUnreachable { canister: String, reason: String },
}

#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidAmount { amount: String, reason: String },
}

#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum CalculationError {
    DivisionByZero { operation: String },
    AmountOverflow { operation: String },
}

#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum SystemError {
    OperationInProgress { operation: String, user: String },
    RequestNotFound { id: String },
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapError::Session(e) => write!(f, "Session error: {}", e),
            SwapError::Quote(e) => write!(f, "Quote error: {}", e),
            SwapError::Trading(e) => write!(f, "Trading error: {}", e),
            SwapError::Query(e) => write!(f, "Query error: {}", e),
            SwapError::Validation(e) => write!(f, "Validation error: {}", e),
            SwapError::Calculation(e) => write!(f, "Calculation error: {}", e),
            SwapError::System(e) => write!(f, "System error: {}", e),
            SwapError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoAccount => {
                write!(f, "No connected account - connect a wallet before swapping")
            }
        }
    }
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::QuoteUnavailable { reason } => {
                write!(f, "Quote unavailable: {}", reason)
            }
            QuoteError::ReservesUnavailable { reason } => {
                write!(f, "Reserve snapshot unavailable: {}", reason)
            }
        }
    }
}

impl fmt::Display for TradingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradingError::ApprovalFailed {
                token,
                amount,
                reason,
            } => write!(f, "Approval of {} {} failed: {}", amount, token, reason),
            TradingError::SwapFailed {
                direction,
                amount,
                reason,
            } => write!(f, "Swap ({}) of {} failed: {}", direction, amount, reason),
            TradingError::InvalidSwapAmount { reason } => {
                write!(f, "Invalid swap amount: {}", reason)
            }
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::CanisterUnreachable { canister, reason } => {
                write!(f, "Canister {} unreachable: {}", canister, reason)
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidAmount { amount, reason } => {
                write!(f, "Invalid amount '{}': {}", amount, reason)
            }
        }
    }
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationError::DivisionByZero { operation } => {
                write!(f, "Division by zero in {}", operation)
            }
            CalculationError::AmountOverflow { operation } => {
                write!(f, "Amount overflow in {}", operation)
            }
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::OperationInProgress { operation, user } => {
                write!(f, "Operation '{}' already in progress for {}", operation, user)
            }
            SystemError::RequestNotFound { id } => write!(f, "Swap request {} not found", id),
        }
    }
}

impl From<SessionError> for SwapError {
    fn from(e: SessionError) -> Self {
        SwapError::Session(e)
    }
}

impl From<QuoteError> for SwapError {
    fn from(e: QuoteError) -> Self {
        SwapError::Quote(e)
    }
}

impl From<TradingError> for SwapError {
    fn from(e: TradingError) -> Self {
        SwapError::Trading(e)
    }
}

impl From<QueryError> for SwapError {
    fn from(e: QueryError) -> Self {
        SwapError::Query(e)
    }
}

impl From<ValidationError> for SwapError {
    fn from(e: ValidationError) -> Self {
        SwapError::Validation(e)
    }
}

impl From<CalculationError> for SwapError {
    fn from(e: CalculationError) -> Self {
        SwapError::Calculation(e)
    }
}

impl From<SystemError> for SwapError {
    fn from(e: SystemError) -> Self {
        SwapError::System(e)
    }
}
