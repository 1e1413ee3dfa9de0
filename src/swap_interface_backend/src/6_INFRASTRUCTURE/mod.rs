//! Infrastructure - Shared utilities and types
//! Foundation layer for all other modules

pub mod constants;
pub mod errors;
pub mod math;
pub mod reentrancy;
pub mod stable_storage;

// Re-export commonly used items
pub use constants::*;
pub use errors::{
    CalculationError, QueryError, QuoteError, Result, SessionError, SwapError, SystemError,
    TradingError, ValidationError,
};
pub use math::{format_display_amount, multiply_and_divide, parse_display_amount};
pub use reentrancy::SwapGuard;
