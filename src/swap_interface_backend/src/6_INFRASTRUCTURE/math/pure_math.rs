//! Pure mathematical functions - no I/O, no async
//! All functions here must be deterministic and side-effect free
//!
//! On-chain quantities are `Nat` base units; user input arrives as decimal
//! display strings. Conversions between the two live here so every consumer
//! rounds the same way: parse truncates sub-unit dust toward zero, and
//! formatting trims trailing zeros.

use crate::infrastructure::errors::{CalculationError, Result, SwapError, ValidationError};
use candid::Nat;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Multiply two Nats and divide by a third with arbitrary precision
/// Formula: (a × b) ÷ c
pub fn multiply_and_divide(a: &Nat, b: &Nat, c: &Nat) -> Result<Nat> {
    if c == &Nat::from(0u64) {
        return Err(SwapError::Calculation(CalculationError::DivisionByZero {
            operation: format!("({} × {}) ÷ {}", a, b, c),
        }));
    }

    let a_big = nat_to_biguint(a);
    let b_big = nat_to_biguint(b);
    let c_big = nat_to_biguint(c);

    let result = (a_big * b_big) / c_big;

    Ok(biguint_to_nat(result))
}

/// Parse a user-typed decimal string into base units
///
/// Empty input counts as zero (an untouched amount field). Fractional digits
/// beyond the asset's precision are truncated toward zero.
pub fn parse_display_amount(value: &str, decimals: u32) -> Result<Nat> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(Nat::from(0u64));
    }

    let parsed = Decimal::from_str(trimmed).map_err(|e| {
        SwapError::Validation(ValidationError::InvalidAmount {
            amount: value.to_string(),
            reason: e.to_string(),
        })
    })?;

    if parsed.is_sign_negative() {
        return Err(SwapError::Validation(ValidationError::InvalidAmount {
            amount: value.to_string(),
            reason: "Amount cannot be negative".to_string(),
        }));
    }

    let scale = Decimal::from(10u64.pow(decimals));
    let base = parsed
        .checked_mul(scale)
        .ok_or_else(|| {
            SwapError::Calculation(CalculationError::AmountOverflow {
                operation: format!("parse_display_amount({}, {})", value, decimals),
            })
        })?
        .trunc();

    let units = base.to_u128().ok_or_else(|| {
        SwapError::Calculation(CalculationError::AmountOverflow {
            operation: format!("parse_display_amount({}, {})", value, decimals),
        })
    })?;

    Ok(Nat::from(units))
}

/// Format base units as a decimal display string, trailing zeros trimmed
pub fn format_display_amount(amount: &Nat, decimals: u32) -> String {
    let value = nat_to_biguint(amount);
    let divisor = BigUint::from(10u64.pow(decimals));

    let integer = &value / &divisor;
    let fraction = &value % &divisor;

    let mut frac_str = fraction.to_string();
    while frac_str.len() < decimals as usize {
        frac_str.insert(0, '0');
    }
    let frac_str = frac_str.trim_end_matches('0');

    if frac_str.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, frac_str)
    }
}

pub fn nat_to_biguint(n: &Nat) -> BigUint {
    n.0.clone()
}

pub fn biguint_to_nat(b: BigUint) -> Nat {
    Nat::from(b)
}
