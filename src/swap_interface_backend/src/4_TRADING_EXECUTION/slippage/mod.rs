//! # Slippage Guard Module
//!
//! Pure functions deriving the minimum-acceptable-output bound from a quoted
//! amount and a slippage tolerance.
//!
//! All arithmetic is integer-exact: the tolerance is an exact basis-point
//! fraction and the bound is `quoted × (10000 − bps) / 10000` over
//! arbitrary-precision integers. No floating point touches an on-chain
//! quantity.
//!
//! The exchange interface on this deployment cannot enforce the bound
//! on-chain; callers display it and compare the settled amount against it
//! after the fact.

use crate::infrastructure::constants::BASIS_POINT_DENOMINATOR;
use crate::infrastructure::errors::Result;
use crate::infrastructure::math::multiply_and_divide;
use crate::types::SlippageTolerance;
use candid::Nat;

/// Minimum acceptable output for a quoted amount at the given tolerance
///
/// ## Example
/// - Quoted: 100 units, tolerance 2% → 98 units
pub fn minimum_receive(quoted_output: &Nat, tolerance: SlippageTolerance) -> Result<Nat> {
    let keep_bps = BASIS_POINT_DENOMINATOR - tolerance.basis_points();
    multiply_and_divide(
        quoted_output,
        &Nat::from(keep_bps),
        &Nat::from(BASIS_POINT_DENOMINATOR),
    )
}

/// Whether a settled amount came in under the advisory bound
pub fn below_minimum(actual_receive: &Nat, min_receive: &Nat) -> bool {
    actual_receive < min_receive
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tolerances() -> [SlippageTolerance; 4] {
        [
            SlippageTolerance::HalfPercent,
            SlippageTolerance::OnePercent,
            SlippageTolerance::TwoPercent,
            SlippageTolerance::FivePercent,
        ]
    }

    #[test]
    fn test_minimum_receive_exact_basis_points() {
        // Q divisible by the denominator: Q − Q×tol is exact
        let quoted = Nat::from(1_000_000u64);
        let cases = [
            (SlippageTolerance::HalfPercent, 995_000u64),
            (SlippageTolerance::OnePercent, 990_000u64),
            (SlippageTolerance::TwoPercent, 980_000u64),
            (SlippageTolerance::FivePercent, 950_000u64),
        ];
        for (tolerance, expected) in cases {
            assert_eq!(
                minimum_receive(&quoted, tolerance).unwrap(),
                Nat::from(expected)
            );
        }
    }

    #[test]
    fn test_minimum_receive_never_exceeds_quote() {
        for quoted in [0u64, 1, 99, 10_000, 495_049_504, u64::MAX] {
            let quoted = Nat::from(quoted);
            for tolerance in all_tolerances() {
                assert!(minimum_receive(&quoted, tolerance).unwrap() <= quoted);
            }
        }
    }

    #[test]
    fn test_minimum_receive_matches_integer_identity() {
        // min = Q × (10000 − bps) / 10000, checked against an independent
        // widening computation
        for quoted in [1u128, 7, 12_345, 495_049_504, u64::MAX as u128] {
            for tolerance in all_tolerances() {
                let bps = tolerance.basis_points() as u128;
                let expected = quoted * (10_000 - bps) / 10_000;
                assert_eq!(
                    minimum_receive(&Nat::from(quoted), tolerance).unwrap(),
                    Nat::from(expected)
                );
            }
        }
    }

    #[test]
    fn test_minimum_receive_quote_scenario() {
        // Quote of 4.95049504 (e8) at 1% tolerance → 4.90099008 (e8)
        let quoted = Nat::from(495_049_504u64);
        let min = minimum_receive(&quoted, SlippageTolerance::OnePercent).unwrap();
        assert_eq!(min, Nat::from(490_099_008u64));
    }

    #[test]
    fn test_minimum_receive_zero_quote() {
        for tolerance in all_tolerances() {
            assert_eq!(
                minimum_receive(&Nat::from(0u64), tolerance).unwrap(),
                Nat::from(0u64)
            );
        }
    }

    #[test]
    fn test_below_minimum() {
        let min = Nat::from(95u64);
        assert!(below_minimum(&Nat::from(94u64), &min));
        assert!(!below_minimum(&Nat::from(95u64), &min));
        assert!(!below_minimum(&Nat::from(100u64), &min));
    }
}
