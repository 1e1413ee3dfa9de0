//! Per-caller swap session state
//!
//! The session is the client-side half of the swap: which asset is the input,
//! the two typed/derived amount strings, and the selected slippage tolerance.
//! The output amount is always derived from the input via the quote client,
//! never entered directly. `quote_seq` implements last-write-wins quoting:
//! every edit bumps it, and a quote response carrying a stale sequence is
//! discarded regardless of arrival order.

use super::assets::SwapDirection;
use candid::{CandidType, Deserialize, Nat};
use serde::Serialize;

/// Fixed set of accepted slippage tolerances, applied identically to both
/// swap directions.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlippageTolerance {
    HalfPercent,
    OnePercent,
    TwoPercent,
    FivePercent,
}

impl SlippageTolerance {
    /// Exact fraction as basis points (denominator 10 000); no floating point
    /// ever touches an on-chain quantity.
    pub fn basis_points(&self) -> u64 {
        match self {
            SlippageTolerance::HalfPercent => 50,
            SlippageTolerance::OnePercent => 100,
            SlippageTolerance::TwoPercent => 200,
            SlippageTolerance::FivePercent => 500,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlippageTolerance::HalfPercent => "0.5%",
            SlippageTolerance::OnePercent => "1%",
            SlippageTolerance::TwoPercent => "2%",
            SlippageTolerance::FivePercent => "5%",
        }
    }
}

impl Default for SlippageTolerance {
    fn default() -> Self {
        SlippageTolerance::HalfPercent
    }
}

/// One caller's swap-entry state
#[derive(Debug, Clone)]
pub struct SwapSession {
    pub direction: SwapDirection,
    /// Typed by the user, display units of the input asset
    pub input_amount: String,
    /// Derived from the latest applied quote, display units of the output asset
    pub output_amount: String,
    pub slippage: SlippageTolerance,
    /// Bumped on every edit/flip; quotes tagged with an older value are stale
    pub quote_seq: u64,
    /// Base units of `output_amount` when a quote has been applied
    pub quoted_output: Option<Nat>,
}

impl Default for SwapSession {
    fn default() -> Self {
        Self {
            direction: SwapDirection::NativeToToken,
            input_amount: "0".to_string(),
            output_amount: "0".to_string(),
            slippage: SlippageTolerance::default(),
            quote_seq: 0,
            quoted_output: None,
        }
    }
}

/// Snapshot handed to the quote client when an edit happens. Applying the
/// response requires the sequence (and direction) to still match.
#[derive(Debug, Clone)]
pub struct QuoteTicket {
    pub seq: u64,
    pub direction: SwapDirection,
    pub input_value: String,
}
