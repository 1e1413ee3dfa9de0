//! View types handed back to the UI

use super::assets::SwapDirection;
use super::market::ReserveSnapshot;
use super::session::SlippageTolerance;
use candid::{CandidType, Deserialize, Nat};
use serde::Serialize;

/// Everything the swap form needs to render one caller's state
#[derive(CandidType, Deserialize, Serialize, Debug, Clone)]
pub struct SwapView {
    pub direction: SwapDirection,
    /// Amount strings keyed per asset, not per side; which one is the input
    /// field follows from `direction`
    pub native_amount: String,
    pub token_amount: String,
    pub native_symbol: String,
    pub token_symbol: String,
    pub slippage_tolerance: SlippageTolerance,
    /// input/output rate at display precision; None while unknown
    pub effective_price: Option<String>,
    /// Advisory minimum acceptable output in base units of the output asset
    pub min_receive: Option<Nat>,
    pub min_receive_display: Option<String>,
    /// Always false on this deployment: the exchange interface has no
    /// minimum-output parameter, so the bound is informational only
    pub slippage_enforced_on_chain: bool,
    pub busy: bool,
    pub account_connected: bool,
    pub reserves: Option<ReserveSnapshot>,
}

/// The caller's own ledger balances, truncated for display
#[derive(CandidType, Deserialize, Serialize, Debug, Clone)]
pub struct BalanceView {
    pub native_balance: String,
    pub token_balance: String,
    pub native_symbol: String,
    pub token_symbol: String,
}
