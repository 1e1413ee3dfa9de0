//! Caller wallet balance queries
//! These are the caller's own ledger balances (used for the max-fill action
//! and the balance display), not the exchange's reserves.

use crate::infrastructure::errors::Result;
use crate::_4_TRADING_EXECUTION::{LedgerClient, Runtime};
use candid::{Nat, Principal};

/// Balance of one asset for the caller
pub async fn get_wallet_balance<R: Runtime>(
    ledger: &LedgerClient<R>,
    owner: Principal,
) -> Result<Nat> {
    ledger.balance_of(owner).await
}

/// Both balances with one parallel query pair
pub async fn get_wallet_balances<R: Runtime>(
    native_ledger: &LedgerClient<R>,
    token_ledger: &LedgerClient<R>,
    owner: Principal,
) -> Result<(Nat, Nat)> {
    let native_future = native_ledger.balance_of(owner);
    let token_future = token_ledger.balance_of(owner);

    let (native_result, token_result) = futures::join!(native_future, token_future);

    Ok((native_result?, token_result?))
}
