//! # Reserve Snapshot Module
//!
//! Tracks the exchange canister's balances of both assets. The poller
//! refreshes the snapshot immediately at startup and then every
//! `RESERVE_POLL_INTERVAL_SECONDS`; each refresh is independent, so one
//! failed poll is logged and the next interval self-heals. Quotes always read
//! the latest snapshot; an in-flight swap neither blocks nor is blocked by a
//! refresh.

use crate::infrastructure::constants::{EXCHANGE_CANISTER_ID, RESERVE_POLL_INTERVAL_SECONDS};
use crate::infrastructure::errors::{Result, SwapError};
use crate::types::market::ReserveSnapshot;
use crate::types::Asset;
use crate::_4_TRADING_EXECUTION::{LedgerClient, Runtime};
use candid::{CandidType, Deserialize, Principal};
use serde::Serialize;
use std::cell::RefCell;
use std::time::Duration;

thread_local! {
    static RESERVES: RefCell<Option<ReserveSnapshot>> = RefCell::new(None);
    static POLLER_ACTIVE: RefCell<bool> = RefCell::new(false);
    static LAST_REFRESH: RefCell<Option<u64>> = RefCell::new(None);
}

/// Poller status for monitoring
#[derive(CandidType, Deserialize, Serialize, Debug, Clone)]
pub struct PollerStatus {
    pub timer_active: bool,
    pub last_refresh: Option<u64>,
    pub snapshot: Option<ReserveSnapshot>,
}

/// Latest snapshot, if any poll has succeeded yet
pub fn get_snapshot() -> Option<ReserveSnapshot> {
    RESERVES.with(|reserves| reserves.borrow().clone())
}

pub fn set_snapshot(snapshot: ReserveSnapshot) {
    LAST_REFRESH.with(|last| {
        *last.borrow_mut() = Some(snapshot.updated_at);
    });
    RESERVES.with(|reserves| {
        *reserves.borrow_mut() = Some(snapshot);
    });
}

pub fn set_poller_active(active: bool) {
    POLLER_ACTIVE.with(|flag| {
        *flag.borrow_mut() = active;
    });
}

pub fn get_poller_status() -> PollerStatus {
    PollerStatus {
        timer_active: POLLER_ACTIVE.with(|flag| *flag.borrow()),
        last_refresh: LAST_REFRESH.with(|last| *last.borrow()),
        snapshot: get_snapshot(),
    }
}

/// Refresh both reserve balances with one parallel query pair
///
/// Queries the two ledgers with `futures::join!` to minimize the time gap
/// between the two legs of the snapshot.
pub async fn refresh_reserve_snapshot<R: Runtime>(
    native_ledger: &LedgerClient<R>,
    token_ledger: &LedgerClient<R>,
    exchange: Principal,
    now: u64,
) -> Result<ReserveSnapshot> {
    let native_future = native_ledger.balance_of(exchange);
    let token_future = token_ledger.balance_of(exchange);

    let (native_result, token_result) = futures::join!(native_future, token_future);

    let snapshot = ReserveSnapshot {
        native_reserve: native_result?,
        token_reserve: token_result?,
        updated_at: now,
    };

    set_snapshot(snapshot.clone());
    Ok(snapshot)
}

/// Start the reserve poller
///
/// Called during canister init and post_upgrade. Fires one immediate refresh
/// and then one every `RESERVE_POLL_INTERVAL_SECONDS` for as long as the
/// canister runs. Ticks are independent of each other and of any in-flight
/// swap.
pub fn start_reserve_poller() {
    ic_cdk::println!(
        "🕐 Starting reserve poller ({}s interval)",
        RESERVE_POLL_INTERVAL_SECONDS
    );

    set_poller_active(true);

    ic_cdk_timers::set_timer(Duration::ZERO, || ic_cdk::spawn(poll_once()));
    ic_cdk_timers::set_timer_interval(
        Duration::from_secs(RESERVE_POLL_INTERVAL_SECONDS),
        || ic_cdk::spawn(poll_once()),
    );
}

/// One poll tick; a failure is logged, never surfaced, and the next tick
/// retries from scratch
async fn poll_once() {
    match poll_reserves().await {
        Ok(snapshot) => {
            ic_cdk::println!(
                "📊 Reserves refreshed: native={} token={}",
                snapshot.native_reserve,
                snapshot.token_reserve
            );
        }
        Err(e) => {
            ic_cdk::println!("⚠️ Reserve poll failed (next interval retries): {}", e);
        }
    }
}

async fn poll_reserves() -> Result<ReserveSnapshot> {
    let exchange = Principal::from_text(EXCHANGE_CANISTER_ID)
        .map_err(|e| SwapError::Other(format!("Invalid exchange principal: {}", e)))?;
    let native_ledger = LedgerClient::new(Asset::Native)?;
    let token_ledger = LedgerClient::new(Asset::Token)?;

    refresh_reserve_snapshot(&native_ledger, &token_ledger, exchange, ic_cdk::api::time()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use candid::Nat;

    #[test]
    fn test_snapshot_round_trip() {
        assert!(get_snapshot().is_none());

        let snapshot = ReserveSnapshot {
            native_reserve: Nat::from(100_000_000_000u64),
            token_reserve: Nat::from(50_000_000_000u64),
            updated_at: 1,
        };
        set_snapshot(snapshot.clone());

        assert_eq!(get_snapshot(), Some(snapshot));
        assert_eq!(get_poller_status().last_refresh, Some(1));
    }
}
