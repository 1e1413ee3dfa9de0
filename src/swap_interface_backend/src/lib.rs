//! Swap Interface Backend - Security-First Architecture with Numbered Zones
//!
//! Backend for a two-asset AMM swap form: one native currency, one token,
//! one external exchange canister holding the reserves.
//!
//! Architecture:
//! 1_CRITICAL_OPERATIONS - Swap orchestration (highest security)
//! 2_CRITICAL_DATA - Reserves, balances, quotes
//! 3_SESSION_STATE - Per-caller swap entry state
//! 4_TRADING_EXECUTION - Exchange and ledger interactions
//! 5_INFORMATIONAL - Display and caching
//! 6_INFRASTRUCTURE - Math, errors, constants

// Import numbered modules with explicit paths
#[path = "1_CRITICAL_OPERATIONS/mod.rs"]
mod critical_operations_1;
use critical_operations_1 as _1_CRITICAL_OPERATIONS;

#[path = "2_CRITICAL_DATA/mod.rs"]
mod critical_data_2;
use critical_data_2 as _2_CRITICAL_DATA;

#[path = "3_SESSION_STATE/mod.rs"]
mod session_state_3;
use session_state_3 as _3_SESSION_STATE;

#[path = "4_TRADING_EXECUTION/mod.rs"]
mod trading_execution_4;
use trading_execution_4 as _4_TRADING_EXECUTION;

#[path = "5_INFORMATIONAL/mod.rs"]
mod informational_5;
use informational_5 as _5_INFORMATIONAL;

#[path = "6_INFRASTRUCTURE/mod.rs"]
mod infrastructure_6;
use infrastructure_6 as infrastructure;

mod types;

use candid::{candid_method, Principal};
use ic_cdk::{init, post_upgrade, pre_upgrade, query, update};
use infrastructure::{Result, SwapError, SystemError};
use types::display::{BalanceView, SwapView};
use types::market::ReserveSnapshot;
use types::swap::{SwapReceipt, SwapRecord};
use types::{Asset, SlippageTolerance};
use _2_CRITICAL_DATA::reserves::PollerStatus;
use _4_TRADING_EXECUTION::{ExchangeClient, IcRuntime, LedgerClient};

// ===== CLIENT CONSTRUCTION =====

fn exchange_client() -> Result<ExchangeClient<IcRuntime>> {
    let principal = Principal::from_text(infrastructure::EXCHANGE_CANISTER_ID)
        .map_err(|e| SwapError::Other(format!("Invalid exchange principal: {}", e)))?;
    Ok(ExchangeClient::new(principal))
}

fn ledger_client(asset: Asset) -> Result<LedgerClient<IcRuntime>> {
    LedgerClient::new(asset)
}

// ===== PUBLIC API =====

/// Record a typed input amount and refresh the quoted output
#[update]
#[candid_method(update)]
async fn set_input_amount(value: String) -> Result<SwapView> {
    let caller = ic_cdk::caller();
    let ticket = _3_SESSION_STATE::session::set_input_amount(caller, &value)?;

    let exchange = exchange_client()?;
    _2_CRITICAL_DATA::quotes::refresh_quote(&exchange, caller, ticket).await?;

    Ok(_5_INFORMATIONAL::display::build_swap_view(caller))
}

/// Fill the input field with the caller's full balance of the input asset
#[update]
#[candid_method(update)]
async fn set_max_input() -> Result<SwapView> {
    let caller = ic_cdk::caller();
    let input_asset = _3_SESSION_STATE::session::get_session(caller)
        .direction
        .input_asset();

    let ledger = ledger_client(input_asset)?;
    let balance = _2_CRITICAL_DATA::balances::get_wallet_balance(&ledger, caller).await?;
    let value = infrastructure::format_display_amount(&balance, input_asset.decimals());

    let ticket = _3_SESSION_STATE::session::set_input_amount(caller, &value)?;

    let exchange = exchange_client()?;
    _2_CRITICAL_DATA::quotes::refresh_quote(&exchange, caller, ticket).await?;

    Ok(_5_INFORMATIONAL::display::build_swap_view(caller))
}

/// Swap which asset is the input side, then refresh the quote
#[update]
#[candid_method(update)]
async fn flip_direction() -> Result<SwapView> {
    let caller = ic_cdk::caller();
    let ticket = _3_SESSION_STATE::session::flip_direction(caller);

    let exchange = exchange_client()?;
    _2_CRITICAL_DATA::quotes::refresh_quote(&exchange, caller, ticket).await?;

    Ok(_5_INFORMATIONAL::display::build_swap_view(caller))
}

/// Select one of the fixed slippage tolerances
#[update]
#[candid_method(update)]
fn set_slippage_tolerance(tolerance: SlippageTolerance) -> SwapView {
    let caller = ic_cdk::caller();
    _3_SESSION_STATE::session::set_slippage(caller, tolerance);
    _5_INFORMATIONAL::display::build_swap_view(caller)
}

/// Current swap form state for the caller
#[query]
#[candid_method(query)]
fn get_swap_view() -> SwapView {
    _5_INFORMATIONAL::display::build_swap_view(ic_cdk::caller())
}

/// Execute the caller's current swap entry
#[update]
#[candid_method(update)]
async fn execute_swap() -> Result<SwapReceipt> {
    let caller = ic_cdk::caller();
    let now = ic_cdk::api::time();

    let exchange = exchange_client()?;
    let token_ledger = ledger_client(Asset::Token)?;

    _1_CRITICAL_OPERATIONS::swapping::execute_swap(caller, now, &exchange, &token_ledger).await
}

#[query]
#[candid_method(query)]
fn get_swap_status(request_id: String) -> Result<SwapRecord> {
    _1_CRITICAL_OPERATIONS::swapping::swap_state::get_swap_record(&request_id).ok_or(
        SwapError::System(SystemError::RequestNotFound { id: request_id }),
    )
}

/// Full swap history (bounded, most recent last)
#[query]
#[candid_method(query)]
fn get_swap_history() -> Vec<SwapRecord> {
    _1_CRITICAL_OPERATIONS::swapping::swap_state::get_full_history()
}

/// Paginated swap history
#[query]
#[candid_method(query)]
fn get_swap_history_paginated(offset: u64, limit: u64) -> (Vec<SwapRecord>, u64) {
    let full_history = _1_CRITICAL_OPERATIONS::swapping::swap_state::get_full_history();
    let total = full_history.len() as u64;

    let start = offset as usize;
    let end = std::cmp::min(start + (limit as usize), full_history.len());

    let page = if start < full_history.len() {
        full_history[start..end].to_vec()
    } else {
        Vec::new()
    };

    (page, total)
}

#[query]
#[candid_method(query)]
fn get_poller_status() -> PollerStatus {
    _2_CRITICAL_DATA::get_poller_status()
}

/// Force a reserve refresh outside the poller cadence
#[update]
#[candid_method(update)]
async fn refresh_reserves() -> Result<ReserveSnapshot> {
    let exchange = Principal::from_text(infrastructure::EXCHANGE_CANISTER_ID)
        .map_err(|e| SwapError::Other(format!("Invalid exchange principal: {}", e)))?;
    let native_ledger = ledger_client(Asset::Native)?;
    let token_ledger = ledger_client(Asset::Token)?;

    _2_CRITICAL_DATA::refresh_reserve_snapshot(
        &native_ledger,
        &token_ledger,
        exchange,
        ic_cdk::api::time(),
    )
    .await
}

/// The caller's own ledger balances, formatted for the form
#[update]
#[candid_method(update)]
async fn get_balances() -> Result<BalanceView> {
    let caller = ic_cdk::caller();
    let native_ledger = ledger_client(Asset::Native)?;
    let token_ledger = ledger_client(Asset::Token)?;

    _5_INFORMATIONAL::display::get_balance_view(&native_ledger, &token_ledger, caller).await
}

/// Token symbol as reported by its ledger (cached after the first read)
#[update]
#[candid_method(update)]
async fn get_token_symbol() -> Result<String> {
    let token_ledger = ledger_client(Asset::Token)?;
    _5_INFORMATIONAL::cache::token_symbol(&token_ledger).await
}

// ===== INITIALIZATION =====

#[init]
fn init() {
    ic_cdk::println!("===================================");
    ic_cdk::println!("Swap Interface Backend Initialized");
    ic_cdk::println!("Architecture: Numbered Security Zones");
    ic_cdk::println!("===================================");

    _2_CRITICAL_DATA::start_reserve_poller();

    start_record_cleanup_timer();
}

#[pre_upgrade]
fn pre_upgrade() {
    ic_cdk::println!("===================================");
    ic_cdk::println!("Swap Interface Backend Pre-Upgrade");
    ic_cdk::println!("===================================");

    let (records, history) = _1_CRITICAL_OPERATIONS::swapping::swap_state::export_state();
    infrastructure::stable_storage::save_state(records, history);
}

#[post_upgrade]
fn post_upgrade() {
    ic_cdk::println!("===================================");
    ic_cdk::println!("Swap Interface Backend Post-Upgrade");
    ic_cdk::println!("===================================");

    let (records, history) = infrastructure::stable_storage::restore_state();
    let restored = history.len();
    _1_CRITICAL_OPERATIONS::swapping::swap_state::import_state(records, history);

    let removed = _1_CRITICAL_OPERATIONS::swapping::swap_state::cleanup_expired_records(
        ic_cdk::api::time(),
    );
    if removed > 0 {
        ic_cdk::println!("🧹 Cleaned up {} expired swap records after upgrade", removed);
    }

    _2_CRITICAL_DATA::start_reserve_poller();
    start_record_cleanup_timer();

    ic_cdk::println!(
        "✅ Backend upgraded successfully ({} history entries restored)",
        restored
    );
}

// ===== HELPER FUNCTIONS =====

/// Hourly cleanup of aged terminal swap records to prevent unbounded growth
fn start_record_cleanup_timer() {
    ic_cdk_timers::set_timer_interval(
        std::time::Duration::from_secs(infrastructure::RECORD_CLEANUP_INTERVAL_SECONDS),
        || {
            let removed = _1_CRITICAL_OPERATIONS::swapping::swap_state::cleanup_expired_records(
                ic_cdk::api::time(),
            );
            if removed > 0 {
                ic_cdk::println!("🧹 Periodic cleanup: removed {} expired swap records", removed);
            }
        },
    );
}

// ===== CANDID EXPORT =====

ic_cdk::export_candid!();
