//! Orchestrator sequencing tests
//!
//! Run against a recording fake runtime shared by the exchange and ledger
//! clients, so the interleaved call order across both canisters is asserted
//! exactly: approval before swap, abort on approval failure, zero calls
//! without a connected account.

use super::swap_state;
use super::*;
use crate::infrastructure::errors::{SessionError, SwapError, SystemError};
use crate::types::exchange::ExchangeSwapResult;
use crate::types::icrc::{ApproveError, ApproveResult};
use crate::types::market::ReserveSnapshot;
use crate::types::{Asset, SlippageTolerance};
use crate::_2_CRITICAL_DATA::reserves;
use crate::_4_TRADING_EXECUTION::runtime::testing::MockRuntime;
use futures::executor::block_on;

const NOW: u64 = 1_700_000_000_000_000_000;

fn exchange_id() -> Principal {
    Principal::from_slice(&[0xE, 0xE])
}

fn token_ledger_id() -> Principal {
    Principal::from_slice(&[0x7, 0x7])
}

fn clients(
    runtime: &MockRuntime,
) -> (ExchangeClient<MockRuntime>, LedgerClient<MockRuntime>) {
    (
        ExchangeClient::with_runtime(exchange_id(), runtime.clone()),
        LedgerClient::with_runtime(Asset::Token, token_ledger_id(), runtime.clone()),
    )
}

fn seed_reserves() {
    // 1000 native / 500 token, e8 base units
    reserves::set_snapshot(ReserveSnapshot {
        native_reserve: Nat::from(100_000_000_000u64),
        token_reserve: Nat::from(50_000_000_000u64),
        updated_at: NOW,
    });
}

#[test]
fn test_no_account_issues_zero_network_calls() {
    let runtime = MockRuntime::new();
    let (exchange, token_ledger) = clients(&runtime);

    let result = block_on(execute_swap(
        Principal::anonymous(),
        NOW,
        &exchange,
        &token_ledger,
    ));

    assert_eq!(result, Err(SwapError::Session(SessionError::NoAccount)));
    assert!(runtime.calls().is_empty());
}

#[test]
fn test_native_to_token_is_a_single_transaction() {
    let caller = Principal::from_slice(&[1]);
    seed_reserves();
    session::set_input_amount(caller, "10").unwrap();

    let runtime = MockRuntime::new();
    // Constant-product output for 10 native against 1000/500 reserves
    runtime.push_ok("get_amount_of_tokens", Nat::from(495_049_504u64));
    runtime.push_ok(
        "swap_native_to_token",
        ExchangeSwapResult::Ok(Nat::from(495_049_504u64)),
    );

    let (exchange, token_ledger) = clients(&runtime);
    let receipt = block_on(execute_swap(caller, NOW, &exchange, &token_ledger)).unwrap();

    assert_eq!(
        runtime.called_methods(),
        vec!["get_amount_of_tokens", "swap_native_to_token"]
    );
    assert_eq!(receipt.pay_amount, Nat::from(1_000_000_000u64));
    assert_eq!(receipt.receive_amount, Nat::from(495_049_504u64));
    // 0.5% default tolerance
    assert_eq!(receipt.min_receive, Nat::from(492_574_256u64));
    assert!(!receipt.below_minimum);

    let record = swap_state::get_swap_record(&receipt.request_id).unwrap();
    assert!(matches!(record.status, SwapStatus::Settled { .. }));

    // Entry fields reset so no stale quote survives settlement
    let after = session::get_session(caller);
    assert_eq!(after.input_amount, "0");
    assert_eq!(after.output_amount, "0");
}

#[test]
fn test_token_to_native_approves_before_swapping() {
    let caller = Principal::from_slice(&[2]);
    seed_reserves();
    session::flip_direction(caller);
    session::set_input_amount(caller, "10").unwrap();

    let runtime = MockRuntime::new();
    runtime.push_ok("get_amount_of_tokens", Nat::from(1_960_784_313u64));
    runtime.push_ok("icrc2_approve", ApproveResult::Ok(Nat::from(42u64)));
    runtime.push_ok(
        "swap_token_to_native",
        ExchangeSwapResult::Ok(Nat::from(1_960_784_313u64)),
    );

    let (exchange, token_ledger) = clients(&runtime);
    let receipt = block_on(execute_swap(caller, NOW, &exchange, &token_ledger)).unwrap();

    // The approval MUST confirm before the swap is submitted
    assert_eq!(
        runtime.called_methods(),
        vec!["get_amount_of_tokens", "icrc2_approve", "swap_token_to_native"]
    );
    // ...and each call went to the right canister
    let calls = runtime.calls();
    assert_eq!(calls[0].0, exchange_id());
    assert_eq!(calls[1].0, token_ledger_id());
    assert_eq!(calls[2].0, exchange_id());

    assert_eq!(receipt.direction, SwapDirection::TokenToNative);
    assert!(!receipt.below_minimum);
}

#[test]
fn test_approval_failure_aborts_without_swapping() {
    let caller = Principal::from_slice(&[3]);
    seed_reserves();
    session::flip_direction(caller);
    session::set_input_amount(caller, "10").unwrap();

    let runtime = MockRuntime::new();
    runtime.push_ok("get_amount_of_tokens", Nat::from(1_960_784_313u64));
    runtime.push_ok(
        "icrc2_approve",
        ApproveResult::Err(ApproveError::InsufficientFunds {
            balance: Nat::from(0u64),
        }),
    );

    let (exchange, token_ledger) = clients(&runtime);
    let result = block_on(execute_swap(caller, NOW, &exchange, &token_ledger));

    assert!(matches!(
        result,
        Err(SwapError::Trading(TradingError::ApprovalFailed { .. }))
    ));
    // No swap transaction was ever issued
    assert_eq!(
        runtime.called_methods(),
        vec!["get_amount_of_tokens", "icrc2_approve"]
    );

    let history = swap_state::get_full_history();
    let failed = history.last().unwrap();
    assert!(matches!(&failed.status, SwapStatus::Failed { reason } if reason.starts_with("Approval failed")));
}

#[test]
fn test_swap_failure_after_approval_preserves_reason() {
    // NB: single byte 0x04 is the reserved anonymous principal, which
    // execute_swap rejects before the swap path; use a non-anonymous seed.
    let caller = Principal::from_slice(&[4, 4]);
    seed_reserves();
    session::flip_direction(caller);
    session::set_input_amount(caller, "10").unwrap();

    let runtime = MockRuntime::new();
    runtime.push_ok("get_amount_of_tokens", Nat::from(1_960_784_313u64));
    runtime.push_ok("icrc2_approve", ApproveResult::Ok(Nat::from(42u64)));
    runtime.push_ok(
        "swap_token_to_native",
        ExchangeSwapResult::Err("reserve drained".to_string()),
    );

    let (exchange, token_ledger) = clients(&runtime);
    let result = block_on(execute_swap(caller, NOW, &exchange, &token_ledger));

    match result {
        Err(SwapError::Trading(TradingError::SwapFailed { reason, .. })) => {
            assert_eq!(reason, "reserve drained");
        }
        other => panic!("expected SwapFailed, got {:?}", other),
    }

    let failed = swap_state::get_full_history().pop().unwrap();
    assert!(
        matches!(&failed.status, SwapStatus::Failed { reason } if reason.contains("after approval"))
    );
}

#[test]
fn test_below_minimum_is_surfaced_not_hidden() {
    let caller = Principal::from_slice(&[5]);
    seed_reserves();
    session::set_input_amount(caller, "10").unwrap();
    session::set_slippage(caller, SlippageTolerance::OnePercent);

    let runtime = MockRuntime::new();
    runtime.push_ok("get_amount_of_tokens", Nat::from(495_049_504u64));
    // Settles under the 1% advisory bound of 490_099_008
    runtime.push_ok(
        "swap_native_to_token",
        ExchangeSwapResult::Ok(Nat::from(480_000_000u64)),
    );

    let (exchange, token_ledger) = clients(&runtime);
    let receipt = block_on(execute_swap(caller, NOW, &exchange, &token_ledger)).unwrap();

    assert_eq!(receipt.min_receive, Nat::from(490_099_008u64));
    assert!(receipt.below_minimum);
    // The swap still settled; below-minimum is advisory on this deployment
    let record = swap_state::get_swap_record(&receipt.request_id).unwrap();
    assert!(matches!(record.status, SwapStatus::Settled { .. }));
}

#[test]
fn test_zero_input_is_rejected_before_any_call() {
    let caller = Principal::from_slice(&[6]);
    seed_reserves();

    let runtime = MockRuntime::new();
    let (exchange, token_ledger) = clients(&runtime);
    let result = block_on(execute_swap(caller, NOW, &exchange, &token_ledger));

    assert!(matches!(
        result,
        Err(SwapError::Trading(TradingError::InvalidSwapAmount { .. }))
    ));
    assert!(runtime.calls().is_empty());
}

#[test]
fn test_busy_caller_cannot_submit_twice() {
    let caller = Principal::from_slice(&[8]);
    seed_reserves();
    session::set_input_amount(caller, "1").unwrap();

    let _held = SwapGuard::acquire(caller).unwrap();

    let runtime = MockRuntime::new();
    let (exchange, token_ledger) = clients(&runtime);
    let result = block_on(execute_swap(caller, NOW, &exchange, &token_ledger));

    assert!(matches!(
        result,
        Err(SwapError::System(SystemError::OperationInProgress { .. }))
    ));
    assert!(runtime.calls().is_empty());
}

#[test]
fn test_missing_reserves_fail_before_submitting() {
    let caller = Principal::from_slice(&[10]);
    // No seed_reserves(): this thread has no snapshot
    session::set_input_amount(caller, "1").unwrap();

    let runtime = MockRuntime::new();
    let (exchange, token_ledger) = clients(&runtime);
    let result = block_on(execute_swap(caller, NOW, &exchange, &token_ledger));

    assert!(matches!(result, Err(SwapError::Quote(_))));
    assert!(runtime.calls().is_empty());
}
