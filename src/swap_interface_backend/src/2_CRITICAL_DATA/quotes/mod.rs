//! # Quote Client Module
//!
//! Obtains the quoted output amount for the current input by delegating to
//! the exchange's pure pricing function. The formula itself lives in the
//! exchange canister and is never recomputed here - this module only orients
//! the reserves by direction and forwards the three inputs.
//!
//! ## Failure behavior
//! A failed read never surfaces stale data: the session's output side is set
//! to a neutral zero and the next edit retries naturally.
//!
//! ## Recency
//! `refresh_quote` carries the session's quote ticket; the response is
//! applied only if the ticket still matches the latest edit (last-write-wins
//! by edit recency, not by response arrival order).

use super::reserves;
use crate::infrastructure::errors::{QuoteError, Result, SwapError};
use crate::infrastructure::math::parse_display_amount;
use crate::types::session::QuoteTicket;
use crate::types::SwapDirection;
use crate::_3_SESSION_STATE::session;
use crate::_4_TRADING_EXECUTION::{ExchangeClient, Runtime};
use candid::{Nat, Principal};

/// Quote an input amount against the latest reserve snapshot
///
/// Errors when no snapshot exists yet or the exchange read fails; callers
/// decide whether that is neutral (display path) or fatal (submit path).
pub async fn fresh_quote<R: Runtime>(
    exchange: &ExchangeClient<R>,
    direction: SwapDirection,
    input_amount: &Nat,
) -> Result<Nat> {
    let snapshot = reserves::get_snapshot().ok_or_else(|| {
        SwapError::Quote(QuoteError::ReservesUnavailable {
            reason: "No reserve snapshot yet".to_string(),
        })
    })?;

    let (input_reserve, output_reserve) = match direction {
        SwapDirection::NativeToToken => (snapshot.native_reserve, snapshot.token_reserve),
        SwapDirection::TokenToNative => (snapshot.token_reserve, snapshot.native_reserve),
    };

    exchange
        .get_amount_of_tokens(input_amount.clone(), input_reserve, output_reserve)
        .await
}

/// Recompute the session's displayed output for an edit
///
/// Zero input short-circuits to a zero output without touching the exchange.
/// Read failures apply the neutral default instead of propagating, so an
/// amount edit never fails just because the quote did.
pub async fn refresh_quote<R: Runtime>(
    exchange: &ExchangeClient<R>,
    caller: Principal,
    ticket: QuoteTicket,
) -> Result<()> {
    let input_amount = parse_display_amount(
        &ticket.input_value,
        ticket.direction.input_asset().decimals(),
    )?;

    if input_amount == Nat::from(0u64) {
        session::apply_quote(caller, ticket.seq, ticket.direction, Nat::from(0u64));
        return Ok(());
    }

    match fresh_quote(exchange, ticket.direction, &input_amount).await {
        Ok(output) => {
            session::apply_quote(caller, ticket.seq, ticket.direction, output);
        }
        Err(e) => {
            ic_cdk::println!("⚠️ Quote refresh failed: {}", e);
            session::quote_unavailable(caller, ticket.seq);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::market::ReserveSnapshot;
    use crate::_4_TRADING_EXECUTION::runtime::testing::MockRuntime;
    use futures::executor::block_on;

    fn exchange(runtime: &MockRuntime) -> ExchangeClient<MockRuntime> {
        ExchangeClient::with_runtime(Principal::from_slice(&[0xE, 0xE]), runtime.clone())
    }

    fn seed_reserves() {
        reserves::set_snapshot(ReserveSnapshot {
            native_reserve: Nat::from(100_000_000_000u64),
            token_reserve: Nat::from(50_000_000_000u64),
            updated_at: 0,
        });
    }

    #[test]
    fn test_refresh_applies_formatted_output() {
        let caller = Principal::from_slice(&[31]);
        seed_reserves();
        let ticket = session::set_input_amount(caller, "10").unwrap();

        let runtime = MockRuntime::new();
        runtime.push_ok("get_amount_of_tokens", Nat::from(495_049_504u64));

        block_on(refresh_quote(&exchange(&runtime), caller, ticket)).unwrap();

        let after = session::get_session(caller);
        assert_eq!(after.output_amount, "4.95049504");
        assert_eq!(after.quoted_output, Some(Nat::from(495_049_504u64)));
    }

    #[test]
    fn test_failed_read_renders_neutral_zero_not_stale_data() {
        let caller = Principal::from_slice(&[32]);
        seed_reserves();

        // A previous quote is on screen
        let ticket = session::set_input_amount(caller, "10").unwrap();
        let runtime = MockRuntime::new();
        runtime.push_ok("get_amount_of_tokens", Nat::from(495_049_504u64));
        block_on(refresh_quote(&exchange(&runtime), caller, ticket)).unwrap();

        // The next edit's quote read fails
        let ticket = session::set_input_amount(caller, "20").unwrap();
        let runtime = MockRuntime::new();
        runtime.push_reject("get_amount_of_tokens", 2, "no route to canister");
        block_on(refresh_quote(&exchange(&runtime), caller, ticket)).unwrap();

        let after = session::get_session(caller);
        assert_eq!(after.output_amount, "0");
        assert_eq!(after.quoted_output, None);
    }

    #[test]
    fn test_zero_input_quotes_zero_without_calling_the_exchange() {
        let caller = Principal::from_slice(&[33]);
        seed_reserves();
        let ticket = session::set_input_amount(caller, "0").unwrap();

        let runtime = MockRuntime::new();
        block_on(refresh_quote(&exchange(&runtime), caller, ticket)).unwrap();

        assert!(runtime.calls().is_empty());
        assert_eq!(session::get_session(caller).output_amount, "0");
    }

    #[test]
    fn test_missing_snapshot_is_neutral_for_edits() {
        let caller = Principal::from_slice(&[34]);
        // No snapshot on this thread
        let ticket = session::set_input_amount(caller, "10").unwrap();

        let runtime = MockRuntime::new();
        block_on(refresh_quote(&exchange(&runtime), caller, ticket)).unwrap();

        assert!(runtime.calls().is_empty());
        assert_eq!(session::get_session(caller).output_amount, "0");
    }
}
