//! # Swap Session Module
//!
//! Holds each caller's swap-entry state: which asset is the input side, the
//! two amount fields, and the selected slippage tolerance.
//!
//! ## Invariants
//! - Exactly one asset is the input ("from") side at any time; only the flip
//!   operation changes it
//! - The output field is derived from quotes, never typed by the user
//! - Flipping swaps the input/output values atomically with the direction -
//!   there is no intermediate state where one side still shows the old
//!   direction's value
//! - Quotes apply last-write-wins by edit recency: each edit bumps
//!   `quote_seq`, and a response carrying an older sequence (or a direction
//!   that has since flipped) is discarded no matter when it arrives
//!
//! Session state is per caller and in-memory only; it is entry state, not
//! financial state, and resets on upgrade.

use crate::infrastructure::errors::Result;
use crate::infrastructure::math::{format_display_amount, parse_display_amount};
use crate::types::session::QuoteTicket;
use crate::types::{SlippageTolerance, SwapDirection, SwapSession};
use candid::{Nat, Principal};
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static SESSIONS: RefCell<HashMap<Principal, SwapSession>> = RefCell::new(HashMap::new());
}

fn with_session_mut<T>(caller: Principal, f: impl FnOnce(&mut SwapSession) -> T) -> T {
    SESSIONS.with(|sessions| {
        let mut sessions = sessions.borrow_mut();
        f(sessions.entry(caller).or_default())
    })
}

/// Current session (a fresh default if the caller has none yet)
pub fn get_session(caller: Principal) -> SwapSession {
    SESSIONS.with(|sessions| {
        sessions
            .borrow()
            .get(&caller)
            .cloned()
            .unwrap_or_default()
    })
}

/// Record a newly typed input amount on the active side
///
/// Validates that the string parses as a non-negative decimal before storing
/// it. The previously quoted output is invalidated and the quote sequence
/// advances; the returned ticket is what the quote client must present to
/// apply its response.
pub fn set_input_amount(caller: Principal, value: &str) -> Result<QuoteTicket> {
    let direction = get_session(caller).direction;
    parse_display_amount(value, direction.input_asset().decimals())?;

    Ok(with_session_mut(caller, |session| {
        session.input_amount = value.trim().to_string();
        session.quoted_output = None;
        session.quote_seq += 1;
        QuoteTicket {
            seq: session.quote_seq,
            direction: session.direction,
            input_value: session.input_amount.clone(),
        }
    }))
}

/// Flip which asset is the input side
///
/// Swaps the two amount values together with the direction, so the
/// previously quoted output becomes the new input's displayed value until
/// the next quote arrives. Flipping twice restores both direction and
/// amounts.
pub fn flip_direction(caller: Principal) -> QuoteTicket {
    with_session_mut(caller, |session| {
        session.direction = session.direction.flipped();
        std::mem::swap(&mut session.input_amount, &mut session.output_amount);
        session.quoted_output = None;
        session.quote_seq += 1;
        QuoteTicket {
            seq: session.quote_seq,
            direction: session.direction,
            input_value: session.input_amount.clone(),
        }
    })
}

/// Select a slippage tolerance; applies identically to both directions
pub fn set_slippage(caller: Principal, tolerance: SlippageTolerance) {
    with_session_mut(caller, |session| {
        session.slippage = tolerance;
    });
}

/// Apply a quote response if it still matches the session's latest edit
///
/// Returns false (and changes nothing) when the sequence is stale or the
/// direction flipped while the quote was in flight.
pub fn apply_quote(
    caller: Principal,
    seq: u64,
    direction: SwapDirection,
    output: Nat,
) -> bool {
    with_session_mut(caller, |session| {
        if session.quote_seq != seq || session.direction != direction {
            ic_cdk::println!(
                "⚠️ Discarding stale quote for {} (seq {} vs {})",
                caller.to_text(),
                seq,
                session.quote_seq
            );
            return false;
        }
        session.output_amount =
            format_display_amount(&output, direction.output_asset().decimals());
        session.quoted_output = Some(output);
        true
    })
}

/// Mark the quote for an edit as unavailable: the output side renders a
/// neutral zero rather than stale data
pub fn quote_unavailable(caller: Principal, seq: u64) {
    with_session_mut(caller, |session| {
        if session.quote_seq == seq {
            session.output_amount = "0".to_string();
            session.quoted_output = None;
        }
    });
}

/// Reset the amount fields after a settled swap so no stale quote survives
pub fn clear_amounts(caller: Principal) {
    with_session_mut(caller, |session| {
        session.input_amount = "0".to_string();
        session.output_amount = "0".to_string();
        session.quoted_output = None;
        session.quote_seq += 1;
    });
}
