//! Display module - swap form state formatting for UI
//!
//! Assembles the SwapView from session, reserves and guard state, and owns
//! the presentational helpers: effective price at fixed precision and the
//! balance truncation the form uses.

use super::cache;
use crate::infrastructure::constants::{
    BALANCE_DISPLAY_MAX_CHARS, NATIVE_SYMBOL, PRICE_DISPLAY_DECIMALS,
};
use crate::infrastructure::errors::Result;
use crate::infrastructure::math::format_display_amount;
use crate::infrastructure::reentrancy;
use crate::types::display::{BalanceView, SwapView};
use crate::types::{Asset, SwapDirection};
use crate::_2_CRITICAL_DATA::{balances, reserves};
use crate::_4_TRADING_EXECUTION::{slippage, LedgerClient, Runtime};
use candid::Principal;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Build the caller's current swap view
///
/// Pure assembly over already-held state - no inter-canister calls, so the
/// endpoint can stay a query.
pub fn build_swap_view(caller: Principal) -> SwapView {
    let session = crate::_3_SESSION_STATE::session::get_session(caller);

    let (native_amount, token_amount) = match session.direction {
        SwapDirection::NativeToToken => {
            (session.input_amount.clone(), session.output_amount.clone())
        }
        SwapDirection::TokenToNative => {
            (session.output_amount.clone(), session.input_amount.clone())
        }
    };

    let min_receive = session
        .quoted_output
        .as_ref()
        .and_then(|quoted| slippage::minimum_receive(quoted, session.slippage).ok());
    let min_receive_display = min_receive.as_ref().map(|min| {
        format_display_amount(min, session.direction.output_asset().decimals())
    });

    SwapView {
        direction: session.direction,
        native_amount,
        token_amount,
        native_symbol: NATIVE_SYMBOL.to_string(),
        token_symbol: cache::cached_token_symbol()
            .unwrap_or_else(|| Asset::Token.default_symbol().to_string()),
        slippage_tolerance: session.slippage,
        effective_price: effective_price(&session.input_amount, &session.output_amount),
        min_receive,
        min_receive_display,
        // The exchange interface has no minimum-output parameter; the bound
        // above is advisory and the UI must say so
        slippage_enforced_on_chain: false,
        busy: reentrancy::is_swapping(caller),
        account_connected: caller != Principal::anonymous(),
        reserves: reserves::get_snapshot(),
    }
}

/// input/output rate at display precision; None while either side is zero,
/// absent or unparsable (no meaningless rate before a quote, no division by
/// zero)
pub fn effective_price(input_amount: &str, output_amount: &str) -> Option<String> {
    let input = Decimal::from_str(input_amount.trim()).ok()?;
    let output = Decimal::from_str(output_amount.trim()).ok()?;

    if input.is_zero() || output.is_zero() || input.is_sign_negative() || output.is_sign_negative()
    {
        return None;
    }

    let price = (input / output).round_dp(PRICE_DISPLAY_DECIMALS);
    Some(price.normalize().to_string())
}

/// Clip a balance string for the compact form display
pub fn truncate_balance(value: &str) -> String {
    if value.len() > BALANCE_DISPLAY_MAX_CHARS {
        value[..BALANCE_DISPLAY_MAX_CHARS].to_string()
    } else {
        value.to_string()
    }
}

/// The caller's own balances, formatted and truncated for the form
pub async fn get_balance_view<R: Runtime>(
    native_ledger: &LedgerClient<R>,
    token_ledger: &LedgerClient<R>,
    caller: Principal,
) -> Result<BalanceView> {
    let (native, token) =
        balances::get_wallet_balances(native_ledger, token_ledger, caller).await?;

    Ok(BalanceView {
        native_balance: truncate_balance(&format_display_amount(
            &native,
            Asset::Native.decimals(),
        )),
        token_balance: truncate_balance(&format_display_amount(&token, Asset::Token.decimals())),
        native_symbol: NATIVE_SYMBOL.to_string(),
        token_symbol: cache::cached_token_symbol()
            .unwrap_or_else(|| Asset::Token.default_symbol().to_string()),
    })
}
