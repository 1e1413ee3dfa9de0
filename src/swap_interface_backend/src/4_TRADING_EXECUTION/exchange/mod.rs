//! # Exchange Canister Client
//!
//! Thin client over the deployed AMM canister. Three methods matter:
//! - `get_amount_of_tokens` - the contract's pure pricing function
//!   (input amount, input reserve, output reserve → output amount). The
//!   formula lives in the exchange; it is never recomputed locally.
//! - `swap_native_to_token` - single-transaction native-input swap; the
//!   native amount rides as the call argument.
//! - `swap_token_to_native` - token-input swap; the exchange pulls the
//!   tokens via a previously confirmed allowance.
//!
//! Neither swap method accepts a minimum-output parameter, so the slippage
//! bound computed upstream is advisory on this deployment.

use super::runtime::{IcRuntime, Runtime};
use crate::infrastructure::errors::{QuoteError, Result, SwapError, TradingError};
use crate::types::exchange::ExchangeSwapResult;
use crate::types::SwapDirection;
use candid::{Nat, Principal};

pub struct ExchangeClient<R: Runtime> {
    canister_id: Principal,
    runtime: R,
}

impl ExchangeClient<IcRuntime> {
    pub fn new(canister_id: Principal) -> Self {
        Self::with_runtime(canister_id, IcRuntime)
    }
}

impl<R: Runtime> ExchangeClient<R> {
    pub fn with_runtime(canister_id: Principal, runtime: R) -> Self {
        Self {
            canister_id,
            runtime,
        }
    }

    pub fn canister_id(&self) -> Principal {
        self.canister_id
    }

    /// Delegate to the exchange's pure pricing function
    pub async fn get_amount_of_tokens(
        &self,
        input_amount: Nat,
        input_reserve: Nat,
        output_reserve: Nat,
    ) -> Result<Nat> {
        let (amount,): (Nat,) = self
            .runtime
            .call(
                self.canister_id,
                "get_amount_of_tokens",
                (input_amount, input_reserve, output_reserve),
            )
            .await
            .map_err(|(code, msg)| {
                SwapError::Quote(QuoteError::QuoteUnavailable {
                    reason: format!("Call failed: {} - {}", code, msg),
                })
            })?;

        Ok(amount)
    }

    /// Submit the single-transaction native→token swap
    pub async fn swap_native_to_token(&self, native_amount: Nat) -> Result<Nat> {
        self.submit_swap(
            "swap_native_to_token",
            SwapDirection::NativeToToken,
            native_amount,
        )
        .await
    }

    /// Submit the token→native swap; requires a confirmed allowance first
    pub async fn swap_token_to_native(&self, tokens_sold: Nat) -> Result<Nat> {
        self.submit_swap(
            "swap_token_to_native",
            SwapDirection::TokenToNative,
            tokens_sold,
        )
        .await
    }

    async fn submit_swap(
        &self,
        method: &str,
        direction: SwapDirection,
        amount: Nat,
    ) -> Result<Nat> {
        let (result,): (ExchangeSwapResult,) = self
            .runtime
            .call(self.canister_id, method, (amount.clone(),))
            .await
            .map_err(|(code, msg)| {
                ic_cdk::println!("❌ {} call failed: {} - {}", method, code, msg);
                SwapError::Trading(TradingError::SwapFailed {
                    direction: direction.as_str().to_string(),
                    amount: amount.clone(),
                    reason: format!("Inter-canister call failed: {} - {}", code, msg),
                })
            })?;

        match result {
            ExchangeSwapResult::Ok(received) => Ok(received),
            ExchangeSwapResult::Err(e) => {
                ic_cdk::println!("❌ {} rejected by exchange: {}", method, e);
                Err(SwapError::Trading(TradingError::SwapFailed {
                    direction: direction.as_str().to_string(),
                    amount,
                    reason: e,
                }))
            }
        }
    }
}
