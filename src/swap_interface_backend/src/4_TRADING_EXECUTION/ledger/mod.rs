//! ICRC ledger client for the two asset ledgers
//!
//! Covers the three ledger interactions this backend needs: balance reads
//! (`icrc1_balance_of`), the token symbol (`icrc1_symbol`), and allowance
//! grants (`icrc2_approve`) ahead of token-input swaps.

use super::runtime::{IcRuntime, Runtime};
use crate::infrastructure::errors::{QueryError, Result, SwapError, TradingError};
use crate::types::icrc::{Account, ApproveArgs, ApproveResult};
use crate::types::Asset;
use candid::{Nat, Principal};

pub struct LedgerClient<R: Runtime> {
    asset: Asset,
    canister_id: Principal,
    runtime: R,
}

impl LedgerClient<IcRuntime> {
    pub fn new(asset: Asset) -> Result<Self> {
        let canister_id = asset
            .ledger_canister_id()
            .map_err(SwapError::Other)?;
        Ok(Self::with_runtime(asset, canister_id, IcRuntime))
    }
}

impl<R: Runtime> LedgerClient<R> {
    pub fn with_runtime(asset: Asset, canister_id: Principal, runtime: R) -> Self {
        Self {
            asset,
            canister_id,
            runtime,
        }
    }

    pub fn asset(&self) -> Asset {
        self.asset
    }

    /// Balance of `owner`'s default account on this ledger
    pub async fn balance_of(&self, owner: Principal) -> Result<Nat> {
        let account = Account {
            owner,
            subaccount: None,
        };

        let (balance,): (Nat,) = self
            .runtime
            .call(self.canister_id, "icrc1_balance_of", (account,))
            .await
            .map_err(|(code, msg)| {
                SwapError::Query(QueryError::CanisterUnreachable {
                    canister: self.canister_id.to_text(),
                    reason: format!("icrc1_balance_of failed: {} - {}", code, msg),
                })
            })?;

        Ok(balance)
    }

    /// The ledger's token symbol
    pub async fn symbol(&self) -> Result<String> {
        let (symbol,): (String,) = self
            .runtime
            .call(self.canister_id, "icrc1_symbol", ())
            .await
            .map_err(|(code, msg)| {
                SwapError::Query(QueryError::CanisterUnreachable {
                    canister: self.canister_id.to_text(),
                    reason: format!("icrc1_symbol failed: {} - {}", code, msg),
                })
            })?;

        Ok(symbol)
    }

    /// Call `icrc2_approve`, returning the approval block index
    pub async fn approve(&self, args: ApproveArgs) -> Result<Nat> {
        let amount = args.amount.clone();

        let (result,): (ApproveResult,) = self
            .runtime
            .call(self.canister_id, "icrc2_approve", (args,))
            .await
            .map_err(|(code, msg)| {
                ic_cdk::println!("❌ Approval call failed: {} - {}", code, msg);
                SwapError::Trading(TradingError::ApprovalFailed {
                    token: self.asset.default_symbol().to_string(),
                    amount: amount.to_string(),
                    reason: format!("Inter-canister call failed: {} - {}", code, msg),
                })
            })?;

        match result {
            ApproveResult::Ok(block_index) => Ok(block_index),
            ApproveResult::Err(err) => {
                ic_cdk::println!("❌ Approval rejected: {:?}", err);
                Err(SwapError::Trading(TradingError::ApprovalFailed {
                    token: self.asset.default_symbol().to_string(),
                    amount: amount.to_string(),
                    reason: format!("{:?}", err),
                }))
            }
        }
    }
}
