//! The two traded assets and the swap direction between them

use crate::infrastructure::constants::{
    NATIVE_DECIMALS, NATIVE_LEDGER_CANISTER_ID, NATIVE_SYMBOL, TOKEN_DECIMALS,
    TOKEN_LEDGER_CANISTER_ID, TOKEN_SYMBOL_FALLBACK,
};
use candid::{CandidType, Deserialize, Principal};
use serde::Serialize;

/// One of the two assets of the pair. Immutable per deployment.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Native,
    Token,
}

impl Asset {
    /// Ledger canister holding balances of this asset
    pub fn ledger_canister_id(&self) -> Result<Principal, String> {
        let text = match self {
            Asset::Native => NATIVE_LEDGER_CANISTER_ID,
            Asset::Token => TOKEN_LEDGER_CANISTER_ID,
        };
        Principal::from_text(text).map_err(|e| format!("Invalid ledger principal {}: {}", text, e))
    }

    pub fn decimals(&self) -> u32 {
        match self {
            Asset::Native => NATIVE_DECIMALS,
            Asset::Token => TOKEN_DECIMALS,
        }
    }

    /// Static symbol; the token's real symbol is read from its ledger and cached
    pub fn default_symbol(&self) -> &'static str {
        match self {
            Asset::Native => NATIVE_SYMBOL,
            Asset::Token => TOKEN_SYMBOL_FALLBACK,
        }
    }

    pub fn other(&self) -> Asset {
        match self {
            Asset::Native => Asset::Token,
            Asset::Token => Asset::Native,
        }
    }
}

/// Which asset is currently the input ("from") side.
/// Mutated only by the flip operation; exactly one asset is "from" at a time.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    NativeToToken,
    TokenToNative,
}

impl SwapDirection {
    pub fn input_asset(&self) -> Asset {
        match self {
            SwapDirection::NativeToToken => Asset::Native,
            SwapDirection::TokenToNative => Asset::Token,
        }
    }

    pub fn output_asset(&self) -> Asset {
        self.input_asset().other()
    }

    pub fn flipped(&self) -> SwapDirection {
        match self {
            SwapDirection::NativeToToken => SwapDirection::TokenToNative,
            SwapDirection::TokenToNative => SwapDirection::NativeToToken,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SwapDirection::NativeToToken => "native_to_token",
            SwapDirection::TokenToNative => "token_to_native",
        }
    }
}
