//! Token symbol cache
//! The symbol never changes for a deployed ledger, so one read is enough.

use crate::infrastructure::errors::Result;
use crate::_4_TRADING_EXECUTION::{LedgerClient, Runtime};
use std::cell::RefCell;

thread_local! {
    static TOKEN_SYMBOL: RefCell<Option<String>> = RefCell::new(None);
}

pub fn cached_token_symbol() -> Option<String> {
    TOKEN_SYMBOL.with(|symbol| symbol.borrow().clone())
}

/// Cached symbol, read from the ledger on first use
pub async fn token_symbol<R: Runtime>(token_ledger: &LedgerClient<R>) -> Result<String> {
    if let Some(symbol) = cached_token_symbol() {
        return Ok(symbol);
    }

    let symbol = token_ledger.symbol().await?;
    TOKEN_SYMBOL.with(|cell| {
        *cell.borrow_mut() = Some(symbol.clone());
    });
    Ok(symbol)
}
