//! Critical Data - reserves, balances and quotes
//! Source of truth for the market data the swap form renders

pub mod balances;
pub mod quotes;
pub mod reserves;

pub use balances::{get_wallet_balance, get_wallet_balances};
pub use quotes::{fresh_quote, refresh_quote};
pub use reserves::{get_poller_status, get_snapshot, refresh_reserve_snapshot, start_reserve_poller};
