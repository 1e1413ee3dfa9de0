//! Trading Execution - clients and guards for the exchange interaction

pub mod approvals;
pub mod exchange;
pub mod ledger;
pub mod runtime;
pub mod slippage;

pub use exchange::ExchangeClient;
pub use ledger::LedgerClient;
pub use runtime::{IcRuntime, Runtime};
