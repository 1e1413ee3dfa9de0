//! Deployment constants - canister ids, units, intervals

/// Exchange (AMM) canister holding the two reserves
pub const EXCHANGE_CANISTER_ID: &str = "xevnm-gaaaa-aaaar-qafnq-cai";

/// Ledger of the chain's native currency
pub const NATIVE_LEDGER_CANISTER_ID: &str = "ryjl3-tyaaa-aaaaa-aaaba-cai";

/// Ledger of the traded token
pub const TOKEN_LEDGER_CANISTER_ID: &str = "mxzaz-hqaaa-aaaar-qaada-cai";

pub const NATIVE_SYMBOL: &str = "ICP";

/// Shown until the token ledger's `icrc1_symbol` has been read and cached
pub const TOKEN_SYMBOL_FALLBACK: &str = "TOKEN";

/// Both assets use e8 base units
pub const NATIVE_DECIMALS: u32 = 8;
pub const TOKEN_DECIMALS: u32 = 8;

/// Reserve snapshot refresh interval (fires immediately, then on this cadence)
pub const RESERVE_POLL_INTERVAL_SECONDS: u64 = 10;

/// Slippage tolerances are exact basis-point fractions of this denominator
pub const BASIS_POINT_DENOMINATOR: u64 = 10_000;

/// Decimal places shown for the effective price
pub const PRICE_DISPLAY_DECIMALS: u32 = 6;

/// Balance strings are clipped to this many characters for display
pub const BALANCE_DISPLAY_MAX_CHARS: usize = 5;

/// Maximum number of settled/failed swaps kept in history
pub const MAX_SWAP_HISTORY: usize = 50;

/// Terminal swap records older than this are dropped by the cleanup timer
pub const SWAP_RECORD_TTL_NANOS: u64 = 86_400_000_000_000; // 24 hours

/// Cadence of the swap-record cleanup timer
pub const RECORD_CLEANUP_INTERVAL_SECONDS: u64 = 3_600; // 1 hour
