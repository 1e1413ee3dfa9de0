pub mod assets;
pub mod display;
pub mod exchange;
pub mod icrc;
pub mod market;
pub mod session;
pub mod swap;

pub use assets::{Asset, SwapDirection};
pub use session::{SlippageTolerance, SwapSession};
