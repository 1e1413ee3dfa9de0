//! Session State - per-caller swap entry state

pub mod session;
