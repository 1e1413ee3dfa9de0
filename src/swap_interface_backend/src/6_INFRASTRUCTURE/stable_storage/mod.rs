//! Stable storage management for upgrade persistence
//!
//! Swap records and history survive upgrades; sessions are entry state and
//! deliberately do not.

use crate::types::swap::SwapRecord;
use candid::{CandidType, Deserialize};
use std::collections::HashMap;

#[derive(CandidType, Deserialize, Default)]
pub struct StableState {
    pub swap_records: HashMap<String, SwapRecord>,
    pub swap_history: Vec<SwapRecord>,
}

pub fn save_state(swap_records: HashMap<String, SwapRecord>, swap_history: Vec<SwapRecord>) {
    let state = StableState {
        swap_records,
        swap_history,
    };
    ic_cdk::println!(
        "💾 Saving {} swap records and {} history entries to stable storage",
        state.swap_records.len(),
        state.swap_history.len()
    );

    // Log but don't trap: losing records on upgrade beats failing the upgrade
    match ic_cdk::storage::stable_save((state,)) {
        Ok(_) => {
            ic_cdk::println!("✅ Successfully saved state to stable memory");
        }
        Err(e) => {
            ic_cdk::println!("⚠️ WARNING: Failed to save state to stable memory: {}", e);
        }
    }
}

pub fn restore_state() -> (HashMap<String, SwapRecord>, Vec<SwapRecord>) {
    match ic_cdk::storage::stable_restore::<(StableState,)>() {
        Ok((state,)) => {
            ic_cdk::println!(
                "✅ Restored {} swap records and {} history entries from stable storage",
                state.swap_records.len(),
                state.swap_history.len()
            );
            (state.swap_records, state.swap_history)
        }
        Err(e) => {
            ic_cdk::println!(
                "⚠️ No stable state to restore (first deployment or empty): {}",
                e
            );
            (HashMap::new(), Vec::new())
        }
    }
}
