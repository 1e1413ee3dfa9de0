//! Swap request registry and history
//!
//! Every submitted SwapRequest gets a record whose status walks the
//! lifecycle; terminal records are copied into a bounded history for the
//! recent-swaps display and audited across upgrades via stable storage.

use crate::infrastructure::constants::{MAX_SWAP_HISTORY, SWAP_RECORD_TTL_NANOS};
use crate::infrastructure::errors::{Result, SwapError, SystemError};
use crate::types::swap::{SwapRecord, SwapRequest, SwapStatus};
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static SWAP_RECORDS: RefCell<HashMap<String, SwapRecord>> = RefCell::new(HashMap::new());
    static SWAP_HISTORY: RefCell<Vec<SwapRecord>> = RefCell::new(Vec::new());
}

/// Register a freshly constructed request in the `Submitting` state
pub fn store_new_request(request: SwapRequest, now: u64) {
    let record = SwapRecord {
        request,
        status: SwapStatus::Submitting,
        last_updated: now,
    };
    SWAP_RECORDS.with(|records| {
        records
            .borrow_mut()
            .insert(record.request.id.clone(), record);
    });
}

/// Advance a request's status; terminal statuses are appended to history
pub fn update_swap_status(id: &str, status: SwapStatus, now: u64) -> Result<()> {
    let terminal_record = SWAP_RECORDS.with(|records| -> Result<Option<SwapRecord>> {
        let mut records = records.borrow_mut();
        let record = records
            .get_mut(id)
            .ok_or(SwapError::System(SystemError::RequestNotFound {
                id: id.to_string(),
            }))?;
        record.status = status;
        record.last_updated = now;
        if record.status.is_terminal() {
            Ok(Some(record.clone()))
        } else {
            Ok(None)
        }
    })?;

    if let Some(record) = terminal_record {
        push_history(record);
    }

    Ok(())
}

pub fn get_swap_record(id: &str) -> Option<SwapRecord> {
    SWAP_RECORDS.with(|records| records.borrow().get(id).cloned())
}

/// Full history (most recent last), bounded by MAX_SWAP_HISTORY
pub fn get_full_history() -> Vec<SwapRecord> {
    SWAP_HISTORY.with(|history| history.borrow().clone())
}

fn push_history(record: SwapRecord) {
    SWAP_HISTORY.with(|history| {
        let mut history = history.borrow_mut();
        history.push(record);
        let overflow = history.len().saturating_sub(MAX_SWAP_HISTORY);
        if overflow > 0 {
            history.drain(0..overflow);
        }
    });
}

/// Drop terminal records older than the TTL; returns how many were removed
pub fn cleanup_expired_records(now: u64) -> usize {
    SWAP_RECORDS.with(|records| {
        let mut records = records.borrow_mut();
        let before = records.len();
        records.retain(|_, record| {
            !record.status.is_terminal()
                || now.saturating_sub(record.last_updated) < SWAP_RECORD_TTL_NANOS
        });
        before - records.len()
    })
}

// === STABLE STORAGE SUPPORT ===

pub fn export_state() -> (HashMap<String, SwapRecord>, Vec<SwapRecord>) {
    (
        SWAP_RECORDS.with(|records| records.borrow().clone()),
        SWAP_HISTORY.with(|history| history.borrow().clone()),
    )
}

pub fn import_state(records: HashMap<String, SwapRecord>, history: Vec<SwapRecord>) {
    SWAP_RECORDS.with(|cell| {
        *cell.borrow_mut() = records;
    });
    SWAP_HISTORY.with(|cell| {
        *cell.borrow_mut() = history;
    });
}
