use crate::{api::User, session::Role};
use std::collections::BTreeMap;

/// What a row is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOperation {
    ChangeRole(Role),
    Block,
    Unblock,
}

/// In-flight operations keyed by user id. A row with an entry is locked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowUpdates {
    in_flight: BTreeMap<String, RowOperation>,
}

impl RowUpdates {
    /// Locks `id` for `operation`. Returns `false` if the row is already busy.
    pub fn begin(&mut self, id: &str, operation: RowOperation) -> bool {
        if self.in_flight.contains_key(id) {
            return false;
        }
        self.in_flight.insert(id.to_string(), operation);
        true
    }

    pub fn finish(&mut self, id: &str) -> Option<RowOperation> {
        self.in_flight.remove(id)
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.in_flight.contains_key(id)
    }
}

pub fn status_label(user: &User) -> &'static str {
    if user.is_blocked() {
        "Blocked"
    } else {
        "Active"
    }
}

pub fn block_button_label(user: &User, busy: bool) -> &'static str {
    match (busy, user.is_blocked()) {
        (true, _) => "Processing...",
        (false, true) => "Unblock",
        (false, false) => "Block",
    }
}

pub fn user_count_label(count: usize) -> String {
    match count {
        1 => "1 user".to_string(),
        n => format!("{} users", n),
    }
}
