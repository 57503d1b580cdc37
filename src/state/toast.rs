#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::state::notice::Notice;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Most toasts shown at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Transient messages rendered by the toast stack.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show `notice`. Returns the toast id for later dismissal.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
