//! Transient theme-change notification.
//!
//! At most one notice exists. Each `show` bumps a sequence number and the
//! reveal/hide/clear steps scheduled for an older notice carry its old number,
//! so they become no-ops once a newer notice has replaced it.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays fully shown.
pub const NOTICE_HOLD_MS: u32 = 1_200;
/// Fade-out time between hiding and removal.
pub const NOTICE_FADE_MS: u32 = 300;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub seq: u64,
    /// Text of the mounted notice; `None` when nothing is mounted.
    pub text: Option<String>,
    /// Drives the `show` class that triggers the CSS transition.
    pub visible: bool,
}

impl NoticeState {
    /// Mount a new notice, replacing any existing one. Returns its sequence
    /// number for the follow-up steps.
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.seq = self.seq.wrapping_add(1);
        self.text = Some(text.into());
        self.visible = false;
        self.seq
    }

    /// Start the enter transition. Returns whether anything changed.
    pub fn reveal(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) || self.visible {
            return false;
        }
        self.visible = true;
        true
    }

    /// Start the exit transition.
    pub fn hide(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Unmount the notice.
    pub fn clear(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.text = None;
        self.visible = false;
        true
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.seq && self.text.is_some()
    }
}
