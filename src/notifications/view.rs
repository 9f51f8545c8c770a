// SPDX-License-Identifier: MPL-2.0
//! View model for a single toast.
//!
//! The controller never touches markup; it hands the content context the
//! text to display plus the timing contract the content is expected to
//! honour before reporting back.

use std::time::Duration;

/// Timing contract for one display cycle, owned by the content context.
///
/// The content becomes opaque `fade_in_delay` after load, starts fading out
/// `fade_out_after` after load, and emits the "display finished" signal
/// once the `fade_out` transition has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTiming {
    pub fade_in_delay: Duration,
    pub fade_out_after: Duration,
    pub fade_out: Duration,
}

impl Default for FadeTiming {
    fn default() -> Self {
        Self {
            fade_in_delay: Duration::from_millis(100),
            fade_out_after: Duration::from_millis(4500),
            fade_out: Duration::from_millis(300),
        }
    }
}

impl FadeTiming {
    /// Total time from load until the completion signal fires.
    pub fn total(&self) -> Duration {
        self.fade_out_after + self.fade_out
    }
}

/// Everything the content context needs to render one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub text: String,
    pub timing: FadeTiming,
}

impl NotificationView {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timing: FadeTiming::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cycle_completes_after_4800_ms() {
        assert_eq!(FadeTiming::default().total(), Duration::from_millis(4800));
    }
}
