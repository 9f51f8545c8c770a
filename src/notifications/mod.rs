// SPDX-License-Identifier: MPL-2.0
//! Toast notification overlay.
//!
//! Messages queue in FIFO order and display one at a time on a single
//! overlay surface: the controller attaches the surface, hands the message
//! to the content context, and waits for the content's "display finished"
//! signal before advancing. When the queue drains the surface is detached
//! again.
//!
//! The content context owns the fade timing ([`view::FadeTiming`]); the
//! controller only reacts to the completion signal.

mod controller;
mod view;

pub use controller::{NotificationController, NotificationHandle};
pub use view::{FadeTiming, NotificationView};
