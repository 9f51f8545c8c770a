// SPDX-License-Identifier: MPL-2.0
//! Settings side panel overlay.
//!
//! The panel's surface is attached for its entire lifetime so the content
//! stays warm; visibility is purely positional. Hidden parks the surface at
//! a degenerate off-screen bounds, Visible anchors it to the right edge of
//! the host window below the header.
//!
//! Form edits flow back as `setting-changed` messages and land in the
//! persistent store immediately; the host can push theme and translation
//! updates to the live surface without a reload.
//!
//! - [`schema`] - the form groups and their store keys
//! - [`view_model`] - the render snapshot built from the store
//! - [`controller`] - visibility state machine and sync protocol

mod controller;
pub mod schema;
mod view_model;

pub use controller::{ApplyHook, PanelHandle, SettingsPanelController};
pub use view_model::{snapshot, ControlView, GroupView, ItemView, PanelViewModel, SettingsSnapshot};
