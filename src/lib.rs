// SPDX-License-Identifier: MPL-2.0
//! `overlay_shell` manages the overlay panels of a desktop client: an
//! ephemeral toast notification queue and a persistent settings side panel,
//! both composited above a single host window.
//!
//! Each overlay is an independently rendered content surface with its own
//! script context; all coordination with the host process happens over
//! asynchronous message channels. The crate owns the sequencing and
//! synchronization logic — when overlays appear, queue, move and settle —
//! and demonstrates persistence of user preferences and runtime
//! internationalization with Fluent. Rendering itself stays outside: the
//! controllers hand view models to the content contexts and react to their
//! signals.

pub mod channel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod i18n;
pub mod logging;
pub mod notifications;
pub mod panel;
pub mod surface;
pub mod test_utils;
