// SPDX-License-Identifier: MPL-2.0
//! Adapter for the host application window.
//!
//! Controllers never talk to a windowing toolkit directly; everything they
//! need from the host window goes through [`HostWindow`]: the live window
//! size, compositing a surface in or out, and a resize subscription.

use crate::geometry::WindowSize;
use tokio::sync::watch;

/// Identifies one overlay surface to the host window compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Allocates a fresh id, unique for the lifetime of the process.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

/// The host application window, as seen by the overlay controllers.
///
/// `bounds` must always report the live size; implementations must not
/// cache. Resize subscriptions are never unregistered, so every receiver
/// must tolerate repeated or redundant notifications.
pub trait HostWindow: Send + Sync {
    /// Current size of the window, queried at call time.
    fn bounds(&self) -> WindowSize;

    /// Composites the surface above the window content.
    fn attach(&self, surface: SurfaceId);

    /// Removes the surface from the compositor.
    fn detach(&self, surface: SurfaceId);

    /// Subscribes to window resizes. The receiver yields the most recent
    /// size; intermediate sizes may be coalesced.
    fn resize_events(&self) -> watch::Receiver<WindowSize>;
}
