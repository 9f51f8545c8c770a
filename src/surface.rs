// SPDX-License-Identifier: MPL-2.0
//! An overlay surface: one embedded content context plus its placement.
//!
//! A surface is owned by exactly one controller. Attach, detach and bounds
//! changes all go through it, and the resulting state is observable through
//! a watch channel so a compositor (or a test) can follow along without
//! sharing the surface itself.

use crate::channel::{ContentEvent, HostEndpoint, HostEvent};
use crate::geometry::{OverlayBounds, PARKED_BOUNDS};
use crate::host::{HostWindow, SurfaceId};
use tokio::sync::{mpsc, watch};

/// Externally observable state of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceState {
    pub bounds: OverlayBounds,
    pub attached: bool,
}

#[derive(Debug)]
pub struct OverlaySurface {
    id: SurfaceId,
    channel: HostEndpoint,
    state: SurfaceState,
    state_tx: watch::Sender<SurfaceState>,
}

impl OverlaySurface {
    /// Wraps a content context's host endpoint. New surfaces start parked
    /// and detached.
    pub fn new(channel: HostEndpoint) -> Self {
        let state = SurfaceState {
            bounds: PARKED_BOUNDS,
            attached: false,
        };
        let (state_tx, _) = watch::channel(state);
        Self {
            id: SurfaceId::new(),
            channel,
            state,
            state_tx,
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Subscribes to bounds/attachment changes.
    pub fn observe(&self) -> watch::Receiver<SurfaceState> {
        self.state_tx.subscribe()
    }

    pub fn bounds(&self) -> OverlayBounds {
        self.state.bounds
    }

    pub fn is_attached(&self) -> bool {
        self.state.attached
    }

    pub fn set_bounds(&mut self, bounds: OverlayBounds) {
        self.state.bounds = bounds;
        self.publish();
    }

    /// Moves the surface to the degenerate off-screen position, keeping its
    /// content loaded.
    pub fn park(&mut self) {
        self.set_bounds(PARKED_BOUNDS);
    }

    /// Composites the surface above the window. Idempotent.
    pub fn attach_to(&mut self, window: &dyn HostWindow) {
        if !self.state.attached {
            window.attach(self.id);
            self.state.attached = true;
            self.publish();
        }
    }

    /// Removes the surface from the compositor. Idempotent.
    pub fn detach_from(&mut self, window: &dyn HostWindow) {
        if self.state.attached {
            window.detach(self.id);
            self.state.attached = false;
            self.publish();
        }
    }

    /// Fire-and-forget push into the content context.
    pub fn send(&self, event: HostEvent) {
        self.channel.send(event);
    }

    /// Next event raised by the content context.
    pub async fn recv(&mut self) -> Option<ContentEvent> {
        self.channel.recv().await
    }

    /// A sender usable as a broadcast target for this surface.
    pub fn sender(&self) -> mpsc::UnboundedSender<HostEvent> {
        self.channel.sender()
    }

    fn publish(&self) {
        let _ = self.state_tx.send(self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::message_channel;
    use crate::geometry::OverlayBounds;
    use crate::test_utils::FakeWindow;

    #[tokio::test]
    async fn new_surface_is_parked_and_detached() {
        let (host, _content) = message_channel();
        let surface = OverlaySurface::new(host);
        assert_eq!(surface.bounds(), PARKED_BOUNDS);
        assert!(!surface.is_attached());
    }

    #[tokio::test]
    async fn attach_is_idempotent() {
        let window = FakeWindow::new(800, 600);
        let (host, _content) = message_channel();
        let mut surface = OverlaySurface::new(host);

        surface.attach_to(&*window);
        surface.attach_to(&*window);
        assert_eq!(window.attached_count(), 1);

        surface.detach_from(&*window);
        surface.detach_from(&*window);
        assert_eq!(window.attached_count(), 0);
    }

    #[tokio::test]
    async fn observers_see_bounds_changes() {
        let (host, _content) = message_channel();
        let mut surface = OverlaySurface::new(host);
        let mut observed = surface.observe();

        let bounds = OverlayBounds::new(10, 20, 300, 40);
        surface.set_bounds(bounds);

        observed.changed().await.expect("surface still alive");
        assert_eq!(observed.borrow().bounds, bounds);
    }
}
