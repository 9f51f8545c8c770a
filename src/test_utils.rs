// SPDX-License-Identifier: MPL-2.0
//! Test support: a scriptable host window.
//!
//! `FakeWindow` implements [`HostWindow`](crate::host::HostWindow) with a
//! size the test controls, records which surfaces are currently attached,
//! and tracks the highest number of surfaces ever attached at once so
//! tests can assert compositing invariants.

use crate::geometry::WindowSize;
use crate::host::{HostWindow, SurfaceId};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

#[derive(Debug)]
pub struct FakeWindow {
    size: Mutex<WindowSize>,
    attached: Mutex<HashSet<SurfaceId>>,
    max_attached: Mutex<usize>,
    resize_tx: watch::Sender<WindowSize>,
}

impl FakeWindow {
    pub fn new(width: u32, height: u32) -> Arc<Self> {
        let size = WindowSize::new(width, height);
        let (resize_tx, _) = watch::channel(size);
        Arc::new(Self {
            size: Mutex::new(size),
            attached: Mutex::new(HashSet::new()),
            max_attached: Mutex::new(0),
            resize_tx,
        })
    }

    /// Changes the window size and notifies every resize subscriber.
    pub fn resize(&self, width: u32, height: u32) {
        let size = WindowSize::new(width, height);
        *self.size.lock().unwrap() = size;
        let _ = self.resize_tx.send(size);
    }

    /// Surfaces currently composited.
    pub fn attached_count(&self) -> usize {
        self.attached.lock().unwrap().len()
    }

    /// Highest number of surfaces ever composited at the same time.
    pub fn max_attached(&self) -> usize {
        *self.max_attached.lock().unwrap()
    }
}

impl HostWindow for FakeWindow {
    fn bounds(&self) -> WindowSize {
        *self.size.lock().unwrap()
    }

    fn attach(&self, surface: SurfaceId) {
        let mut attached = self.attached.lock().unwrap();
        attached.insert(surface);
        let mut max = self.max_attached.lock().unwrap();
        *max = (*max).max(attached.len());
    }

    fn detach(&self, surface: SurfaceId) {
        self.attached.lock().unwrap().remove(&surface);
    }

    fn resize_events(&self) -> watch::Receiver<WindowSize> {
        self.resize_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_bounds_and_notifies() {
        let window = FakeWindow::new(800, 600);
        let mut events = window.resize_events();

        window.resize(1024, 768);
        assert_eq!(window.bounds(), WindowSize::new(1024, 768));
        assert!(events.has_changed().unwrap());
    }

    #[test]
    fn max_attached_tracks_the_high_water_mark() {
        let window = FakeWindow::new(800, 600);
        let a = SurfaceId::new();
        let b = SurfaceId::new();

        window.attach(a);
        window.attach(b);
        window.detach(a);
        window.detach(b);

        assert_eq!(window.attached_count(), 0);
        assert_eq!(window.max_attached(), 2);
    }
}
