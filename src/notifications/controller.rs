// SPDX-License-Identifier: MPL-2.0
//! Notification display sequencing.
//!
//! [`NotificationHandle::show`] never blocks: it appends to the FIFO queue
//! and the controller task drives display cycles one at a time. A cycle is
//! attach → hand the view to the content → await the single-use completion
//! signal → debounce → next message. An empty queue detaches the surface
//! and the loop goes back to waiting for the next show.

use crate::channel::{CompletionSignal, HostEvent};
use crate::geometry::notification_bounds;
use crate::host::HostWindow;
use crate::notifications::NotificationView;
use crate::surface::OverlaySurface;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// Pause between a completion signal and the next display cycle.
const ADVANCE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Cloneable, non-blocking entry point for showing notifications.
#[derive(Debug, Clone)]
pub struct NotificationHandle {
    tx: mpsc::UnboundedSender<String>,
}

impl NotificationHandle {
    /// Queues a message for display. Returns immediately; the message is
    /// shown once everything queued before it has finished.
    pub fn show(&self, message: impl Into<String>) {
        if self.tx.send(message.into()).is_err() {
            tracing::warn!("notification controller gone, message dropped");
        }
    }
}

/// Owns the notification surface and the display/fade sequencing loop.
pub struct NotificationController {
    window: Arc<dyn HostWindow>,
    surface: OverlaySurface,
    shows: mpsc::UnboundedReceiver<String>,
    shows_closed: bool,
    queue: VecDeque<String>,
}

impl NotificationController {
    pub fn new(
        window: Arc<dyn HostWindow>,
        surface: OverlaySurface,
    ) -> (NotificationHandle, Self) {
        let (tx, shows) = mpsc::unbounded_channel();
        (
            NotificationHandle { tx },
            Self {
                window,
                surface,
                shows,
                shows_closed: false,
                queue: VecDeque::new(),
            },
        )
    }

    /// Runs the sequencing loop until every handle is dropped and the queue
    /// has drained.
    pub async fn run(mut self) {
        loop {
            if self.queue.is_empty() {
                if self.shows_closed {
                    break;
                }
                match self.shows.recv().await {
                    Some(message) => self.queue.push_back(message),
                    None => break,
                }
            }
            self.display_queued().await;
        }
        tracing::debug!("notification controller stopped");
    }

    /// Drives display cycles until the queue is empty, then detaches.
    async fn display_queued(&mut self) {
        while let Some(message) = self.queue.pop_front() {
            self.display_one(message).await;
            tokio::time::sleep(ADVANCE_DEBOUNCE).await;
            self.collect_pending();
        }
        self.surface.detach_from(&*self.window);
        tracing::debug!("notification queue drained, surface detached");
    }

    async fn display_one(&mut self, message: String) {
        // Placement uses the live window size, never a cached one.
        self.surface
            .set_bounds(notification_bounds(self.window.bounds()));
        self.surface.attach_to(&*self.window);

        let (done, mut listener) = CompletionSignal::new();
        self.surface.send(HostEvent::ShowNotification {
            view: NotificationView::new(message),
            done,
        });

        // Wait for this cycle's completion signal while still accepting new
        // messages into the queue.
        loop {
            tokio::select! {
                finished = listener.finished() => {
                    if !finished {
                        tracing::warn!(
                            "notification content closed before completing, advancing"
                        );
                    }
                    break;
                }
                message = self.shows.recv(), if !self.shows_closed => {
                    match message {
                        Some(message) => self.queue.push_back(message),
                        None => self.shows_closed = true,
                    }
                }
            }
        }
    }

    /// Pulls messages that arrived during the debounce into the queue.
    fn collect_pending(&mut self) {
        loop {
            match self.shows.try_recv() {
                Ok(message) => self.queue.push_back(message),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.shows_closed = true;
                    break;
                }
            }
        }
    }
}
