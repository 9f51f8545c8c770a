// SPDX-License-Identifier: MPL-2.0
//! Asynchronous message passing between the host process and an overlay's
//! content context.
//!
//! Each overlay surface gets one channel pair: the host side pushes
//! [`HostEvent`]s fire-and-forget, the content side raises [`ContentEvent`]s.
//! Completion handshakes (one display cycle finishing, a translations pull)
//! ride on one-shot senders carried inside the events themselves, so a
//! listener is consumed the moment it fires and a stale or duplicate signal
//! has nothing left to act on.

use crate::config::SettingValue;
use crate::notifications::NotificationView;
use crate::panel::PanelViewModel;
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};

/// Events pushed from the host control logic into a content context.
#[derive(Debug)]
pub enum HostEvent {
    /// Display one notification. The content context owns the fade timing
    /// and fires `done` when its fade-out has finished.
    ShowNotification {
        view: NotificationView,
        done: CompletionSignal,
    },
    /// Replace the settings panel content with a fresh snapshot.
    RenderPanel(PanelViewModel),
    /// Slide the panel in.
    PlayEntrance,
    /// Slide the panel out; the content answers with
    /// [`ContentEvent::ExitFinished`] once the animation completed.
    PlayExit,
    /// The application theme changed; `true` means dark.
    ThemeChanged(bool),
    /// Translations changed; the content should pull the current mapping
    /// via [`ContentEvent::GetTranslations`].
    UpdateTranslations,
    /// The display language changed. Broadcast to every localized surface.
    LanguageChanged(String),
}

/// Events raised by a content context towards the host.
#[derive(Debug)]
pub enum ContentEvent {
    /// A single form control changed; applied to the store immediately.
    SettingChanged { key: String, value: SettingValue },
    /// The user pressed the apply button.
    ApplyChanges,
    /// The content asks to toggle the settings panel (close button).
    ToggleSettings,
    /// The panel's exit animation finished; the surface may be parked now.
    ExitFinished,
    /// Request the current label translations.
    GetTranslations {
        reply: oneshot::Sender<HashMap<String, String>>,
    },
}

/// Host side of one overlay's message channel.
#[derive(Debug)]
pub struct HostEndpoint {
    tx: mpsc::UnboundedSender<HostEvent>,
    rx: mpsc::UnboundedReceiver<ContentEvent>,
}

impl HostEndpoint {
    /// Fire-and-forget push into the content context. A closed content
    /// context swallows the event.
    pub fn send(&self, event: HostEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("content context gone, host event dropped");
        }
    }

    /// Next event raised by the content context, or `None` once it closed.
    pub async fn recv(&mut self) -> Option<ContentEvent> {
        self.rx.recv().await
    }

    /// A sender usable as a broadcast target for this surface.
    pub fn sender(&self) -> mpsc::UnboundedSender<HostEvent> {
        self.tx.clone()
    }
}

/// Content side of one overlay's message channel. The real application
/// hands this to the embedded content context; tests script it directly.
#[derive(Debug)]
pub struct ContentEndpoint {
    tx: mpsc::UnboundedSender<ContentEvent>,
    rx: mpsc::UnboundedReceiver<HostEvent>,
}

impl ContentEndpoint {
    pub fn send(&self, event: ContentEvent) {
        let _ = self.tx.send(event);
    }

    pub async fn recv(&mut self) -> Option<HostEvent> {
        self.rx.recv().await
    }

    /// Non-blocking variant of [`recv`](Self::recv).
    pub fn try_recv(&mut self) -> Option<HostEvent> {
        self.rx.try_recv().ok()
    }
}

/// Creates the channel pair for one overlay surface.
pub fn message_channel() -> (HostEndpoint, ContentEndpoint) {
    let (host_tx, content_rx) = mpsc::unbounded_channel();
    let (content_tx, host_rx) = mpsc::unbounded_channel();
    (
        HostEndpoint {
            tx: host_tx,
            rx: host_rx,
        },
        ContentEndpoint {
            tx: content_tx,
            rx: content_rx,
        },
    )
}

/// Single-use "display finished" signal, keyed to one display cycle.
///
/// The sender half travels into the content context; the first
/// [`complete`](CompletionSignal::complete) consumes it, so later calls are
/// no-ops and can never advance the notification queue twice.
#[derive(Debug)]
pub struct CompletionSignal {
    tx: Option<oneshot::Sender<()>>,
}

impl CompletionSignal {
    pub fn new() -> (Self, CompletionListener) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, CompletionListener { rx })
    }

    /// Fires the signal. Duplicate calls are ignored.
    pub fn complete(&mut self) {
        match self.tx.take() {
            Some(tx) => {
                let _ = tx.send(());
            }
            None => tracing::debug!("duplicate completion signal ignored"),
        }
    }
}

/// Host-side receiver for one [`CompletionSignal`].
#[derive(Debug)]
pub struct CompletionListener {
    rx: oneshot::Receiver<()>,
}

impl CompletionListener {
    /// Waits for the signal. Returns `false` when the content context went
    /// away without ever firing it.
    pub async fn finished(&mut self) -> bool {
        (&mut self.rx).await.is_ok()
    }
}

/// Broadcast events the host may push to every live localized surface.
#[derive(Debug, Clone)]
pub enum BroadcastEvent {
    ThemeChanged(bool),
    UpdateTranslations,
    LanguageChanged(String),
}

impl From<BroadcastEvent> for HostEvent {
    fn from(event: BroadcastEvent) -> Self {
        match event {
            BroadcastEvent::ThemeChanged(is_dark) => HostEvent::ThemeChanged(is_dark),
            BroadcastEvent::UpdateTranslations => HostEvent::UpdateTranslations,
            BroadcastEvent::LanguageChanged(lang) => HostEvent::LanguageChanged(lang),
        }
    }
}

/// Fans broadcast events out to every registered surface. Targets whose
/// content context has closed are dropped on the next broadcast.
#[derive(Debug, Default)]
pub struct OverlayBroadcaster {
    targets: Vec<mpsc::UnboundedSender<HostEvent>>,
}

impl OverlayBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, target: mpsc::UnboundedSender<HostEvent>) {
        self.targets.push(target);
    }

    pub fn broadcast(&mut self, event: &BroadcastEvent) {
        self.targets
            .retain(|target| target.send(event.clone().into()).is_ok());
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}
