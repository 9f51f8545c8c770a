// SPDX-License-Identifier: MPL-2.0
//! Settings panel visibility state machine and synchronization protocol.
//!
//! The controller is an actor: [`PanelHandle`] methods never block, they
//! queue commands the run loop interleaves with content events, resize
//! notifications and scheduled continuations (the language broadcast
//! delay). Hiding is two-phase: the exit animation plays first and the
//! surface is parked only when the content reports the animation finished.

use crate::channel::{BroadcastEvent, ContentEvent, HostEvent, OverlayBroadcaster};
use crate::config::{SettingValue, StoreHandle};
use crate::geometry::panel_bounds;
use crate::host::HostWindow;
use crate::i18n::Translations;
use crate::panel::view_model::{snapshot, PanelViewModel, SettingsSnapshot};
use crate::panel::schema;
use crate::surface::OverlaySurface;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Delay between a language write landing in the store and the broadcast
/// that makes every localized surface re-pull translations.
const LANGUAGE_BROADCAST_DELAY: Duration = Duration::from_millis(100);

/// Whether the panel occupies its on-screen bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisibilityState {
    Hidden,
    Visible,
}

/// Called on `apply-changes` with the full current snapshot.
pub type ApplyHook = Box<dyn FnMut(&SettingsSnapshot) + Send>;

#[derive(Debug)]
enum PanelCommand {
    Toggle,
    Show,
    Hide,
    PushTheme(bool),
    RefreshTranslations,
    RegisterLocalizedTarget(mpsc::UnboundedSender<HostEvent>),
    /// Scheduled continuation of a language change, fired after
    /// [`LANGUAGE_BROADCAST_DELAY`].
    LanguageSettled(String),
}

/// Cloneable, non-blocking entry point for driving the settings panel.
#[derive(Debug, Clone)]
pub struct PanelHandle {
    tx: mpsc::UnboundedSender<PanelCommand>,
}

impl PanelHandle {
    pub fn toggle(&self) {
        self.send(PanelCommand::Toggle);
    }

    pub fn show(&self) {
        self.send(PanelCommand::Show);
    }

    pub fn hide(&self) {
        self.send(PanelCommand::Hide);
    }

    /// Pushes a theme change to the live panel content.
    pub fn push_theme(&self, is_dark: bool) {
        self.send(PanelCommand::PushTheme(is_dark));
    }

    /// Asks the live panel content to re-pull its translations.
    pub fn refresh_translations(&self) {
        self.send(PanelCommand::RefreshTranslations);
    }

    /// Registers another overlay surface that renders localized strings,
    /// so language changes reach it too.
    pub fn register_localized_target(&self, target: mpsc::UnboundedSender<HostEvent>) {
        self.send(PanelCommand::RegisterLocalizedTarget(target));
    }

    fn send(&self, command: PanelCommand) {
        if self.tx.send(command).is_err() {
            tracing::warn!("settings panel controller gone, command dropped");
        }
    }
}

/// Owns the panel surface, the store handle and the translation service.
pub struct SettingsPanelController {
    window: Arc<dyn HostWindow>,
    surface: OverlaySurface,
    store: StoreHandle,
    translations: Translations,
    commands: mpsc::UnboundedReceiver<PanelCommand>,
    // Weak so the run loop still ends once every handle is dropped; a
    // pending language continuation must not keep the controller alive.
    commands_weak: mpsc::WeakUnboundedSender<PanelCommand>,
    resizes: watch::Receiver<crate::geometry::WindowSize>,
    broadcaster: OverlayBroadcaster,
    visibility: VisibilityState,
    apply_hook: Option<ApplyHook>,
    content_closed: bool,
    resizes_closed: bool,
}

impl SettingsPanelController {
    /// Parks and attaches the surface immediately and preloads the content
    /// with the current snapshot; the surface stays attached for the
    /// controller's whole lifetime.
    pub fn new(
        window: Arc<dyn HostWindow>,
        mut surface: OverlaySurface,
        store: StoreHandle,
        translations: Translations,
    ) -> (PanelHandle, Self) {
        let (commands_tx, commands) = mpsc::unbounded_channel();
        let resizes = window.resize_events();

        surface.park();
        surface.attach_to(&*window);
        surface.send(HostEvent::RenderPanel(PanelViewModel::from_store(&store)));

        (
            PanelHandle {
                tx: commands_tx.clone(),
            },
            Self {
                window,
                surface,
                store,
                translations,
                commands,
                commands_weak: commands_tx.downgrade(),
                resizes,
                broadcaster: OverlayBroadcaster::new(),
                visibility: VisibilityState::Hidden,
                apply_hook: None,
                content_closed: false,
                resizes_closed: false,
            },
        )
    }

    /// Registers the `apply-changes` hook. Without one the signal is a
    /// no-op.
    pub fn with_apply_hook(mut self, hook: ApplyHook) -> Self {
        self.apply_hook = Some(hook);
        self
    }

    /// Runs the panel loop until every handle is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    match command {
                        Some(command) => self.handle_command(command),
                        None => break,
                    }
                }
                event = self.surface.recv(), if !self.content_closed => {
                    match event {
                        Some(event) => self.handle_content_event(event),
                        None => {
                            tracing::warn!("settings panel content closed");
                            self.content_closed = true;
                        }
                    }
                }
                changed = self.resizes.changed(), if !self.resizes_closed => {
                    match changed {
                        Ok(()) => self.handle_resize(),
                        Err(_) => self.resizes_closed = true,
                    }
                }
            }
        }
        tracing::debug!("settings panel controller stopped");
    }

    fn handle_command(&mut self, command: PanelCommand) {
        match command {
            PanelCommand::Toggle => match self.visibility {
                VisibilityState::Hidden => self.show(),
                VisibilityState::Visible => self.hide(),
            },
            PanelCommand::Show => self.show(),
            PanelCommand::Hide => self.hide(),
            PanelCommand::PushTheme(is_dark) => {
                self.surface.send(HostEvent::ThemeChanged(is_dark));
            }
            PanelCommand::RefreshTranslations => {
                self.surface.send(HostEvent::UpdateTranslations);
            }
            PanelCommand::RegisterLocalizedTarget(target) => {
                self.broadcaster.register(target);
            }
            PanelCommand::LanguageSettled(language) => self.broadcast_language(language),
        }
    }

    fn handle_content_event(&mut self, event: ContentEvent) {
        match event {
            ContentEvent::SettingChanged { key, value } => {
                tracing::debug!(key, "setting changed");
                self.store.set(&key, value.clone());
                if key == "language" {
                    if let SettingValue::Text(language) = value {
                        self.schedule_language_broadcast(language);
                    }
                }
            }
            ContentEvent::ApplyChanges => {
                if let Some(hook) = self.apply_hook.as_mut() {
                    hook(&snapshot(&self.store));
                }
            }
            ContentEvent::ToggleSettings => match self.visibility {
                VisibilityState::Hidden => self.show(),
                VisibilityState::Visible => self.hide(),
            },
            ContentEvent::ExitFinished => {
                if self.visibility == VisibilityState::Hidden {
                    self.surface.park();
                } else {
                    // The panel was re-shown before the old exit animation
                    // finished; the stale signal must not park it.
                    tracing::debug!("stale exit-finished ignored");
                }
            }
            ContentEvent::GetTranslations { reply } => {
                let mapping = self.translations.translations_for(&schema::label_keys());
                let _ = reply.send(mapping);
            }
        }
    }

    fn show(&mut self) {
        self.visibility = VisibilityState::Visible;
        self.surface.set_bounds(panel_bounds(self.window.bounds()));
        // Fresh snapshot on every show; values are never cached across
        // renders.
        self.surface
            .send(HostEvent::RenderPanel(PanelViewModel::from_store(&self.store)));
        self.surface.send(HostEvent::PlayEntrance);
        tracing::debug!("settings panel shown");
    }

    fn hide(&mut self) {
        self.visibility = VisibilityState::Hidden;
        // Parking waits for ExitFinished so the surface does not vanish
        // mid-animation.
        self.surface.send(HostEvent::PlayExit);
        tracing::debug!("settings panel hiding");
    }

    fn handle_resize(&mut self) {
        if self.visibility == VisibilityState::Visible {
            self.surface.set_bounds(panel_bounds(self.window.bounds()));
        }
    }

    fn schedule_language_broadcast(&self, language: String) {
        let commands = self.commands_weak.clone();
        tokio::spawn(async move {
            tokio::time::sleep(LANGUAGE_BROADCAST_DELAY).await;
            if let Some(commands) = commands.upgrade() {
                let _ = commands.send(PanelCommand::LanguageSettled(language));
            }
        });
    }

    fn broadcast_language(&mut self, language: String) {
        self.translations.set_locale_str(&language);
        self.surface.send(HostEvent::UpdateTranslations);
        self.broadcaster
            .broadcast(&BroadcastEvent::LanguageChanged(language));
    }
}
