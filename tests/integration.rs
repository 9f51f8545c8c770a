// SPDX-License-Identifier: MPL-2.0
//! End-to-end wiring of both overlay controllers over one host window,
//! a file-backed store and the Fluent translation service.

use overlay_shell::channel::{message_channel, ContentEvent, HostEvent};
use overlay_shell::config::{FileStore, SettingValue, StoreHandle};
use overlay_shell::host::HostWindow;
use overlay_shell::i18n::Translations;
use overlay_shell::notifications::NotificationController;
use overlay_shell::panel::SettingsPanelController;
use overlay_shell::surface::OverlaySurface;
use overlay_shell::test_utils::FakeWindow;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

#[tokio::test(start_paused = true)]
async fn notifications_and_settings_share_one_window() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");
    let seed = FileStore::in_memory();
    seed.save_to_path(&path).expect("failed to seed settings file");
    let store = StoreHandle::new(FileStore::load_from_path(&path).expect("failed to load store"));
    let translations = Translations::new(Some("en"), &store);

    let window = FakeWindow::new(1000, 800);

    // Notification overlay with a content script honouring the timing
    // contract.
    let (notification_host, mut notification_content) = message_channel();
    let (notifications, notification_controller) = NotificationController::new(
        window.clone(),
        OverlaySurface::new(notification_host),
    );
    tokio::spawn(notification_controller.run());

    let displayed = Arc::new(Mutex::new(Vec::new()));
    let displayed_log = displayed.clone();
    let notification_pushes = Arc::new(Mutex::new(Vec::new()));
    let push_log = notification_pushes.clone();
    tokio::spawn(async move {
        while let Some(event) = notification_content.recv().await {
            match event {
                HostEvent::ShowNotification { view, mut done } => {
                    displayed_log.lock().unwrap().push(view.text.clone());
                    tokio::time::sleep(view.timing.total()).await;
                    done.complete();
                }
                other => push_log.lock().unwrap().push(format!("{other:?}")),
            }
        }
    });

    // Settings panel.
    let (panel_host, mut panel_content) = message_channel();
    let panel_surface = OverlaySurface::new(panel_host);
    let panel_state = panel_surface.observe();
    let (panel, panel_controller) =
        SettingsPanelController::new(window.clone(), panel_surface, store.clone(), translations);
    tokio::spawn(panel_controller.run());

    // A second localized overlay registered for language broadcasts; the
    // notification overlay deliberately is not.
    let (other_host, mut other_content) = message_channel();
    panel.register_localized_target(other_host.sender());

    notifications.show("Track changed");
    notifications.show("Next track");
    panel.toggle();
    panel_content.send(ContentEvent::SettingChanged {
        key: "language".into(),
        value: SettingValue::Text("pt-BR".into()),
    });

    tokio::time::sleep(Duration::from_secs(30)).await;

    // Notifications displayed in order and the surface is gone again.
    assert_eq!(
        *displayed.lock().unwrap(),
        vec!["Track changed", "Next track"]
    );
    assert_eq!(window.max_attached(), 2); // toast + always-attached panel
    assert_eq!(window.attached_count(), 1); // only the panel remains

    // The panel is visible with the expected placement.
    assert_eq!(
        panel_state.borrow().bounds,
        overlay_shell::geometry::panel_bounds(window.bounds())
    );

    // The language write reached the file on disk.
    let reloaded = FileStore::load_from_path(&path).expect("failed to reload store");
    use overlay_shell::config::SettingsStore;
    assert_eq!(
        reloaded.get("language"),
        Some(SettingValue::Text("pt-BR".into()))
    );

    // The broadcast reached the registered localized surface only.
    let mut saw_language = false;
    while let Some(event) = other_content.try_recv() {
        if matches!(&event, HostEvent::LanguageChanged(lang) if lang == "pt-BR") {
            saw_language = true;
        }
    }
    assert!(saw_language);
    assert!(notification_pushes
        .lock()
        .unwrap()
        .iter()
        .all(|event| !event.contains("LanguageChanged")));

    // And translation pulls now answer in the new locale.
    let (reply, response) = tokio::sync::oneshot::channel();
    panel_content.send(ContentEvent::GetTranslations { reply });
    let mapping = response.await.expect("panel controller replies");
    assert_eq!(
        mapping.get("darkMode").map(String::as_str),
        Some("Modo escuro")
    );
}
