//! # shelter-ui
//!
//! Client-side behaviour for the server-rendered pages of the shelter
//! management app, compiled to WebAssembly. Every component is independent
//! and only mounts when its elements are on the page:
//!
//! - **Supply rows**: add/remove repeatable rows on the treatment form.
//! - **Theme**: light/dark switch persisted in `localStorage`.
//! - **Password**: show/hide the login password.
//! - **Navigation**: mobile menu with outside-click and Escape dismissal.
//! - **Lightbox**: full-screen photo viewer with gallery navigation.
//! - **Row links**: whole-row navigation in listing tables.
//!
//! ## Event flow
//!
//! Components never attach listeners themselves. They register routes in a
//! [`delegate::EventRoutes`] table, and the host installs one `click` and
//! one `keydown` listener on the document that feed every event through it.
//! Routes return [`delegate::Effect`]s (prevent default, navigate) that the
//! host applies to the live event.
//!
//! Nothing here talks to the server, and no failure is ever shown to the
//! user: missing elements disable a component, unusable storage disables
//! persistence, and out-of-range navigation is ignored.

pub mod app;
pub mod build_info;
pub mod components;
pub mod config;
pub mod delegate;
pub mod dom;
pub mod errors;
pub mod storage;
pub mod telemetry;

pub use config::UiConfig;
pub use errors::{StorageError, UiError};

/// Browser entry point: config, logging, then mount once the DOM is parsed.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    use crate::dom::web::{WebPage, listen, when_ready};
    use crate::storage::LocalStore;
    use std::rc::Rc;
    use tracing::{error, info};

    let config = UiConfig::load();
    if let Err(err) = telemetry::init(&config.log_level) {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&err.to_string()));
    }
    info!(
        version = build_info::version(),
        commit = build_info::git_commit_hash(),
        "shelter-ui starting"
    );

    let Some(page) = WebPage::current() else {
        error!("no window or document");
        return;
    };
    let document = page.document().clone();

    let ready = when_ready(&document, move || {
        let store = LocalStore::acquire(page.window());
        let routes = app::mount(&page, store, &config);
        if let Err(err) = listen(page.document(), Rc::new(routes)) {
            error!(%err, "listeners not installed");
        }
    });
    if let Err(err) = ready {
        error!(%err, "cannot wait for DOMContentLoaded");
    }
}
