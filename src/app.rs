//! Mounts every component against a page and collects their routes.

use crate::components::{Lightbox, NavMenu, PasswordToggle, RowManager, ThemeToggle, row_link};
use crate::config::UiConfig;
use crate::delegate::EventRoutes;
use crate::dom::{DomNode, Page};
use crate::errors::UiError;
use crate::storage::PreferenceStore;
use std::rc::Rc;
use tracing::debug;

fn mounted<T>(component: &'static str, result: Result<T, UiError>) -> Option<Rc<T>> {
    match result {
        Ok(value) => {
            debug!(component, "mounted");
            Some(Rc::new(value))
        }
        Err(err) => {
            debug!(component, %err, "disabled");
            None
        }
    }
}

/// Components register in page order: rows, theme, password, nav, lightbox, row links.
pub fn mount<P, S>(page: &P, store: S, config: &UiConfig) -> EventRoutes<P::Node>
where
    P: Page,
    P::Node: DomNode + 'static,
    S: PreferenceStore + 'static,
{
    let mut routes = EventRoutes::default();

    if let Some(rows) = mounted("rows", RowManager::mount(page)) {
        rows.register(&mut routes);
    }
    if let Some(theme) = mounted(
        "theme",
        ThemeToggle::mount(page, store, &config.theme_storage_key),
    ) {
        theme.register(&mut routes);
    }
    if let Some(password) = mounted("password", PasswordToggle::mount(page)) {
        password.register(&mut routes);
    }
    if let Some(nav) = mounted("nav", NavMenu::mount(page)) {
        nav.register(&mut routes);
    }
    if let Some(lightbox) = mounted(
        "lightbox",
        Lightbox::mount(page, &config.gallery_selector()),
    ) {
        lightbox.register(&mut routes);
    }
    row_link::register(&mut routes);

    debug!(
        clicks = routes.clicks.len(),
        keys = routes.keys.len(),
        "routes ready"
    );
    routes
}
