//! Light/dark theme switch. The active theme lives in the `data-theme`
//! attribute of the document element and is persisted best-effort.
//!
//! Applying a theme replaces the toggle button's whole content with the
//! icon for the other theme, so any markup rendered inside the button is
//! gone after mount.

use crate::delegate::{Effect, EventRoutes};
use crate::dom::{DomNode, Page};
use crate::errors::UiError;
use crate::storage::PreferenceStore;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use tracing::debug;

const TOGGLE_ID: &str = "theme-toggle";
const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon offered to switch away from this theme.
    fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Stored preference, then an override already on the page, then the system
/// colour scheme, then light.
pub fn resolve(stored: Option<Theme>, forced: Option<Theme>, system: Option<Theme>) -> Theme {
    stored.or(forced).or(system).unwrap_or_default()
}

pub struct ThemeToggle<N, S> {
    root: N,
    button: N,
    store: S,
    key: String,
    system: Option<Theme>,
}

impl<N, S> ThemeToggle<N, S>
where
    N: DomNode + 'static,
    S: PreferenceStore + 'static,
{
    /// Resolves and applies the initial theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the toggle button or the document element is missing.
    pub fn mount<P: Page<Node = N>>(page: &P, store: S, key: &str) -> Result<Self, UiError> {
        let button = page
            .by_id(TOGGLE_ID)
            .ok_or(UiError::MissingElement("#theme-toggle"))?;
        let root = page.root().ok_or(UiError::MissingElement("html"))?;
        let system = page
            .prefers_dark()
            .map(|dark| if dark { Theme::Dark } else { Theme::Light });

        let toggle = Self {
            root,
            button,
            store,
            key: key.to_string(),
            system,
        };
        toggle.apply(resolve(toggle.stored(), toggle.forced(), system));
        Ok(toggle)
    }

    fn stored(&self) -> Option<Theme> {
        match self.store.read(&self.key) {
            Ok(value) => value.and_then(|value| value.parse().ok()),
            Err(err) => {
                debug!(%err, "theme preference unreadable");
                None
            }
        }
    }

    fn forced(&self) -> Option<Theme> {
        self.root
            .attribute(THEME_ATTRIBUTE)
            .and_then(|value| value.parse().ok())
    }

    /// The theme on screen: the page override, else the system preference.
    pub fn current(&self) -> Theme {
        self.forced().or(self.system).unwrap_or_default()
    }

    pub fn apply(&self, theme: Theme) {
        self.root.assign_attribute(THEME_ATTRIBUTE, theme.as_str());
        if let Err(err) = self.store.write(&self.key, theme.as_str()) {
            debug!(%err, "theme preference not persisted");
        }
        self.button.set_text(theme.icon());
        self.button
            .assign_attribute("aria-pressed", if theme == Theme::Dark { "true" } else { "false" });
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        next
    }

    pub fn register(self: Rc<Self>, routes: &mut EventRoutes<N>) {
        let theme = Rc::clone(&self);
        routes.clicks.on(
            "theme.toggle",
            move |target: &N| theme.button.contains_node(target).then_some(()),
            move |()| {
                self.toggle();
                Effect::Handled
            },
        );
    }
}
