//! Collapsible navigation for narrow screens. The open state is the `is-open`
//! class on the panel; nothing is mirrored in memory.

use crate::delegate::{Effect, EventRoutes, Key};
use crate::dom::{DomNode, Page};
use crate::errors::UiError;
use std::rc::Rc;

const TOGGLE_ID: &str = "nav-toggle";
const PANEL_ID: &str = "nav-links";
const OPEN: &str = "is-open";
const LABEL_OPEN: &str = "Cerrar menú";
const LABEL_CLOSED: &str = "Abrir menú";

pub struct NavMenu<N> {
    toggle: N,
    panel: N,
}

impl<N: DomNode + 'static> NavMenu<N> {
    /// # Errors
    ///
    /// Returns an error if the toggle or the panel is missing.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Result<Self, UiError> {
        let toggle = page
            .by_id(TOGGLE_ID)
            .ok_or(UiError::MissingElement("#nav-toggle"))?;
        let panel = page
            .by_id(PANEL_ID)
            .ok_or(UiError::MissingElement("#nav-links"))?;
        Ok(Self { toggle, panel })
    }

    pub fn is_open(&self) -> bool {
        self.panel.has_class(OPEN)
    }

    pub fn set_open(&self, open: bool) {
        self.panel.toggle_class(OPEN, open);
        self.toggle
            .assign_attribute("aria-expanded", if open { "true" } else { "false" });
        self.toggle
            .assign_attribute("aria-label", if open { LABEL_OPEN } else { LABEL_CLOSED });
    }

    fn is_outside(&self, target: &N) -> bool {
        !self.panel.contains_node(target) && !self.toggle.contains_node(target)
    }

    pub fn register(self: Rc<Self>, routes: &mut EventRoutes<N>) {
        let menu = Rc::clone(&self);
        routes.clicks.on(
            "nav.toggle",
            move |target: &N| menu.toggle.contains_node(target).then_some(()),
            {
                let menu = Rc::clone(&self);
                move |()| {
                    menu.set_open(!menu.is_open());
                    Effect::Handled
                }
            },
        );

        let menu = Rc::clone(&self);
        routes.clicks.on(
            "nav.dismiss",
            move |target: &N| (menu.is_open() && menu.is_outside(target)).then_some(()),
            {
                let menu = Rc::clone(&self);
                move |()| {
                    menu.set_open(false);
                    Effect::Handled
                }
            },
        );

        let menu = Rc::clone(&self);
        routes.keys.on(
            "nav.escape",
            move |key: &Key| (*key == Key::Escape && menu.is_open()).then_some(()),
            move |()| {
                self.set_open(false);
                Effect::Handled
            },
        );
    }
}
