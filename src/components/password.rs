use crate::delegate::{Effect, EventRoutes};
use crate::dom::{DomNode, Page};
use crate::errors::UiError;
use std::cell::Cell;
use std::rc::Rc;

const INPUT_ID: &str = "password";
const TOGGLE: &str = ".pw-toggle";

/// Show/hide control for the login password field. Visibility is never persisted.
pub struct PasswordToggle<N> {
    input: N,
    toggle: N,
    visible: Cell<bool>,
}

impl<N: DomNode + 'static> PasswordToggle<N> {
    /// Starts masked.
    ///
    /// # Errors
    ///
    /// Returns an error if the password input or its toggle is missing.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Result<Self, UiError> {
        let input = page
            .by_id(INPUT_ID)
            .ok_or(UiError::MissingElement("#password"))?;
        let toggle = page
            .query(TOGGLE)
            .ok_or(UiError::MissingElement(".pw-toggle"))?;

        let control = Self {
            input,
            toggle,
            visible: Cell::new(false),
        };
        control.render();
        Ok(control)
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn toggle(&self) -> bool {
        self.visible.set(!self.visible.get());
        self.render();
        self.visible.get()
    }

    fn render(&self) {
        let visible = self.visible.get();
        self.input
            .assign_attribute("type", if visible { "text" } else { "password" });
        self.toggle.set_text(if visible { "🙈" } else { "👁️" });
        self.toggle
            .assign_attribute("aria-pressed", if visible { "true" } else { "false" });
    }

    pub fn register(self: Rc<Self>, routes: &mut EventRoutes<N>) {
        let control = Rc::clone(&self);
        routes.clicks.on(
            "password.toggle",
            move |target: &N| control.toggle.contains_node(target).then_some(()),
            move |()| {
                self.toggle();
                Effect::Handled
            },
        );
    }
}
