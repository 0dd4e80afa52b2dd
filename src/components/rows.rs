//! Repeatable supply rows on the treatment form. The first row present at
//! mount time is the template for new rows; the container never drops
//! below one row.

use crate::delegate::{Effect, EventRoutes};
use crate::dom::{DomNode, Page};
use crate::errors::UiError;
use std::rc::Rc;

const CONTAINER_ID: &str = "insumos-rows";
const ADD_ID: &str = "add-row";
const ROW: &str = ".row";
const REMOVE: &str = ".rm-row";
const QUANTITY: &str = r#"input[name="cantidad[]"]"#;

pub struct RowManager<N> {
    container: N,
    add_button: N,
    template: N,
}

impl<N: DomNode + 'static> RowManager<N> {
    /// # Errors
    ///
    /// Returns an error if the container, the add control or a first row is missing.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Result<Self, UiError> {
        let container = page
            .by_id(CONTAINER_ID)
            .ok_or(UiError::MissingElement("#insumos-rows"))?;
        let add_button = page
            .by_id(ADD_ID)
            .ok_or(UiError::MissingElement("#add-row"))?;
        let template = container
            .query_one(ROW)
            .ok_or(UiError::MissingElement("#insumos-rows .row"))?;

        Ok(Self {
            container,
            add_button,
            template,
        })
    }

    pub fn row_count(&self) -> usize {
        self.container.query_all(ROW).len()
    }

    /// Appends a blank copy of the template row and returns it.
    pub fn add_row(&self) -> Option<N> {
        let row = self.template.clone_deep()?;
        if let Some(select) = row.query_one("select") {
            select.reset_selection();
        }
        if let Some(quantity) = row.query_one(QUANTITY) {
            quantity.set_field_value("");
        }
        self.container.append_node(&row);
        Some(row)
    }

    /// Removes `row` unless it is the last one left. Returns whether it was removed.
    pub fn remove_row(&self, row: &N) -> bool {
        if !self.container.contains_node(row) || self.row_count() <= 1 {
            return false;
        }
        row.detach();
        true
    }

    pub fn register(self: Rc<Self>, routes: &mut EventRoutes<N>) {
        let rows = Rc::clone(&self);
        routes.clicks.on(
            "rows.add",
            move |target: &N| rows.add_button.contains_node(target).then_some(()),
            {
                let rows = Rc::clone(&self);
                move |()| {
                    rows.add_row();
                    Effect::Handled
                }
            },
        );

        let rows = Rc::clone(&self);
        routes.clicks.on(
            "rows.remove",
            move |target: &N| {
                let button = target.closest_match(REMOVE)?;
                if !rows.container.contains_node(&button) {
                    return None;
                }
                button.closest_match(ROW)
            },
            move |row: N| {
                self.remove_row(&row);
                Effect::Handled
            },
        );
    }
}
