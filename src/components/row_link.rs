//! Whole-row links in listing tables: a click anywhere on a `tr.row-link`
//! follows its `data-href`, unless the click landed on a control of its own.

use crate::delegate::{Effect, EventRoutes};
use crate::dom::DomNode;

const ROW: &str = "tr.row-link";
const HREF: &str = "data-href";
const INTERACTIVE: &str = "button, a, select, input, label, form";

/// Where a click on `target` should navigate, if anywhere.
pub fn row_link_target<N: DomNode>(target: &N) -> Option<String> {
    let row = target.closest_match(ROW)?;
    if target.closest_match(INTERACTIVE).is_some() {
        return None;
    }
    row.attribute(HREF).filter(|href| !href.is_empty())
}

pub fn register<N: DomNode + 'static>(routes: &mut EventRoutes<N>) {
    routes
        .clicks
        .on("row-link", row_link_target::<N>, Effect::Navigate);
}
