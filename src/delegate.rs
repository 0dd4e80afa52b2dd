//! Event delegation as an explicit routing table.
//!
//! Components register `(name, matcher, handler)` routes instead of adding
//! their own listeners. The host installs one click and one keydown listener
//! on the document and hands every event to the table, which evaluates all
//! routes in registration order against the actual event target. A matcher
//! returns whatever the handler needs (usually the matched ancestor) or
//! `None` to skip the route.

use tracing::trace;

/// What the host should do with the live event after a route ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Handled,
    PreventDefault,
    Navigate(String),
}

/// `KeyboardEvent.key`, narrowed to the keys the components react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        match key {
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }
}

type Route<E> = (&'static str, Box<dyn Fn(&E) -> Option<Effect>>);

/// Ordered routes for one kind of event payload.
pub struct Dispatch<E> {
    routes: Vec<Route<E>>,
}

impl<E> Default for Dispatch<E> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<E: 'static> Dispatch<E> {
    pub fn on<M, F, H>(&mut self, name: &'static str, matcher: F, handler: H)
    where
        M: 'static,
        F: Fn(&E) -> Option<M> + 'static,
        H: Fn(M) -> Effect + 'static,
    {
        self.routes.push((
            name,
            Box::new(move |event: &E| matcher(event).map(&handler)),
        ));
    }

    /// Runs every matching route; returns their effects in order.
    pub fn dispatch(&self, event: &E) -> Vec<Effect> {
        self.routes
            .iter()
            .filter_map(|(name, route)| {
                let effect = route(event)?;
                trace!(route = name, ?effect, "route matched");
                Some(effect)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.routes.iter().map(|(name, _)| *name).collect()
    }
}

/// Click routes keyed by target element plus key routes.
pub struct EventRoutes<N> {
    pub clicks: Dispatch<N>,
    pub keys: Dispatch<Key>,
}

impl<N> Default for EventRoutes<N> {
    fn default() -> Self {
        Self {
            clicks: Dispatch::default(),
            keys: Dispatch::default(),
        }
    }
}

impl<N: 'static> EventRoutes<N> {
    pub fn click(&self, target: &N) -> Vec<Effect> {
        self.clicks.dispatch(target)
    }

    pub fn key(&self, key: &Key) -> Vec<Effect> {
        self.keys.dispatch(key)
    }
}
