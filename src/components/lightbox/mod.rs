//! Full-screen image viewer for photos in the main content.
//!
//! The overlay is built once per page and reused. Clicking an image inside
//! `<main>` opens it together with every other eligible image of the same
//! gallery: the nearest ancestor matching one of the configured gallery
//! scopes, or the whole document. Images flagged `no-zoom` and anything
//! inside a `.qr-box` never open and are never part of a group.
//!
//! Navigation stops at both ends; there is no wrap-around.

mod session;

pub use session::{Frame, LightboxSession, Slide};

use crate::delegate::{Effect, EventRoutes, Key};
use crate::dom::{DomNode, Page};
use crate::errors::UiError;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

const OPEN: &str = "is-open";
const NO_ZOOM: &str = "no-zoom";
const QR_BOX: &str = ".qr-box";
const CONTENT: &str = "main";

/// True for images the lightbox may show.
fn is_zoomable<N: DomNode>(image: &N) -> bool {
    !image.has_class(NO_ZOOM) && image.closest_match(QR_BOX).is_none()
}

/// The image a click in the main content should open, if any.
pub fn zoom_target<N: DomNode>(target: &N) -> Option<N> {
    let image = target.closest_match("img")?;
    image.closest_match(CONTENT)?;
    is_zoomable(&image).then_some(image)
}

fn slide<N: DomNode>(image: &N) -> Slide<N> {
    Slide {
        element: image.clone(),
        src: image.image_source(),
        alt: image.attribute("alt").unwrap_or_default(),
    }
}

pub struct Lightbox<N> {
    overlay: N,
    image: N,
    caption: N,
    counter: N,
    close_button: N,
    prev_button: N,
    next_button: N,
    document: N,
    gallery_selector: String,
    session: RefCell<LightboxSession<N>>,
}

impl<N: DomNode + 'static> Lightbox<N> {
    /// Builds the overlay and appends it to `<body>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document has no body or elements cannot be created.
    pub fn mount<P: Page<Node = N>>(page: &P, gallery_selector: &str) -> Result<Self, UiError> {
        let body = page.body().ok_or(UiError::MissingElement("body"))?;
        let document = page.root().ok_or(UiError::MissingElement("html"))?;
        let create = |tag: &str, class: &str| -> Result<N, UiError> {
            let element = page
                .create_element(tag)
                .ok_or_else(|| UiError::Host(format!("cannot create <{tag}>")))?;
            if !class.is_empty() {
                element.assign_attribute("class", class);
            }
            Ok(element)
        };

        let overlay = create("div", "lightbox")?;

        let close_button = create("button", "lightbox__close")?;
        close_button.assign_attribute("type", "button");
        close_button.assign_attribute("aria-label", "Cerrar");
        close_button.set_text("✕");

        let nav = create("div", "lightbox__nav")?;
        let prev_button = create("button", "lightbox__btn lightbox__btn--prev")?;
        prev_button.assign_attribute("type", "button");
        prev_button.assign_attribute("aria-label", "Anterior");
        prev_button.set_text("‹");
        let next_button = create("button", "lightbox__btn lightbox__btn--next")?;
        next_button.assign_attribute("type", "button");
        next_button.assign_attribute("aria-label", "Siguiente");
        next_button.set_text("›");
        nav.append_node(&prev_button);
        nav.append_node(&next_button);

        let stage = create("div", "")?;
        let image = create("img", "lightbox__img")?;
        image.assign_attribute("alt", "");
        let caption = create("div", "lightbox__caption")?;
        caption.assign_attribute("aria-live", "polite");
        let counter = create("div", "lightbox__counter")?;
        stage.append_node(&image);
        stage.append_node(&caption);
        stage.append_node(&counter);

        overlay.append_node(&close_button);
        overlay.append_node(&nav);
        overlay.append_node(&stage);
        body.append_node(&overlay);

        Ok(Self {
            overlay,
            image,
            caption,
            counter,
            close_button,
            prev_button,
            next_button,
            document,
            gallery_selector: gallery_selector.to_string(),
            session: RefCell::new(LightboxSession::default()),
        })
    }

    /// Every eligible image sharing `start`'s gallery, in document order.
    fn gallery(&self, start: &N) -> Vec<Slide<N>> {
        let scope = if self.gallery_selector.is_empty() {
            None
        } else {
            start.closest_match(&self.gallery_selector)
        };
        let scope = scope.unwrap_or_else(|| self.document.clone());

        scope
            .query_all("img")
            .iter()
            .filter(|image| is_zoomable(*image) && !self.overlay.contains_node(image))
            .map(slide)
            .collect()
    }

    pub fn open(&self, start: &N) {
        let group = self.gallery(start);
        let frame = self.session.borrow_mut().open(group, slide(start));
        debug!(size = self.len(), index = ?self.current_index(), "lightbox opened");
        self.overlay.toggle_class(OPEN, true);
        if let Some(frame) = frame {
            self.render(&frame);
        }
    }

    /// Out-of-range indices leave the lightbox as it is.
    pub fn show_index(&self, index: usize) -> bool {
        let frame = self.session.borrow_mut().show(index);
        self.render_if_moved(frame)
    }

    pub fn previous(&self) -> bool {
        let frame = self.session.borrow_mut().previous();
        self.render_if_moved(frame)
    }

    pub fn next(&self) -> bool {
        let frame = self.session.borrow_mut().next();
        self.render_if_moved(frame)
    }

    pub fn close(&self) {
        self.overlay.toggle_class(OPEN, false);
        self.image.clear_attribute("src");
        self.image.assign_attribute("alt", "");
        self.caption.set_text("");
        self.counter.set_text("");
        self.session.borrow_mut().close();
    }

    pub fn is_open(&self) -> bool {
        self.session.borrow().is_open()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.borrow().current_index()
    }

    pub fn len(&self) -> usize {
        self.session.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.session.borrow().is_empty()
    }

    pub fn overlay(&self) -> &N {
        &self.overlay
    }

    fn render_if_moved(&self, frame: Option<Frame>) -> bool {
        match frame {
            Some(frame) => {
                self.render(&frame);
                true
            }
            None => false,
        }
    }

    fn render(&self, frame: &Frame) {
        self.image.assign_attribute("src", &frame.src);
        self.image.assign_attribute("alt", &frame.alt);
        self.caption.set_text(&frame.caption);
        self.counter.set_text(&frame.counter);
        self.prev_button.toggle_flag("disabled", frame.prev_disabled);
        self.next_button.toggle_flag("disabled", frame.next_disabled);
    }

    pub fn register(self: Rc<Self>, routes: &mut EventRoutes<N>) {
        let lightbox = Rc::clone(&self);
        routes.clicks.on(
            "lightbox.previous",
            move |target: &N| lightbox.prev_button.contains_node(target).then_some(()),
            {
                let lightbox = Rc::clone(&self);
                move |()| {
                    lightbox.previous();
                    Effect::Handled
                }
            },
        );

        let lightbox = Rc::clone(&self);
        routes.clicks.on(
            "lightbox.next",
            move |target: &N| lightbox.next_button.contains_node(target).then_some(()),
            {
                let lightbox = Rc::clone(&self);
                move |()| {
                    lightbox.next();
                    Effect::Handled
                }
            },
        );

        // Backdrop or close button only; clicks on the image or controls stay open.
        let lightbox = Rc::clone(&self);
        routes.clicks.on(
            "lightbox.dismiss",
            move |target: &N| {
                (*target == lightbox.overlay || lightbox.close_button.contains_node(target))
                    .then_some(())
            },
            {
                let lightbox = Rc::clone(&self);
                move |()| {
                    lightbox.close();
                    Effect::Handled
                }
            },
        );

        let lightbox = Rc::clone(&self);
        routes.clicks.on("lightbox.open", zoom_target::<N>, move |image: N| {
            lightbox.open(&image);
            Effect::PreventDefault
        });

        let lightbox = Rc::clone(&self);
        routes.keys.on(
            "lightbox.keys",
            move |key: &Key| match key {
                Key::Other(_) => None,
                _ => lightbox.is_open().then(|| key.clone()),
            },
            move |key: Key| {
                match key {
                    Key::Escape => self.close(),
                    Key::ArrowLeft => {
                        self.previous();
                    }
                    Key::ArrowRight => {
                        self.next();
                    }
                    Key::Other(_) => {}
                }
                Effect::Handled
            },
        );
    }
}
