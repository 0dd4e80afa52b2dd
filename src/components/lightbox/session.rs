//! Navigation state of an open lightbox, independent of the DOM.

/// One image of the group being browsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide<E> {
    pub element: E,
    pub src: String,
    pub alt: String,
}

/// Everything the overlay shows for the current slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub src: String,
    pub alt: String,
    pub caption: String,
    /// `"3 / 5"`, blank for a single image.
    pub counter: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// `current` is `None` exactly when the lightbox is closed, and then `group`
/// is empty.
#[derive(Debug)]
pub struct LightboxSession<E> {
    group: Vec<Slide<E>>,
    current: Option<usize>,
}

impl<E> Default for LightboxSession<E> {
    fn default() -> Self {
        Self {
            group: Vec::new(),
            current: None,
        }
    }
}

impl<E: PartialEq> LightboxSession<E> {
    /// Starts browsing `group` at `start`. An empty group degrades to `start`
    /// alone; a start missing from the group begins at the first slide.
    pub fn open(&mut self, group: Vec<Slide<E>>, start: Slide<E>) -> Option<Frame> {
        let index = group
            .iter()
            .position(|slide| slide.element == start.element)
            .unwrap_or(0);
        self.group = if group.is_empty() { vec![start] } else { group };
        self.current = None;
        self.show(index)
    }

    /// Moves to `index`; out of range leaves the state untouched.
    pub fn show(&mut self, index: usize) -> Option<Frame> {
        if index >= self.group.len() {
            return None;
        }
        self.current = Some(index);
        self.frame()
    }

    pub fn previous(&mut self) -> Option<Frame> {
        let index = self.current?.checked_sub(1)?;
        self.show(index)
    }

    pub fn next(&mut self) -> Option<Frame> {
        let index = self.current? + 1;
        self.show(index)
    }

    pub fn close(&mut self) {
        self.group.clear();
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }

    pub fn frame(&self) -> Option<Frame> {
        let index = self.current?;
        let slide = self.group.get(index)?;
        let total = self.group.len();
        Some(Frame {
            src: slide.src.clone(),
            alt: slide.alt.clone(),
            caption: slide.alt.clone(),
            counter: if total > 1 {
                format!("{} / {total}", index + 1)
            } else {
                String::new()
            },
            prev_disabled: index == 0,
            next_disabled: index + 1 >= total,
        })
    }
}
