//! Scroll-driven visibility for the header and floating buttons.
//!
//! Each evaluation compares the current offset with the previous one:
//!
//! | Element | Marker | Condition |
//! |---------|--------|-----------|
//! | header | `scrolled` | offset > header threshold |
//! | contact button | `active` | offset > header threshold |
//! | scroll-to-top button | `active` | scrolling up and offset > scroll-up threshold |
//!
//! Raw scroll events only arm a [`FrameGate`]. At most one evaluation runs
//! per frame, and it reads the viewport offset when the frame flushes.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::UiConfig;
use crate::consts::{ACTIVE_CLASS, SCROLLED_CLASS};
use crate::controller::UiController;
use crate::dom::{Document, DomError, Node, Viewport};
use crate::error::UiError;
use crate::frame::FrameGate;

/// Visibility flags derived from one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub scrolled: bool,
    pub contact_visible: bool,
    pub scroll_up_visible: bool,
}

/// Compute visibility from the previous and current offsets.
#[must_use]
pub fn visibility(prev: f64, curr: f64, header_threshold: f64, scroll_up_threshold: f64) -> ScrollState {
    let past_header = curr > header_threshold;
    ScrollState {
        scrolled: past_header,
        contact_visible: past_header,
        scroll_up_visible: curr < prev && curr > scroll_up_threshold,
    }
}

pub struct ScrollController<N, V> {
    header: N,
    scroll_up: Option<N>,
    contact: Option<N>,
    viewport: V,
    header_threshold: f64,
    scroll_up_threshold: f64,
    last_scroll_position: f64,
    pending: FrameGate,
}

impl<N: Node + Clone, V: Viewport> ScrollController<N, V> {
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] if the header is absent. Both
    /// floating buttons are optional.
    pub fn mount<D: Document<Node = N>>(doc: &D, viewport: V, config: &UiConfig) -> Result<Self, UiError> {
        let selectors = &config.selectors;
        Ok(Self {
            header: doc.require(&selectors.header)?,
            scroll_up: doc.query(&selectors.scroll_up),
            contact: doc.query(&selectors.contact),
            viewport,
            header_threshold: config.header_threshold_px,
            scroll_up_threshold: config.scroll_up_threshold_px,
            last_scroll_position: 0.0,
            pending: FrameGate::new(),
        })
    }

    /// Apply visibility for `offset` and record it as the last position.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if a marker cannot be set. The position is
    /// recorded either way.
    pub fn evaluate(&mut self, offset: f64) -> Result<ScrollState, DomError> {
        let state = visibility(self.last_scroll_position, offset, self.header_threshold, self.scroll_up_threshold);
        self.last_scroll_position = offset;

        self.header.set_class(SCROLLED_CLASS, state.scrolled)?;
        if let Some(contact) = &self.contact {
            contact.set_class(ACTIVE_CLASS, state.contact_visible)?;
        }
        if let Some(scroll_up) = &self.scroll_up {
            scroll_up.set_class(ACTIVE_CLASS, state.scroll_up_visible)?;
        }
        Ok(state)
    }

    /// Record a raw scroll event. Returns `true` when the caller must
    /// schedule a frame flush.
    pub fn on_scroll_event(&mut self) -> bool {
        self.pending.request()
    }

    /// Evaluate the viewport's current offset if a scroll event armed this
    /// frame. Returns `None` when nothing was pending.
    ///
    /// # Errors
    ///
    /// See [`Self::evaluate`].
    pub fn on_frame(&mut self) -> Result<Option<ScrollState>, DomError> {
        if !self.pending.take() {
            return Ok(None);
        }
        let offset = self.viewport.scroll_offset();
        self.evaluate(offset).map(Some)
    }

    /// Smooth-scroll back to the top. Fire-and-forget.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the browser rejects the scroll request.
    pub fn on_scroll_up_click(&self) -> Result<(), DomError> {
        self.viewport.scroll_to_top()
    }

    #[must_use]
    pub fn last_scroll_position(&self) -> f64 {
        self.last_scroll_position
    }

    #[must_use]
    pub fn scroll_up_button(&self) -> Option<&N> {
        self.scroll_up.as_ref()
    }
}

impl<N: Node + Clone, V: Viewport> UiController for ScrollController<N, V> {
    fn name(&self) -> &'static str {
        "scroll"
    }

    fn init(&mut self) -> Result<(), UiError> {
        let offset = self.viewport.scroll_offset();
        self.evaluate(offset)?;
        Ok(())
    }
}
