use super::easing::clamp;

/// Geometry read fresh from the page on every frame.
///
/// All positions are document-relative pixels except `scroll_y`, which is the
/// window's vertical scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub hero_top: f64,
    pub hero_height: f64,
    /// Top of the order section, when the page has one.
    pub order_top: Option<f64>,
}

impl ScrollState {
    /// Hero top relative to the viewport, as `getBoundingClientRect().top` reports it.
    pub fn hero_rect_top(&self) -> f64 {
        self.hero_top - self.scroll_y
    }

    pub fn hero_bottom(&self) -> f64 {
        self.hero_top + self.hero_height
    }
}

/// Normalized progress through the hero sequence.
///
/// The sequence completes after `viewport_height * scroll_span` pixels of
/// scrolling past the hero's top edge. Saturates at both ends.
pub fn progress(state: &ScrollState, scroll_span: f64) -> f64 {
    let end = state.viewport_height * scroll_span;
    if end <= 0.0 {
        return if state.hero_rect_top() < 0.0 { 1.0 } else { 0.0 };
    }
    clamp(-state.hero_rect_top() / end, 0.0, 1.0)
}

/// Three equal slices of `t`: crack, open, separate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Phases {
    pub crack: f64,
    pub open: f64,
    pub separate: f64,
}

impl Phases {
    pub const COUNT: usize = 3;

    pub fn from_progress(t: f64) -> Self {
        let slice = |i: usize| {
            let start = i as f64 / Self::COUNT as f64;
            clamp((t - start) * Self::COUNT as f64, 0.0, 1.0)
        };
        Self {
            crack: slice(0),
            open: slice(1),
            separate: slice(2),
        }
    }
}
