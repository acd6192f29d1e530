//! Browser side of the page: element lookup, style writes, frame scheduling.

pub mod frame_loop;
pub mod surface;

pub use frame_loop::FrameLoop;
pub use surface::DomSurface;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smooth-scrolls the first element matching `selector` to the top of the
/// viewport. Returns false if nothing matched.
pub fn scroll_to(selector: &str) -> bool {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
