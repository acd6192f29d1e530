use super::progress::ScrollState;
use crate::config;

/// Whether the floating call-to-action belongs on screen.
///
/// Shown once the hero is mostly scrolled past, hidden again while the order
/// section is coming into view.
pub fn should_show(state: &ScrollState) -> bool {
    let past_hero = state.scroll_y
        > state.hero_bottom() - state.viewport_height * config::STICKY_SHOW_VIEWPORT_FRACTION;
    let near_order = state
        .order_top
        .map(|order_top| state.scroll_y + state.viewport_height > order_top + config::STICKY_ORDER_MARGIN_PX)
        .unwrap_or(false);
    past_hero && !near_order
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StickyChange {
    Shown,
    Hidden,
}

/// Last applied visibility, so the page is only touched on changes.
///
/// Starts unknown: the element may still carry state from an earlier loop,
/// so the first update always reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StickyCta {
    visible: Option<bool>,
}

impl StickyCta {
    pub fn update(&mut self, state: &ScrollState) -> Option<StickyChange> {
        let next = should_show(state);
        if self.visible == Some(next) {
            return None;
        }
        self.visible = Some(next);
        Some(if next { StickyChange::Shown } else { StickyChange::Hidden })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // hero spans 0..1600, viewport 800: shows above 1600 - 520 = 1080
    // order top 3000: hides once scroll_y + 800 > 3120
    fn at(scroll_y: f64) -> ScrollState {
        ScrollState {
            scroll_y,
            viewport_height: 800.0,
            hero_top: 0.0,
            hero_height: 1600.0,
            order_top: Some(3000.0),
        }
    }

    #[test]
    fn visibility_window() {
        assert!(!should_show(&at(0.0)));
        assert!(!should_show(&at(1080.0)));
        assert!(should_show(&at(1080.5)));
        assert!(should_show(&at(2320.0)));
        assert!(!should_show(&at(2320.5)));
    }

    #[test]
    fn missing_order_section_never_hides() {
        let mut state = at(50_000.0);
        state.order_top = None;
        assert!(should_show(&state));
    }

    #[test]
    fn reports_only_edges() {
        let mut sticky = StickyCta::default();
        let changes: Vec<_> = [0.0, 500.0, 1200.0, 1300.0, 2000.0, 2500.0, 2600.0, 1500.0]
            .iter()
            .filter_map(|&y| sticky.update(&at(y)))
            .collect();
        assert_eq!(
            changes,
            vec![
                StickyChange::Hidden,
                StickyChange::Shown,
                StickyChange::Hidden,
                StickyChange::Shown
            ]
        );
        assert_eq!(sticky.update(&at(1600.0)), None);
    }

    #[test]
    fn first_update_always_reports() {
        assert_eq!(StickyCta::default().update(&at(0.0)), Some(StickyChange::Hidden));
        assert_eq!(StickyCta::default().update(&at(1200.0)), Some(StickyChange::Shown));
    }
}
