use super::cue::{Cue, CueTrigger};
use super::layer::LayerFrame;
use super::progress::{progress, Phases, ScrollState};
use super::sticky::{StickyChange, StickyCta};
use super::variant::VariantSpec;
use crate::analytics::{AnalyticsEvent, EventSink};
use crate::audio::CuePlayer;

/// Where a frame is read from and written to.
pub trait Surface {
    /// Current geometry, or `None` when the hero region is not on the page.
    fn scroll_state(&self) -> Option<ScrollState>;
    fn apply(&mut self, layer: &LayerFrame);
    fn set_sticky_visible(&mut self, visible: bool);
}

/// Everything computed for one refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub t: f64,
    pub phases: Phases,
    pub layers: Vec<LayerFrame>,
    pub cues: Vec<Cue>,
    pub sticky: Option<StickyChange>,
}

/// Layer states for a given progress. Stateless.
pub fn evaluate(spec: &VariantSpec, t: f64) -> Vec<LayerFrame> {
    let phases = Phases::from_progress(t);
    spec.layers.iter().map(|layer| layer.evaluate(t, &phases)).collect()
}

/// The only state carried between frames: cue machines and the last sticky
/// visibility.
#[derive(Clone, Debug)]
pub struct Animator {
    spec: VariantSpec,
    cues: Vec<CueTrigger>,
    sticky: StickyCta,
}

impl Animator {
    pub fn new(spec: VariantSpec) -> Self {
        let cues = spec.cues.iter().copied().map(CueTrigger::new).collect();
        Self {
            spec,
            cues,
            sticky: StickyCta::default(),
        }
    }

    pub fn frame(&mut self, scroll: &ScrollState) -> Frame {
        let t = progress(scroll, self.spec.scroll_span);
        let phases = Phases::from_progress(t);
        let layers = evaluate(&self.spec, t);
        let cues = self
            .cues
            .iter_mut()
            .filter_map(|trigger| trigger.step(t, &phases).then_some(trigger.spec.cue))
            .collect();
        let sticky = self.sticky.update(scroll);

        Frame { t, phases, layers, cues, sticky }
    }
}

/// Runs one refresh against a surface. Returns `None` if there was nothing
/// to measure.
pub fn tick<S>(
    animator: &mut Animator,
    surface: &mut S,
    sink: &dyn EventSink,
    player: &mut dyn CuePlayer,
) -> Option<Frame>
where
    S: Surface + ?Sized,
{
    let scroll = surface.scroll_state()?;
    let frame = animator.frame(&scroll);

    for layer in &frame.layers {
        surface.apply(layer);
    }
    for &cue in &frame.cues {
        player.play(cue);
    }
    if let Some(change) = frame.sticky {
        let shown = change == StickyChange::Shown;
        surface.set_sticky_visible(shown);
        if shown {
            sink.track(AnalyticsEvent::new("sticky_shown"));
        }
    }
    Some(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingSink;
    use crate::animation::layer::LayerRole;
    use crate::animation::variant::PageVariant;
    use std::collections::HashMap;

    const VH: f64 = 800.0;

    fn scroll(scroll_y: f64) -> ScrollState {
        ScrollState {
            scroll_y,
            viewport_height: VH,
            hero_top: 0.0,
            hero_height: 2.0 * VH,
            order_top: Some(6.0 * VH),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[derive(Default)]
    struct FakeSurface {
        scroll: Option<ScrollState>,
        applied: HashMap<&'static str, LayerFrame>,
        sticky_writes: Vec<bool>,
    }

    impl Surface for FakeSurface {
        fn scroll_state(&self) -> Option<ScrollState> {
            self.scroll
        }

        fn apply(&mut self, layer: &LayerFrame) {
            self.applied.insert(layer.id, layer.clone());
        }

        fn set_sticky_visible(&mut self, visible: bool) {
            self.sticky_writes.push(visible);
        }
    }

    #[derive(Default)]
    struct FakePlayer(Vec<Cue>);

    impl CuePlayer for FakePlayer {
        fn play(&mut self, cue: Cue) {
            self.0.push(cue);
        }
    }

    #[test]
    fn everything_stays_in_range() {
        for variant in PageVariant::ALL {
            let mut animator = Animator::new(variant.spec());
            for step in 0..=600 {
                let frame = animator.frame(&scroll(step as f64 * 4.0));
                for v in [frame.t, frame.phases.crack, frame.phases.open, frame.phases.separate] {
                    assert!((0.0..=1.0).contains(&v));
                }
                for layer in &frame.layers {
                    let s = layer.state;
                    assert!((0.0..=1.0).contains(&s.opacity), "{} {}", layer.id, s.opacity);
                    assert!((0.0..=1.0).contains(&s.scale_x), "{} {}", layer.id, s.scale_x);
                    assert!((0.0..=1.0).contains(&s.scale_y), "{} {}", layer.id, s.scale_y);
                    for fragment in &layer.fragments {
                        assert!((0.0..=1.0).contains(&fragment.scale_x));
                    }
                }
            }
        }
    }

    #[test]
    fn same_offset_same_layers() {
        for variant in PageVariant::ALL {
            let mut animator = Animator::new(variant.spec());
            for y in [0.0, 130.0, 420.0, 777.0, 5000.0] {
                let first = animator.frame(&scroll(y)).layers;
                let second = animator.frame(&scroll(y)).layers;
                assert_eq!(first, second);
                let spec = variant.spec();
                assert_eq!(first, evaluate(&spec, progress(&scroll(y), spec.scroll_span)));
            }
        }
    }

    #[test]
    fn closed_at_the_top_open_at_the_bottom() {
        for variant in PageVariant::ALL {
            let spec = variant.spec();

            for layer in evaluate(&spec, 0.0) {
                match layer.role {
                    LayerRole::WholeObject => assert_eq!(layer.state.opacity, 1.0, "{}", spec.name),
                    LayerRole::Shell => assert!(layer.state.has_identity_transform(), "{}", spec.name),
                    LayerRole::Inside | LayerRole::Navigation => {
                        assert_eq!(layer.state.opacity, 0.0, "{} {}", spec.name, layer.id)
                    }
                    _ => {}
                }
            }

            for layer in evaluate(&spec, 1.0) {
                match layer.role {
                    LayerRole::WholeObject => assert_eq!(layer.state.opacity, 0.0, "{}", spec.name),
                    LayerRole::Inside | LayerRole::Navigation => {
                        let s = layer.state;
                        assert!(close(s.opacity, 1.0), "{} {}", spec.name, layer.id);
                        assert!(close(s.translate_x, 0.0) && close(s.translate_y, 0.0));
                        assert!(close(s.scale_x, 1.0) && close(s.scale_y, 1.0));
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn classic_matches_the_hand_tuned_curves() {
        let spec = PageVariant::Classic.spec();
        let layers = evaluate(&spec, 0.43);
        let get = |id: &str| layers.iter().find(|l| l.id == id).map(|l| l.state);

        let whole = get("wholeEgg").unwrap();
        assert_eq!(whole.opacity, 0.0);

        let left = get("shellLeft").unwrap();
        let right = get("shellRight").unwrap();
        assert!(close(left.translate_x, -75.0) && close(right.translate_x, 75.0));
        assert!(close(left.rotate, -12.0) && close(right.rotate, 12.0));
        assert!(close(left.translate_y, -17.5));
        assert_eq!(left.opacity, 1.0);

        let inside = get("inside").unwrap();
        assert_eq!(inside.opacity, 1.0);
    }

    #[test]
    fn tick_skips_frames_without_a_hero() {
        let mut animator = Animator::new(PageVariant::Classic.spec());
        let mut surface = FakeSurface::default();
        let sink = RecordingSink::default();
        let mut player = FakePlayer::default();

        assert!(tick(&mut animator, &mut surface, &sink, &mut player).is_none());
        assert!(surface.applied.is_empty());

        surface.scroll = Some(scroll(0.0));
        let frame = tick(&mut animator, &mut surface, &sink, &mut player).unwrap();
        assert_eq!(surface.applied.len(), frame.layers.len());
    }

    #[test]
    fn sticky_shown_fires_on_the_rising_edge_only() {
        let mut animator = Animator::new(PageVariant::Classic.spec());
        let mut surface = FakeSurface::default();
        let sink = RecordingSink::default();
        let mut player = FakePlayer::default();

        // shows past 1600 - 520 = 1080, hides past 4800 + 120 - 800 = 4120
        for y in [0.0, 1100.0, 1200.0, 2000.0, 4200.0, 4300.0, 3000.0, 3100.0] {
            surface.scroll = Some(scroll(y));
            tick(&mut animator, &mut surface, &sink, &mut player);
        }

        assert_eq!(surface.sticky_writes, vec![false, true, false, true]);
        assert_eq!(sink.names(), vec!["sticky_shown", "sticky_shown"]);
    }

    #[test]
    fn hatch_plays_each_cue_once_per_pass() {
        let mut animator = Animator::new(PageVariant::Hatch.spec());
        let mut surface = FakeSurface::default();
        let sink = RecordingSink::default();
        let mut player = FakePlayer::default();

        let span = VH * 1.05;
        let pass: Vec<f64> = (0..=50).map(|i| span * i as f64 / 50.0).collect();

        for &y in pass.iter().chain(pass.iter().rev()).chain(pass.iter()) {
            surface.scroll = Some(scroll(y));
            tick(&mut animator, &mut surface, &sink, &mut player);
        }

        assert_eq!(player.0, vec![Cue::Crack, Cue::Drop, Cue::Crack, Cue::Drop]);
    }
}
