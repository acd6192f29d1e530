use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::cue::{Cue, CueSpec};
use super::layer::{Driver, Envelope, FragmentSpec, LayerRole, LayerSpec, Property};

/// Declarative description of one page's reveal sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantSpec {
    pub name: &'static str,
    /// Element id of the hero region progress is measured against.
    pub hero_id: &'static str,
    /// Scroll distance of the full sequence, in viewport heights.
    pub scroll_span: f64,
    pub layers: Vec<LayerSpec>,
    pub cues: Vec<CueSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageVariant {
    Classic,
    Hatch,
    Showcase,
}

impl PageVariant {
    pub const ALL: [PageVariant; 3] = [PageVariant::Classic, PageVariant::Hatch, PageVariant::Showcase];

    pub fn spec(self) -> VariantSpec {
        match self {
            PageVariant::Classic => classic(),
            PageVariant::Hatch => hatch(),
            PageVariant::Showcase => showcase(),
        }
    }

    pub fn has_sound(self) -> bool {
        matches!(self, PageVariant::Hatch)
    }
}

/// Scatter parameters for `count` shell fragments.
///
/// Seeded so a page renders the same burst on every visit.
pub fn scatter(count: usize, seed: u64) -> Vec<FragmentSpec> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let distance = rng.gen_range(60.0..220.0);
            FragmentSpec {
                dx: angle.cos() * distance,
                dy: angle.sin() * distance - 40.0,
                rotate: rng.gen_range(-180.0..180.0),
                scale: rng.gen_range(0.4..1.0),
            }
        })
        .collect()
}

fn nav_layers(window: Envelope) -> Vec<LayerSpec> {
    vec![
        LayerSpec::new("map", LayerRole::Navigation)
            .track(Property::Opacity, window, 0.0, 1.0)
            .track(Property::TranslateY, window, 8.0, 0.0),
        LayerSpec::new("cards", LayerRole::Navigation)
            .prefix("translateX(-50%)")
            .track(Property::Opacity, window, 0.0, 1.0)
            .track(Property::TranslateY, window, 10.0, 0.0)
            .track(Property::Scale, window, 0.98, 1.0)
            .interactive_above(0.15),
    ]
}

/// Single continuous sequence: the egg fades into two shells that swing open.
fn classic() -> VariantSpec {
    let open = Envelope::linear(0.18, 0.68);
    let inside = Envelope::linear(0.22, 0.42);

    let shell = |id, dir: f64| {
        LayerSpec::new(id, LayerRole::Shell)
            .track(Property::Opacity, Envelope::linear(0.14, 0.26), 0.0, 1.0)
            .track(Property::Opacity, Envelope::linear(0.74, 0.90), 1.0, 0.0)
            .track(Property::Opacity, Envelope::linear(0.72, 0.84), 1.0, 0.0)
            .track(Property::TranslateX, open, 0.0, 150.0 * dir)
            .track(Property::TranslateY, open, 0.0, -35.0)
            .track(Property::Rotate, open, 0.0, 24.0 * dir)
    };

    let mut layers = vec![
        LayerSpec::new("wholeEgg", LayerRole::WholeObject)
            .track(Property::Opacity, Envelope::linear(0.14, 0.32), 1.0, 0.0),
        shell("shellLeft", -1.0),
        shell("shellRight", 1.0),
        LayerSpec::new("inside", LayerRole::Inside)
            .track(Property::Opacity, inside, 0.0, 1.0)
            .track(Property::TranslateY, inside, 10.0, 0.0)
            .track(Property::Scale, inside, 0.98, 1.0),
    ];
    layers.extend(nav_layers(Envelope::linear(0.70, 0.88)));

    VariantSpec {
        name: "classic",
        hero_id: "hero",
        scroll_span: 0.95,
        layers,
        cues: Vec::new(),
    }
}

/// Three staged phases (crack, open, separate) with fragments and sound.
fn hatch() -> VariantSpec {
    let halves = Envelope::smooth(0.0, 1.0).on(Driver::Open);
    let inside = Envelope::smooth(0.45, 1.0).on(Driver::Open);

    let mut layers = vec![
        LayerSpec::new("wholeEgg", LayerRole::WholeObject)
            .track(Property::Opacity, Envelope::smooth(0.6, 1.0).on(Driver::Crack), 1.0, 0.0)
            .track(Property::Scale, Envelope::smooth(0.0, 0.6).on(Driver::Crack), 1.0, 0.97),
        LayerSpec::new("crack", LayerRole::CrackOverlay)
            .track(Property::Opacity, Envelope::smooth(0.1, 0.6).on(Driver::Crack), 0.0, 1.0)
            .track(Property::Opacity, Envelope::smooth(0.2, 0.5).on(Driver::Open), 1.0, 0.0),
        LayerSpec::new("fragments", LayerRole::Fragments)
            .track(Property::Opacity, Envelope::smooth(0.0, 0.3).on(Driver::Open), 0.0, 1.0)
            .track(Property::Opacity, Envelope::smooth(0.5, 1.0).on(Driver::Separate), 1.0, 0.0)
            .dispersal(Envelope::smooth(0.1, 1.0).on(Driver::Open), scatter(14, 0x0e66)),
        LayerSpec::new("shellTop", LayerRole::Shell)
            .track(Property::Opacity, Envelope::smooth(0.7, 1.0).on(Driver::Crack), 0.0, 1.0)
            .track(Property::Opacity, Envelope::smooth(0.6, 1.0).on(Driver::Separate), 1.0, 0.0)
            .track(Property::TranslateY, halves, 0.0, -120.0)
            .track(Property::Rotate, halves, 0.0, -18.0)
            .track(Property::TranslateX, Envelope::smooth(0.0, 1.0).on(Driver::Separate), 0.0, -40.0),
        LayerSpec::new("shellBottom", LayerRole::Shell)
            .track(Property::Opacity, Envelope::smooth(0.7, 1.0).on(Driver::Crack), 0.0, 1.0)
            .track(Property::Opacity, Envelope::smooth(0.6, 1.0).on(Driver::Separate), 1.0, 0.0)
            .track(Property::TranslateY, halves, 0.0, 60.0)
            .track(Property::Rotate, halves, 0.0, 8.0)
            .track(Property::TranslateX, Envelope::smooth(0.0, 1.0).on(Driver::Separate), 0.0, 40.0),
        LayerSpec::new("inside", LayerRole::Inside)
            .track(Property::Opacity, inside, 0.0, 1.0)
            .track(Property::TranslateY, inside, 20.0, 0.0)
            .track(Property::Scale, inside, 0.9, 1.0),
    ];
    layers.extend(nav_layers(Envelope::smooth(0.3, 0.9).on(Driver::Separate)));

    VariantSpec {
        name: "hatch",
        hero_id: "hero",
        scroll_span: 1.05,
        layers,
        cues: vec![
            CueSpec::on_phase(Cue::Crack, Driver::Crack),
            CueSpec::on_phase(Cue::Drop, Driver::Separate),
        ],
    }
}

/// A framed stage that settles back while the shells part sideways.
fn showcase() -> VariantSpec {
    let open = Envelope::smooth(0.2, 0.7);
    let inside = Envelope::smooth(0.3, 0.6);
    let reveal = Envelope::smooth(0.68, 0.9);

    let shell = |id, dir: f64| {
        LayerSpec::new(id, LayerRole::Shell)
            .track(Property::Opacity, Envelope::smooth(0.12, 0.24), 0.0, 1.0)
            .track(Property::Opacity, Envelope::smooth(0.7, 0.86), 1.0, 0.0)
            .track(Property::TranslateX, open, 0.0, 180.0 * dir)
            .track(Property::Rotate, open, 0.0, 30.0 * dir)
            .track(Property::ScaleY, open, 1.0, 0.94)
    };

    VariantSpec {
        name: "showcase",
        hero_id: "hero",
        scroll_span: 1.10,
        layers: vec![
            LayerSpec::new("stage", LayerRole::Container)
                .track(Property::Scale, Envelope::smooth(0.0, 0.5), 1.0, 0.92)
                .track(Property::TranslateY, Envelope::smooth(0.0, 0.5), 0.0, -24.0),
            LayerSpec::new("wholeEgg", LayerRole::WholeObject)
                .track(Property::Opacity, Envelope::smooth(0.12, 0.3), 1.0, 0.0),
            shell("shellLeft", -1.0),
            shell("shellRight", 1.0),
            LayerSpec::new("inside", LayerRole::Inside)
                .track(Property::Opacity, inside, 0.0, 1.0)
                .track(Property::Scale, inside, 0.96, 1.0),
            LayerSpec::new("cards", LayerRole::Navigation)
                .prefix("translateX(-50%)")
                .track(Property::Opacity, reveal, 0.0, 1.0)
                .track(Property::TranslateY, reveal, 14.0, 0.0)
                .interactive_above(0.15),
        ],
        cues: Vec::new(),
    }
}
