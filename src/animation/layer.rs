use super::easing::{clamp, lerp, Easing};
use super::progress::Phases;

/// Which progress value a track reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Driver {
    Progress,
    Crack,
    Open,
    Separate,
}

impl Driver {
    pub fn read(self, t: f64, phases: &Phases) -> f64 {
        match self {
            Driver::Progress => t,
            Driver::Crack => phases.crack,
            Driver::Open => phases.open,
            Driver::Separate => phases.separate,
        }
    }
}

/// An eased window over one driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub driver: Driver,
    pub start: f64,
    pub end: f64,
    pub easing: Easing,
}

impl Envelope {
    pub const fn linear(start: f64, end: f64) -> Self {
        Self { driver: Driver::Progress, start, end, easing: Easing::Linear }
    }

    pub const fn smooth(start: f64, end: f64) -> Self {
        Self { driver: Driver::Progress, start, end, easing: Easing::Smooth }
    }

    pub const fn on(mut self, driver: Driver) -> Self {
        self.driver = driver;
        self
    }

    pub fn eval(&self, t: f64, phases: &Phases) -> f64 {
        self.easing.apply(self.start, self.end, self.driver.read(t, phases))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    /// Degrees.
    Rotate,
    Scale,
    ScaleX,
    ScaleY,
}

impl Property {
    pub fn is_transform(self) -> bool {
        !matches!(self, Property::Opacity)
    }
}

/// Maps an envelope onto one visual property, interpolating `from -> to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub envelope: Envelope,
    pub property: Property,
    pub from: f64,
    pub to: f64,
}

impl Track {
    pub const fn new(property: Property, envelope: Envelope, from: f64, to: f64) -> Self {
        Self { envelope, property, from, to }
    }

    pub fn value(&self, t: f64, phases: &Phases) -> f64 {
        lerp(self.from, self.to, self.envelope.eval(t, phases))
    }
}

/// Opacity and 2-D transform of one layer for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerVisualState {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for LayerVisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LayerVisualState {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        rotate: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Folds one track value in. Opacity and scale multiply, offsets add.
    pub fn combine(&mut self, property: Property, value: f64) {
        match property {
            Property::Opacity => self.opacity *= value,
            Property::TranslateX => self.translate_x += value,
            Property::TranslateY => self.translate_y += value,
            Property::Rotate => self.rotate += value,
            Property::Scale => {
                self.scale_x *= value;
                self.scale_y *= value;
            }
            Property::ScaleX => self.scale_x *= value,
            Property::ScaleY => self.scale_y *= value,
        }
    }

    pub fn has_identity_transform(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.rotate == 0.0
            && self.scale_x == 1.0
            && self.scale_y == 1.0
    }

    pub fn css_opacity(&self) -> String {
        format!("{:.3}", self.opacity)
    }

    pub fn css_transform(&self, prefix: Option<&str>) -> String {
        let body = format!(
            "translateX({:.2}px) translateY({:.2}px) rotate({:.2}deg) scale({:.4}, {:.4})",
            self.translate_x, self.translate_y, self.rotate, self.scale_x, self.scale_y
        );
        match prefix {
            Some(prefix) => format!("{} {}", prefix, body),
            None => body,
        }
    }
}

/// Static dispersal parameters for one fragment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FragmentSpec {
    pub dx: f64,
    pub dy: f64,
    pub rotate: f64,
    pub scale: f64,
}

impl FragmentSpec {
    pub fn at(&self, spread: f64) -> LayerVisualState {
        LayerVisualState {
            translate_x: self.dx * spread,
            translate_y: self.dy * spread,
            rotate: self.rotate * spread,
            scale_x: lerp(1.0, self.scale, spread),
            scale_y: lerp(1.0, self.scale, spread),
            ..LayerVisualState::IDENTITY
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dispersal {
    pub spread: Envelope,
    pub fragments: Vec<FragmentSpec>,
}

/// What a layer stands for in the reveal sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerRole {
    WholeObject,
    CrackOverlay,
    Fragments,
    Shell,
    Inside,
    Container,
    Navigation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayerSpec {
    /// Element id on the page.
    pub id: &'static str,
    pub role: LayerRole,
    pub tracks: Vec<Track>,
    /// Written before the animated transform, e.g. a centering offset.
    pub transform_prefix: Option<&'static str>,
    /// Pointer events are enabled once opacity exceeds this.
    pub interactive_above: Option<f64>,
    pub dispersal: Option<Dispersal>,
}

impl LayerSpec {
    pub fn new(id: &'static str, role: LayerRole) -> Self {
        Self {
            id,
            role,
            tracks: Vec::new(),
            transform_prefix: None,
            interactive_above: None,
            dispersal: None,
        }
    }

    pub fn track(mut self, property: Property, envelope: Envelope, from: f64, to: f64) -> Self {
        self.tracks.push(Track::new(property, envelope, from, to));
        self
    }

    pub fn prefix(mut self, prefix: &'static str) -> Self {
        self.transform_prefix = Some(prefix);
        self
    }

    pub fn interactive_above(mut self, threshold: f64) -> Self {
        self.interactive_above = Some(threshold);
        self
    }

    pub fn dispersal(mut self, spread: Envelope, fragments: Vec<FragmentSpec>) -> Self {
        self.dispersal = Some(Dispersal { spread, fragments });
        self
    }

    /// False for opacity-only layers, whose stylesheet transform is left alone.
    pub fn animates_transform(&self) -> bool {
        self.transform_prefix.is_some() || self.tracks.iter().any(|track| track.property.is_transform())
    }

    pub fn evaluate(&self, t: f64, phases: &Phases) -> LayerFrame {
        let mut state = LayerVisualState::IDENTITY;
        for track in &self.tracks {
            state.combine(track.property, track.value(t, phases));
        }
        state.opacity = clamp(state.opacity, 0.0, 1.0);

        let fragments = match &self.dispersal {
            Some(dispersal) => {
                let spread = dispersal.spread.eval(t, phases);
                dispersal.fragments.iter().map(|f| f.at(spread)).collect()
            }
            None => Vec::new(),
        };

        LayerFrame {
            id: self.id,
            role: self.role,
            state,
            transform_prefix: self.transform_prefix,
            animates_transform: self.animates_transform(),
            interactive: self.interactive_above.map(|threshold| state.opacity > threshold),
            fragments,
        }
    }
}

/// A layer's computed output for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerFrame {
    pub id: &'static str,
    pub role: LayerRole,
    pub state: LayerVisualState,
    pub transform_prefix: Option<&'static str>,
    pub animates_transform: bool,
    pub interactive: Option<bool>,
    pub fragments: Vec<LayerVisualState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> LayerSpec {
        LayerSpec::new("shellLeft", LayerRole::Shell)
            .track(Property::Opacity, Envelope::linear(0.14, 0.26), 0.0, 1.0)
            .track(Property::Opacity, Envelope::linear(0.74, 0.90), 1.0, 0.0)
            .track(Property::TranslateX, Envelope::linear(0.18, 0.68), 0.0, -150.0)
            .track(Property::Rotate, Envelope::linear(0.18, 0.68), 0.0, -24.0)
    }

    #[test]
    fn opacity_tracks_multiply() {
        let phases = Phases::default();
        let frame = shell().evaluate(0.5, &phases);
        assert_eq!(frame.state.opacity, 1.0);
        let frame = shell().evaluate(0.82, &phases);
        assert!((frame.state.opacity - 0.5).abs() < 1e-9);
        let frame = shell().evaluate(0.0, &phases);
        assert_eq!(frame.state.opacity, 0.0);
    }

    #[test]
    fn transforms_interpolate_inside_their_window() {
        let phases = Phases::default();
        let frame = shell().evaluate(0.43, &phases);
        assert!((frame.state.translate_x + 75.0).abs() < 1e-9);
        assert!((frame.state.rotate + 12.0).abs() < 1e-9);
        assert!(shell().evaluate(0.1, &phases).state.has_identity_transform());
    }

    #[test]
    fn interactivity_follows_opacity() {
        let cards = LayerSpec::new("cards", LayerRole::Navigation)
            .track(Property::Opacity, Envelope::linear(0.70, 0.88), 0.0, 1.0)
            .interactive_above(0.15);
        let phases = Phases::default();
        assert_eq!(cards.evaluate(0.70, &phases).interactive, Some(false));
        assert_eq!(cards.evaluate(0.88, &phases).interactive, Some(true));
        assert_eq!(shell().evaluate(0.9, &phases).interactive, None);
    }

    #[test]
    fn fragments_disperse_with_the_shared_spread() {
        let fragments = vec![
            FragmentSpec { dx: 40.0, dy: -20.0, rotate: 90.0, scale: 0.5 },
            FragmentSpec { dx: -10.0, dy: 60.0, rotate: -30.0, scale: 1.2 },
        ];
        let cluster = LayerSpec::new("fragments", LayerRole::Fragments)
            .dispersal(Envelope::linear(0.0, 1.0), fragments);
        let phases = Phases::default();

        let closed = cluster.evaluate(0.0, &phases);
        assert!(closed.fragments.iter().all(LayerVisualState::has_identity_transform));

        let half = cluster.evaluate(0.5, &phases);
        assert_eq!(half.fragments[0].translate_x, 20.0);
        assert_eq!(half.fragments[0].scale_x, 0.75);
        assert_eq!(half.fragments[1].rotate, -15.0);
    }

    #[test]
    fn css_keeps_the_prefix_first() {
        let state = LayerVisualState { translate_y: 10.0, scale_x: 0.98, scale_y: 0.98, ..Default::default() };
        assert_eq!(
            state.css_transform(Some("translateX(-50%)")),
            "translateX(-50%) translateX(0.00px) translateY(10.00px) rotate(0.00deg) scale(0.9800, 0.9800)"
        );
        assert_eq!(LayerVisualState { opacity: 0.12345, ..Default::default() }.css_opacity(), "0.123");
    }

    #[test]
    fn opacity_only_layers_keep_their_transform() {
        let fade = LayerSpec::new("wholeEgg", LayerRole::WholeObject)
            .track(Property::Opacity, Envelope::linear(0.14, 0.32), 1.0, 0.0);
        assert!(!fade.evaluate(0.5, &Phases::default()).animates_transform);

        assert!(shell().evaluate(0.5, &Phases::default()).animates_transform);
        let centered = LayerSpec::new("cards", LayerRole::Navigation).prefix("translateX(-50%)");
        assert!(centered.animates_transform());
    }
}
