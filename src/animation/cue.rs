use super::layer::Driver;
use super::progress::Phases;

/// Sound effects the reveal can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Crack,
    Drop,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::Crack => "crack",
            Cue::Drop => "drop",
        }
    }
}

/// Fire once per upward crossing of `fire_at`, rearm only below `rearm_below`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CueSpec {
    pub cue: Cue,
    pub driver: Driver,
    pub fire_at: f64,
    pub rearm_driver: Driver,
    pub rearm_below: f64,
}

impl CueSpec {
    /// Phase threshold 0.55, rearmed once overall progress is back under 0.05.
    pub const fn on_phase(cue: Cue, driver: Driver) -> Self {
        Self {
            cue,
            driver,
            fire_at: 0.55,
            rearm_driver: Driver::Progress,
            rearm_below: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CueState {
    #[default]
    Armed,
    Fired,
}

impl CueState {
    /// Armed -> Fired when the trigger value reaches the threshold.
    pub fn fire(self, value: f64, threshold: f64) -> (Self, bool) {
        match self {
            CueState::Armed if value >= threshold => (CueState::Fired, true),
            other => (other, false),
        }
    }

    /// Fired -> Armed once the rearm value drops under its bound.
    pub fn rearm(self, value: f64, bound: f64) -> Self {
        match self {
            CueState::Fired if value < bound => CueState::Armed,
            other => other,
        }
    }
}

/// A cue paired with its two-state machine.
#[derive(Clone, Debug, PartialEq)]
pub struct CueTrigger {
    pub spec: CueSpec,
    pub state: CueState,
}

impl CueTrigger {
    pub fn new(spec: CueSpec) -> Self {
        Self { spec, state: CueState::Armed }
    }

    /// Advances the machine. Returns true on the frame the cue should play.
    pub fn step(&mut self, t: f64, phases: &Phases) -> bool {
        let rearm_value = self.spec.rearm_driver.read(t, phases);
        self.state = self.state.rearm(rearm_value, self.spec.rearm_below);

        let value = self.spec.driver.read(t, phases);
        let (next, fired) = self.state.fire(value, self.spec.fire_at);
        self.state = next;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crack_trigger() -> CueTrigger {
        CueTrigger::new(CueSpec::on_phase(Cue::Crack, Driver::Crack))
    }

    fn drive(trigger: &mut CueTrigger, ts: &[f64]) -> usize {
        ts.iter()
            .filter(|&&t| trigger.step(t, &Phases::from_progress(t)))
            .count()
    }

    #[test]
    fn fires_once_per_upward_crossing() {
        let mut trigger = crack_trigger();
        // crack phase reaches 0.55 at t ~ 0.183
        let fired = drive(&mut trigger, &[0.0, 0.1, 0.19, 0.25, 0.5, 0.9, 1.0]);
        assert_eq!(fired, 1);
        assert_eq!(trigger.state, CueState::Fired);
    }

    #[test]
    fn jitter_above_the_rearm_band_does_not_refire() {
        let mut trigger = crack_trigger();
        let fired = drive(&mut trigger, &[0.2, 0.1, 0.2, 0.06, 0.3, 0.05, 0.4]);
        assert_eq!(fired, 1);
    }

    #[test]
    fn scrolling_back_to_the_top_rearms() {
        let mut trigger = crack_trigger();
        let fired = drive(&mut trigger, &[0.0, 0.3, 0.04, 0.3]);
        assert_eq!(fired, 2);
    }

    #[test]
    fn named_transitions() {
        assert_eq!(CueState::Armed.fire(0.54, 0.55), (CueState::Armed, false));
        assert_eq!(CueState::Armed.fire(0.55, 0.55), (CueState::Fired, true));
        assert_eq!(CueState::Fired.fire(0.9, 0.55), (CueState::Fired, false));
        assert_eq!(CueState::Fired.rearm(0.05, 0.05), CueState::Fired);
        assert_eq!(CueState::Fired.rearm(0.049, 0.05), CueState::Armed);
        assert_eq!(CueState::Armed.rearm(0.0, 0.05), CueState::Armed);
    }
}
