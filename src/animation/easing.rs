/// Clamp `v` into `[a, b]`.
pub fn clamp(v: f64, a: f64, b: f64) -> f64 {
    b.min(a.max(v))
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `x` inside the window `[a, b]`, saturated to `[0, 1]`.
pub fn window(a: f64, b: f64, x: f64) -> f64 {
    if b <= a {
        return if x >= b { 1.0 } else { 0.0 };
    }
    clamp((x - a) / (b - a), 0.0, 1.0)
}

/// Cubic Hermite ease over the window `[a, b]`.
pub fn smoothstep(a: f64, b: f64, x: f64) -> f64 {
    let t = window(a, b, x);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    Smooth,
}

impl Easing {
    pub fn apply(self, a: f64, b: f64, x: f64) -> f64 {
        match self {
            Easing::Linear => window(a, b, x),
            Easing::Smooth => smoothstep(a, b, x),
        }
    }
}
