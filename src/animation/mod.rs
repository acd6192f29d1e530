//! Scroll-driven reveal of the hero egg.
//!
//! Progress through the hero is mapped through per-layer easing tracks into
//! opacity and transforms. Everything here is pure arithmetic over a
//! [`ScrollState`]; the browser side lives in [`crate::dom`].

pub mod animator;
pub mod cue;
pub mod easing;
pub mod layer;
pub mod progress;
pub mod sticky;
pub mod variant;

pub use animator::{tick, Animator, Surface};
pub use cue::Cue;
pub use layer::{LayerFrame, LayerRole};
pub use progress::ScrollState;
pub use variant::{PageVariant, VariantSpec};
