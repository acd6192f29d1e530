use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Mailbox the preorder mailto link is addressed to.
pub const ORDER_EMAIL: &str = "ORDINI_EMAIL@example.com";

pub const PREORDER_STORAGE_KEY: &str = "uova_preorders";
pub const PREORDER_HISTORY_CAP: usize = 20;

pub const PACKS: [&str; 3] = ["6", "11", "24"];
pub const DEFAULT_PACK: &str = "11";
pub const DEFAULT_QTY: &str = "1";

/// Sticky CTA appears once this much of a viewport is left of the hero.
pub const STICKY_SHOW_VIEWPORT_FRACTION: f64 = 0.65;
/// ...and hides again this close to the order section.
pub const STICKY_ORDER_MARGIN_PX: f64 = 120.0;

/// Element id of the order section.
pub const ORDER_SECTION_ID: &str = "ordina";
pub const STICKY_CTA_ID: &str = "stickyCta";

pub const FAQ_QUESTION_TRACK_LEN: usize = 60;
