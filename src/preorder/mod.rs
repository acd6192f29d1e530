//! Preorder capture: local history, mail fallback and the form model.

pub mod form;
pub mod history;
pub mod mailto;
pub mod pack;
pub mod record;

pub use form::{Field, PreorderForm};
pub use history::LocalStore;
pub use pack::{select_pack, PackSource};
