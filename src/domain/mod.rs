//! Domain models for season-scoped crop finance records.

pub mod entry;
pub mod season;

pub use entry::{validate_crop_name, CropNameError, Outcome, SeasonEntry, MAX_CROP_NAME_LEN};
pub use season::Season;
