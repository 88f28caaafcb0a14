pub mod services;
pub mod tracker;

pub use tracker::Tracker;
