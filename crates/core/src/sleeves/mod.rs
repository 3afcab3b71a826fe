//! Sleeves - the closed set of independently tracked holding groups.

mod sleeve_model;

pub use sleeve_model::Sleeve;
