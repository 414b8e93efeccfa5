//! CSV export of the flat food table.
//!
//! One header row (descriptive columns, then the curated nutrient columns in
//! table order) followed by one row per food item.

mod csv_writer;
mod error;

pub use csv_writer::{write_denormalized, write_denormalized_csv};
pub use error::{OutputError, Result};
