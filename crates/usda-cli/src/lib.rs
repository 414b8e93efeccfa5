//! CLI library components for the SR26 denormalizer.

pub mod logging;
pub mod pipeline;
