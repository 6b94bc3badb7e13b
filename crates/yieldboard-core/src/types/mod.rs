//! Domain types for the instrument catalog.

mod instrument;
mod risk;

pub use instrument::{InstrumentId, InstrumentRecord};
pub use risk::RiskLevel;
