//! Presentation-side input models

mod range_input;

pub use range_input::BoundInputs;
