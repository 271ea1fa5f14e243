pub mod cli;
pub mod error;
pub mod measure;
pub mod shape;

pub use error::ShapeError;
pub use measure::{measure, measure_to, Measurement};
pub use shape::{Circle, Measurable, Rectangle, Shape};
