//! Shapes that can be measured.
//!
//! [`Measurable`] is the capability every shape provides. [`Rectangle`] and
//! [`Circle`] implement it directly, and [`Shape`] is the closed enum over
//! both for callers that choose a variant at runtime.

use std::fmt;

pub mod circle;
pub mod rect;
pub mod variant;

pub use circle::Circle;
pub use rect::Rectangle;
pub use variant::Shape;

/// Anything with an area and a perimeter.
///
/// The `Display` bound gives the dispatcher a textual form to print.
pub trait Measurable: fmt::Display {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn perimeter(&self) -> f64 {
        (**self).perimeter()
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn perimeter(&self) -> f64 {
        (**self).perimeter()
    }
}
