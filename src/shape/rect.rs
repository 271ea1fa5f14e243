use std::fmt;

use super::Measurable;
use crate::error::{check_dimension, check_measurements, Result};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a rectangle, rejecting non-positive or non-finite sides and
    /// sides whose area or perimeter leaves the `f64` range.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let rect = Self {
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
        };
        check_measurements(rect.area(), rect.perimeter())?;
        Ok(rect)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Measurable for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{} {}}}", self.width, self.height)
    }
}
