use std::f64::consts::PI;
use std::fmt;

use super::Measurable;
use crate::error::{check_dimension, check_measurements, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a circle, rejecting a non-positive or non-finite radius and
    /// radii whose area leaves the `f64` range.
    pub fn new(radius: f64) -> Result<Self> {
        let circle = Self {
            radius: check_dimension("radius", radius)?,
        };
        check_measurements(circle.area(), circle.perimeter())?;
        Ok(circle)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Measurable for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.radius)
    }
}
