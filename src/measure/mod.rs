//! The measurement dispatcher.
//!
//! Everything here is written against [`Measurable`] only, so a rectangle,
//! a circle, a [`Shape`](crate::shape::Shape) or a `&dyn Measurable` all go
//! through the same code.

use std::io::{self, Write};

use tracing::debug;

use crate::shape::Measurable;

/// Area and perimeter of one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub area: f64,
    pub perimeter: f64,
}

impl Measurement {
    pub fn of<M: Measurable + ?Sized>(shape: &M) -> Self {
        Self {
            area: shape.area(),
            perimeter: shape.perimeter(),
        }
    }
}

/// Writes the shape, its area and its perimeter to stdout, one per line.
pub fn measure<M: Measurable + ?Sized>(shape: &M) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    measure_to(&mut out, shape)
}

/// Writes the shape, its area and its perimeter to `out`, one per line.
pub fn measure_to<W: Write, M: Measurable + ?Sized>(out: &mut W, shape: &M) -> io::Result<()> {
    let Measurement { area, perimeter } = Measurement::of(shape);
    debug!(shape = %shape, area, perimeter, "measured shape");

    writeln!(out, "{}", shape)?;
    writeln!(out, "{}", area)?;
    writeln!(out, "{}", perimeter)?;
    Ok(())
}
