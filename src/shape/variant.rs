use std::fmt;

use super::{Circle, Measurable, Rectangle};

/// The closed set of shapes, for picking a variant at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Measurable for Shape {
    fn area(&self) -> f64 {
        match self {
            Shape::Rectangle(rect) => rect.area(),
            Shape::Circle(circle) => circle.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            Shape::Rectangle(rect) => rect.perimeter(),
            Shape::Circle(circle) => circle.perimeter(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Rectangle(rect) => fmt::Display::fmt(rect, f),
            Shape::Circle(circle) => fmt::Display::fmt(circle, f),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
