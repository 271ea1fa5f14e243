use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::measure::{measure, measure_to};
use crate::shape::{Circle, Rectangle, Shape};

#[derive(Parser)]
#[clap(name = "measure")]
#[clap(bin_name = "measure")]
#[clap(about = "Print the area and perimeter of shapes", long_about = None)]
pub struct Cli {
    /// Log more detail to stderr
    #[clap(short, long, global = true)]
    pub verbose: bool,
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Default)]
pub enum Commands {
    /// Measure a 3 x 4 rectangle and a circle of radius 5
    #[default]
    Demo,
    /// Measure a rectangle
    #[clap(arg_required_else_help = true)]
    Rect {
        #[clap(long, allow_hyphen_values = true)]
        width: f64,
        #[clap(long, allow_hyphen_values = true)]
        height: f64,
    },
    /// Measure a circle
    #[clap(arg_required_else_help = true)]
    Circle {
        #[clap(long, allow_hyphen_values = true)]
        radius: f64,
    },
}

impl Commands {
    /// Builds the shapes this command measures, in output order.
    pub fn shapes(&self) -> crate::error::Result<Vec<Shape>> {
        let shapes: Vec<Shape> = match *self {
            Commands::Demo => vec![
                Rectangle::new(3.0, 4.0)?.into(),
                Circle::new(5.0)?.into(),
            ],
            Commands::Rect { width, height } => vec![Rectangle::new(width, height)?.into()],
            Commands::Circle { radius } => vec![Circle::new(radius)?.into()],
        };
        Ok(shapes)
    }
}

/// Measures every shape of `command`, writing the report to stdout.
pub fn run(command: &Commands) -> anyhow::Result<()> {
    for shape in &checked_shapes(command)? {
        measure(shape).context("failed to write measurement")?;
    }
    Ok(())
}

/// Like [`run`], writing the report to `out`.
pub fn run_to<W: Write>(command: &Commands, out: &mut W) -> anyhow::Result<()> {
    for shape in &checked_shapes(command)? {
        measure_to(out, shape).context("failed to write measurement")?;
    }
    Ok(())
}

fn checked_shapes(command: &Commands) -> anyhow::Result<Vec<Shape>> {
    let shapes = command.shapes().context("invalid shape dimensions")?;
    info!(count = shapes.len(), "measuring shapes");
    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_demo() {
        let cli = Cli::try_parse_from(["measure"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.command.unwrap_or_default(), Commands::Demo);
    }

    #[test]
    fn test_parse_rect() {
        let cli = Cli::try_parse_from(["measure", "rect", "--width", "2", "--height", "3.5"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Rect { width: 2.0, height: 3.5 }));
    }

    #[test]
    fn test_parse_circle_verbose() {
        let cli = Cli::try_parse_from(["measure", "-v", "circle", "--radius", "1"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command, Some(Commands::Circle { radius: 1.0 }));
    }

    #[test]
    fn test_parse_negative_radius() {
        let cli = Cli::try_parse_from(["measure", "circle", "--radius", "-1"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Circle { radius: -1.0 }));
    }

    #[test]
    fn test_parse_rejects_non_number() {
        assert!(Cli::try_parse_from(["measure", "circle", "--radius", "big"]).is_err());
    }

    #[test]
    fn test_shapes_rejects_bad_dimensions() {
        assert!(Commands::Circle { radius: -1.0 }.shapes().is_err());
        assert!(Commands::Rect { width: 1.0, height: 0.0 }.shapes().is_err());
        assert_eq!(Commands::Demo.shapes().unwrap().len(), 2);
    }
}
