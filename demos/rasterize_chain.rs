extern crate plotters;
use plotters::prelude::*;

use catrom::{assemble, Point2, DEFAULT_SAMPLES};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let control_points = [
        Point2::new(24.0, 24.0),
        Point2::new(25.0, 25.0),
        Point2::new(125.0, 125.0),
        Point2::new(250.0, 25.0),
        Point2::new(251.0, 25.0),
    ];
    let curve = assemble(&control_points, DEFAULT_SAMPLES)?;

    let canvas = BitMapBackend::new("catmull_rom_raster.png", (400, 400)).into_drawing_area();
    canvas.fill(&BLACK)?;

    // every sample becomes a small disk on the pixel grid, coordinates are truncated
    for p in curve {
        canvas.draw(&Circle::new((p.x as i32, p.y as i32), 2, WHITE.filled()))?;
    }
    canvas.present()?;

    Ok(())
}
