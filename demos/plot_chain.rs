extern crate plotters;
use plotters::prelude::*;

use catrom::{CatmullRomChain, ChainOptions, Point2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // the first and the last point only steer the ends of the curve
    let control_points: Vec<Point2<f64>> = vec![
        (24.0, 24.0).into(),
        (25.0, 25.0).into(),
        (125.0, 125.0).into(),
        (250.0, 25.0).into(),
        (251.0, 25.0).into(),
    ];

    let chain = CatmullRomChain::with_options(&control_points, ChainOptions::default());
    let curve: Vec<(f64, f64)> = chain.sample()?.into_iter().map(Into::into).collect();
    let cpoints: Vec<(f64, f64)> = control_points.iter().copied().map(Into::into).collect();

    let root = BitMapBackend::new("catmull_rom_chain.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Centripetal Catmull-Rom Chain", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0.0..275.0, 0.0..150.0)?;

    chart.configure_mesh().draw()?;

    // draw the control points
    chart
        .draw_series(PointSeries::of_element(
            cpoints,
            5,
            &BLUE,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style)
                    + Text::new(
                        format!("{:?}", coord),
                        (0, 15),
                        ("sans-serif", 15).into_font(),
                    )
            },
        ))?
        .label("Control Points")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // draw the sampled curve
    chart
        .draw_series(LineSeries::new(curve, &RED))?
        .label("C(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
