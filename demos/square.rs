use std::path::PathBuf;

use clap::Parser;

use krul::point::Coordinate;
use krul::{line_to, move_to, CommandOptions, Error, CLOSE_PATH};

#[derive(Parser, Debug)]
struct Cli {
    /// Location where the SVG is written to.
    #[arg(short, long, default_value = "/tmp/square.svg")]
    output: PathBuf,

    /// Edge length of the square.
    #[arg(short, long, default_value_t = 100.0)]
    size: f64,
}

/// Outline of a square with its top left corner at the origin.
fn square(size: f64) -> Result<String, Error> {
    let options = CommandOptions::default();
    let instructions = vec![
        move_to(&[Coordinate::new(0.0, 0.0)], options)?,
        line_to(
            &[
                Coordinate::new(size, 0.0),
                Coordinate::new(size, size),
                Coordinate::new(0.0, size),
            ],
            options,
        )?,
        CLOSE_PATH.to_string(),
    ];

    Ok(instructions.join(" "))
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let path = svg::node::element::Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("d", square(cli.size)?);

    let margin = cli.size / 10.0;
    let document = svg::Document::new()
        .set(
            "viewBox",
            (-margin, -margin, cli.size + 2.0 * margin, cli.size + 2.0 * margin),
        )
        .add(path);

    svg::save(&cli.output, &document)
        .expect(&format!("Failed to save SVG at {}.", cli.output.display()));
    println!("Square written to {}.", cli.output.display());

    Ok(())
}
