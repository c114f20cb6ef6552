use std::{env, fs};

use roxmltree::{Document, Node};

use krul::point::Coordinate;
use krul::{line_to, move_to, CommandOptions, Error};

/// Build a list of coordinates for every "trkseg" child of a "trk" element.
///
/// <trk>
///     <trkseg>
///         ...
///     </trkseg>
///     <trkseg>
///         ...
///     </trkseg>
///     ..
/// </trk>
fn track_to_segments(node: &Node) -> Vec<Vec<Coordinate>> {
    node.children()
        .filter_map(|child| {
            if !child.has_tag_name("trkseg") {
                return None;
            }
            Some(track_segment_to_coordinates(&child))
        })
        .collect()
}

/// Build coordinates from the "trkpt" elements inside a "trkseg" element.
///
/// <trkseg>
///     <trkpt lat="1" lon="2"></trkpt>
///     <trkpt lat="2" lon="3"></trkpt>
///     ..
/// </trkseg>
fn track_segment_to_coordinates(node: &Node) -> Vec<Coordinate> {
    node.children()
        .filter_map(|child| {
            if !child.has_tag_name("trkpt") {
                return None;
            }

            let lat = parse_attribute(&child, "lat");
            let lon = parse_attribute(&child, "lon");

            // Longitude runs east, latitude runs north. SVG's y axis runs
            // down, so the latitude is flipped.
            Some(Coordinate::new(lon, -lat))
        })
        .collect()
}

fn parse_attribute(node: &Node, name: &str) -> f64 {
    node.attribute(name)
        .unwrap_or_else(|| {
            panic!(
                "Element <trkpt> at {} is missing attribute \"{}\".",
                node.document().text_pos_at(node.position()),
                name
            )
        })
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Failed to parse attribute \"{}\" at {} as float.",
                name,
                node.document().text_pos_at(node.position())
            )
        })
}

/// Smallest axis-aligned box around all segments: (x, y, width, height).
fn boundaries(segments: &[Vec<Coordinate>]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for coordinate in segments.iter().flatten() {
        min_x = min_x.min(coordinate.x);
        min_y = min_y.min(coordinate.y);
        max_x = max_x.max(coordinate.x);
        max_y = max_y.max(coordinate.y);
    }

    (min_x, min_y, max_x - min_x, max_y - min_y)
}

fn main() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();
    let file_path = args.get(1).expect("Usage: gpx <file.gpx> [output.svg]");
    let output = args.get(2).map(String::as_str).unwrap_or("/tmp/track.svg");

    let content = fs::read_to_string(file_path).expect("Failed to read GPX file.");
    let document = Document::parse(&content).expect("Failed to parse GPX file.");

    let segments: Vec<Vec<Coordinate>> = document
        .descendants()
        .filter(|node| node.has_tag_name("trk"))
        .flat_map(|track| track_to_segments(&track))
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        panic!("No track points found in {}.", file_path);
    }

    let options = CommandOptions::default();
    let mut data = Vec::new();
    for segment in &segments {
        data.push(move_to(&segment[..1], options)?);
        if segment.len() > 1 {
            data.push(line_to(&segment[1..], options)?);
        }
    }

    let (x, y, width, height) = boundaries(&segments);

    let path = svg::node::element::Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", width.max(height) / 500.0)
        .set("d", data.join(" "));

    let svg_document = svg::Document::new()
        .set("viewBox", (x, y, width, height))
        .add(path);

    svg::save(output, &svg_document).expect(&format!("Failed to save SVG at {}.", output));
    println!("Track written to {}.", output);

    Ok(())
}
