use krul::point::Coordinate;
use krul::{curve_to, move_to, smooth_curve_to, CommandOptions, Error, Instruction, CLOSE_PATH};

/// Print the outline of a heart, once as a `d` attribute built from the
/// full-named functions and once through the one-letter instruction table.
fn main() -> Result<(), Error> {
    let options = CommandOptions::default();

    let instructions = vec![
        move_to(&[Coordinate::new(50.0, 30.0)], options)?,
        // Left lobe, down to the tip.
        curve_to(
            &[
                Coordinate::new(20.0, 0.0),
                Coordinate::new(0.0, 30.0),
                Coordinate::new(50.0, 80.0),
            ],
            options,
        )?,
        // Right lobe, mirrored by the smooth form.
        smooth_curve_to(&[Coordinate::new(80.0, 0.0), Coordinate::new(50.0, 30.0)], options)?,
        CLOSE_PATH.to_string(),
    ];

    println!("{}", instructions.join(" "));

    let dimple = Instruction::from_letter('q')
        .expect("q is part of the instruction set")
        .format(
            &[Coordinate::new(50.0, 40.0), Coordinate::new(60.0, 35.0)],
            options,
        )?;

    println!("M 40 35 {}", dimple);

    Ok(())
}
