//! Format instructions of the SVG path data mini-language.
//!
//! Every instruction gets its own formatting function. Each function takes a
//! slice of operands and [`CommandOptions`] selecting the absolute or
//! relative form, and returns the textual instruction, e.g. `"M 10 20"`.
//! Assembling instructions into a complete `d` attribute is left to the
//! caller.
//!
//! The grammar is described at <https://www.w3.org/TR/SVG2/paths.html>.

use std::fmt;

use thiserror::Error;

pub mod point;

pub use point::Coordinate;

/// Options accepted by every path instruction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CommandOptions {
    /// Use the relative (lowercase) form of the instruction.
    pub relative: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// An instruction was given fewer operands than its minimum arity.
    #[error("Instruction {0} requires at least {1} operands, but {2} were given.")]
    InsufficientOperands(char, usize, usize),
}

fn letter_for(upper: char, options: CommandOptions) -> char {
    if options.relative {
        upper.to_ascii_lowercase()
    } else {
        upper
    }
}

fn check_arity(letter: char, minimum: usize, found: usize) -> Result<(), Error> {
    if found < minimum {
        return Err(Error::InsufficientOperands(letter, minimum, found));
    }

    Ok(())
}

/// Numbers are formatted with `f64`'s `Display`: no rounding, no precision
/// control. NaN and the infinities pass through as `NaN` and `inf`.
fn join_pairs(letter: char, coords: &[Coordinate]) -> String {
    let operands: Vec<String> = coords
        .iter()
        .map(|coordinate| format!("{} {}", coordinate.x, coordinate.y))
        .collect();

    format!("{} {}", letter, operands.join(" "))
}

fn join_values(letter: char, values: &[f64]) -> String {
    let operands: Vec<String> = values.iter().map(|value| value.to_string()).collect();

    format!("{} {}", letter, operands.join(" "))
}

/// Format a "moveto" instruction, starting a new sub-path at the given
/// coordinate. The mini-language treats any extra coordinates as implicit
/// "lineto" operands.
pub fn move_to(coords: &[Coordinate], options: CommandOptions) -> Result<String, Error> {
    let letter = letter_for('M', options);
    check_arity(letter, 1, coords.len())?;

    Ok(join_pairs(letter, coords))
}

/// Format a "lineto" instruction drawing straight lines through the given
/// coordinates.
pub fn line_to(coords: &[Coordinate], options: CommandOptions) -> Result<String, Error> {
    let letter = letter_for('L', options);
    check_arity(letter, 1, coords.len())?;

    Ok(join_pairs(letter, coords))
}

/// Format a horizontal "lineto" instruction. Operands are bare x values.
pub fn horizontal_line_to(values: &[f64], options: CommandOptions) -> Result<String, Error> {
    let letter = letter_for('H', options);
    check_arity(letter, 1, values.len())?;

    Ok(join_values(letter, values))
}

/// Format a vertical "lineto" instruction. Operands are bare y values.
pub fn vertical_line_to(values: &[f64], options: CommandOptions) -> Result<String, Error> {
    let letter = letter_for('V', options);
    check_arity(letter, 1, values.len())?;

    Ok(join_values(letter, values))
}

/// Format a cubic Bézier "curveto" instruction. The first two coordinates
/// are the control points, the third is the end point of the segment.
pub fn curve_to(coords: &[Coordinate], options: CommandOptions) -> Result<String, Error> {
    let letter = letter_for('C', options);
    check_arity(letter, 3, coords.len())?;

    Ok(join_pairs(letter, coords))
}

/// Format a smooth cubic Bézier instruction. The first control point is
/// reflected from the preceding curve, so only the second control point and
/// the end point are given.
pub fn smooth_curve_to(coords: &[Coordinate], options: CommandOptions) -> Result<String, Error> {
    let letter = letter_for('S', options);
    check_arity(letter, 2, coords.len())?;

    Ok(join_pairs(letter, coords))
}

/// Format a quadratic Bézier instruction: one control point, one end point.
pub fn quadratic_bezier_curve_to(
    coords: &[Coordinate],
    options: CommandOptions,
) -> Result<String, Error> {
    let letter = letter_for('Q', options);
    check_arity(letter, 2, coords.len())?;

    Ok(join_pairs(letter, coords))
}

/// Format a smooth quadratic Bézier instruction. The control point is
/// reflected from the preceding curve, leaving only the end point.
pub fn smooth_quadratic_bezier_curve_to(
    coords: &[Coordinate],
    options: CommandOptions,
) -> Result<String, Error> {
    let letter = letter_for('T', options);
    check_arity(letter, 1, coords.len())?;

    Ok(join_pairs(letter, coords))
}

/// The "closepath" instruction. It takes no operands and has no relative
/// form, so it is a constant rather than a function.
pub const CLOSE_PATH: &str = "Z";

/// The instruction set of the path mini-language, keyed by its one-letter
/// codes. [`Instruction::from_letter`] and the full-named functions are two
/// spellings of the same operations.
///
/// The elliptical arc instruction (`A`) is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// M - start a new sub-path.
    MoveTo,
    /// L
    LineTo,
    /// H
    HorizontalLineTo,
    /// V
    VerticalLineTo,
    /// C - cubic Bézier segment.
    CurveTo,
    /// S
    SmoothCurveTo,
    /// Q - quadratic Bézier segment.
    QuadraticBezierCurveTo,
    /// T
    SmoothQuadraticBezierCurveTo,
    /// Z - close the current sub-path.
    ClosePath,
}

impl Instruction {
    /// Look an instruction up by its letter code, in either case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'm' => Some(Instruction::MoveTo),
            'l' => Some(Instruction::LineTo),
            'h' => Some(Instruction::HorizontalLineTo),
            'v' => Some(Instruction::VerticalLineTo),
            'c' => Some(Instruction::CurveTo),
            's' => Some(Instruction::SmoothCurveTo),
            'q' => Some(Instruction::QuadraticBezierCurveTo),
            't' => Some(Instruction::SmoothQuadraticBezierCurveTo),
            'z' => Some(Instruction::ClosePath),
            _ => None,
        }
    }

    /// The canonical (absolute, uppercase) letter code.
    pub fn letter(&self) -> char {
        match self {
            Instruction::MoveTo => 'M',
            Instruction::LineTo => 'L',
            Instruction::HorizontalLineTo => 'H',
            Instruction::VerticalLineTo => 'V',
            Instruction::CurveTo => 'C',
            Instruction::SmoothCurveTo => 'S',
            Instruction::QuadraticBezierCurveTo => 'Q',
            Instruction::SmoothQuadraticBezierCurveTo => 'T',
            Instruction::ClosePath => 'Z',
        }
    }

    /// Minimum number of operands the instruction is well-formed with.
    pub fn min_operands(&self) -> usize {
        match self {
            Instruction::MoveTo => 1,
            Instruction::LineTo => 1,
            Instruction::HorizontalLineTo => 1,
            Instruction::VerticalLineTo => 1,
            Instruction::CurveTo => 3,
            Instruction::SmoothCurveTo => 2,
            Instruction::QuadraticBezierCurveTo => 2,
            Instruction::SmoothQuadraticBezierCurveTo => 1,
            Instruction::ClosePath => 0,
        }
    }

    /// Format the instruction with the given operands, dispatching to the
    /// full-named function of the variant.
    ///
    /// The axis-aligned line instructions take the x (respectively y)
    /// component of each coordinate. `ClosePath` ignores operands and
    /// options, since "closepath" takes none and has no relative form.
    pub fn format(&self, coords: &[Coordinate], options: CommandOptions) -> Result<String, Error> {
        match self {
            Instruction::MoveTo => move_to(coords, options),
            Instruction::LineTo => line_to(coords, options),
            Instruction::HorizontalLineTo => {
                let values: Vec<f64> = coords.iter().map(|coordinate| coordinate.x).collect();
                horizontal_line_to(&values, options)
            }
            Instruction::VerticalLineTo => {
                let values: Vec<f64> = coords.iter().map(|coordinate| coordinate.y).collect();
                vertical_line_to(&values, options)
            }
            Instruction::CurveTo => curve_to(coords, options),
            Instruction::SmoothCurveTo => smooth_curve_to(coords, options),
            Instruction::QuadraticBezierCurveTo => quadratic_bezier_curve_to(coords, options),
            Instruction::SmoothQuadraticBezierCurveTo => {
                smooth_quadratic_bezier_curve_to(coords, options)
            }
            Instruction::ClosePath => Ok(CLOSE_PATH.to_string()),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative() -> CommandOptions {
        CommandOptions { relative: true }
    }

    #[test]
    fn move_to_formats_a_single_coordinate() {
        let instruction = move_to(&[Coordinate::new(1.0, 2.0)], CommandOptions::default());

        assert_eq!(instruction, Ok("M 1 2".to_string()));
    }

    #[test]
    fn move_to_formats_the_relative_form() {
        let instruction = move_to(&[Coordinate::new(1.0, 2.0)], relative());

        assert_eq!(instruction, Ok("m 1 2".to_string()));
    }

    #[test]
    fn line_to_joins_coordinate_pairs_with_spaces() {
        let coords = [Coordinate::new(1.0, 2.0), Coordinate::new(3.5, -4.0)];
        let instruction = line_to(&coords, CommandOptions::default());

        assert_eq!(instruction, Ok("L 1 2 3.5 -4".to_string()));
    }

    #[test]
    fn horizontal_line_to_takes_bare_values() {
        let instruction = horizontal_line_to(&[3.0, 4.0, 5.0], CommandOptions::default());

        assert_eq!(instruction, Ok("H 3 4 5".to_string()));
    }

    #[test]
    fn vertical_line_to_formats_the_relative_form() {
        let instruction = vertical_line_to(&[7.0], relative());

        assert_eq!(instruction, Ok("v 7".to_string()));
    }

    #[test]
    fn curve_to_formats_three_coordinates() {
        let coords = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(2.0, 2.0),
        ];
        let instruction = curve_to(&coords, CommandOptions::default());

        assert_eq!(instruction, Ok("C 0 0 1 1 2 2".to_string()));
    }

    #[test]
    fn smooth_curve_to_formats_two_coordinates() {
        let coords = [Coordinate::new(80.0, 0.0), Coordinate::new(50.0, 30.0)];
        let instruction = smooth_curve_to(&coords, CommandOptions::default());

        assert_eq!(instruction, Ok("S 80 0 50 30".to_string()));
    }

    #[test]
    fn quadratic_bezier_curve_to_formats_two_coordinates() {
        let coords = [Coordinate::new(25.0, -20.0), Coordinate::new(50.0, 0.0)];
        let instruction = quadratic_bezier_curve_to(&coords, relative());

        assert_eq!(instruction, Ok("q 25 -20 50 0".to_string()));
    }

    #[test]
    fn smooth_quadratic_bezier_curve_to_formats_one_coordinate() {
        let instruction = smooth_quadratic_bezier_curve_to(
            &[Coordinate::new(9.0, 9.0)],
            CommandOptions::default(),
        );

        assert_eq!(instruction, Ok("T 9 9".to_string()));
    }

    #[test]
    fn curve_to_rejects_too_few_operands() {
        let instruction = curve_to(&[Coordinate::new(0.0, 0.0)], CommandOptions::default());

        assert_eq!(instruction, Err(Error::InsufficientOperands('C', 3, 1)));
    }

    #[test]
    fn arity_errors_report_the_requested_case() {
        let instruction = smooth_curve_to(&[Coordinate::new(0.0, 0.0)], relative());

        assert_eq!(instruction, Err(Error::InsufficientOperands('s', 2, 1)));
    }

    #[test]
    fn empty_operand_lists_are_rejected() {
        let instruction = move_to(&[], CommandOptions::default());

        assert_eq!(instruction, Err(Error::InsufficientOperands('M', 1, 0)));
    }

    #[test]
    fn close_path_is_the_literal_z() {
        assert_eq!(CLOSE_PATH, "Z");
    }

    #[test]
    fn close_path_ignores_operands_and_options() {
        let instruction = Instruction::ClosePath.format(&[Coordinate::new(5.0, 5.0)], relative());

        assert_eq!(instruction, Ok("Z".to_string()));
    }

    #[test]
    fn degenerate_numbers_format_through_unchanged() {
        let coords = [Coordinate::new(f64::NAN, f64::INFINITY)];
        let instruction = move_to(&coords, CommandOptions::default());

        assert_eq!(instruction, Ok("M NaN inf".to_string()));

        let instruction = horizontal_line_to(&[-0.0], CommandOptions::default());

        assert_eq!(instruction, Ok("H -0".to_string()));
    }

    #[test]
    fn from_letter_accepts_either_case() {
        assert_eq!(Instruction::from_letter('m'), Some(Instruction::MoveTo));
        assert_eq!(Instruction::from_letter('M'), Some(Instruction::MoveTo));
        assert_eq!(
            Instruction::from_letter('q'),
            Some(Instruction::QuadraticBezierCurveTo)
        );
        assert_eq!(Instruction::from_letter('z'), Some(Instruction::ClosePath));
        // The elliptical arc is not part of the instruction set.
        assert_eq!(Instruction::from_letter('a'), None);
        assert_eq!(Instruction::from_letter('x'), None);
    }

    #[test]
    fn letters_dispatch_to_the_named_functions() {
        let coords = [
            Coordinate::new(0.5, -1.0),
            Coordinate::new(2.0, 3.0),
            Coordinate::new(4.0, 5.5),
        ];
        let options = relative();

        for (letter, expected) in [
            ('m', move_to(&coords, options)),
            ('l', line_to(&coords, options)),
            ('h', horizontal_line_to(&[0.5, 2.0, 4.0], options)),
            ('v', vertical_line_to(&[-1.0, 3.0, 5.5], options)),
            ('c', curve_to(&coords, options)),
            ('s', smooth_curve_to(&coords, options)),
            ('q', quadratic_bezier_curve_to(&coords, options)),
            ('t', smooth_quadratic_bezier_curve_to(&coords, options)),
            ('z', Ok(CLOSE_PATH.to_string())),
        ] {
            let instruction = Instruction::from_letter(letter).unwrap();

            assert_eq!(instruction.format(&coords, options), expected);
        }
    }

    #[test]
    fn min_operands_match_the_grammar() {
        assert_eq!(Instruction::MoveTo.min_operands(), 1);
        assert_eq!(Instruction::LineTo.min_operands(), 1);
        assert_eq!(Instruction::HorizontalLineTo.min_operands(), 1);
        assert_eq!(Instruction::VerticalLineTo.min_operands(), 1);
        assert_eq!(Instruction::CurveTo.min_operands(), 3);
        assert_eq!(Instruction::SmoothCurveTo.min_operands(), 2);
        assert_eq!(Instruction::QuadraticBezierCurveTo.min_operands(), 2);
        assert_eq!(Instruction::SmoothQuadraticBezierCurveTo.min_operands(), 1);
        assert_eq!(Instruction::ClosePath.min_operands(), 0);
    }

    #[test]
    fn format_checks_the_table_arity() {
        let instruction = Instruction::CurveTo.format(&[Coordinate::new(1.0, 1.0)], relative());

        assert_eq!(instruction, Err(Error::InsufficientOperands('c', 3, 1)));
    }

    #[test]
    fn display_prints_the_canonical_letter() {
        assert_eq!(Instruction::MoveTo.to_string(), "M");
        assert_eq!(Instruction::ClosePath.to_string(), "Z");
    }

    #[test]
    fn error_message_names_the_instruction() {
        let error = Error::InsufficientOperands('C', 3, 1);

        assert_eq!(
            error.to_string(),
            "Instruction C requires at least 3 operands, but 1 were given."
        );
    }
}
