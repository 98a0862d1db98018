use std::fmt;

use rand::Rng;

use common::{
    Maze, MazeError,
    constants::SAMPLE_MAZE,
    maze::maker::{self, MakerError},
};

pub const LEGEND: &str = "Maze (B for entrance, E for exit, 0 for passage, 1 for wall):";
pub const RANDOM_HINT: &str = "Type ? for the maze to generate a random one (odd sizes only).";
pub const WARNING: &str = "WARNING: Enter a maze with a small number of solutions.\n\
                           Mazes with many loops can take a very long time to solve.";

pub fn sample_line() -> String {
    format!("Sample 5x5 maze: {}", SAMPLE_MAZE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    NotANumber { field: &'static str, input: String },
    NotPositive { field: &'static str, value: i64 },
    Maze(MazeError),
    Maker(MakerError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::NotANumber { field, input } => {
                write!(f, "{} must be a whole number, got \"{}\"", field, input)
            }
            FormError::NotPositive { field, value } => {
                write!(f, "{} must be greater than zero, got {}", field, value)
            }
            FormError::Maze(e) => write!(f, "{}", e),
            FormError::Maker(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FormError {}

impl From<MazeError> for FormError {
    fn from(e: MazeError) -> Self {
        FormError::Maze(e)
    }
}

impl From<MakerError> for FormError {
    fn from(e: MakerError) -> Self {
        FormError::Maker(e)
    }
}

pub fn parse_count(field: &'static str, input: &str) -> Result<usize, FormError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| FormError::NotANumber {
        field,
        input: trimmed.to_string(),
    })?;

    if value <= 0 {
        return Err(FormError::NotPositive { field, value });
    }

    usize::try_from(value).map_err(|_| FormError::NotANumber {
        field,
        input: trimmed.to_string(),
    })
}

/// Validates one submission of the form. A maze of `?` is generated at the
/// requested size.
pub fn parse_submission<R: Rng>(
    rows_input: &str,
    cols_input: &str,
    maze_input: &str,
    rng: &mut R,
) -> Result<Maze, FormError> {
    let rows = parse_count("rows", rows_input)?;
    let cols = parse_count("columns", cols_input)?;
    let maze_input = maze_input.trim();

    let raw = if maze_input == "?" {
        let raw = maker::generate(rows, cols, rng)?;
        log::debug!("generated {rows}x{cols} maze: {raw}");
        raw
    } else {
        maze_input.to_string()
    };

    Ok(Maze::build(&raw, rows, cols)?)
}
