pub mod cell;
pub mod maker;

use std::fmt;

use strum::Display;

pub use cell::CellKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Marker {
    Entrance,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimensions { rows: usize, cols: usize, len: usize },
    MissingMarker(Marker),
    MarkerOutOfBounds {
        marker: Marker,
        position: (usize, usize),
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { rows, cols, len } => write!(
                f,
                "invalid maze details: {} rows by {} columns needs {} cells, got {}",
                rows,
                cols,
                rows.saturating_mul(*cols),
                len
            ),
            MazeError::MissingMarker(marker) => write!(f, "maze has no {} marker", marker),
            MazeError::MarkerOutOfBounds { marker, position } => {
                write!(f, "{} at {:?} lies outside the maze", marker, position)
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Vec<Vec<CellKind>>,
    entrance: (usize, usize),
    exit: (usize, usize),
}

impl Maze {
    /// Builds a maze from a row-major string of `rows * cols` characters and
    /// locates its entrance and exit.
    pub fn build(raw: &str, rows: usize, cols: usize) -> Result<Self, MazeError> {
        let grid = parse_grid(raw, rows, cols)?;
        let (entrance, exit) = locate_markers(&grid)?;

        Ok(Self {
            grid,
            entrance,
            exit,
        })
    }

    /// Builds a maze whose entrance and exit are supplied by the caller
    /// instead of scanned from the cells. They may coincide.
    pub fn with_markers(
        raw: &str,
        rows: usize,
        cols: usize,
        entrance: (usize, usize),
        exit: (usize, usize),
    ) -> Result<Self, MazeError> {
        let grid = parse_grid(raw, rows, cols)?;

        for (marker, position) in [(Marker::Entrance, entrance), (Marker::Exit, exit)] {
            if position.0 >= rows || position.1 >= cols {
                return Err(MazeError::MarkerOutOfBounds { marker, position });
            }
        }

        Ok(Self {
            grid,
            entrance,
            exit,
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid[0].len()
    }

    pub fn entrance(&self) -> (usize, usize) {
        self.entrance
    }

    pub fn exit(&self) -> (usize, usize) {
        self.exit
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<CellKind> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn cells(&self) -> &[Vec<CellKind>] {
        &self.grid
    }

    /// Owned copy of the current cell states.
    pub fn snapshot(&self) -> Vec<Vec<CellKind>> {
        self.grid.clone()
    }

    pub(crate) fn set(&mut self, (row, col): (usize, usize), kind: CellKind) {
        self.grid[row][col] = kind;
    }

    pub fn log(&self) -> String {
        self.grid
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

fn parse_grid(raw: &str, rows: usize, cols: usize) -> Result<Vec<Vec<CellKind>>, MazeError> {
    let len = raw.chars().count();
    let expected = rows.checked_mul(cols);

    if rows == 0 || cols == 0 || expected != Some(len) {
        return Err(MazeError::InvalidDimensions { rows, cols, len });
    }

    let chars: Vec<char> = raw.chars().collect();
    Ok(chars
        .chunks(cols)
        .map(|row| row.iter().map(|&ch| CellKind::classify(ch)).collect())
        .collect())
}

/// Scans the grid row by row for the entrance and exit markers. When a marker
/// occurs more than once, the last occurrence wins.
pub fn locate_markers(
    grid: &[Vec<CellKind>],
) -> Result<((usize, usize), (usize, usize)), MazeError> {
    let mut entrance = None;
    let mut exit = None;
    let mut entrance_count = 0;
    let mut exit_count = 0;

    for (i, row) in grid.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            match cell {
                CellKind::Entrance => {
                    entrance = Some((i, j));
                    entrance_count += 1;
                }
                CellKind::Exit => {
                    exit = Some((i, j));
                    exit_count += 1;
                }
                _ => {}
            }
        }
    }

    if entrance_count > 1 {
        log::warn!("found {entrance_count} entrance markers; using the last at {entrance:?}");
    }
    if exit_count > 1 {
        log::warn!("found {exit_count} exit markers; using the last at {exit:?}");
    }

    let entrance = entrance.ok_or(MazeError::MissingMarker(Marker::Entrance))?;
    let exit = exit.ok_or(MazeError::MissingMarker(Marker::Exit))?;

    Ok((entrance, exit))
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SAMPLE_COLS, SAMPLE_MAZE, SAMPLE_ROWS};

    #[test]
    fn build_rejects_length_mismatch() {
        assert_eq!(
            Maze::build("B0E", 2, 2),
            Err(MazeError::InvalidDimensions {
                rows: 2,
                cols: 2,
                len: 3
            })
        );
    }

    #[test]
    fn build_rejects_zero_dimensions() {
        assert!(matches!(
            Maze::build("", 0, 3),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Maze::build("", 3, 0),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn build_rejects_missing_markers() {
        assert_eq!(
            Maze::build("000E", 2, 2),
            Err(MazeError::MissingMarker(Marker::Entrance))
        );
        assert_eq!(
            Maze::build("B000", 2, 2),
            Err(MazeError::MissingMarker(Marker::Exit))
        );
    }

    #[test]
    fn build_round_trips_every_cell() {
        let raw = "1B0xE10P";
        let maze = Maze::build(raw, 2, 4).expect("maze should build");
        let chars: Vec<char> = raw.chars().collect();

        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                assert_eq!(
                    maze.cell(row, col),
                    Some(CellKind::classify(chars[row * 4 + col]))
                );
            }
        }
        assert_eq!(maze.cell(2, 0), None);
        assert_eq!(maze.cell(0, 4), None);
    }

    #[test]
    fn sample_maze_markers_are_located() {
        let maze = Maze::build(SAMPLE_MAZE, SAMPLE_ROWS, SAMPLE_COLS).expect("sample should build");
        assert_eq!(maze.entrance(), (1, 0));
        assert_eq!(maze.exit(), (2, 4));
    }

    #[test]
    fn markers_are_case_insensitive_and_last_one_wins() {
        let maze = Maze::build("b0Be0E", 2, 3).expect("maze should build");
        assert_eq!(maze.entrance(), (0, 2));
        assert_eq!(maze.exit(), (1, 2));
    }

    #[test]
    fn supplied_markers_must_be_in_bounds() {
        let maze = Maze::with_markers("0000", 2, 2, (0, 0), (0, 0)).expect("markers in bounds");
        assert_eq!(maze.entrance(), maze.exit());

        assert_eq!(
            Maze::with_markers("0000", 2, 2, (0, 0), (2, 1)),
            Err(MazeError::MarkerOutOfBounds {
                marker: Marker::Exit,
                position: (2, 1)
            })
        );
    }

    #[test]
    fn errors_read_well() {
        assert_eq!(
            MazeError::MissingMarker(Marker::Exit).to_string(),
            "maze has no exit marker"
        );
        assert_eq!(
            MazeError::InvalidDimensions {
                rows: 2,
                cols: 3,
                len: 5
            }
            .to_string(),
            "invalid maze details: 2 rows by 3 columns needs 6 cells, got 5"
        );
    }

    #[test]
    fn log_prints_one_line_per_row() {
        let maze = Maze::build("1b0e", 2, 2).expect("maze should build");
        assert_eq!(maze.log(), "1B\n0E");
        assert_eq!(maze.to_string(), maze.log());
    }
}
