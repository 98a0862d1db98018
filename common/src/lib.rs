pub mod config;
pub mod constants;
pub mod maze;
pub mod snapshot;
pub mod solver;

pub use config::SolverConfig;
pub use maze::{CellKind, Maze, MazeError};
pub use snapshot::{SolutionEvent, Slot};
pub use solver::{SearchOutcome, SearchStatus, SolutionObserver, Solver};
