use strum::{EnumIter, IntoEnumIterator};

use crate::{
    config::SolverConfig,
    maze::{CellKind, Maze},
    snapshot::SolutionEvent,
};

/// Neighbours are probed in declaration order: up, down, left, right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The neighbouring coordinates, or `None` when they would be negative.
    /// The upper bounds are checked by the caller.
    pub fn step(self, (row, col): (usize, usize)) -> Option<(usize, usize)> {
        match self {
            Direction::Up => row.checked_sub(1).map(|row| (row, col)),
            Direction::Down => Some((row + 1, col)),
            Direction::Left => col.checked_sub(1).map(|col| (row, col)),
            Direction::Right => Some((row, col + 1)),
        }
    }
}

pub trait SolutionObserver {
    fn on_solution_found(&mut self, event: SolutionEvent);
    fn on_search_complete(&mut self, _outcome: &SearchOutcome) {}
}

impl SolutionObserver for Vec<SolutionEvent> {
    fn on_solution_found(&mut self, event: SolutionEvent) {
        self.push(event);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Completed,
    SolutionLimitReached,
    DepthLimitReached,
    AlreadySearched,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub found: bool,
    pub solutions: usize,
    pub status: SearchStatus,
}

struct Frame {
    cell: (usize, usize),
    pending: DirectionIter,
    found: bool,
}

enum Step {
    Probe(Option<(usize, usize)>),
    Backtrack,
}

/// Exhaustive depth-first search with backtracking. Every time the exit is
/// reached the observer receives a copy of the grid, so the number of events
/// grows combinatorially with the number of loops in the maze.
pub struct Solver {
    maze: Maze,
    config: SolverConfig,
    solution_count: usize,
    searched: bool,
}

impl Solver {
    pub fn new(maze: Maze, config: SolverConfig) -> Self {
        Self {
            maze,
            config,
            solution_count: 0,
            searched: false,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }

    pub fn solution_count(&self) -> usize {
        self.solution_count
    }

    pub fn solve(&mut self, observer: &mut dyn SolutionObserver) -> SearchOutcome {
        let entrance = self.maze.entrance();
        self.search(entrance, observer)
    }

    /// Runs the search from `origin`. A solver searches once: visited state
    /// is left on the grid, so later calls emit nothing.
    pub fn search(
        &mut self,
        origin: (usize, usize),
        observer: &mut dyn SolutionObserver,
    ) -> SearchOutcome {
        if self.searched {
            log::warn!("search requested on a maze that was already searched");
            let outcome = SearchOutcome {
                found: false,
                solutions: 0,
                status: SearchStatus::AlreadySearched,
            };
            observer.on_search_complete(&outcome);
            return outcome;
        }
        self.searched = true;

        log::info!(
            "searching {}x{} maze from {:?} for exit at {:?}",
            self.maze.rows(),
            self.maze.cols(),
            origin,
            self.maze.exit()
        );

        let outcome = match self.walk(origin, observer) {
            Ok(found) => SearchOutcome {
                found,
                solutions: self.solution_count,
                status: SearchStatus::Completed,
            },
            Err(status) => {
                log::warn!(
                    "search stopped early ({:?}) after {} solutions",
                    status,
                    self.solution_count
                );
                SearchOutcome {
                    found: self.solution_count > 0,
                    solutions: self.solution_count,
                    status,
                }
            }
        };

        log::info!(
            "search finished: {} solutions, status {:?}",
            outcome.solutions,
            outcome.status
        );
        observer.on_search_complete(&outcome);
        outcome
    }

    fn walk(
        &mut self,
        origin: (usize, usize),
        observer: &mut dyn SolutionObserver,
    ) -> Result<bool, SearchStatus> {
        let mut stack: Vec<Frame> = Vec::new();

        if let Some(found) = self.probe(Some(origin), &mut stack, observer)? {
            return Ok(found);
        }

        while let Some(frame) = stack.last_mut() {
            let step = match frame.pending.next() {
                Some(direction) => Step::Probe(direction.step(frame.cell)),
                None => Step::Backtrack,
            };

            let result = match step {
                Step::Probe(target) => match self.probe(target, &mut stack, observer) {
                    Ok(result) => result,
                    Err(status) => {
                        self.unwind(&mut stack);
                        return Err(status);
                    }
                },
                Step::Backtrack => stack.pop().map(|done| {
                    self.maze.set(done.cell, CellKind::Passage);
                    done.found
                }),
            };

            if let Some(found) = result {
                match stack.last_mut() {
                    Some(parent) => parent.found |= found,
                    None => return Ok(found),
                }
            }
        }

        Ok(false)
    }

    /// One visit of a cell. `Some(found)` settles the visit at once; `None`
    /// means a frame was pushed and its neighbours are still to be probed.
    fn probe(
        &mut self,
        target: Option<(usize, usize)>,
        stack: &mut Vec<Frame>,
        observer: &mut dyn SolutionObserver,
    ) -> Result<Option<bool>, SearchStatus> {
        self.maze.set(self.maze.entrance(), CellKind::Entrance);

        let Some((row, col)) = target else {
            return Ok(Some(false));
        };
        let kind = match self.maze.cell(row, col) {
            Some(kind) if !kind.is_wall() => kind,
            _ => return Ok(Some(false)),
        };

        if (row, col) == self.maze.exit() {
            if self.solution_limit_reached() {
                return Err(SearchStatus::SolutionLimitReached);
            }
            self.maze.set((row, col), CellKind::Exit);
            let event = SolutionEvent {
                solution_index: self.solution_count,
                grid: self.maze.snapshot(),
            };
            log::debug!(
                "solution {} found with {} cells on the path",
                event.solution_index,
                event.path_len()
            );
            observer.on_solution_found(event);
            self.solution_count += 1;

            if self.solution_limit_reached() {
                return Err(SearchStatus::SolutionLimitReached);
            }
            return Ok(Some(true));
        }

        if kind == CellKind::OnPath {
            return Ok(Some(false));
        }

        if self.config.max_depth.is_some_and(|max| stack.len() >= max) {
            log::debug!("depth limit {} hit at {:?}", stack.len(), (row, col));
            return Err(SearchStatus::DepthLimitReached);
        }

        self.maze.set((row, col), CellKind::OnPath);
        stack.push(Frame {
            cell: (row, col),
            pending: Direction::iter(),
            found: false,
        });
        Ok(None)
    }

    fn solution_limit_reached(&self) -> bool {
        self.config
            .max_solutions
            .is_some_and(|max| self.solution_count >= max)
    }

    fn unwind(&mut self, stack: &mut Vec<Frame>) {
        while let Some(frame) = stack.pop() {
            self.maze.set(frame.cell, CellKind::Passage);
        }
        self.maze.set(self.maze.entrance(), CellKind::Entrance);
    }
}
