pub mod algorithms;

use std::fmt;

use rand::{Rng, seq::IndexedRandom};

use algorithms::backtrack::Backtrack;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MakerError {
    InvalidSize { rows: usize, cols: usize },
}

impl fmt::Display for MakerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MakerError::InvalidSize { rows, cols } => write!(
                f,
                "cannot generate a {}x{} maze: rows and columns must be odd, at least 3, and not both 3",
                rows, cols
            ),
        }
    }
}

impl std::error::Error for MakerError {}

/// A room sits at odd coordinates; the even rows and columns between rooms
/// hold walls and pillars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub row: usize,
    pub col: usize,
}

pub struct MazeMaker<'a, R: Rng> {
    pub grid: Vec<Vec<u8>>,
    rng: &'a mut R,
    width: usize,
    height: usize,
}

impl<'a, R: Rng> MazeMaker<'a, R> {
    pub fn new(rows: usize, cols: usize, rng: &'a mut R) -> Result<Self, MakerError> {
        // At least two rooms, so the entrance and exit get cells of their own.
        if rows < 3 || cols < 3 || (rows == 3 && cols == 3) || rows % 2 == 0 || cols % 2 == 0 {
            return Err(MakerError::InvalidSize { rows, cols });
        }

        let mut maker = MazeMaker {
            grid: vec![vec![1; cols]; rows],
            rng,
            width: cols,
            height: rows,
        };
        maker.backtrack();

        Ok(maker)
    }

    fn get_unvisited_neighbors(&self, room: Room) -> Vec<Room> {
        let mut neighbors = Vec::new();
        let directions = [(0, 2), (2, 0), (0, -2), (-2, 0)];

        for &(dr, dc) in &directions {
            let nr = room.row as isize + dr;
            let nc = room.col as isize + dc;

            let in_bounds =
                nr > 0 && nr < self.height as isize - 1 && nc > 0 && nc < self.width as isize - 1;
            if !in_bounds {
                continue;
            }

            let neighbor = Room {
                row: nr as usize,
                col: nc as usize,
            };
            if !self.is_visited(neighbor) {
                neighbors.push(neighbor);
            }
        }

        neighbors
    }

    fn pick_unvisited_neighbor(&mut self, room: Room) -> Option<Room> {
        let neighbors = self.get_unvisited_neighbors(room);
        neighbors.choose(&mut *self.rng).copied()
    }

    fn visit_room(&mut self, room: Room) {
        self.grid[room.row][room.col] = 0;
    }

    fn is_visited(&self, room: Room) -> bool {
        self.grid[room.row][room.col] == 0
    }

    fn pick_room(&mut self) -> Room {
        let rooms = self.get_rooms();
        let i = self.rng.random_range(0..rooms.len());
        rooms[i]
    }

    fn get_rooms(&self) -> Vec<Room> {
        let mut rooms = Vec::new();

        for row in (1..self.height).step_by(2) {
            for col in (1..self.width).step_by(2) {
                rooms.push(Room { row, col });
            }
        }

        rooms
    }

    fn remove_wall_between(&mut self, room_1: Room, room_2: Room) {
        let row = (room_1.row + room_2.row) / 2;
        let col = (room_1.col + room_2.col) / 2;
        self.grid[row][col] = 0;
    }

    /// Row-major maze string with the entrance in the top-left room and the
    /// exit in the bottom-right room.
    pub fn to_maze_string(&self) -> String {
        let entrance = (1, 1);
        let exit = (self.height - 2, self.width - 2);

        let mut out = String::with_capacity(self.width * self.height);
        for (i, row) in self.grid.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                let ch = if (i, j) == entrance {
                    'B'
                } else if (i, j) == exit {
                    'E'
                } else if cell == 0 {
                    '0'
                } else {
                    '1'
                };
                out.push(ch);
            }
        }
        out
    }
}

/// Generates a random perfect maze of the given odd dimensions.
pub fn generate<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<String, MakerError> {
    let maker = MazeMaker::new(rows, cols, rng)?;
    Ok(maker.to_maze_string())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn rejects_even_or_tiny_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate(4, 5, &mut rng),
            Err(MakerError::InvalidSize { rows: 4, cols: 5 })
        );
        assert_eq!(
            generate(1, 5, &mut rng),
            Err(MakerError::InvalidSize { rows: 1, cols: 5 })
        );
    }

    #[test]
    fn single_room_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate(3, 3, &mut rng),
            Err(MakerError::InvalidSize { rows: 3, cols: 3 })
        );
    }

    #[test]
    fn two_rooms_are_joined() {
        let mut rng = StdRng::seed_from_u64(1);
        let maze = generate(3, 5, &mut rng).expect("3x5 is valid");
        assert_eq!(maze, "111111B0E111111");
    }

    #[test]
    fn border_stays_solid() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = 9;
        let cols = 13;
        let maze = generate(rows, cols, &mut rng).expect("size is valid");
        let chars: Vec<char> = maze.chars().collect();

        for col in 0..cols {
            assert_eq!(chars[col], '1');
            assert_eq!(chars[(rows - 1) * cols + col], '1');
        }
        for row in 0..rows {
            assert_eq!(chars[row * cols], '1');
            assert_eq!(chars[row * cols + cols - 1], '1');
        }
    }

    #[test]
    fn all_rooms_are_connected() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maker = MazeMaker::new(11, 15, &mut rng).expect("size is valid");
            assert_all_spaces_are_connected(&maker.grid);
        }
    }

    #[test]
    fn same_seed_gives_same_maze() {
        let a = generate(15, 15, &mut StdRng::seed_from_u64(42));
        let b = generate(15, 15, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    fn assert_all_spaces_are_connected(grid: &[Vec<u8>]) {
        let height = grid.len();
        let width = grid[0].len();

        let total_spaces = grid.iter().flatten().filter(|&&cell| cell == 0).count();
        assert!(total_spaces > 1, "there should be more than one space");

        let mut visited = vec![vec![false; width]; height];
        let mut queue = VecDeque::new();
        let mut visited_count = 0;

        queue.push_back((1, 1));
        visited[1][1] = true;

        while let Some((r, c)) = queue.pop_front() {
            visited_count += 1;

            let directions = [(0, 1), (0, -1), (1, 0), (-1, 0)];
            for (dr, dc) in directions {
                let nr = r as isize + dr;
                let nc = c as isize + dc;

                if nr >= 0 && nr < height as isize && nc >= 0 && nc < width as isize {
                    let (nr, nc) = (nr as usize, nc as usize);
                    if grid[nr][nc] == 0 && !visited[nr][nc] {
                        visited[nr][nc] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
        }

        assert_eq!(total_spaces, visited_count, "all spaces should be connected");
    }
}
