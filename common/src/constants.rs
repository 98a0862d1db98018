// Layout:
pub const LAYOUT_COLUMNS: usize = 12; // Solutions per band when rendered side by side.

// Solver:
pub const DEFAULT_MAX_SOLUTIONS: usize = 120; // Ten full bands.

// Sample input shown on the form:
pub const SAMPLE_MAZE: &str = "11111B00011010E1000111111";
pub const SAMPLE_ROWS: usize = 5;
pub const SAMPLE_COLS: usize = 5;
