use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};

use common::{CellKind, SearchOutcome, SearchStatus, SolutionEvent, SolutionObserver};

const CELL: &str = "  ";
const GAP: &str = "  ";

pub fn cell_color(kind: CellKind) -> Color {
    match kind {
        CellKind::Wall => Color::Black,
        CellKind::OnPath => Color::Red,
        CellKind::Entrance => Color::Blue,
        CellKind::Exit => Color::Green,
        CellKind::Passage => Color::White,
    }
}

/// Draws solutions side by side, a band at a time. A band is written once its
/// last slot is filled or the search ends.
pub struct Renderer<W: Write> {
    out: W,
    band: Vec<SolutionEvent>,
    error: Option<io::Error>,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            band: Vec::new(),
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_band(&mut self) -> io::Result<()> {
        if self.band.is_empty() {
            return Ok(());
        }

        let band = std::mem::take(&mut self.band);
        let rows = band[0].grid.len();
        let grid_width = band[0].grid[0].len() * CELL.len();
        let labels: Vec<String> = band
            .iter()
            .map(|event| format!("#{}", event.solution_index + 1))
            .collect();
        // Narrow mazes are widened to fit the longest label in the band.
        let width = labels
            .iter()
            .map(String::len)
            .fold(grid_width, usize::max);
        let padding = " ".repeat(width - grid_width);

        for label in &labels {
            queue!(self.out, Print(format!("{:<width$}{}", label, GAP)))?;
        }
        queue!(self.out, Print("\n"))?;

        for row in 0..rows {
            for event in &band {
                for &cell in &event.grid[row] {
                    queue!(self.out, SetBackgroundColor(cell_color(cell)), Print(CELL))?;
                }
                queue!(self.out, ResetColor, Print(&padding), Print(GAP))?;
            }
            queue!(self.out, Print("\n"))?;
        }
        queue!(self.out, Print("\n"))?;

        self.out.flush()
    }

    fn draw_summary(&mut self, outcome: &SearchOutcome) -> io::Result<()> {
        let summary = match (outcome.solutions, outcome.status) {
            (_, SearchStatus::AlreadySearched) => "This maze was already solved.".to_string(),
            (0, SearchStatus::Completed) => "No solutions found.".to_string(),
            (1, SearchStatus::Completed) => "1 solution found.".to_string(),
            (n, SearchStatus::Completed) => format!("{} solutions found.", n),
            (n, SearchStatus::SolutionLimitReached) => {
                format!("Stopped after {} solutions; the maze has more.", n)
            }
            (n, SearchStatus::DepthLimitReached) => format!(
                "Stopped at the depth limit after {} solutions; the maze is too large.",
                n
            ),
        };
        queue!(self.out, Print(summary), Print("\n"))?;
        self.out.flush()
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            log::error!("failed to draw solutions: {}", e);
            self.error.get_or_insert(e);
        }
    }
}

impl<W: Write> SolutionObserver for Renderer<W> {
    fn on_solution_found(&mut self, event: SolutionEvent) {
        let closes_band = event.slot().is_last_in_band();
        self.band.push(event);
        if closes_band {
            let result = self.draw_band();
            self.record(result);
        }
    }

    fn on_search_complete(&mut self, outcome: &SearchOutcome) {
        let result = self.draw_band();
        self.record(result);
        let result = self.draw_summary(outcome);
        self.record(result);
    }
}
