use std::io::{self, BufRead, Write};

use rand::Rng;

use common::{Maze, Solver, SolverConfig};

use crate::{form, render::Renderer};

pub enum Navigation {
    Back,
    Quit,
}

/// Reads one line, trimmed. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Shows the form until it is submitted with a valid maze. `None` when the
/// input runs out first.
pub fn collect_maze<R: BufRead, W: Write, G: Rng>(
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> io::Result<Option<Maze>> {
    writeln!(out, "{}", form::LEGEND)?;
    writeln!(out, "{}", form::sample_line())?;
    writeln!(out, "{}", form::RANDOM_HINT)?;
    writeln!(out, "{}", form::WARNING)?;
    writeln!(out)?;

    loop {
        let Some(rows) = prompt(input, out, "Number of rows: ")? else {
            return Ok(None);
        };
        let Some(cols) = prompt(input, out, "Number of columns: ")? else {
            return Ok(None);
        };
        let Some(maze) = prompt(input, out, "Maze: ")? else {
            return Ok(None);
        };

        match form::parse_submission(&rows, &cols, &maze, rng) {
            Ok(maze) => return Ok(Some(maze)),
            Err(e) => {
                log::debug!("form rejected: {:?}", e);
                writeln!(out, "Error: {}.", e)?;
            }
        }
    }
}

pub fn solve_and_draw<W: Write>(maze: Maze, config: SolverConfig, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Solving:")?;
    writeln!(out, "{}", maze)?;
    writeln!(out)?;

    let mut solver = Solver::new(maze, config);
    let mut renderer = Renderer::new(&mut *out);
    solver.solve(&mut renderer);

    match renderer.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn ask_navigation<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Navigation> {
    let answer = prompt(input, out, "Press Enter to go back, or type q to quit: ")?;
    Ok(match answer.as_deref() {
        None => Navigation::Quit,
        Some(answer) if answer.eq_ignore_ascii_case("q") => Navigation::Quit,
        Some(_) => Navigation::Back,
    })
}

pub fn run<R: BufRead, W: Write, G: Rng>(
    input: &mut R,
    out: &mut W,
    config: SolverConfig,
    rng: &mut G,
) -> io::Result<()> {
    loop {
        let Some(maze) = collect_maze(input, out, rng)? else {
            return Ok(());
        };

        solve_and_draw(maze, config, out)?;

        match ask_navigation(input, out)? {
            Navigation::Back => writeln!(out)?,
            Navigation::Quit => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn run_script(script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(9);
        run(&mut input, &mut out, SolverConfig::unlimited(), &mut rng).expect("run should finish");
        String::from_utf8(out).expect("output is utf-8")
    }

    #[test]
    fn solves_a_corridor_then_quits() {
        let out = run_script("1\n5\nB000E\nq\n");
        assert!(out.contains("Solving:\nB000E\n"));
        assert!(out.contains("1 solution found."));
        assert_eq!(out.matches("Number of rows: ").count(), 1);
    }

    #[test]
    fn invalid_details_are_reported_and_the_form_is_shown_again() {
        let out = run_script("2\n2\nB0E\n1\n5\nB000E\nq\n");
        assert!(out.contains("Error: invalid maze details"));
        assert!(out.contains("1 solution found."));
        assert_eq!(out.matches("Number of rows: ").count(), 2);
    }

    #[test]
    fn going_back_returns_to_the_form() {
        let out = run_script("1\n5\nB000E\n\n1\n3\nB1E\n");
        assert_eq!(out.matches(form::LEGEND).count(), 2);
        assert!(out.contains("No solutions found."));
    }

    #[test]
    fn end_of_input_during_the_form_stops_quietly() {
        let out = run_script("5\n");
        assert!(out.contains("Number of columns: "));
        assert!(!out.contains("Solving:"));
    }
}
