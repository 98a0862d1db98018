use std::{
    io::{self, stdout},
    process,
};

use crossterm::{execute, style::ResetColor};

use common::SolverConfig;

fn main() {
    ctrlc::set_handler(move || {
        let _ = execute!(stdout(), ResetColor);
        println!();
        println!("Maze solver interrupted.");
        std::process::exit(0);
    })
    .expect("error setting Ctrl-C handler");

    let env = env_logger::Env::new()
        .filter("MAZE_LOG")
        .write_style("MAZE_LOG_STYLE");
    env_logger::init_from_env(env);

    let config = match SolverConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Invalid solver configuration.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = stdout();
    let mut rng = rand::rng();

    if let Err(e) = viewer::run::run(&mut input, &mut out, config, &mut rng) {
        let _ = execute!(stdout(), ResetColor);
        eprintln!("Error: Failed to draw the maze.");
        eprintln!("Details: {}.", e);
        process::exit(1);
    }
}
