use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use console::style;
use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;


mod domain;
mod factory;
mod presenter;
mod prompt;
mod simulator;

use crate::{
    domain::Command,
    factory::FactoryError,
    prompt::{InputError, Prompter},
    simulator::Simulation,
};

/// Drive a car through a rectangular room.
///
/// Values that are not given as options are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "car-simulator", version)]
struct Args {
    #[arg(long, help = format!("Car type: {}", factory::car_types_joined(" | ")))]
    car: Option<String>,

    /// Room size as "<WIDTH> <LENGTH>"
    #[arg(long)]
    room: Option<String>,

    /// Starting position and heading as "<X> <Y> <N|E|S|W>"
    #[arg(long)]
    start: Option<String>,

    /// Commands to execute, any of F, B, L, R
    #[arg(long, conflicts_with = "random")]
    commands: Option<String>,

    /// Execute this many randomly generated commands
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Print a map of the room and the path driven
    #[arg(long)]
    map: bool,
}

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Factory(#[from] FactoryError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn random_commands(count: usize, seed: Option<u64>) -> Vec<Command> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    (0..count).map(|_| rng.random()).collect()
}

fn run(args: &Args) -> Result<(), AppError> {
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let car_type = match &args.car {
        Some(line) => prompt::parse_car_type(line)?,
        None => prompter.car_type()?,
    };
    let room = match &args.room {
        Some(line) => prompt::parse_room_size(line)?,
        None => prompter.room_size()?,
    };
    let start = match &args.start {
        Some(line) => prompt::parse_start_position(line, &room)?,
        None => prompter.start_position(&room)?,
    };
    let commands = match (args.random, &args.commands) {
        (Some(count), _) => {
            let commands = random_commands(count, args.seed);
            let letters = commands.iter().map(|c| c.letter()).collect::<String>();
            println!("Commands: {letters}");
            commands
        }
        (None, Some(line)) => prompt::parse_commands(line)?,
        (None, None) => prompter.commands()?,
    };

    let mut car = factory::car_factory(&car_type, start)?;
    let report = Simulation::new(&room, &mut car).run(&commands);
    info!("simulation finished with {:?}", report.status);

    let summary = presenter::summary(&report, &room);
    let mut stdout = io::stdout().lock();
    if report.is_completed() {
        writeln!(stdout, "{}", style(summary).green())?;
    } else {
        writeln!(stdout, "{}", style(summary).yellow())?;
    }
    if args.map {
        match presenter::map(&room, &report) {
            Some(map) => writeln!(stdout, "{map}")?,
            None => warn!(
                "room has more than {} cells, not drawing the map",
                presenter::MAP_MAX_CELLS
            ),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
