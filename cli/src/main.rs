use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use sweep16_core as game;

use command::{Command, HELP};

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Sixteen by sixteen minesweeper on the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// How many mines to place
    #[arg(short, long, default_value_t = game::DEFAULT_MINES,
          value_parser = clap::value_parser!(u16).range(1..=255))]
    mines: u16,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the board as JSON snapshots
    #[arg(long)]
    json: bool,
}

fn show(out: &mut impl Write, session: &game::GameSession, json: bool) -> anyhow::Result<()> {
    let snapshot = session.snapshot();
    if json {
        writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
    } else {
        write!(out, "{}", render::board(&snapshot))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let mut config = game::GameConfig::new(args.mines)?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    log::debug!("config: {:?}", config);

    let mut session = game::GameSession::new(config)?;
    let mut out = io::stdout().lock();
    show(&mut out, &session, args.json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        log::trace!("command: {:?}", command);

        let result = match command {
            Command::Reveal(row, col) => session.reveal(row, col).map(|report| {
                log::debug!("{:?}, {} cells changed", report.outcome, report.changed.len());
                report.outcome == game::RevealOutcome::Rejected
            }),
            Command::Flag(row, col) => session.toggle_flag(row, col).map(|_| false),
            Command::Density(count) => session.set_mine_density(count).map(|_| false),
            Command::Reset => {
                session.reset();
                Ok(false)
            }
            Command::Show => Ok(false),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        };

        match result {
            Ok(true) => writeln!(out, "Round is over, `n` to begin a new one")?,
            Ok(false) => show(&mut out, &session, args.json)?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    Ok(())
}
