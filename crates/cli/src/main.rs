use anyhow::{Context, Result};
use chess_duel_core::{Game, GameConfig, PieceId};
use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod input;
mod render;

use input::Command;

struct Options {
    config: GameConfig,
    color: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args)? {
        Some(options) => options,
        None => {
            print_usage(&args[0]);
            process::exit(1);
        }
    };
    if !options.color {
        colored::control::set_override(false);
    }

    let mut game = Game::standard(&options.config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut message = "Welcome!".to_string();

    while !game.is_over() {
        println!("{}", render::board(&game.snapshot()));
        println!("{}", message);

        let prompt = format!(
            "{}, enter a move (e.g. Nf3) or select a piece as 'col row': ",
            game.current_player().name
        );
        let Some(line) = read_line(&mut lines, &prompt)? else {
            return Ok(());
        };
        let Some(command) = Command::parse(&line) else {
            message = "Invalid entry!".to_string();
            continue;
        };
        debug!(?command, "command read");

        message = match command {
            Command::Quit => return Ok(()),
            Command::Help => help_text(),
            Command::Json => {
                println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
                continue;
            }
            Command::Notation(text) => match game.play(&text) {
                Ok(outcome) => outcome.to_string(),
                Err(e) => e.to_string(),
            },
            Command::Select(square) => match game.select_piece(square) {
                Ok(piece) => move_selected(&mut game, piece, &mut lines)?,
                Err(e) => e.to_string(),
            },
        };
    }

    println!("{}", render::board(&game.snapshot()));
    if let Some(winner) = game.winner() {
        println!("Game over! {} is the winner.", game.player(winner).name);
    }
    Ok(())
}

/// Asks for destinations until one is accepted. A malformed entry abandons
/// the selection; an illegal one asks again.
fn move_selected<B: BufRead>(
    game: &mut Game,
    piece: PieceId,
    lines: &mut io::Lines<B>,
) -> Result<String> {
    loop {
        let selected = game.piece(piece);
        let prompt = format!(
            "Move {} at {} to 'col row': ",
            selected.kind(),
            selected
                .square()
                .map(|sq| sq.to_string())
                .unwrap_or_default()
        );
        let Some(line) = read_line(lines, &prompt)? else {
            game.clear_selection();
            return Ok("Selection abandoned.".to_string());
        };
        let Some(to) = input::parse_coords(&line) else {
            game.clear_selection();
            return Ok("Invalid entry!".to_string());
        };

        match game.move_selected_to(to) {
            Ok(outcome) => return Ok(outcome.to_string()),
            Err(e) if e.is_rejection() => {
                println!("{}", render::board(&game.snapshot()));
                println!("{}", e);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn read_line<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read input")?)),
        None => Ok(None),
    }
}

fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options {
        config: GameConfig::default(),
        color: true,
    };
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = rest.next() else {
                    return Ok(None);
                };
                options.config = GameConfig::from_json_file(path)
                    .with_context(|| format!("loading config from {}", path))?;
            }
            "--no-color" => options.color = false,
            _ => return Ok(None),
        }
    }
    Ok(Some(options))
}

fn print_usage(program: &str) {
    println!("Usage: {} [--config <file.json>] [--no-color]", program);
    println!();
    println!("Config keys: red_name, green_name, first_to_move (\"red\" | \"green\")");
}

fn help_text() -> String {
    [
        "Enter a move as <piece><file><rank>, e.g. Nf3 or Pe4.",
        "Add the source file or rank when two pieces can make the move, e.g. Nbd7 or R1a3.",
        "Or type 'col row' (0-7 each) to select a piece, then 'col row' for its destination.",
        "'json' prints the board, 'quit' leaves the game.",
    ]
    .join("\n")
}
