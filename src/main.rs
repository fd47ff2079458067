//! Line-oriented command front end.
//!
//! Reads one command per line from stdin and answers on stdout:
//!
//! ```text
//! new [standard|fischer-random|four-player] [seed]
//! setoption name <variant|seed|fen> value <value>
//! position fen <notation>
//! move <from><to>       e.g. `move e2e4`, `move a10a11`
//! undo
//! fen | moves | board | history | pgn | record | quit
//! ```
//!
//! Diagnostics go to stderr through the `log` facade; the level is taken
//! from `PRIME_CHESS_LOG` (default `warn`).

use std::io::{self, BufRead, Write};

use chrono::Local;
use log::{error, info, LevelFilter, Log, Metadata, Record};

use prime_chess::config::GameOptions;
use prime_chess::errors::ChessErrors;
use prime_chess::game_state::chess_types::Variant;
use prime_chess::game_state::game_state::GameState;
use prime_chess::utils::algebraic::parse_move_text;
use prime_chess::utils::pgn::write_pgn;
use prime_chess::utils::render_game_state::render_game_state;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} {:<5} {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = std::env::var("PRIME_CHESS_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

struct Session {
    options: GameOptions,
    game: GameState,
}

impl Session {
    fn new() -> Result<Self, ChessErrors> {
        let options = GameOptions::default();
        let game = GameState::from_options(&options)?;
        Ok(Self { options, game })
    }

    /// Returns `Ok(false)` when the loop should stop.
    fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<bool, ChessErrors> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(true);
        };
        let rest: Vec<&str> = parts.collect();

        match command {
            "quit" => return Ok(false),
            "new" => {
                let mut options = self.options.clone();
                options.initial_fen = None;
                if let Some(variant) = rest.first() {
                    options.variant = Variant::parse(variant)?;
                }
                if let Some(seed) = rest.get(1) {
                    options.set_option("seed", seed)?;
                }
                self.start(options)?;
                self.print_fen(out)?;
            }
            "setoption" => {
                let (name, value) = parse_setoption(&rest)?;
                self.options.set_option(&name, &value)?;
            }
            "position" => {
                if rest.first() != Some(&"fen") || rest.len() < 2 {
                    return Err(ChessErrors::InvalidNotation("expected: position fen <notation>".to_owned()));
                }
                let mut options = self.options.clone();
                options.initial_fen = Some(rest[1..].join(" "));
                self.start(options)?;
                self.print_fen(out)?;
            }
            "move" => {
                let request = parse_move_text(&rest.join(""))?;
                let played = self.game.try_move(&request.from, &request.to)?;
                writeln!(out, "{}", serde_json::to_string(&played)?)?;
                if self.game.is_game_over() {
                    writeln!(out, "gameover {:?}", self.game.outcome())?;
                }
            }
            "undo" => {
                self.game.cancel_last_move()?;
                self.print_fen(out)?;
            }
            "fen" => self.print_fen(out)?,
            "moves" => {
                writeln!(out, "{}", serde_json::to_string(&self.game.serialize_legal_moves())?)?;
            }
            "board" => {
                writeln!(out, "{}", render_game_state(&self.game))?;
            }
            "history" => {
                writeln!(out, "{}", self.game.algebraic_moves().join(" "))?;
            }
            "pgn" => {
                write!(out, "{}", write_pgn(&self.game))?;
            }
            "record" => {
                writeln!(out, "{}", self.game.to_record().to_json()?)?;
            }
            other => {
                writeln!(out, "error unknown command: {other}")?;
            }
        }
        Ok(true)
    }

    fn start(&mut self, options: GameOptions) -> Result<(), ChessErrors> {
        self.game = GameState::from_options(&options)?;
        self.options = options;
        Ok(())
    }

    fn print_fen(&self, out: &mut impl Write) -> Result<(), ChessErrors> {
        writeln!(out, "fen {}", self.game.fen())?;
        Ok(())
    }
}

/// `name <name> value <value...>`, the value may contain spaces.
fn parse_setoption(parts: &[&str]) -> Result<(String, String), ChessErrors> {
    let value_at = parts.iter().position(|p| *p == "value");
    match (parts.first(), value_at) {
        (Some(&"name"), Some(v)) if v > 1 => Ok((parts[1..v].join(" "), parts[v + 1..].join(" "))),
        _ => Err(ChessErrors::UnknownOption(parts.join(" "))),
    }
}

fn main() {
    init_logging();

    let mut session = match Session::new() {
        Ok(session) => session,
        Err(err) => {
            error!("cannot create the initial game: {err}");
            std::process::exit(1);
        }
    };
    info!("prime_chess ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let replied = match session.handle(line.trim(), &mut out) {
            Ok(true) => Ok(()),
            Ok(false) => break,
            Err(ChessErrors::Io(reason)) => Err(reason),
            Err(err) => writeln!(out, "error {err}").map_err(|e| e.to_string()),
        };
        if let Err(reason) = replied.and_then(|()| out.flush().map_err(|e| e.to_string())) {
            error!("stdout closed: {reason}");
            break;
        }
    }
}
