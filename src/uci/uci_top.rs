//! UCI protocol front-end and command loop.
//!
//! Parses UCI commands, keeps the current position, routes `go` requests to
//! the engine and writes protocol output. Diagnostics go through `tracing`,
//! never stdout.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::engines::engine_fixed_depth::FixedDepthEngine;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;
use crate::move_generation::perft::perft;
use crate::search::search_config::{SearchConfig, MAX_SEARCH_DEPTH};
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::render_game_state::render_position;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut uci = UciState::new().map_err(io::Error::other)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = uci.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct UciState {
    position: Position,
    engine: Box<dyn Engine>,
}

impl UciState {
    pub fn new() -> ChessResult<Self> {
        Ok(Self::with_engine(Box::new(FixedDepthEngine::new(
            SearchConfig::default(),
        )?)))
    }

    pub fn with_engine(engine: Box<dyn Engine>) -> Self {
        Self {
            position: Position::new_game(),
            engine,
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Handles one input line; returns `true` on `quit`.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        let mut parts = trimmed.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(false);
        };
        debug!(command = trimmed, "uci input");

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                for option in self.engine.uci_options() {
                    writeln!(out, "{option}")?;
                }
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "ucinewgame" => {
                self.position = Position::new_game();
                self.engine.new_game();
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    report(out, "setoption", &err)?;
                }
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    report(out, "position", &err)?;
                }
            }
            "go" => match self.handle_go(trimmed) {
                Ok(result) => {
                    for info in &result.info_lines {
                        writeln!(out, "{info}")?;
                    }
                    match result.best_move {
                        Some(best_move) => {
                            writeln!(out, "bestmove {}", move_to_long_algebraic(best_move))?
                        }
                        None => writeln!(out, "bestmove 0000")?,
                    }
                }
                Err(err) => {
                    report(out, "go", &err)?;
                    writeln!(out, "bestmove 0000")?;
                }
            },
            "stop" => {
                // Search is synchronous; by the time `stop` is read it has finished.
            }
            "quit" => {
                return Ok(true);
            }
            "d" => {
                writeln!(out, "{}", render_position(&self.position))?;
                writeln!(out, "Fen: {}", self.position.get_fen())?;
            }
            "eval" => {
                writeln!(out, "info string eval {}", self.position.evaluate())?;
            }
            "moves" => {
                let moves: Vec<String> = self
                    .position
                    .legal_moves()
                    .into_iter()
                    .map(move_to_long_algebraic)
                    .collect();
                writeln!(out, "info string moves {}", moves.join(" "))?;
            }
            "perft" => match parse_depth(parts.next()) {
                Ok(depth) => {
                    let counts = perft(&self.position, depth);
                    writeln!(
                        out,
                        "info string perft {} nodes {} captures {} ep {} castles {} promotions {}",
                        depth,
                        counts.nodes,
                        counts.captures,
                        counts.en_passant,
                        counts.castles,
                        counts.promotions
                    )?;
                }
                Err(err) => report(out, "perft", &err)?,
            },
            _ => {
                // Unknown commands are ignored for UCI compatibility.
                warn!(command = cmd, "ignoring unknown command");
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> ChessResult<()> {
        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in line.split_whitespace().skip(1) {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        self.engine
            .set_option(&name_tokens.join(" "), &value_tokens.join(" "))
    }

    fn handle_position(&mut self, line: &str) -> ChessResult<()> {
        let mut tokens = line.split_whitespace().skip(1).peekable();

        let mut position = match tokens.next() {
            Some("startpos") => Position::new_game(),
            Some("fen") => {
                let mut fen_parts = Vec::<&str>::new();
                while let Some(next) = tokens.next_if(|tok| *tok != "moves") {
                    fen_parts.push(next);
                }
                Position::from_fen(&fen_parts.join(" "))?
            }
            Some(other) => return Err(ChessError::UnknownPositionKind(other.to_owned())),
            None => return Err(ChessError::FenMissingField("board")),
        };

        if tokens.next_if_eq(&"moves").is_some() {
            for lan in tokens {
                let mv = long_algebraic_to_move(lan, &position)?;
                position = position.make_move(mv);
            }
        }

        // Only replace the current position once the whole command parsed.
        self.position = position;
        Ok(())
    }

    fn handle_go(&mut self, line: &str) -> ChessResult<EngineOutput> {
        let params = parse_go_params(line)?;
        self.engine.choose_move(&self.position, &params)
    }
}

fn report(out: &mut impl Write, command: &str, err: &ChessError) -> io::Result<()> {
    warn!(command, error = %err, "rejected protocol input");
    writeln!(out, "info string {command} error: {err}")
}

fn parse_depth(token: Option<&str>) -> ChessResult<u8> {
    let text = token.unwrap_or_default();
    text.parse::<u8>()
        .ok()
        .filter(|depth| (1..=MAX_SEARCH_DEPTH).contains(depth))
        .ok_or_else(|| ChessError::InvalidOptionValue {
            name: "depth".to_owned(),
            value: text.to_owned(),
        })
}

/// `go [depth N]`; clock and other limits are accepted and ignored.
fn parse_go_params(line: &str) -> ChessResult<GoParams> {
    let mut params = GoParams::default();
    let mut tokens = line.split_whitespace().skip(1);
    while let Some(tok) = tokens.next() {
        if tok == "depth" {
            params.depth = Some(parse_depth(tokens.next())?);
        }
    }
    Ok(params)
}
