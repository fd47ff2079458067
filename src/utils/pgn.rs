//! PGN read/write utilities for game history interchange.
//!
//! Writes the committed algebraic history with standard headers, and reads
//! PGN back by matching each movetext token against the algebraic text of
//! the legal moves in the replayed position.

use std::collections::BTreeMap;

use chrono::Local;

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{Color, Variant};
use crate::game_state::game_state::{GameState, Outcome};
use crate::utils::replay::GameRecord;

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub game: GameState,
    pub result: String,
}

pub fn write_pgn(game: &GameState) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Prime Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result_token(game).to_owned());
    headers.insert("Variant".to_owned(), game.variant().name().to_owned());

    let record = GameRecord::from_game(game);
    if let Some(initial_fen) = record.initial_fen {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(game, &headers)
}

pub fn write_pgn_with_headers(game: &GameState, headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let seats = game.players().len();
    let (first_seat, first_number) = game
        .fen_position_at(0)
        .map(|fen| opening_turn(game, fen))
        .unwrap_or((0, 1));

    let mut movetext_parts = Vec::<String>::new();
    for (ply, san) in game.algebraic_moves().into_iter().enumerate() {
        let seat = (first_seat + ply) % seats;
        let number = first_number + ((first_seat + ply) / seats) as u32;
        if seat == 0 {
            movetext_parts.push(format!("{number}. {san}"));
        } else if ply == 0 {
            movetext_parts.push(format!("{number}... {san}"));
        } else {
            movetext_parts.push(san.to_owned());
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn opening_turn(game: &GameState, fen: &str) -> (usize, u32) {
    let mut fields = fen.split_whitespace().skip(1);
    let active = fields.next().and_then(|f| f.chars().next()).and_then(Color::from_code);
    let seat = active
        .and_then(|color| game.players().iter().position(|p| p.color == color))
        .unwrap_or(0);
    let number = fields.nth(3).and_then(|f| f.parse().ok()).unwrap_or(1);
    (seat, number)
}

fn result_token(game: &GameState) -> &'static str {
    match (game.outcome(), game.variant()) {
        (Outcome::Ongoing, _) | (_, Variant::FourPlayer) => "*",
        (Outcome::Stalemate, _) => "1/2-1/2",
        (Outcome::Checkmate { winner_seat: Color::White, .. }, _) => "1-0",
        (Outcome::Checkmate { .. }, _) => "0-1",
    }
}

pub fn read_pgn(pgn: &str) -> Result<PgnGame, ChessErrors> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let variant = headers
        .get("Variant")
        .map(|name| Variant::parse(name))
        .transpose()?
        .unwrap_or(Variant::Standard);

    let mut game = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let fen = headers.get("FEN").ok_or_else(|| {
            ChessErrors::InvalidNotation("PGN SetUp=1 is present but FEN header is missing".to_owned())
        })?;
        GameState::from_variant_fen(variant, fen)?
    } else {
        GameRecord { variant, initial_fen: None, moves: Vec::new() }.replay()?
    };

    let mut result = "*".to_owned();

    let movetext = strip_pgn_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }

        let cleaned = trim_annotation_suffix(token);
        if is_result_token(cleaned) {
            result = normalize_result(cleaned).to_owned();
            break;
        }

        let (from, to) = find_move_by_algebraic(&game, cleaned)?;
        game.try_move(&from, &to)?;
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PgnGame { headers, game, result })
}

/// Matches `san` against the qualified algebraic text of every legal move.
/// Text that still fits two moves is rejected.
fn find_move_by_algebraic(game: &GameState, san: &str) -> Result<(String, String), ChessErrors> {
    let mut found = None;
    for (from, targets) in game.legal_moves() {
        for (to, mv) in targets {
            if game.algebraic_for(mv)? != san {
                continue;
            }
            if found.is_some() {
                return Err(ChessErrors::InvalidNotation(format!("ambiguous move {san}")));
            }
            found = Some((from.clone(), to.clone()));
        }
    }
    found.ok_or_else(|| ChessErrors::InvalidNotation(format!("no legal move matches {san}")))
}

fn parse_header_line(line: &str) -> Result<(String, String), ChessErrors> {
    let invalid = |what: &str| ChessErrors::InvalidNotation(format!("invalid PGN header {what}: {line}"));

    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(invalid("line"));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts.next().ok_or_else(|| invalid("key"))?.trim();
    let value_raw = parts.next().ok_or_else(|| invalid("value"))?.trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(invalid("quoting"));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn strip_pgn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn pgn_round_trip_start_position_history() {
        let mut game = GameState::new_game().unwrap();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "b5"), ("g8", "f6"), ("e1", "g1")] {
            game.try_move(from, to).unwrap();
        }

        let pgn = write_pgn(&game);
        assert!(pgn.contains("1. e4 e5 2. Nf3 Nc6 3. Bb5 Nf6 4. O-O *"));
        assert!(!pgn.contains("[FEN"));

        let parsed = read_pgn(&pgn).unwrap();
        assert_eq!(parsed.game.fen(), game.fen());
        assert_eq!(parsed.result, "*");
    }

    #[test]
    fn custom_start_with_black_to_move() {
        let game_start = "4k3/8/8/8/8/8/4P3/4K3 b - - 0 7";
        let mut game = GameState::from_fen(game_start).unwrap();
        game.try_move("e8", "d7").unwrap();
        game.try_move("e2", "e4").unwrap();

        let pgn = write_pgn(&game);
        assert!(pgn.contains("[FEN \"4k3/8/8/8/8/8/4P3/4K3 b - - 0 7\"]"));
        assert!(pgn.contains("7... Kd7 8. e4 *"));

        let parsed = read_pgn(&pgn).unwrap();
        assert_eq!(parsed.game.fen(), game.fen());
    }

    #[test]
    fn mate_sets_the_result_and_check_suffixes_parse() {
        let mut game = GameState::new_game().unwrap();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            game.try_move(from, to).unwrap();
        }
        let pgn = write_pgn(&game);
        assert!(pgn.contains("[Result \"0-1\"]"));
        assert!(pgn.contains("2. g4 Qh4# 0-1"));

        let parsed = read_pgn(&pgn).unwrap();
        assert!(parsed.game.is_game_over());
        assert_eq!(parsed.result, "0-1");
    }

    #[test]
    fn rooks_reaching_one_square_are_qualified_and_read_back() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/R4RK1 w - - 0 1").unwrap();
        let played = game.try_move("a1", "d1").unwrap();
        assert_eq!(played.algebraic, "Rad1");

        let pgn = write_pgn(&game);
        assert!(pgn.contains("1. Rad1 *"));
        let parsed = read_pgn(&pgn).unwrap();
        assert_eq!(parsed.game.fen(), game.fen());

        let mut file_mates = GameState::from_fen("4k3/8/8/R7/8/8/8/R5K1 w - - 0 1").unwrap();
        assert_eq!(file_mates.try_move("a5", "a3").unwrap().algebraic, "R5a3");
        let parsed = read_pgn(&write_pgn(&file_mates)).unwrap();
        assert_eq!(parsed.game.fen(), file_mates.fen());
    }

    #[test]
    fn unknown_move_is_rejected() {
        let err = read_pgn("[Event \"x\"]\n\n1. e5 *\n").unwrap_err();
        assert!(matches!(err, ChessErrors::InvalidNotation(_)));
    }

    #[test]
    fn standard_start_has_no_setup_header() {
        let game = GameState::new_game().unwrap();
        assert_eq!(game.fen(), STARTING_POSITION_FEN);
        assert!(!write_pgn(&game).contains("SetUp"));
    }
}
