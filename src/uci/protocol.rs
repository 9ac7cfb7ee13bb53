use crate::core::board::Position;
use crate::core::fen;
use crate::core::square::Square;
use crate::engine::movegen::{legal_moves, legal_moves_from};
use std::io::{self, BufRead, Write};
use vampirc_uci::{UciMessage, parser};

/// Line-oriented command shell around a single game.
///
/// Standard commands (`uci`, `isready`, `ucinewgame`, `position`,
/// `setoption`, `quit`) follow UCI syntax; `d`, `fen`, `move`, `moves` and
/// `validate` are extensions for driving the rules engine by hand.
pub struct Uci {
    pub position: Position,
    /// Print the board after every accepted move (option `ShowBoard`).
    show_board: bool,
}

impl Uci {
    pub fn new() -> Self {
        Uci {
            position: Position::initial(),
            show_board: false,
        }
    }

    pub fn show_board(&self) -> bool {
        self.show_board
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let keep_going = self.handle_line(line, out)?;
            out.flush()?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Handle one command. Returns `false` once the shell should stop.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        match parser::parse_one(line) {
            UciMessage::Uci => self.cmd_uci(out)?,
            UciMessage::IsReady => writeln!(out, "readyok")?,
            UciMessage::SetOption { name, value } => {
                self.apply_setoption(name.trim(), value.as_deref(), out)?;
            }
            UciMessage::UciNewGame => self.position = Position::initial(),
            UciMessage::Position {
                startpos,
                fen,
                moves,
            } => {
                let fen_str = fen.as_ref().map(|f| f.as_str());
                let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                let refs: Vec<&str> = move_strs.iter().map(String::as_str).collect();
                self.apply_position(startpos, fen_str, &refs, out)?;
            }
            UciMessage::Quit => return Ok(false),
            UciMessage::Unknown(ref s, _) => {
                let parts: Vec<&str> = s.split_whitespace().collect();
                match parts.first().copied() {
                    Some("d" | "display") => self.cmd_display(out)?,
                    Some("fen") => writeln!(out, "{}", self.position.to_fen())?,
                    Some("move") => self.cmd_move(&parts, out)?,
                    Some("moves") => self.cmd_moves(&parts, out)?,
                    Some("validate") => self.cmd_validate(s, out)?,
                    Some(other) => writeln!(out, "info string unknown command {}", other)?,
                    None => {}
                }
            }
            _ => {}
        }
        Ok(true)
    }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name chess_rules {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author chess_rules developers")?;
        writeln!(out)?;
        writeln!(out, "option name ShowBoard type check default false")?;
        writeln!(out, "uciok")
    }

    fn apply_setoption<W: Write>(
        &mut self,
        name: &str,
        value: Option<&str>,
        out: &mut W,
    ) -> io::Result<()> {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        match opt.as_str() {
            "showboard" => match value.to_lowercase().as_str() {
                "true" => self.show_board = true,
                "false" => self.show_board = false,
                _ => writeln!(out, "info string ShowBoard expects true or false")?,
            },
            _ => writeln!(out, "info string unknown option {}", name)?,
        }
        Ok(())
    }

    /// Set up a position and play the listed moves. Stops at the first move
    /// the rules reject; the moves before it stay played.
    fn apply_position<W: Write>(
        &mut self,
        startpos: bool,
        fen: Option<&str>,
        move_strs: &[&str],
        out: &mut W,
    ) -> io::Result<()> {
        if startpos {
            self.position = Position::initial();
        } else if let Some(fen_str) = fen {
            match Position::from_fen(fen_str) {
                Ok(pos) => self.position = pos,
                Err(e) => return writeln!(out, "info string invalid fen: {}", e),
            }
        }

        for &s in move_strs {
            if let Err(reason) = self.play(s) {
                writeln!(out, "info string illegal move {}: {}", s, reason)?;
                break;
            }
        }
        Ok(())
    }

    /// Play a coordinate move such as "e2e4" or "e7e8q" on the current position.
    fn play(&mut self, move_str: &str) -> Result<String, String> {
        let (from, to, promotion) =
            parse_coordinate_move(move_str).ok_or_else(|| "not a coordinate move".to_string())?;
        let (mv, next) = self
            .position
            .play(from, to)
            .map_err(|rejection| rejection.to_string())?;
        if let Some(wanted) = promotion {
            let made = mv.promotion().map(|p| p.piece_type.to_char());
            if made != Some(wanted) {
                return Err(format!("promotion to {} is not supported", wanted));
            }
        }
        self.position = next;
        Ok(mv.algebraic().to_string())
    }

    fn cmd_move<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let Some(&move_str) = parts.get(1) else {
            return writeln!(out, "info string usage: move <from><to>");
        };
        match self.play(move_str) {
            Ok(algebraic) => {
                writeln!(out, "played {}", algebraic)?;
                if self.show_board {
                    self.cmd_display(out)?;
                }
                Ok(())
            }
            Err(reason) => writeln!(out, "info string illegal move {}: {}", move_str, reason),
        }
    }

    fn cmd_moves<W: Write>(&self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let moves = match parts.get(1) {
            Some(s) => match s.parse::<Square>() {
                Ok(sq) => legal_moves_from(&self.position, sq),
                Err(e) => return writeln!(out, "info string {}", e),
            },
            None => legal_moves(&self.position),
        };
        let list: Vec<&str> = moves.iter().map(|m| m.algebraic()).collect();
        writeln!(out, "moves {}", list.join(" "))
    }

    fn cmd_validate<W: Write>(&self, line: &str, out: &mut W) -> io::Result<()> {
        let text = line.trim_start().strip_prefix("validate").unwrap_or("").trim();
        let verdict = if fen::validate_strict(text) {
            "valid"
        } else if fen::validate(text) {
            "placement-only"
        } else {
            "invalid"
        };
        writeln!(out, "fen {}", verdict)
    }

    fn cmd_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", self.position)
    }
}

/// Split "e2e4" / "e7e8q" into squares and an optional promotion letter.
fn parse_coordinate_move(s: &str) -> Option<(Square, Square, Option<char>)> {
    if !s.is_ascii() || !(4..=5).contains(&s.len()) {
        return None;
    }
    let from = s[0..2].parse().ok()?;
    let to = s[2..4].parse().ok()?;
    let promotion = s[4..].chars().next().map(|c| c.to_ascii_lowercase());
    Some((from, to, promotion))
}

impl Default for Uci {
    fn default() -> Self {
        Self::new()
    }
}
