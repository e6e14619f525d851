//! Terminal front end.
//!
//! Reads one command per line from stdin and prints the board after each:
//!
//! - `click X Y`: pointer click at pixel (X, Y)
//! - `cell ROW COL`: pick a board cell directly
//! - `reset`, `quit`, `score`
//!
//! When a round ends the score screen asks for `next` (new round) or
//! `no` (quit).

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::warn;

use icebreaker::controller::{Controller, Outcome, Update};
use icebreaker::core::Coord;
use icebreaker::input::{InputEvent, Point};
use icebreaker::render::render_board;
use icebreaker::session::Session;
use icebreaker::telemetry;

#[derive(Error, Debug, PartialEq, Eq)]
enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` needs two integers")]
    Arguments(&'static str),
}

enum Command {
    Click(Point),
    Event(InputEvent),
    Score,
}

fn parse_pair(args: &[&str], name: &'static str) -> Result<(i32, i32), CommandError> {
    match args {
        [a, b] => match (a.parse(), b.parse()) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            _ => Err(CommandError::Arguments(name)),
        },
        _ => Err(CommandError::Arguments(name)),
    }
}

fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "click" => {
            let (x, y) = parse_pair(args, "click")?;
            Command::Click(Point::new(x, y))
        }
        "cell" => {
            let (row, col) = parse_pair(args, "cell")?;
            Command::Event(InputEvent::Select(Coord::new(row, col)))
        }
        "reset" => Command::Event(InputEvent::Reset),
        "quit" => Command::Event(InputEvent::Quit),
        "score" => Command::Score,
        _ => return Err(CommandError::Unknown(head.to_string())),
    };
    Ok(Some(command))
}

/// Reply to the score screen's "next round" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    NextRound,
    NoThanks,
}

fn parse_answer(line: &str) -> Option<Answer> {
    match line.trim().to_ascii_lowercase().as_str() {
        "next" | "yes" | "y" | "reset" => Some(Answer::NextRound),
        "no" | "quit" | "q" => Some(Answer::NoThanks),
        _ => None,
    }
}

const NEXT_ROUND_PROMPT: &str = "NEXT ROUND? (next / no)";

fn show(out: &mut impl Write, controller: &Controller, update: &Update) -> io::Result<()> {
    write!(out, "{}", render_board(controller.game().board()))?;
    if let Some(notice) = update.notice {
        writeln!(out, "{}", notice)?;
    }
    writeln!(out, "{}", update.status)?;
    Ok(())
}

fn main() -> io::Result<()> {
    telemetry::init_tracing();

    let mut session = Session::new();
    let mut controller = Controller::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render_board(controller.game().board()))?;
    writeln!(out, "{}", controller.status())?;

    let mut between_rounds = false;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if between_rounds {
            let event = match parse_answer(&line) {
                Some(Answer::NextRound) => InputEvent::Reset,
                Some(Answer::NoThanks) => InputEvent::Quit,
                None => {
                    writeln!(out, "{}", NEXT_ROUND_PROMPT)?;
                    continue;
                }
            };
            between_rounds = false;
            let update = controller.handle(event, &mut session);
            show(&mut out, &controller, &update)?;
            if update.outcome == Outcome::Quit {
                break;
            }
            continue;
        }

        let command = match parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!(%err, "bad command");
                eprintln!("{}", err);
                continue;
            }
        };

        let update = match command {
            Command::Click(p) => controller.click(p, &mut session),
            Command::Event(event) => controller.handle(event, &mut session),
            Command::Score => {
                write!(out, "{}", session.summary())?;
                continue;
            }
        };

        show(&mut out, &controller, &update)?;
        if update.ended.is_some() {
            write!(out, "{}", session.summary())?;
            writeln!(out, "{}", NEXT_ROUND_PROMPT)?;
            between_rounds = true;
        }
        if update.outcome == Outcome::Quit {
            break;
        }
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert!(matches!(
            parse("click 100 120"),
            Ok(Some(Command::Click(Point { x: 100, y: 120 })))
        ));
        assert!(matches!(
            parse("CELL 1 2"),
            Ok(Some(Command::Event(InputEvent::Select(Coord { row: 1, col: 2 }))))
        ));
        assert!(matches!(parse("reset"), Ok(Some(Command::Event(InputEvent::Reset)))));
        assert!(matches!(parse("score"), Ok(Some(Command::Score))));
        assert!(matches!(parse("   "), Ok(None)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse("jump").err(),
            Some(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(parse("cell 1").err(), Some(CommandError::Arguments("cell")));
        assert_eq!(parse("click a b").err(), Some(CommandError::Arguments("click")));
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("next"), Some(Answer::NextRound));
        assert_eq!(parse_answer(" Y "), Some(Answer::NextRound));
        assert_eq!(parse_answer("no"), Some(Answer::NoThanks));
        assert_eq!(parse_answer("QUIT"), Some(Answer::NoThanks));
        assert_eq!(parse_answer("cell 1 1"), None);
        assert_eq!(parse_answer(""), None);
    }
}
