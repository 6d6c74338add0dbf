use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use crossterm::cursor::MoveToPreviousLine;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use die_session::{DieSession, SessionConfig};
use die_stats::Die;

pub fn run(die: Option<Die>, overwrite: bool) -> Result<(), String> {
    let mut config =
        SessionConfig::default().with_overwrite(overwrite && io::stdout().is_terminal());
    if let Some(die) = die {
        config = config.with_die(die);
    }

    let mut session = DieSession::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    drive(&mut session, stdin.lock(), &mut stdout).map_err(|e| e.to_string())
}

fn drive(
    session: &mut DieSession,
    mut reader: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{}", session.intro())?;

    let mut line = String::new();
    while !session.is_finished() {
        write!(out, "{}", session.prompt())?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            // EOF
            writeln!(out)?;
            session.finish();
            break;
        }

        let rolls_before = session.rolls();
        match session.process(&line) {
            Ok(output) => {
                if session.config().overwrite && session.rolls() > rolls_before {
                    erase_previous_line(out)?;
                }
                if !output.is_empty() {
                    writeln!(out, "{output}")?;
                }
            }
            Err(e) => {
                writeln!(out, "{}", e.to_string().yellow())?;
            }
        }
    }

    Ok(())
}

/// Remove the echoed roll entry so the next prompt takes its place.
fn erase_previous_line(out: &mut impl Write) -> io::Result<()> {
    queue!(out, MoveToPreviousLine(1), Clear(ClearType::CurrentLine))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(config: SessionConfig, input: &str) -> String {
        let mut session = DieSession::new(config);
        let mut out = Vec::new();
        drive(&mut session, input.as_bytes(), &mut out).unwrap();
        assert!(session.is_finished());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prompts_then_reports() {
        let out = run_with(
            SessionConfig::default().with_die(Die::D4),
            "1\n2\n3\n4\n5\nn\n",
        );
        assert!(out.contains("Roll 4: Roll 5: Thank you!"));
        assert!(out.contains("This d4: No concern"));
        assert!(out.ends_with("Finished testing the d4 after 4 rolls.\n"));
    }

    #[test]
    fn eof_finishes_session() {
        let out = run_with(SessionConfig::default(), "");
        assert!(out.ends_with("How many faces does the die you want to test have?: \n"));
    }

    #[test]
    fn overwrite_emits_cursor_codes() {
        let out = run_with(
            SessionConfig::default().with_die(Die::D3).with_overwrite(true),
            "1\n4\nn\n",
        );
        assert!(out.contains("Roll 1: \u{1b}["));
        assert!(out.contains("Roll 2: Thank you!"));
    }
}
