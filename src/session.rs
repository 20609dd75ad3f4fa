//! Interactive read-parse-compute-print loop.
//!
//! The session owns its line source and output. Planted and harvested
//! timestamps are each re-requested until they parse and resolve, so a bad
//! harvested line never discards an accepted planted one.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{info, warn};

use crate::{Calculator, GrowthTime, Reading, strip_line_ending};

pub const BANNER: &str = "Welcome to the SOS:AWL Growth Calculator";
pub const PLANTED_PROMPT: &str = "Enter the Planted time (e.g., Summer 15 3:30 PM): ";
pub const HARVESTED_PROMPT: &str = "Enter the Harvested time (e.g., Autumn 28 8:45 AM): ";
pub const ACTION_PROMPT: &str =
    "Type 'exit' to quit, 'c' to clear and continue, or press Enter to calculate another plant's growth: ";

/// ANSI erase display and cursor home
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Source of input lines for a session.
pub trait LineSource {
    /// Shows `prompt` and returns the next line without its line ending,
    /// or `None` once input has ended.
    ///
    /// # Errors
    /// Fails on an I/O error from the underlying reader.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// `LineSource` over any buffered reader. Prompts are not echoed.
#[derive(Debug)]
pub struct Lines<R>(pub R);

impl<R: BufRead> LineSource for Lines<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_owned()))
    }
}

/// Follow-up chosen after a result is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    Clear,
    Continue,
}

impl Action {
    /// Anything other than an exit or clear command continues.
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();
        if ["exit", "quit", "q"].iter().any(|cmd| input.eq_ignore_ascii_case(cmd)) {
            Self::Exit
        } else if input.eq_ignore_ascii_case("c") || input.eq_ignore_ascii_case("clear") {
            Self::Clear
        } else {
            Self::Continue
        }
    }
}

/// Prompt loop computing one growth time per planted/harvested pair.
pub struct Session<S, W> {
    source:     S,
    out:        W,
    calculator: Calculator,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub const fn new(source: S, out: W, calculator: Calculator) -> Self {
        Self {
            source,
            out,
            calculator,
        }
    }

    /// Runs until the user exits or input ends.
    ///
    /// # Errors
    /// Fails only on I/O errors; bad input is reported and re-requested.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting growth calculator session");
        self.banner()?;

        loop {
            writeln!(self.out)?;
            let Some(growth) = self.next_growth_time()? else {
                break;
            };
            writeln!(self.out, "Growth time was {growth} days.")?;

            let Some(answer) = self.source.read_line(ACTION_PROMPT)? else {
                break;
            };
            match Action::from_input(&answer) {
                Action::Exit => break,
                Action::Clear => {
                    write!(self.out, "{CLEAR_SCREEN}")?;
                    self.banner()?;
                }
                Action::Continue => {}
            }
        }

        info!("Session ended");
        self.out.flush()?;
        Ok(())
    }

    /// Consumes the session, returning its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    fn banner(&mut self) -> Result<()> {
        writeln!(self.out, "{BANNER}")?;
        Ok(())
    }

    /// Collects a planted/harvested pair and computes its growth time.
    /// Returns `None` if input ended first.
    fn next_growth_time(&mut self) -> Result<Option<GrowthTime>> {
        loop {
            let Some(planted) = self.next_reading(PLANTED_PROMPT)? else {
                return Ok(None);
            };
            let Some(harvested) = self.next_reading(HARVESTED_PROMPT)? else {
                return Ok(None);
            };

            // Only reachable with clock values outside 1-12 / 0-59; start the
            // pair over since neither line is individually at fault.
            match GrowthTime::between(planted, harvested) {
                Ok(growth) => return Ok(Some(growth)),
                Err(err) => {
                    warn!("Rejected timestamp pair: {err}");
                    writeln!(self.out, "{err}")?;
                }
            }
        }
    }

    fn next_reading(&mut self, prompt: &str) -> Result<Option<Reading>> {
        loop {
            let Some(line) = self.source.read_line(prompt)? else {
                return Ok(None);
            };
            match self.calculator.parse_reading(&line) {
                Ok(reading) => return Ok(Some(reading)),
                Err(err) => {
                    warn!("Rejected input {line:?}: {err}");
                    writeln!(self.out, "{err}")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, DayPolicy};
    use std::io::Cursor;

    /// Records every prompt so tests can see what was asked for.
    struct Scripted {
        lines:   std::vec::IntoIter<&'static str>,
        prompts: Vec<String>,
    }

    impl Scripted {
        fn new(lines: &[&'static str]) -> Self {
            Self {
                lines:   lines.to_vec().into_iter(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineSource for &mut Scripted {
        fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
            self.prompts.push(prompt.to_owned());
            Ok(self.lines.next().map(str::to_owned))
        }
    }

    fn run_script(script: &mut Scripted, calculator: Calculator) -> String {
        let mut session = Session::new(script, Vec::new(), calculator);
        session.run().expect("session runs");
        String::from_utf8(session.into_output()).expect("utf-8 output")
    }

    #[test]
    fn test_single_calculation_then_exit() {
        let mut script = Scripted::new(&["Summer 15 3:30 PM", "Autumn 28 8:45 AM", "exit"]);
        let output = run_script(&mut script, Calculator::default());

        assert!(output.starts_with(BANNER));
        assert!(output.contains("Growth time was 23.5 days."));
        assert_eq!(
            script.prompts,
            [PLANTED_PROMPT, HARVESTED_PROMPT, ACTION_PROMPT]
        );
    }

    #[test]
    fn test_format_error_reprompts_same_timestamp() {
        let mut script = Scripted::new(&[
            "Summer 15 3:30",
            "Summer 15 3:30 PM",
            "Autumn 28 8:45 AM",
            "q",
        ]);
        let output = run_script(&mut script, Calculator::default());

        assert!(output.contains("Invalid input format: 'Summer 15 3:30'"));
        assert!(output.contains("Growth time was 23.5 days."));
        assert_eq!(
            script.prompts,
            [PLANTED_PROMPT, PLANTED_PROMPT, HARVESTED_PROMPT, ACTION_PROMPT]
        );
    }

    #[test]
    fn test_bad_season_keeps_accepted_planted_time() {
        let mut script = Scripted::new(&[
            "Summer 15 3:30 PM",
            "Wet 5 1:00 AM",
            "Autumn 28 8:45 AM",
            "exit",
        ]);
        let output = run_script(&mut script, Calculator::default());

        assert!(output.contains("Invalid season: 'Wet'"));
        assert!(output.contains("Growth time was 23.5 days."));
        assert_eq!(
            script.prompts,
            [PLANTED_PROMPT, HARVESTED_PROMPT, HARVESTED_PROMPT, ACTION_PROMPT]
        );
    }

    #[test]
    fn test_continue_and_clear() {
        let mut script = Scripted::new(&[
            "Spring 1 6:00 AM",
            "Spring 3 6:00 AM",
            "",
            "Winter 8 6:00 AM",
            "Spring 3 6:00 AM",
            "c",
            "Spring 1 1:00 AM",
            "Spring 4 11:00 PM",
            "exit",
        ]);
        let output = run_script(&mut script, Calculator::default());

        assert!(output.contains("Growth time was 2 days."));
        assert!(output.contains("Growth time was 5 days."));
        assert!(output.contains("Growth time was 4 days."));
        assert!(output.contains(CLEAR_SCREEN));
        assert_eq!(output.matches(BANNER).count(), 2);
    }

    #[test]
    fn test_clock_gap_restarts_pair() {
        let mut script = Scripted::new(&[
            "Spring 1 1:00 AM",
            "Spring 2 30:00 AM",
            "Spring 1 1:00 AM",
            "Spring 2 1:00 AM",
            "exit",
        ]);
        let output = run_script(&mut script, Calculator::default());

        assert!(output.contains("minutes should be between 0 and 1440"));
        assert!(output.contains("Growth time was 1 days."));
        assert_eq!(
            script.prompts,
            [
                PLANTED_PROMPT,
                HARVESTED_PROMPT,
                PLANTED_PROMPT,
                HARVESTED_PROMPT,
                ACTION_PROMPT
            ]
        );
    }

    #[test]
    fn test_end_of_input_mid_pair() {
        let mut script = Scripted::new(&["Summer 15 3:30 PM"]);
        let output = run_script(&mut script, Calculator::default());

        assert!(!output.contains("Growth time"));
        assert_eq!(script.prompts, [PLANTED_PROMPT, HARVESTED_PROMPT]);
    }

    #[test]
    fn test_strict_days_session() {
        let calculator = Calculator::new(Config {
            day_policy: DayPolicy::Reject,
            ..Config::default()
        });
        let mut script = Scripted::new(&["Summer 15 3:30 PM", "Summer 5 3:30 PM", "Autumn 8 8:45 AM", "exit"]);
        let output = run_script(&mut script, calculator);

        assert!(output.contains("Invalid day: 15 (must be 1-10)"));
        assert!(output.contains("Growth time was 13.5 days."));
    }

    #[test]
    fn test_lines_source() {
        let input = Cursor::new("Summer 15 3:30 PM\r\nAutumn 28 8:45 AM\nexit\n");
        let mut session = Session::new(Lines(input), Vec::new(), Calculator::default());
        session.run().expect("session runs");

        let output = String::from_utf8(session.into_output()).expect("utf-8 output");
        assert!(output.contains("Growth time was 23.5 days."));
    }

    #[test]
    fn test_lines_source_end_of_input() {
        let mut lines = Lines(Cursor::new("last line"));
        assert_eq!(lines.read_line("").expect("read"), Some("last line".to_owned()));
        assert_eq!(lines.read_line("").expect("read"), None);
    }

    #[test]
    fn test_lines_source_strips_only_line_ending() {
        let mut lines = Lines(Cursor::new("Spring 1 1:00 AM\r\nSpring 2 1:00 AM \n"));
        assert_eq!(
            lines.read_line("").expect("read"),
            Some("Spring 1 1:00 AM".to_owned())
        );
        assert_eq!(
            lines.read_line("").expect("read"),
            Some("Spring 2 1:00 AM ".to_owned())
        );
    }

    #[test]
    fn test_action_from_input() {
        assert_eq!(Action::from_input("exit"), Action::Exit);
        assert_eq!(Action::from_input(" Q "), Action::Exit);
        assert_eq!(Action::from_input("QUIT"), Action::Exit);
        assert_eq!(Action::from_input("C"), Action::Clear);
        assert_eq!(Action::from_input("clear"), Action::Clear);
        assert_eq!(Action::from_input(""), Action::Continue);
        assert_eq!(Action::from_input("x"), Action::Continue);
    }
}
