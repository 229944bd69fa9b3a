//! Line-oriented interactive prompts.
//!
//! Generic over the reader and writer so command flows can be driven by
//! scripted input in tests.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout as StdoutStream;

use crate::error::CliError;

pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub(crate) fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `msg` on its own line.
    pub(crate) fn say(&mut self, msg: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Ask a question and return the trimmed answer (possibly empty).
    pub(crate) fn ask(&mut self, question: &str) -> Result<String, CliError> {
        write!(
            self.output,
            "{} ",
            question.if_supports_color(StdoutStream, |t| t.bold())
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::Aborted);
        }
        Ok(line.trim().to_string())
    }

    pub(crate) fn ask_non_empty(&mut self, question: &str) -> Result<String, CliError> {
        loop {
            let answer = self.ask(question)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say("A value is required.")?;
        }
    }

    /// Ask until the answer parses as `T`.
    pub(crate) fn ask_parsed<T: FromStr>(&mut self, question: &str) -> Result<T, CliError> {
        loop {
            match self.ask(question)?.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Invalid input, try again.")?,
            }
        }
    }

    /// Yes/no question. An empty answer picks `default`.
    pub(crate) fn confirm(&mut self, question: &str, default: bool) -> Result<bool, CliError> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let answer = self.ask(&format!("{question} {hint}"))?;
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    /// Show a numbered menu and return the zero-based index picked.
    /// An empty answer picks `default` when there is one.
    pub(crate) fn choose<T: Display>(
        &mut self,
        question: &str,
        options: &[T],
        default: Option<usize>,
    ) -> Result<usize, CliError> {
        self.say(question)?;
        for (i, option) in options.iter().enumerate() {
            let marker = if default == Some(i) { " (default)" } else { "" };
            writeln!(self.output, "  {}) {option}{marker}", i + 1)?;
        }

        loop {
            let answer = self.ask(&format!("Choose 1-{}:", options.len()))?;
            if answer.is_empty()
                && let Some(d) = default
            {
                return Ok(d);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => self.say("Invalid choice, try again.")?,
            }
        }
    }

    /// Wait for the operator to press enter.
    pub(crate) fn pause(&mut self, msg: &str) -> Result<(), CliError> {
        self.ask(msg).map(|_| ())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn scripted(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims() {
        let mut p = scripted("  Lethal Company \n");
        assert_eq!(p.ask("Name?").unwrap(), "Lethal Company");
    }

    #[test]
    fn test_eof_aborts() {
        let mut p = scripted("");
        assert!(matches!(p.ask("Name?"), Err(CliError::Aborted)));
    }

    #[test]
    fn test_ask_non_empty_reprompts() {
        let mut p = scripted("\n\nValheim\n");
        assert_eq!(p.ask_non_empty("Name?").unwrap(), "Valheim");
    }

    #[test]
    fn test_ask_parsed_reprompts_on_garbage() {
        let mut p = scripted("abc\n-1\n1966720\n");
        assert_eq!(p.ask_parsed::<u32>("Id?").unwrap(), 1966720);
        let out = String::from_utf8(p.output).unwrap();
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_confirm_default_and_answers() {
        let mut p = scripted("\nn\nmaybe\nYES\n");
        assert!(p.confirm("Ok?", true).unwrap());
        assert!(!p.confirm("Ok?", true).unwrap());
        assert!(p.confirm("Ok?", false).unwrap());
    }

    #[test]
    fn test_choose() {
        let mut p = scripted("0\n4\n2\n\n");
        let options = ["a", "b", "c"];
        assert_eq!(p.choose("Pick", &options, None).unwrap(), 1);
        assert_eq!(p.choose("Pick", &options, Some(2)).unwrap(), 2);
    }

    #[test]
    fn test_choose_without_default_rejects_empty() {
        let mut p = scripted("\n1\n");
        assert_eq!(p.choose("Pick", &["only"], None).unwrap(), 0);
    }
}
