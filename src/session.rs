//! Interactive terminal session
//!
//! The user enters a block of text (ended by an empty line), then picks
//! actions against it. Each action replaces the output area. The session
//! works over any reader and writer so it can be driven from tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::tool::{Action, TextTool};

const MENU: &str = "[r] Rephrase  [s] Summarize  [p] Important Points  [n] New text  [q] Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Run(Action),
    NewText,
    Quit,
}

fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim().to_lowercase().as_str() {
        "r" | "rephrase" => Some(Choice::Run(Action::Rephrase)),
        "s" | "summarize" => Some(Choice::Run(Action::Summarize)),
        "p" | "points" | "important points" => Some(Choice::Run(Action::ImportantPoints)),
        "n" | "new" => Some(Choice::NewText),
        "q" | "quit" | "exit" => Some(Choice::Quit),
        _ => None,
    }
}

pub struct Session<'a, R, W> {
    tool: &'a TextTool,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(tool: &'a TextTool, input: R, output: W) -> Self {
        Self {
            tool,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        let Some(mut text) = self.read_text()? else {
            return Ok(());
        };

        loop {
            writeln!(self.output, "{MENU}")?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            match parse_choice(&line) {
                Some(Choice::Run(action)) => {
                    debug!(%action, "session action");
                    let result = self.tool.run(action, &text);
                    writeln!(self.output, "Output:")?;
                    writeln!(self.output, "{result}")?;
                }
                Some(Choice::NewText) => match self.read_text()? {
                    Some(new_text) => text = new_text,
                    None => break,
                },
                Some(Choice::Quit) => break,
                None => writeln!(self.output, "Unknown choice: {}", line.trim())?,
            }
        }
        Ok(())
    }

    /// Lines up to the first empty one; `None` once input is exhausted
    fn read_text(&mut self) -> io::Result<Option<String>> {
        writeln!(self.output, "Enter your text (finish with an empty line):")?;
        self.output.flush()?;

        let mut lines = Vec::new();
        loop {
            match self.read_line()? {
                Some(line) if line.trim().is_empty() => break,
                Some(line) => lines.push(line),
                None if lines.is_empty() => return Ok(None),
                None => break,
            }
        }
        Ok(Some(lines.join("\n")))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}
