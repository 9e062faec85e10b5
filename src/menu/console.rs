// File: ./src/menu/console.rs
// Line-based prompt I/O over any reader/writer pair
use colored::Colorize;
use std::io::{self, BufRead, ErrorKind, IsTerminal, Stdin, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    styled: bool,
    exhausted: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        let stdout = io::stdout();
        let styled = stdout.is_terminal();
        Console::new(stdin.lock(), stdout).styled(styled)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
            exhausted: false,
        }
    }

    pub fn styled(mut self, on: bool) -> Self {
        self.styled = on;
        self
    }

    /// True once the input has hit end-of-file or failed for good.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Prints `label` and reads one line without its line ending.
    /// Unavailable input is reported and yields an empty string.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.exhausted = true;
                writeln!(self.output)?;
                self.warn("Ввод недоступен в текущей среде.")?;
                Ok(String::new())
            }
            Ok(_) => Ok(line.trim_end_matches(['\n', '\r']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                if e.kind() != ErrorKind::InvalidData {
                    self.exhausted = true;
                }
                self.warn("Ввод недоступен в текущей среде.")?;
                Ok(String::new())
            }
        }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(line.as_ref())?;
        }
        Ok(())
    }

    pub fn header(&mut self, text: &str) -> io::Result<()> {
        if self.styled {
            writeln!(self.output, "{}", text.bold())
        } else {
            self.line(text)
        }
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        if self.styled {
            writeln!(self.output, "{}", text.green())
        } else {
            self.line(text)
        }
    }

    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        if self.styled {
            writeln!(self.output, "{}", text.yellow())
        } else {
            self.line(text)
        }
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        if self.styled {
            writeln!(self.output, "{}", text.red())
        } else {
            self.line(text)
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
