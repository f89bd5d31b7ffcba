//! Interactive console session driving the prompt/resolve/query/report loop.

use std::io::{self, BufRead, Write};

use super::registry::RegistryClient;
use super::resolve::resolve;
use super::status::format_status_line;

/// Prompt printed before each input line.
pub const PROMPT: &str = "Введите ИНН или адрес файла со списком ИНН. Для выхода введите q";

/// Input that ends the session. Matched exactly, case-sensitive.
pub const EXIT_SENTINEL: &str = "q";

/// A console session owning its input and output handles.
///
/// Single-threaded and synchronous: one request is outstanding at a time,
/// and the next prompt is not issued until reporting for the current input
/// completes.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the loop until the exit sentinel (or end of input) is read.
    ///
    /// An empty resolved batch goes straight back to the prompt with no
    /// remote call. A registry fault ends the iteration, not the session:
    /// it is reported as one diagnostic line and the loop keeps prompting.
    /// Only console I/O errors end the session early.
    pub fn run<C: RegistryClient>(&mut self, client: &C) -> io::Result<()> {
        loop {
            writeln!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if line == EXIT_SENTINEL {
                return Ok(());
            }

            let resolution = resolve(line);
            for rejection in &resolution.rejections {
                writeln!(self.output, "{rejection}")?;
            }
            if resolution.batch.is_empty() {
                continue;
            }

            writeln!(self.output, "Проверка запроса...")?;
            self.output.flush()?;
            match client.check(&resolution.batch) {
                Ok(results) => {
                    // Delivery order, which may differ from submission order
                    for result in &results {
                        writeln!(self.output, "{}", format_status_line(result))?;
                    }
                }
                Err(e) => {
                    writeln!(self.output, "Ошибка обращения к сервису: {e}")?;
                }
            }
        }
    }
}
