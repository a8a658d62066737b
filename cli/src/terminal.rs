use std::io::{self, BufRead, Write};

use termcolor::WriteColor;

const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Screen and keyboard as seen by the interactive menu
pub trait Terminal {
    fn clear_display(&mut self) -> io::Result<()>;

    /// Block until the user is ready to go on
    fn wait_for_acknowledgement(&mut self) -> io::Result<()>;

    /// Print `label` and read one line without its terminator. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>>;

    fn out(&mut self) -> &mut dyn WriteColor;
}

pub struct Console<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl<R: BufRead, W: WriteColor> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear: false,
        }
    }

    /// Emit the clear-screen sequence on `clear_display`
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Undecodable bytes become U+FFFD instead of failing the read
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

impl<R: BufRead, W: WriteColor> Terminal for Console<R, W> {
    fn clear_display(&mut self) -> io::Result<()> {
        if self.clear {
            write!(self.output, "{CLEAR_SEQUENCE}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn wait_for_acknowledgement(&mut self) -> io::Result<()> {
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        // End of input counts as acknowledged
        let _ = self.read_line()?;
        writeln!(self.output)?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn out(&mut self) -> &mut dyn WriteColor {
        &mut self.output
    }
}
