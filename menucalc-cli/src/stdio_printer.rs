use std::io::{self, Write};

/// Buffers output a line at a time, so that any partially printed
/// line can be handed to rustyline as part of its prompt (rustyline
/// overwrites whatever is on the line it's prompting on).
#[derive(Default)]
pub struct StdioPrinter {
    line_buffer: String,
}

impl StdioPrinter {
    fn flush_line_buffer(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(self.line_buffer.as_bytes())?;
        stdout.flush()?;
        self.line_buffer.clear();
        Ok(())
    }

    /// Returns any buffered output that hasn't yet been printed.
    pub fn pop_buffered_output(&mut self) -> String {
        std::mem::take(&mut self.line_buffer)
    }

    /// Print out any buffered output followed by a newline.
    pub fn print_buffered_output(&mut self) -> io::Result<()> {
        if !self.line_buffer.is_empty() {
            self.line_buffer.push('\n');
            self.flush_line_buffer()?;
        }
        Ok(())
    }

    /// Print the given string to stdout in a line-buffered way.
    pub fn print<T: AsRef<str>>(&mut self, value: T) -> io::Result<()> {
        for ch in value.as_ref().chars() {
            self.line_buffer.push(ch);
            if ch == '\n' {
                self.flush_line_buffer()?;
            }
        }
        Ok(())
    }

    /// Print any buffered output along with the given prompt, without
    /// a trailing newline.
    pub fn print_prompt<T: AsRef<str>>(&mut self, prompt: T) -> io::Result<()> {
        self.line_buffer.push_str(prompt.as_ref());
        self.flush_line_buffer()
    }

    /// Print any buffered output, then write the given string to stderr
    /// followed by a newline.
    pub fn eprintln<T: AsRef<str>>(&mut self, value: T) -> io::Result<()> {
        self.print_buffered_output()?;
        writeln!(io::stderr(), "{}", value.as_ref())
    }
}
