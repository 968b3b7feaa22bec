use std::io::{self, Write};

/// Destination for formatted report lines
///
/// Implementors append one line per call; the line never contains its own terminator.
pub trait LineSink {
    /// Appends one line
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Collects lines in memory
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Writes each line, newline terminated, to any [`Write`]r
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    /// Wraps `writer`; buffering is up to the caller
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flushes and hands back the writer
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> LineSink for WriteSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_collects_lines() {
        let mut lines: Vec<String> = Vec::new();
        lines.write_line("a|b").unwrap();
        (&mut lines).write_line("c|d").unwrap();
        assert_eq!(lines, ["a|b", "c|d"]);
    }

    #[test]
    fn writer_terminates_each_line() {
        let mut sink = WriteSink::new(Vec::new());
        sink.write_line("C001|12345|10|1|10").unwrap();
        sink.write_line("C001|12345|15|2|30").unwrap();

        let bytes = sink.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "C001|12345|10|1|10\nC001|12345|15|2|30\n"
        );
    }
}
