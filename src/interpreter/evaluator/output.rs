/// A sink for the lines a program prints.
///
/// The evaluator hands every `print` result to its sink as one already
/// formatted line, without a trailing newline.
pub trait Output {
    /// Receives one printed line.
    fn emit(&mut self, line: &str);
}

/// Writes each line to standard output. This is the default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects printed lines in memory.
///
/// # Example
/// ```
/// use pushkin::interpreter::evaluator::output::Output;
///
/// let mut lines: Vec<String> = Vec::new();
/// lines.emit("42");
/// assert_eq!(lines, ["42"]);
/// ```
impl Output for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
