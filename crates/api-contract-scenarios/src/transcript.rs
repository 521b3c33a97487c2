//! Human-readable case output

/// Lines a case writes to standard output
///
/// Every line is printed as it is emitted and kept, so callers can inspect
/// what a case reported after it finished.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print `line` to stdout and record it
    pub fn emit(&mut self, line: impl Into<String>) {
        let line = line.into();
        println!("{}", line);
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any emitted line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}
