//! The output sink value.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{CliError, CliResult};

/// One result, rendered as whitespace-joined values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// A single count, distance or code.
    Integer(u64),
    /// Patterns.
    Words(Vec<String>),
    /// Positions, counts or skew values.
    Integers(Vec<i64>),
}

impl Output {
    /// Builds an integer list from offsets or counts.
    pub fn positions(values: impl IntoIterator<Item = usize>) -> Self {
        Output::Integers(values.into_iter().map(|v| v as i64).collect())
    }

    /// Writes the rendered output followed by a newline.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        writeln!(writer, "{self}")?;
        writer.flush()
    }

    /// Writes the output to a new file at `path`.
    pub fn write_to_path(&self, path: &Path) -> CliResult<()> {
        File::create(path)
            .and_then(|file| self.write_to(io::BufWriter::new(file)))
            .map_err(|e| CliError::Io(path.to_path_buf(), e))
    }
}

fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Integer(value) => write!(f, "{value}"),
            Output::Words(words) => join(f, words),
            Output::Integers(values) => join(f, values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(Output::Integer(2).to_string(), "2");
        assert_eq!(
            Output::Words(vec!["CATG".into(), "GCAT".into()]).to_string(),
            "CATG GCAT"
        );
        assert_eq!(Output::Integers(vec![0, -1, 2]).to_string(), "0 -1 2");
        assert_eq!(Output::Words(Vec::new()).to_string(), "");
    }

    #[test]
    fn test_write_to() {
        let mut buffer = Vec::new();
        Output::positions([1, 3, 9]).write_to(&mut buffer).unwrap();
        assert_eq!(buffer, b"1 3 9\n");
    }
}
