//! The input provider: raw text lines plus integer parameters.
//!
//! Strings sit one per line. Integer parameters are read as
//! whitespace-separated tokens starting at a given line, so `k L t` may be
//! written on one line or spread across several.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use ori_core::Sequence;

use crate::error::{CliError, CliResult};

/// Lines of input, each trimmed of surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLines {
    lines: Vec<String>,
}

impl InputLines {
    /// Splits `text` into trimmed lines.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(|line| line.trim().to_string()).collect(),
        }
    }

    /// Reads every line from `reader`.
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_text(&text))
    }

    /// Reads every line of the file at `path`.
    pub fn from_path(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| CliError::Io(path.to_path_buf(), e))?;
        Ok(Self::from_text(&text))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns line `index`, describing it as `what` if it is missing.
    pub fn line(&self, index: usize, what: &'static str) -> CliResult<&str> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(CliError::MissingLine { line: index, what })
    }

    /// Parses line `index` as a DNA sequence.
    pub fn sequence(&self, index: usize, what: &'static str) -> CliResult<Sequence> {
        Ok(Sequence::new(self.line(index, what)?)?)
    }

    fn tokens(&self, start: usize) -> impl Iterator<Item = &str> {
        self.lines.iter().skip(start).flat_map(|line| line.split_whitespace())
    }

    /// Reads `N` non-negative integers starting at line `start`.
    pub fn integers<const N: usize>(
        &self,
        start: usize,
        names: [&'static str; N],
    ) -> CliResult<[usize; N]> {
        let mut tokens = self.tokens(start);
        let mut values = [0usize; N];
        for (slot, name) in values.iter_mut().zip(names) {
            let token = tokens.next().ok_or(CliError::MissingParameter { name })?;
            *slot = parse_token(token, name)?;
        }
        Ok(values)
    }

    /// Reads one signed integer, the first token at or after line `start`.
    pub fn signed(&self, start: usize, name: &'static str) -> CliResult<i64> {
        let token = self
            .tokens(start)
            .next()
            .ok_or(CliError::MissingParameter { name })?;
        parse_token(token, name)
    }
}

fn parse_token<T: std::str::FromStr>(token: &str, name: &'static str) -> CliResult<T> {
    token.parse().map_err(|_| CliError::InvalidInteger {
        name,
        value: token.to_string(),
    })
}
