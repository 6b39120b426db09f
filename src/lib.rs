pub mod alphabet;
pub mod error;
pub mod normalization;
pub mod reader;
pub mod rules;

pub use crate::alphabet::Alphabet;
pub use crate::error::NormalizeError;
pub use crate::normalization::{CharNormalizer, NormalizedLine, MAX_LINE_LEN};
pub use crate::reader::Reader;

use std::io::{self, Write};

use tracing::{debug, warn};

#[derive(Copy, Clone, Debug, Default)]
pub struct RunStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_skipped: usize,
    pub lines_truncated: usize,
    pub chars_dropped: usize,
}

/// Normalize a stream of lines into `out`, one newline-terminated output
/// line per non-blank input line, in input order. With `strict` set, the
/// first character outside the alphabet aborts the run; otherwise unknown
/// characters are dropped.
pub fn process<I, W>(
    normalizer: &CharNormalizer,
    lines: I,
    out: &mut W,
    strict: bool,
) -> Result<RunStats, NormalizeError>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let mut stats = RunStats::default();

    for (number, line) in lines.enumerate() {
        let number = number + 1;
        let line = line?;
        stats.lines_read += 1;

        if line.trim().is_empty() {
            stats.lines_skipped += 1;
            continue;
        }

        let NormalizedLine {
            text,
            unknown,
            truncated,
        } = normalizer.normalize_line(&line);

        if truncated {
            stats.lines_truncated += 1;
            warn!(
                "line {}: longer than {} characters, truncated",
                number, MAX_LINE_LEN
            );
        }

        if let Some(&(column, ch)) = unknown.first() {
            if strict {
                return Err(NormalizeError::UnknownCharacter {
                    line: number,
                    column,
                    ch,
                });
            }

            debug!(
                "line {}: dropped {} character(s) outside the alphabet",
                number,
                unknown.len()
            );
            stats.chars_dropped += unknown.len();
        }

        writeln!(out, "{}", text)?;
        stats.lines_written += 1;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufRead, Cursor};

    use super::{process, Alphabet, CharNormalizer, NormalizeError};

    fn normalizer() -> CharNormalizer {
        CharNormalizer::new(Alphabet::printable()).unwrap()
    }

    #[test]
    fn writes_one_line_per_non_blank_input_line() {
        let input = Cursor::new("Hello, World!\n  \n\nABC123\n");
        let mut out = Vec::new();

        let stats = process(&normalizer(), input.lines(), &mut out, false).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "hello  world \nabc   \n");
        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.lines_written, 2);
        assert_eq!(stats.lines_skipped, 2);
        assert_eq!(stats.lines_truncated, 0);
        assert_eq!(stats.chars_dropped, 0);
    }

    #[test]
    fn counts_dropped_characters_by_default() {
        let input = Cursor::new("naïve café\n");
        let mut out = Vec::new();

        let stats = process(&normalizer(), input.lines(), &mut out, false).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "nave caf\n");
        assert_eq!(stats.chars_dropped, 2);
    }

    #[test]
    fn strict_mode_stops_at_the_first_unknown_character() {
        let input = Cursor::new("fine line\nbad é line\nnever reached\n");
        let mut out = Vec::new();

        let err = process(&normalizer(), input.lines(), &mut out, true).unwrap_err();

        match err {
            NormalizeError::UnknownCharacter { line, column, ch } => {
                assert_eq!(line, 2);
                assert_eq!(column, 5);
                assert_eq!(ch, 'é');
            }
            other => panic!("unexpected error: {}", other),
        }

        // The offending line is withheld; everything before it was emitted.
        assert_eq!(String::from_utf8(out).unwrap(), "fine line\n");
    }

    #[test]
    fn read_errors_propagate() {
        let lines = vec![
            Ok("fine".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")),
        ];
        let mut out = Vec::new();

        let err = process(&normalizer(), lines.into_iter(), &mut out, false).unwrap_err();

        assert!(matches!(err, NormalizeError::Io(_)));
        assert_eq!(String::from_utf8(out).unwrap(), "fine\n");
    }
}
