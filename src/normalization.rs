use crate::alphabet::Alphabet;
use crate::error::NormalizeError;
use crate::rules::RuleTable;

/// Characters past this position in a line are ignored.
pub const MAX_LINE_LEN: usize = 100;

/// Applies the fixed replacement table character by character. Built once,
/// no mutable state.
pub struct CharNormalizer {
    alphabet: Alphabet,
    rule: RuleTable,
}

/// One normalized line plus what happened to it on the way: the (1-based
/// column, character) pairs that were dropped for being outside the
/// alphabet, and whether the line was cut at the length cap.
#[derive(Clone, Debug)]
pub struct NormalizedLine {
    pub text: String,
    pub unknown: Vec<(usize, char)>,
    pub truncated: bool,
}

impl CharNormalizer {
    pub fn new(alphabet: Alphabet) -> Result<Self, NormalizeError> {
        let rule = RuleTable::build(&alphabet)?;
        Ok(CharNormalizer { alphabet, rule })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// `None` means the character is outside the alphabet; callers decide
    /// whether that is worth an error.
    pub fn normalize_char(&self, c: char) -> Option<char> {
        self.alphabet.index_of(c).and_then(|index| self.rule.get(index))
    }

    pub fn normalize_line(&self, line: &str) -> NormalizedLine {
        let mut text = String::with_capacity(line.len().min(MAX_LINE_LEN));
        let mut unknown = Vec::new();
        let mut truncated = false;

        for (position, c) in line.chars().enumerate() {
            if position >= MAX_LINE_LEN {
                truncated = true;
                break;
            }

            match self.normalize_char(c) {
                Some(normal) => text.push(normal),
                None => unknown.push((position + 1, c)),
            }
        }

        NormalizedLine {
            text,
            unknown,
            truncated,
        }
    }

    /// Lazily normalize a stream of lines, skipping the blank ones.
    pub fn normalize_lines<'a, I>(&'a self, lines: I) -> impl Iterator<Item = String> + 'a
    where
        I: Iterator + 'a,
        I::Item: AsRef<str>,
    {
        lines.filter_map(move |line| {
            let line = line.as_ref();
            if line.trim().is_empty() {
                return None;
            }

            Some(self.normalize_line(line).text)
        })
    }
}
