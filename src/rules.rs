use std::iter;

use crate::alphabet::Alphabet;
use crate::error::NormalizeError;

/// The fixed replacement table: one output character per alphabet index.
/// Lowercase letters pass through, capitals fold to lowercase, and every
/// other member of the alphabet becomes a space.
#[derive(Clone, Debug)]
pub struct RuleTable {
    replacements: Vec<char>,
}

impl RuleTable {
    pub fn build(alphabet: &Alphabet) -> Result<Self, NormalizeError> {
        // The table can't be total without the space and both letter cases.
        let missing: String = iter::once(' ')
            .chain('a'..='z')
            .chain('A'..='Z')
            .filter(|&c| !alphabet.contains(c))
            .collect();

        if !missing.is_empty() {
            return Err(NormalizeError::IncompleteAlphabet { missing });
        }

        let replacements = alphabet
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() {
                    c
                } else if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    ' '
                }
            })
            .collect();

        Ok(RuleTable { replacements })
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.replacements.get(index).copied()
    }
}
