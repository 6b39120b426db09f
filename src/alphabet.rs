use std::collections::HashMap;

/// The ordered set of characters the normalizer recognizes. Each member gets
/// the index of its position, and both directions of the lookup are O(1).
#[derive(Clone, Debug)]
pub struct Alphabet {
    chars: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Printable ASCII plus the whitespace controls (TAB, LF, VT, FF, CR),
    /// in code point order. 100 characters.
    pub fn printable() -> Self {
        Alphabet::new((9u8..=13).chain(32..=126).map(char::from))
    }

    /// Build an alphabet from characters in iteration order. Duplicates
    /// collapse onto their first occurrence.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();

        for c in chars {
            if !index.contains_key(&c) {
                index.insert(c, ordered.len());
                ordered.push(c);
            }
        }

        Alphabet {
            chars: ordered,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&c)
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}
