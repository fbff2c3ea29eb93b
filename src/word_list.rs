use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};

use crate::{InputError, WordId, MAX_SLOT_LENGTH};

/// A struct representing a word that can be chosen for a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub string: String,
    pub letters: SmallVec<[char; MAX_SLOT_LENGTH]>,
}

impl Word {
    fn new(string: String) -> Word {
        let letters = string.chars().collect();
        Word { string, letters }
    }

    /// Length in letters (not bytes).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// The candidate words for a puzzle: upper-cased, deduplicated and sorted, so that a `WordId` is
/// stable for a given set of inputs.
#[derive(Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
}

impl Debug for WordList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordList")
            .field("words", &(["(", &self.words.len().to_string(), " entries)"].join("")))
            .finish()
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

impl WordList {
    /// Build a word list from any collection of strings. Blank entries are skipped and duplicates
    /// collapse after normalization.
    pub fn new<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        WordList {
            words: unique.into_iter().map(Word::new).collect(),
        }
    }

    /// Parse a line-oriented word list, one word per line.
    pub fn parse(text: &str) -> Result<WordList, InputError> {
        for (line_idx, line) in text.lines().enumerate() {
            let word = line.trim();
            if word.chars().any(char::is_whitespace) {
                return Err(InputError::InvalidWord {
                    line: line_idx + 1,
                    word: word.to_string(),
                });
            }
        }

        Ok(WordList::new(text.lines()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word_id: WordId) -> &Word {
        &self.words[word_id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> + '_ {
        self.words.iter().enumerate()
    }

    /// Look up the id of a word, normalizing it the same way the list was built.
    pub fn find(&self, word: &str) -> Option<WordId> {
        let word = normalize(word);
        self.words
            .binary_search_by(|candidate| candidate.string.as_str().cmp(word.as_str()))
            .ok()
    }
}
