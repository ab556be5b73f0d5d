use crate::codec::{Codec, Labels};
use crate::labelset::LabelSet;
use crate::Error;
use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

/// A word in the dictionary, with its encoded letters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    word: String,
    labels: Labels,
    letters: LabelSet,
}

impl Entry {
    fn new(word: String, labels: Labels) -> Entry {
        let letters = LabelSet::from(labels.as_slice());
        Entry {
            word,
            labels,
            letters,
        }
    }

    /// The word in uppercase.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn labels(&self) -> &[crate::codec::Label] {
        &self.labels
    }

    /// The set of different letters in the word.
    pub fn letters(&self) -> LabelSet {
        self.letters
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The list of all words that can be found.
/// Words are stored in uppercase, each word once. The dictionary is read-only once built.
pub struct Dictionary {
    entries: Vec<Entry>,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not build from a file.
    pub wordfile: String,
    /// The number of words in the dictionary
    pub word_count: usize,
    /// The number of input words that were skipped: longer than 15 letters,
    /// or with symbols outside the alphabet.
    pub skipped: usize,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} skipped from '{}'>",
            self.word_count, self.skipped, self.wordfile
        )
    }
}

impl Dictionary {
    /// Build a dictionary from a list of words.
    /// Words are trimmed and uppercased; duplicates (ignoring case) are dropped.
    /// Empty words are ignored, and words that can not be encoded with `codec` are skipped
    /// and counted once.
    /// ## Examples
    /// ```
    /// use ordfinder::{codec, Dictionary};
    /// let dictionary = Dictionary::from_words(&["træ", "TRÆ", "nor", "n0r"], codec::danish());
    /// assert_eq!(dictionary.word_count, 2);
    /// assert_eq!(dictionary.skipped, 1);
    /// assert!(dictionary.contains("Træ"));
    /// ```
    pub fn from_words<I, S>(words: I, codec: &Codec) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        let mut skipped = 0;
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let word = word.to_uppercase();
            if !seen.insert(word.clone()) {
                continue;
            }
            match codec.encode(&word) {
                Ok(labels) => entries.push(Entry::new(word, labels)),
                Err(err) => {
                    debug!("skip word {}: {}", word, err);
                    skipped += 1;
                }
            }
        }
        Dictionary {
            word_count: entries.len(),
            entries,
            wordfile: String::new(),
            skipped,
        }
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str, codec: &Codec) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary = Dictionary::from_words(contents.lines(), codec);
        dictionary.wordfile = String::from(wordfile);
        info!("Loaded {}", dictionary);
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        dictionary.wordfile = String::from(wordfile);
        info!("Loaded {}", dictionary);
        Ok(dictionary)
    }

    /// All entries, in input order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `word` is in the dictionary, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        self.entries.iter().any(|entry| entry.word == word)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::danish;

    const WORDS: &[&str] = &["mand", "kat", "mor", "æble", "ål", "øl"];

    #[test]
    fn test_from_words() {
        let dictionary = Dictionary::from_words(WORDS, danish());
        assert_eq!(dictionary.word_count, 6);
        assert_eq!(dictionary.len(), 6);
        assert_eq!(dictionary.skipped, 0);
        let words: Vec<&str> = dictionary.iter().map(Entry::word).collect();
        assert_eq!(words, vec!["MAND", "KAT", "MOR", "ÆBLE", "ÅL", "ØL"]);
        assert_eq!(dictionary.entries()[3].labels(), &[27, 2, 12, 5]);
        assert_eq!(dictionary.entries()[1].letters().len(), 3);
    }

    #[test]
    fn test_dedup_ignores_case() {
        let dictionary = Dictionary::from_words(&["Kat", "KAT", " kat ", "katte"], danish());
        assert_eq!(dictionary.word_count, 2);
        assert!(dictionary.contains("kat"));
        assert!(dictionary.contains("KATTE"));
        assert!(!dictionary.contains("kattene"));
    }

    #[test]
    fn test_skipped() {
        let words = &["", "   ", "k@t", "abcdefghijklmnop", "ok"];
        let dictionary = Dictionary::from_words(words, danish());
        assert_eq!(dictionary.word_count, 1);
        assert_eq!(dictionary.skipped, 2);
        assert_eq!(
            dictionary.to_string(),
            "<Dictionary: 1 words, 2 skipped from ''>"
        );
    }

    #[test]
    fn test_skipped_once() {
        let words = &["k@t", "K@T", " k@t", "kat"];
        let dictionary = Dictionary::from_words(words, danish());
        assert_eq!(dictionary.word_count, 1);
        assert_eq!(dictionary.skipped, 1);
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let dictionary = Dictionary::from_file("wordlists/words-da.txt", danish())?;
        assert!(dictionary.word_count > 100);
        assert!(dictionary.contains("træ"));
        assert_eq!(dictionary.wordfile, "wordlists/words-da.txt");
        Ok(())
    }

    #[test]
    fn test_from_file_missing() {
        let result = Dictionary::from_file("wordlists/missing.txt", danish());
        assert!(matches!(result, Err(Error::ReadError { .. })));
    }
}
