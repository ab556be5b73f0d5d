use crate::dictionary::Dictionary;
use crate::filters::Filters;
use crate::pattern::Highlight;
use crate::search::{self, SearchRequest, SearchResponse};
use crate::tilesets::{Language, TileSet};
use crate::{Codec, Error};
use std::fmt;

/// Finds the words that can be played with a rack.
/// * The letter values for the language used,
/// * The dictionary used for the game.
///
/// A `Finder` is read-only once built: every search owns its own state, so a `Finder` can be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct Finder {
    tileset: TileSet,
    dictionary: Dictionary,
}

impl Default for Finder {
    fn default() -> Self {
        Self::new(Language::DA)
    }
}

impl fmt::Display for Finder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Finder {:?}: {}>", self.tileset.language(), self.dictionary)
    }
}

impl Finder {
    /// Create a new `Finder` with an empty dictionary.
    /// The [`language`](crate::Language) is used to specify the alphabet and letter values.
    ///
    /// ## Examples
    ///
    /// Basic usage:
    ///```
    /// use ordfinder::{Finder, Language};
    ///
    /// let finder = Finder::new(Language::DA);
    ///```
    /// Additional builder functions are used to set the dictionary.
    /// See also:
    /// - [`with_dictionary_from_file`](Finder::with_dictionary_from_file)
    /// - [`with_dictionary_from_words`](Finder::with_dictionary_from_words)
    #[must_use]
    pub fn new(language: Language) -> Finder {
        Finder {
            tileset: TileSet::new(language),
            dictionary: Dictionary::default(),
        }
    }

    /// Use `dictionary`, and return the modified finder.
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Finder {
        self.dictionary = dictionary;
        self
    }

    /// Read the dictionary from `wordfile`, and return the modified finder.
    ///
    /// The `wordfile` must contain one word per line.
    ///
    /// ## Errors
    /// This function will give an error if the `wordfile` can not be read.
    /// ## Examples
    /// ```
    /// # use ordfinder::{Finder, Error};
    /// let finder = Finder::default().with_dictionary_from_file("wordlists/words-da.txt")?;
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_dictionary_from_file(mut self, wordfile: &str) -> Result<Finder, Error> {
        self.dictionary = Dictionary::from_file(wordfile, self.codec())?;
        Ok(self)
    }

    /// Build the dictionary from a list of words, and return the modified finder.
    /// Words that can not be encoded are skipped.
    /// ## Example
    /// ```
    /// use ordfinder::Finder;
    /// let finder = Finder::default().with_dictionary_from_words(&["æble", "zebra"]);
    /// assert_eq!(finder.dictionary().word_count, 2);
    ///```
    #[must_use]
    pub fn with_dictionary_from_words<I, S>(mut self, words: I) -> Finder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dictionary = Dictionary::from_words(words, self.codec());
        self
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded `wordfile`, and return the modified finder.
    ///
    /// ## Errors
    /// This function will give an error if the `wordfile` does not exist, or cannot be decoded.
    pub fn with_dictionary_deserialize_from(mut self, wordfile: &str) -> Result<Finder, Error> {
        self.dictionary = Dictionary::deserialize_from(wordfile)?;
        Ok(self)
    }

    /// Return reference to our dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Return tileset
    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    fn codec(&self) -> &Codec {
        self.tileset.codec()
    }

    /// Find all words that can be played with `rack`, within `filters`.
    /// ## Errors
    /// If the rack or the filters are not valid. See [`search::search`].
    /// ## Examples
    /// ```
    /// # use ordfinder::{Error, Filters, Finder};
    /// let finder = Finder::default().with_dictionary_from_words(&["mand", "kat", "mor"]);
    /// let response = finder.search("andor", &Filters::new().with_board_pattern("m*"))?;
    /// assert_eq!(response.total_found, 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn search(&self, rack: &str, filters: &Filters) -> Result<SearchResponse, Error> {
        self.handle(&SearchRequest::new(rack, filters.clone()))
    }

    /// Run a single search request.
    /// ## Errors
    /// If the rack or the filters are not valid.
    pub fn handle(&self, request: &SearchRequest) -> Result<SearchResponse, Error> {
        search::search(&self.dictionary, &self.tileset, request)
    }

    /// Split `word` in the longest prefix that matches `pattern`, and the rest.
    pub fn highlight(&self, word: &str, pattern: &str) -> Highlight {
        Highlight::new(word, pattern, self.codec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::LengthFilter;
    use crate::ranker::SortBy;

    type Result<T> = std::result::Result<T, Error>;

    fn finder() -> Result<Finder> {
        Finder::default().with_dictionary_from_file("wordlists/words-da.txt")
    }

    #[test]
    fn test_search() -> Result<()> {
        let finder = finder()?;
        let response = finder.search("træon", &Filters::new())?;
        let words: Vec<&str> = response.results.iter().map(|c| c.word.as_str()).collect();
        assert!(words.contains(&"TRÆ"));
        assert!(words.contains(&"NOR"));
        assert_eq!(response.total_found, response.results.len());
        Ok(())
    }

    #[test]
    fn test_search_with_filters() -> Result<()> {
        let finder = finder()?;
        let filters = Filters::new()
            .with_board_pattern("..a*")
            .with_length(LengthFilter::Range {
                min_length: 4,
                max_length: 6,
            })
            .with_sort(SortBy::Length);
        let response = finder.search("kte?e", &filters)?;
        assert!(!response.is_empty());
        for candidate in &response.results {
            assert!((4..=6).contains(&candidate.length));
            assert_eq!(candidate.word.chars().nth(2), Some('A'));
        }
        for pair in response.results.windows(2) {
            assert!(pair[0].length >= pair[1].length);
        }
        Ok(())
    }

    #[test]
    fn test_no_words_found() -> Result<()> {
        let finder = finder()?;
        let response = finder.search("qqq", &Filters::new())?;
        assert!(response.is_empty());
        Ok(())
    }

    #[test]
    fn test_highlight() {
        let finder = Finder::default();
        let highlight = finder.highlight("KATTE", "k.t");
        assert_eq!(highlight.matched, "KAT");
        assert_eq!(highlight.rest, "TE");
    }

    #[test]
    fn test_display() {
        let finder = Finder::default().with_dictionary_from_words(&["ko"]);
        assert_eq!(
            finder.to_string(),
            "<Finder DA: <Dictionary: 1 words, 0 skipped from ''>>"
        );
    }
}
