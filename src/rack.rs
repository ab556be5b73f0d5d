//! Validation and normalization of raw rack input.
use crate::codec::Codec;
use crate::labelset::LabelSet;
use crate::tilebag::TileBag;
use crate::Error;

/// Maximum number of characters in raw rack or pattern input
pub const MAX_INPUT_LEN: usize = 50;

/// Maximum number of characters in a normalized rack
pub const MAX_RACK_LEN: usize = 15;

/// Symbols that stand for a wildcard tile in a rack
pub const WILDCARDS: [char; 3] = ['?', '_', '*'];

/// Validate and canonicalize `raw`: trim, uppercase and collapse internal whitespace to a
/// single space.
/// ## Errors
/// - If `raw` is longer than 50 characters.
/// - If `raw` contains a character that is not a letter of the alphabet, a wildcard symbol
///   (`?`, `_`, `*`) or whitespace.
/// ## Examples
/// ```
/// # use ordfinder::{codec, rack, Error};
/// let normalized = rack::normalize("  træ ?  on ", codec::danish())?;
/// assert_eq!(normalized, "TRÆ ? ON");
/// # Ok::<(), Error>(())
/// ```
pub fn normalize(raw: &str, codec: &Codec) -> Result<String, Error> {
    let len = raw.chars().count();
    if len > MAX_INPUT_LEN {
        return Err(Error::InputTooLong(len));
    }
    if let Some(ch) = raw
        .chars()
        .find(|&ch| !(ch.is_whitespace() || WILDCARDS.contains(&ch) || codec.label(ch).is_some()))
    {
        return Err(Error::InvalidCharacter(ch));
    }
    let words: Vec<&str> = raw.split_whitespace().collect();
    Ok(words.join(" ").to_uppercase())
}

/// The letters of a player: a multiset of letters plus a number of wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    text: String,
    letters: TileBag,
    wildcards: usize,
}

impl Rack {
    /// Normalize `raw` and count its letters and wildcards. Spaces are skipped.
    /// ## Errors
    /// See [`normalize`].
    /// ## Examples
    /// ```
    /// # use ordfinder::{codec, Error, Rack};
    /// let rack = Rack::parse("træ?on", codec::danish())?;
    /// assert_eq!(rack.wildcards(), 1);
    /// assert_eq!(rack.letters().len(), 5);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn parse(raw: &str, codec: &Codec) -> Result<Rack, Error> {
        let text = normalize(raw, codec)?;
        let mut letters = TileBag::new();
        let mut wildcards = 0;
        for ch in text.chars() {
            if WILDCARDS.contains(&ch) {
                wildcards += 1;
            } else if let Some(label) = codec.label(ch) {
                letters.insert(label);
            }
        }
        Ok(Rack {
            text,
            letters,
            wildcards,
        })
    }

    /// The normalized input.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the normalized input.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn letters(&self) -> &TileBag {
        &self.letters
    }

    pub fn label_set(&self) -> LabelSet {
        self.letters.labels()
    }

    pub fn wildcards(&self) -> usize {
        self.wildcards
    }
}
