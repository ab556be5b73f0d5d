use crate::Error;
use lazy_static::lazy_static;
use std::cmp::Ordering;
use std::collections::HashMap;
use tinyvec::ArrayVec;

/// A letter code 1..=31, in alphabet order.
pub type Label = u8;

/// Maximum number of letters in an encoded word
pub const MAX_WORD_LEN: usize = 15;

/// An encoded word.
pub type Labels = ArrayVec<[Label; MAX_WORD_LEN]>;

const ASCII_UC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

lazy_static! {
    static ref DANISH_CODEC: Codec = Codec::new(&['Æ', 'Ø', 'Å']);
}

/// Return the codec for the danish alphabet `A`..`Z`, `Æ`, `Ø`, `Å`.
pub fn danish() -> &'static Codec {
    &DANISH_CODEC
}

#[derive(Debug, Clone)]
/// Translate between letters and label codes.
/// - 1 .. 26: `A` .. `Z`
/// - 27 .. 31: Non-ascii letters, depending on codec
///
/// Lowercase and uppercase letters encode to the same label; labels always decode to uppercase.
/// The label order is the alphabet order used for sorting words.
pub struct Codec {
    encoder: HashMap<char, Label>,
    decoder: Vec<char>,
}

impl Default for Codec {
    fn default() -> Codec {
        Codec::new(&[])
    }
}

impl Codec {
    /// Return a new `Codec` for "A".."Z", extended with the non-ascii letters from `extend`.
    /// ## Examples
    /// ```
    /// use ordfinder::Codec;
    /// let codec = Codec::new(&['Æ', 'Ø', 'Å']);
    /// assert_eq!(codec.len(), 29);
    /// ```
    pub fn new(extend: &[char]) -> Codec {
        let mut encoder = HashMap::new();
        let mut decoder = vec![' '];
        for ch in ASCII_UC.chars().chain(extend.iter().copied()) {
            let label = decoder.len() as Label;
            encoder.insert(ch, label);
            for lc in ch.to_lowercase() {
                encoder.insert(lc, label);
            }
            decoder.push(ch);
        }
        Codec { encoder, decoder }
    }

    /// Number of letters in the alphabet.
    pub fn len(&self) -> usize {
        self.decoder.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the label for `ch` (either case), or None if it is not in the alphabet.
    pub fn label(&self, ch: char) -> Option<Label> {
        self.encoder.get(&ch).copied()
    }

    /// Return the uppercase letter for `label`.
    pub fn letter(&self, label: Label) -> Option<char> {
        match label {
            0 => None,
            n => self.decoder.get(n as usize).copied(),
        }
    }

    /// The letters of the alphabet, in order.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.decoder[1..].iter().copied()
    }

    /// Encode word, and return its labels.
    /// ## Errors
    /// An error is returned if the word has more than 15 letters or contains a symbol
    /// outside the alphabet.
    /// ## Examples
    /// ```
    /// use ordfinder::{codec, Error};
    /// let labels = codec::danish().encode("azÆøå")?;
    /// assert_eq!(labels.as_slice(), &[1, 26, 27, 28, 29]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(&self, word: &str) -> Result<Labels, Error> {
        let mut labels = Labels::new();
        for ch in word.chars() {
            let label = self.label(ch).ok_or(Error::EncodeInvalidToken(ch))?;
            if labels.try_push(label).is_some() {
                return Err(Error::EncodeStringTooLong(String::from(word)));
            }
        }
        Ok(labels)
    }

    /// Decode labels to an uppercase string. Unknown labels decode to `?`.
    pub fn decode(&self, labels: &[Label]) -> String {
        labels
            .iter()
            .map(|&label| self.letter(label).unwrap_or('?'))
            .collect()
    }

    /// Compare two words in alphabet order. A word sorts before any longer word it is a prefix of.
    /// Symbols outside the alphabet sort after all letters, by character code.
    /// ## Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use ordfinder::codec;
    /// let codec = codec::danish();
    /// assert_eq!(codec.compare("ÅL", "ZEBRA"), Ordering::Greater);
    /// assert_eq!(codec.compare("ABE", "ABEN"), Ordering::Less);
    /// ```
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let key = |ch: char| match self.label(ch) {
            Some(label) => (0, u32::from(label)),
            None => (1, u32::from(ch)),
        };
        a.chars().map(key).cmp(b.chars().map(key))
    }
}
