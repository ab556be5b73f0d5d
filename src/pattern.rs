//! Board patterns.
//!
//! A board pattern describes the shape of a word: letters must appear at their position,
//! `.` stands for exactly one letter and `*` for zero or more letters. Whitespace is ignored.
//! Patterns are compiled to a list of tokens and matched by direct scanning.
//! The length (50) and wildcard count (15) of a pattern are bounded, so matching
//! any word costs at most a few hundred steps.
use crate::codec::{Codec, Label};
use crate::rack::MAX_INPUT_LEN;
use crate::tilebag::TileBag;
use crate::Error;

/// Maximum number of `.` and `*` symbols in a pattern
pub const MAX_PATTERN_WILDCARDS: usize = 15;

const ANY_ONE: char = '.';
const ANY_MANY: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Letter(Label),
    AnyOne,
    AnyMany,
}

/// A compiled board pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    /// Compile `pattern`.
    /// ## Errors
    /// - If the trimmed pattern is longer than 50 characters.
    /// - If it has more than 15 `.` and `*` symbols.
    /// - If it contains a symbol that is not a letter, `.`, `*` or whitespace.
    /// ## Examples
    /// ```
    /// # use ordfinder::{codec, Error, Pattern};
    /// let codec = codec::danish();
    /// let pattern = Pattern::compile("..a*", codec)?;
    /// assert!(pattern.is_match(&codec.encode("kran")?));
    /// assert!(!pattern.is_match(&codec.encode("kabel")?));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn compile(pattern: &str, codec: &Codec) -> Result<Pattern, Error> {
        let pattern = pattern.trim();
        let len = pattern.chars().count();
        if len > MAX_INPUT_LEN {
            return Err(Error::PatternTooLong(len));
        }
        let wildcards = pattern
            .chars()
            .filter(|&ch| ch == ANY_ONE || ch == ANY_MANY)
            .count();
        if wildcards > MAX_PATTERN_WILDCARDS {
            return Err(Error::PatternTooManyWildcards(wildcards));
        }
        let mut tokens = Vec::with_capacity(len);
        for ch in pattern.chars() {
            let token = match ch {
                ANY_ONE => Token::AnyOne,
                ANY_MANY => Token::AnyMany,
                ch if ch.is_whitespace() => continue,
                _ => Token::Letter(codec.label(ch).ok_or(Error::PatternInvalidToken(ch))?),
            };
            tokens.push(token);
        }
        Ok(Pattern { tokens })
    }

    /// Return true if the pattern has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The letters in the pattern. These are on the board already, and need not be
    /// taken from the rack.
    pub fn fixed_letters(&self) -> TileBag {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Letter(label) => Some(*label),
                _ => None,
            })
            .collect()
    }

    /// Return true if the whole `word` matches the pattern.
    pub fn is_match(&self, word: &[Label]) -> bool {
        let (mut p, mut w) = (0, 0);
        // position of the last `*` in the pattern, and where it started in word
        let mut star: Option<(usize, usize)> = None;
        while w < word.len() {
            match self.tokens.get(p) {
                Some(Token::Letter(label)) if *label == word[w] => {
                    p += 1;
                    w += 1;
                }
                Some(Token::AnyOne) => {
                    p += 1;
                    w += 1;
                }
                Some(Token::AnyMany) => {
                    star = Some((p, w));
                    p += 1;
                }
                _ => match star {
                    Some((sp, sw)) => {
                        // let the last `*` absorb one more letter
                        star = Some((sp, sw + 1));
                        p = sp + 1;
                        w = sw + 1;
                    }
                    None => return false,
                },
            }
        }
        self.tokens[p..].iter().all(|&token| token == Token::AnyMany)
    }

    /// Return the length of the longest prefix of `word` that matches the pattern,
    /// or None if no prefix matches.
    pub fn prefix_len(&self, word: &[Label]) -> Option<usize> {
        (0..=word.len()).rev().find(|&n| self.is_match(&word[..n]))
    }
}

/// A word split in the part matched by a pattern, and the rest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Highlight {
    pub matched: String,
    pub rest: String,
}

impl Highlight {
    /// Split `word` on the longest prefix that matches `pattern`.
    /// If the pattern is rejected, or nothing matches, the whole word is the rest.
    /// ## Examples
    /// ```
    /// # use ordfinder::{codec, Highlight};
    /// let highlight = Highlight::new("MANDAG", "m.n", codec::danish());
    /// assert_eq!(highlight.matched, "MAN");
    /// assert_eq!(highlight.rest, "DAG");
    /// ```
    pub fn new(word: &str, pattern: &str, codec: &Codec) -> Highlight {
        let unmatched = || Highlight {
            matched: String::new(),
            rest: String::from(word),
        };
        let pattern = match Pattern::compile(pattern, codec) {
            Ok(pattern) if !pattern.is_empty() => pattern,
            _ => return unmatched(),
        };
        let labels = match codec.encode(word) {
            Ok(labels) => labels,
            Err(_) => return unmatched(),
        };
        match pattern.prefix_len(&labels) {
            Some(n) if n > 0 => {
                let split = word.char_indices().nth(n).map_or(word.len(), |(i, _)| i);
                Highlight {
                    matched: String::from(&word[..split]),
                    rest: String::from(&word[split..]),
                }
            }
            _ => unmatched(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::danish;

    type Result<T> = std::result::Result<T, Error>;

    fn is_match(pattern: &str, word: &str) -> Result<bool> {
        let codec = danish();
        Ok(Pattern::compile(pattern, codec)?.is_match(&codec.encode(word)?))
    }

    #[test]
    fn test_literal() -> Result<()> {
        assert!(is_match("mand", "MAND")?);
        assert!(!is_match("mand", "MANDE")?);
        assert!(!is_match("mand", "MAN")?);
        assert!(is_match(" m a n d ", "mand")?);
        assert!(is_match("m\t*\nd", "MAND")?);
        assert!(is_match("\tm.n\t", "MAN")?);
        Ok(())
    }

    #[test]
    fn test_any_one() -> Result<()> {
        assert!(is_match("m.nd", "MAND")?);
        assert!(!is_match("m.nd", "MND")?);
        assert!(is_match("....", "KATS")?);
        assert!(!is_match("....", "KAT")?);
        Ok(())
    }

    #[test]
    fn test_any_many() -> Result<()> {
        assert!(is_match("m*", "MAND")?);
        assert!(is_match("m*", "MOR")?);
        assert!(!is_match("m*", "KAT")?);
        assert!(is_match("*", "KAT")?);
        assert!(is_match("*d", "MAND")?);
        assert!(is_match("m*n*d", "MAND")?);
        assert!(is_match("m**", "M")?);
        assert!(is_match("*a*a*", "BANAN")?);
        assert!(!is_match("*a*a*", "BAN")?);
        assert!(is_match("..a*", "KRAN")?);
        assert!(is_match("..a*", "BRAND")?);
        assert!(!is_match("..a*", "KATTE")?);
        assert!(!is_match("..a*", "KABEL")?);
        Ok(())
    }

    #[test]
    fn test_empty_pattern() -> Result<()> {
        let pattern = Pattern::compile("   ", danish())?;
        assert!(pattern.is_empty());
        assert!(pattern.is_match(&[]));
        assert!(!is_match("", "A")?);
        Ok(())
    }

    #[test]
    fn test_fixed_letters() -> Result<()> {
        let codec = danish();
        let pattern = Pattern::compile("..a*e", codec)?;
        let fixed = pattern.fixed_letters();
        assert_eq!(fixed.len(), 2);
        assert_eq!(fixed.count_of(codec.label('A').unwrap()), 1);
        assert_eq!(fixed.count_of(codec.label('E').unwrap()), 1);
        Ok(())
    }

    #[test]
    fn test_limits() {
        let codec = danish();
        assert!(Pattern::compile(&"a".repeat(50), codec).is_ok());
        assert!(matches!(
            Pattern::compile(&"a".repeat(51), codec),
            Err(Error::PatternTooLong(51))
        ));
        assert!(Pattern::compile(&".".repeat(15), codec).is_ok());
        assert!(Pattern::compile(&"*.".repeat(7), codec).is_ok());
        assert!(matches!(
            Pattern::compile(&".".repeat(16), codec),
            Err(Error::PatternTooManyWildcards(16))
        ));
        assert!(matches!(
            Pattern::compile("ab?", codec),
            Err(Error::PatternInvalidToken('?'))
        ));
    }

    #[test]
    fn test_prefix_len() -> Result<()> {
        let codec = danish();
        let word = codec.encode("MANDAG")?;
        assert_eq!(Pattern::compile("m.n", codec)?.prefix_len(&word), Some(3));
        assert_eq!(Pattern::compile("m*", codec)?.prefix_len(&word), Some(6));
        assert_eq!(Pattern::compile("*a", codec)?.prefix_len(&word), Some(5));
        assert_eq!(Pattern::compile("k*", codec)?.prefix_len(&word), None);
        Ok(())
    }

    #[test]
    fn test_highlight() {
        let codec = danish();
        let highlight = Highlight::new("ÆBLER", "æb", codec);
        assert_eq!(highlight.matched, "ÆB");
        assert_eq!(highlight.rest, "LER");
        let highlight = Highlight::new("KAT", "m*", codec);
        assert_eq!(highlight.matched, "");
        assert_eq!(highlight.rest, "KAT");
        let highlight = Highlight::new("KAT", &".".repeat(16), codec);
        assert_eq!(highlight.rest, "KAT");
    }
}
