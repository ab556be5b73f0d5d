use crate::rack::Rack;
use crate::tilebag::TileBag;

/// How a word can be laid down with a rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fit {
    /// The number of wildcards needed for letters missing from the rack.
    pub wildcards: usize,
    /// True if at least one letter is taken from the rack itself.
    pub uses_rack: bool,
}

impl Fit {
    /// A word is playable only if it uses at least one letter of the rack.
    /// Words formed entirely from board letters and wildcards are rejected.
    pub fn is_playable(&self) -> bool {
        self.uses_rack
    }
}

/// Check if `word` (as a multiset of letters) can be formed from the `rack` letters, the rack
/// wildcards and the `fixed` letters on the board.
/// Letters supplied by the board are removed from the word first; each remaining letter is
/// taken from the rack, and any shortfall is covered by wildcards.
/// Returns None if more wildcards are needed than the rack holds.
/// ## Examples
/// ```
/// # use ordfinder::{codec, formable, Error, Rack, TileBag};
/// let codec = codec::danish();
/// let rack = Rack::parse("træ?on", codec)?;
/// let word = TileBag::from(codec.encode("trækon")?.as_slice());
/// let fit = formable::fit(&word, &rack, None).unwrap();
/// assert_eq!(fit.wildcards, 1);
/// assert!(fit.is_playable());
/// # Ok::<(), Error>(())
/// ```
pub fn fit(word: &TileBag, rack: &Rack, fixed: Option<&TileBag>) -> Option<Fit> {
    let needed = match fixed {
        Some(fixed) => *word - *fixed,
        None => *word,
    };
    let mut wildcards = 0;
    let mut uses_rack = false;
    for (label, count) in needed.iter() {
        let available = rack.letters().count_of(label);
        if count > available {
            wildcards += count - available;
        }
        if available > 0 {
            uses_rack = true;
        }
    }
    if wildcards > rack.wildcards() {
        return None;
    }
    Some(Fit {
        wildcards,
        uses_rack,
    })
}
