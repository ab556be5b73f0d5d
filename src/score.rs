use crate::codec::{Label, MAX_WORD_LEN};
use crate::tilesets::TileSet;
use tinyvec::ArrayVec;

/// Return the points for `word` when `wildcards` of its letters are played with wildcard tiles.
///
/// A wildcard scores 0, whatever letter it stands for. The wildcards are assigned to the most
/// valuable letters of the word, so the score is the sum of the letter values minus the
/// `wildcards` highest values. A `wildcards` count larger than the word length is ignored.
/// ## Examples
/// ```
/// # use ordfinder::{score, Error, TileSet};
/// let tileset = TileSet::default();
/// let word = tileset.codec().encode("trækon")?;
/// // T:2 R:1 Æ:4 K:3 O:2 N:1, the wildcard takes the Æ
/// assert_eq!(score::score(&word, 0, &tileset), 13);
/// assert_eq!(score::score(&word, 1, &tileset), 9);
/// # Ok::<(), ordfinder::Error>(())
/// ```
pub fn score(word: &[Label], wildcards: usize, tileset: &TileSet) -> u32 {
    let total = tileset.word_points(word);
    if wildcards == 0 || wildcards > word.len() {
        return total;
    }
    let mut points: ArrayVec<[u32; MAX_WORD_LEN]> = ArrayVec::new();
    points.extend(word.iter().take(MAX_WORD_LEN).map(|&label| tileset.points(label)));
    points.sort_unstable_by(|a, b| b.cmp(a));
    let covered: u32 = points.iter().take(wildcards).sum();
    total - covered
}
