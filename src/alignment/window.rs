use crate::alignment::comparison::PunctuationSet;
use crate::types::Direction;

/// Looks for `truth` among the predictions next to `candidate`, nearest first.
///
/// Tries shifts `1..window_size` in `direction` and returns the first one whose
/// prediction matches. The scan gives up at the first index that falls outside
/// `predicted`, so an edge of the sequence ends the search for that direction.
pub fn find_shifted_match(
    predicted: &[String],
    candidate: usize,
    truth: &str,
    direction: Direction,
    window_size: usize,
    punctuation: &PunctuationSet,
) -> Option<isize> {
    for step in 1..window_size {
        let shift = step as isize * direction.sign();
        let index = candidate
            .checked_add_signed(shift)
            .filter(|&index| index < predicted.len())?;
        if punctuation.text_matches(truth, &predicted[index]) {
            return Some(shift);
        }
    }
    None
}
