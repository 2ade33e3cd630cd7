use serde::{Deserialize, Serialize};

/// A group's standing for one set of liked artists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Group identifier from the catalog (e.g., "iu")
    pub group_id: String,
    /// Sum of tag points the group collected
    pub score: u32,
    /// Score relative to the best match of the same result set, 0 to 100
    pub percentage: u32,
}

impl MatchResult {
    /// Creates an unranked result; percentages are assigned once the set is known
    pub fn new(group_id: impl Into<String>, score: u32) -> Self {
        Self {
            group_id: group_id.into(),
            score,
            percentage: 0,
        }
    }
}

/// Rounds `score / top * 100` half-up using integer arithmetic
pub fn percentage_of(score: u32, top: u32) -> u32 {
    let top = u64::from(top.max(1));
    let scaled = u64::from(score) * 200 + top;
    (scaled / (2 * top)) as u32
}

/// Recomputes every percentage against the first element of `results`
///
/// An empty set or a zero top score uses a denominator of 1, so an all-zero
/// ranking reports 0% everywhere.
pub fn assign_percentages(results: &mut [MatchResult]) {
    let top = results
        .first()
        .map(|result| result.score)
        .filter(|score| *score > 0)
        .unwrap_or(1);

    for result in results.iter_mut() {
        result.percentage = percentage_of(result.score, top);
    }
}
