use crate::catalog;
use crate::models::{assign_percentages, MatchResult};

/// Scores every group in the catalog against a set of liked artists
///
/// Each liked artist contributes the points of each of its tags to the groups
/// those tags map to. Unknown artists and unknown tags contribute nothing.
///
/// The result covers the whole group universe, highest score first. Groups
/// with equal scores keep their catalog order.
pub fn calculate_matches<S: AsRef<str>>(liked_artists: &[S]) -> Vec<MatchResult> {
    let mut scores = vec![0u32; catalog::GROUPS.len()];

    for artist_id in liked_artists {
        let Some(tags) = catalog::artist_tags(artist_id.as_ref()) else {
            continue;
        };

        for tag in tags {
            let Some(group_scores) = catalog::tag_scores(tag) else {
                continue;
            };

            for (group_id, points) in group_scores {
                if let Some(position) = catalog::group_position(group_id) {
                    scores[position] += points;
                }
            }
        }
    }

    let mut results: Vec<MatchResult> = catalog::GROUPS
        .iter()
        .zip(scores)
        .map(|(group_id, score)| MatchResult::new(*group_id, score))
        .collect();

    // Stable sort: ties stay in catalog order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    assign_percentages(&mut results);

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn score_of(results: &[MatchResult], group_id: &str) -> u32 {
        results
            .iter()
            .find(|r| r.group_id == group_id)
            .map(|r| r.score)
            .unwrap()
    }

    fn score_map(results: &[MatchResult]) -> HashMap<String, u32> {
        results
            .iter()
            .map(|r| (r.group_id.clone(), r.score))
            .collect()
    }

    #[test]
    fn test_covers_every_group_once() {
        let results = calculate_matches(&["sza", "drake", "slipknot"]);
        assert_eq!(results.len(), catalog::GROUPS.len());

        let mut ids: Vec<&str> = results.iter().map(|r| r.group_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog::GROUPS.len());
    }

    #[test]
    fn test_sorted_by_descending_score() {
        let results = calculate_matches(&["charli", "bmth", "norahjones", "jbalvin"]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_empty_input_scores_nothing() {
        let liked: [&str; 0] = [];
        let results = calculate_matches(&liked);

        assert_eq!(results.len(), catalog::GROUPS.len());
        assert!(results.iter().all(|r| r.score == 0 && r.percentage == 0));
        // No scores means catalog order is kept as is
        let ids: Vec<&str> = results.iter().map(|r| r.group_id.as_str()).collect();
        assert_eq!(ids, catalog::GROUPS.to_vec());
    }

    #[test]
    fn test_unknown_artists_match_empty_input() {
        let liked: [&str; 0] = [];
        assert_eq!(
            calculate_matches(&["nobody", "also-nobody"]),
            calculate_matches(&liked)
        );
    }

    #[test]
    fn test_taylor_swift_scores() {
        let results = calculate_matches(&["taylorswift"]);

        assert_eq!(results[0].group_id, "iu");
        assert_eq!(results[0].score, 27);
        assert_eq!(results[0].percentage, 100);

        assert_eq!(results[1].group_id, "bts");
        assert_eq!(results[1].score, 24);
        assert_eq!(results[1].percentage, 89);

        // twice and seventeen tie at 20; twice comes first in the catalog
        assert_eq!(results[2].group_id, "twice");
        assert_eq!(results[3].group_id, "seventeen");
        assert_eq!(results[2].score, 20);
        assert_eq!(results[3].score, 20);
        assert_eq!(results[2].percentage, 74);

        assert_eq!(score_of(&results, "akmu"), 17);
        assert_eq!(score_of(&results, "lesserafim"), 15);
        assert_eq!(score_of(&results, "day6"), 14);
        assert_eq!(score_of(&results, "kard"), 0);
        assert_eq!(score_of(&results, "dreamcatcher"), 0);
    }

    #[test]
    fn test_duplicates_accumulate() {
        let once = calculate_matches(&["taylorswift"]);
        let twice = calculate_matches(&["taylorswift", "taylorswift"]);

        assert_eq!(score_of(&twice, "iu"), 2 * score_of(&once, "iu"));
        // Percentages are relative, so doubling everything changes none of them
        let once_pct: Vec<u32> = once.iter().map(|r| r.percentage).collect();
        let twice_pct: Vec<u32> = twice.iter().map(|r| r.percentage).collect();
        assert_eq!(once_pct, twice_pct);
    }

    #[test]
    fn test_order_of_likes_does_not_matter() {
        let forward = calculate_matches(&["sza", "foofighters", "grimes", "drake"]);
        let backward = calculate_matches(&["drake", "grimes", "foofighters", "sza"]);
        assert_eq!(score_map(&forward), score_map(&backward));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_is_deterministic() {
        let liked = vec!["lanadelrey".to_string(), "avicii".to_string()];
        assert_eq!(calculate_matches(&liked), calculate_matches(&liked));
    }

    #[test]
    fn test_unknown_entries_are_skipped() {
        let clean = calculate_matches(&["hanszimmer"]);
        let noisy = calculate_matches(&["", "hanszimmer", "HANSZIMMER"]);
        assert_eq!(clean, noisy);
        assert_eq!(clean[0].group_id, "ateez");
        assert_eq!(clean[0].score, 39);
    }
}
