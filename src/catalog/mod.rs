//! Static, hand-authored matching tables.
//!
//! The tables are plain `const` data. Lookup indexes are built lazily on first
//! use and shared by every request afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

mod artists;
mod categories;
mod groups;

pub use artists::ARTIST_TAGS;
pub use categories::{Category, CATEGORIES, DEFAULT_CATEGORY};
pub use groups::{GROUPS, TAG_GROUP_SCORES};

static ARTIST_INDEX: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| ARTIST_TAGS.iter().copied().collect());

static TAG_INDEX: LazyLock<HashMap<&'static str, &'static [(&'static str, u32)]>> =
    LazyLock::new(|| TAG_GROUP_SCORES.iter().copied().collect());

static GROUP_POSITIONS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    GROUPS
        .iter()
        .enumerate()
        .map(|(position, group)| (*group, position))
        .collect()
});

/// Tags of a known artist, primary tag first
pub fn artist_tags(artist_id: &str) -> Option<&'static [&'static str]> {
    ARTIST_INDEX.get(artist_id).copied()
}

/// `(group, points)` pairs a tag contributes
pub fn tag_scores(tag: &str) -> Option<&'static [(&'static str, u32)]> {
    TAG_INDEX.get(tag).copied()
}

/// Position of a group in [`GROUPS`]
pub fn group_position(group_id: &str) -> Option<usize> {
    GROUP_POSITIONS.get(group_id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_artist_lookup() {
        let tags = artist_tags("taylorswift").unwrap();
        assert_eq!(tags[0], "pop");
        assert!(tags.contains(&"folk"));
        assert!(artist_tags("nobody").is_none());
    }

    #[test]
    fn test_tag_lookup() {
        let scores = tag_scores("bright").unwrap();
        assert_eq!(scores.to_vec(), vec![("twice", 10)]);
        assert!(tag_scores("polka").is_none());
    }

    #[test]
    fn test_group_positions_follow_enumeration() {
        assert_eq!(group_position("twice"), Some(0));
        assert_eq!(group_position("youngposse"), Some(GROUPS.len() - 1));
        assert_eq!(group_position("unknown"), None);
    }

    #[test]
    fn test_groups_are_unique() {
        let unique: HashSet<_> = GROUPS.iter().collect();
        assert_eq!(unique.len(), GROUPS.len());
    }

    #[test]
    fn test_every_scored_group_is_in_universe() {
        for (tag, scores) in TAG_GROUP_SCORES {
            for (group, _) in scores.iter() {
                assert!(
                    group_position(group).is_some(),
                    "tag {} scores unknown group {}",
                    tag,
                    group
                );
            }
        }
    }

    #[test]
    fn test_every_artist_tag_is_scored() {
        for (artist, tags) in ARTIST_TAGS {
            for tag in tags.iter() {
                assert!(tag_scores(tag).is_some(), "{} has unscored tag {}", artist, tag);
            }
        }
    }

    #[test]
    fn test_preferred_groups_are_in_universe() {
        for category in CATEGORIES {
            for group in category.preferred_groups {
                assert!(group_position(group).is_some(), "{} -> {}", category.name, group);
            }
        }
    }

    #[test]
    fn test_exactly_one_default_category() {
        let defaults = CATEGORIES
            .iter()
            .filter(|category| category.name == DEFAULT_CATEGORY)
            .count();
        assert_eq!(defaults, 1);
    }

    #[test]
    fn test_tags_shared_between_categories() {
        let holders: Vec<_> = CATEGORIES
            .iter()
            .filter(|category| category.contains_tag("synth-pop"))
            .map(|category| category.name)
            .collect();
        assert_eq!(holders, vec!["pop", "electronic"]);
    }
}
