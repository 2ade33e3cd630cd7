use crate::catalog::{self, Category};
use crate::models::{assign_percentages, MatchResult};

/// Thresholds that decide when a niche taste is strong enough to act on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversityConfig {
    /// Minimum ratio of the strongest niche category to the generic one
    pub min_ratio: f64,
    /// Minimum weighted count of the strongest niche category
    pub min_count: u32,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            min_ratio: 0.7,
            min_count: 4,
        }
    }
}

/// Weighted tag count of one category for a set of liked artists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: &'static Category,
    pub count: u32,
}

/// Weight of a tag by its position in the artist's tag list
fn position_weight(position: usize) -> u32 {
    match position {
        0 => 3,
        1 => 2,
        _ => 1,
    }
}

/// Counts how strongly the liked artists lean into each category
///
/// Every tag adds its positional weight to every category containing it.
/// Categories come back strongest first; ties keep catalog order.
pub fn detect_categories<S: AsRef<str>>(liked_artists: &[S]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = catalog::CATEGORIES
        .iter()
        .map(|category| CategoryCount { category, count: 0 })
        .collect();

    for artist_id in liked_artists {
        let Some(tags) = catalog::artist_tags(artist_id.as_ref()) else {
            continue;
        };

        for (position, tag) in tags.iter().enumerate() {
            let weight = position_weight(position);
            for entry in counts.iter_mut() {
                if entry.category.contains_tag(tag) {
                    entry.count += weight;
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Picks the top-K from a full ranking, reserving room for a dominant niche taste
#[derive(Debug, Clone, Default)]
pub struct DiversityReranker {
    config: DiversityConfig,
}

impl DiversityReranker {
    pub fn new(config: DiversityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiversityConfig {
        &self.config
    }

    /// Returns the strongest non-generic category if it dominates enough
    ///
    /// It must reach `min_ratio` of the generic category's count and at least
    /// `min_count` on its own. A category nobody's tags touched never qualifies.
    pub fn dominant_category<S: AsRef<str>>(&self, liked_artists: &[S]) -> Option<&'static Category> {
        let counts = detect_categories(liked_artists);

        let default_count = counts
            .iter()
            .find(|entry| entry.category.name == catalog::DEFAULT_CATEGORY)
            .map_or(0, |entry| entry.count);

        let top = counts
            .iter()
            .find(|entry| entry.category.name != catalog::DEFAULT_CATEGORY)?;

        let strong_enough = top.count > 0
            && f64::from(top.count) >= f64::from(default_count) * self.config.min_ratio
            && top.count >= self.config.min_count;

        strong_enough.then_some(top.category)
    }

    /// Selects up to `count` results from `ranked`
    ///
    /// `ranked` must be the full ranking for `liked_artists`, best first.
    /// Without a dominant category this is a plain truncation.
    pub fn rerank<S: AsRef<str>>(
        &self,
        liked_artists: &[S],
        mut ranked: Vec<MatchResult>,
        count: usize,
    ) -> Vec<MatchResult> {
        let Some(category) = self.dominant_category(liked_artists) else {
            ranked.truncate(count);
            return ranked;
        };

        tracing::debug!(
            category = category.name,
            requested = count,
            "Dominant category found, reserving a slot for it"
        );

        let mut selected = select_with_category(&ranked, category, count);
        assign_percentages(&mut selected);
        selected.truncate(count);
        selected
    }
}

/// Builds the reordered selection for an active category
fn select_with_category(
    ranked: &[MatchResult],
    category: &Category,
    count: usize,
) -> Vec<MatchResult> {
    let Some(top) = ranked.first() else {
        return Vec::new();
    };

    // Indices into `ranked`, in selection order
    let mut picked: Vec<usize> = vec![0];

    let next_preferred = |picked: &[usize]| {
        ranked
            .iter()
            .enumerate()
            .find(|(index, result)| !picked.contains(index) && category.prefers(&result.group_id))
            .map(|(index, _)| index)
    };

    while picked.len() < 2 {
        match next_preferred(picked.as_slice()) {
            Some(index) => picked.push(index),
            None => break,
        }
    }

    if picked.len() < 2 || !category.prefers(&top.group_id) {
        if let Some(index) = next_preferred(picked.as_slice()) {
            picked.push(index);
        }
    }

    for index in 0..ranked.len() {
        if picked.len() >= count {
            break;
        }
        if !picked.contains(&index) {
            picked.push(index);
        }
    }

    picked.into_iter().map(|index| ranked[index].clone()).collect()
}
