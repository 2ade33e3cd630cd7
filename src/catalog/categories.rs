/// A coarse taste grouping used to decide whether a user leans towards a
/// niche style strongly enough to reserve a slot for it.
#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// Tags that count towards this category
    pub tags: &'static [&'static str],
    /// Groups to surface first when this category dominates, best fit first
    pub preferred_groups: &'static [&'static str],
}

impl Category {
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    pub fn prefers(&self, group_id: &str) -> bool {
        self.preferred_groups.contains(&group_id)
    }
}

/// The generic category. It never triggers diversity on its own.
pub const DEFAULT_CATEGORY: &str = "pop";

pub const CATEGORIES: &[Category] = &[
    Category {
        name: DEFAULT_CATEGORY,
        tags: &[
            "pop",
            "dance",
            "catchy",
            "upbeat",
            "bright",
            "disco",
            "retro",
            "synth-pop",
            "electropop",
        ],
        preferred_groups: &["twice", "blackpink", "lesserafim", "redvelvet", "iu"],
    },
    Category {
        name: "rock",
        tags: &[
            "rock",
            "alt-rock",
            "band",
            "metal",
            "metalcore",
            "nu-metal",
            "hardcore",
            "glam",
            "dark",
        ],
        preferred_groups: &["day6", "qwer", "xdinaryheroes", "therose", "dreamcatcher"],
    },
    Category {
        name: "hiphop",
        tags: &["hip-hop", "trap", "party", "dancehall", "reggaeton", "afrobeats"],
        preferred_groups: &["straykids", "ikon", "youngposse", "bts", "nct127"],
    },
    Category {
        name: "rnb",
        tags: &["r&b", "neo-soul", "soul", "vocal", "jazz"],
        preferred_groups: &["mamamoo", "kissoflife", "redvelvet", "shinee"],
    },
    Category {
        name: "indie",
        tags: &[
            "indie",
            "folk",
            "acoustic",
            "dream-pop",
            "bossa-nova",
            "ambient",
            "minimalist",
            "ballad",
        ],
        preferred_groups: &["akmu", "iu", "day6", "therose"],
    },
    Category {
        name: "electronic",
        tags: &[
            "edm",
            "progressive",
            "tropical",
            "hyperpop",
            "experimental",
            "art-pop",
            "synth-pop",
            "electropop",
        ],
        preferred_groups: &["aespa", "nmixx", "kard", "ateez", "nct127"],
    },
    Category {
        name: "cinematic",
        tags: &["orchestral", "epic", "theatrical", "anthemic"],
        preferred_groups: &["ateez", "enhypen", "bts", "seventeen"],
    },
];
