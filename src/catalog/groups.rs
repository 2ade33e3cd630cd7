/// Every group that can be recommended, in enumeration order.
///
/// Ties in the ranking keep this order.
pub const GROUPS: &[&str] = &[
    "twice",
    "blackpink",
    "aespa",
    "nmixx",
    "straykids",
    "ateez",
    "mamamoo",
    "ikon",
    "kard",
    "day6",
    "dreamcatcher",
    "akmu",
    "bts",
    "enhypen",
    "lesserafim",
    "iu",
    "kissoflife",
    "monstax",
    "nct127",
    "qwer",
    "redvelvet",
    "seventeen",
    "shinee",
    "therose",
    "xdinaryheroes",
    "youngposse",
];

/// Points each tag contributes to each group.
pub const TAG_GROUP_SCORES: &[(&str, &[(&str, u32)])] = &[
    // Pop
    (
        "pop",
        &[
            ("twice", 10),
            ("blackpink", 8),
            ("aespa", 6),
            ("nmixx", 5),
            ("lesserafim", 8),
            ("bts", 7),
            ("redvelvet", 8),
            ("enhypen", 6),
            ("seventeen", 7),
            ("iu", 9),
            ("kissoflife", 6),
        ],
    ),
    (
        "dance",
        &[
            ("twice", 8),
            ("blackpink", 9),
            ("aespa", 8),
            ("kard", 7),
            ("nmixx", 7),
            ("ateez", 6),
            ("lesserafim", 9),
            ("enhypen", 8),
            ("seventeen", 9),
            ("monstax", 8),
            ("nct127", 8),
            ("redvelvet", 7),
        ],
    ),
    (
        "catchy",
        &[
            ("twice", 10),
            ("blackpink", 6),
            ("lesserafim", 7),
            ("qwer", 7),
            ("youngposse", 6),
        ],
    ),
    ("upbeat", &[("twice", 10), ("kard", 6), ("lesserafim", 5)]),
    ("bright", &[("twice", 10)]),
    ("disco", &[("twice", 8), ("mamamoo", 5)]),
    (
        "retro",
        &[("twice", 6), ("mamamoo", 8), ("kissoflife", 9), ("shinee", 6)],
    ),
    // R&B / Soul
    (
        "r&b",
        &[
            ("mamamoo", 10),
            ("ikon", 8),
            ("blackpink", 4),
            ("kissoflife", 10),
            ("bts", 6),
            ("redvelvet", 8),
            ("shinee", 7),
        ],
    ),
    ("neo-soul", &[("mamamoo", 10), ("kissoflife", 7)]),
    ("soul", &[("mamamoo", 10), ("kissoflife", 9)]),
    (
        "vocal",
        &[
            ("mamamoo", 10),
            ("nmixx", 7),
            ("akmu", 6),
            ("iu", 9),
            ("kissoflife", 8),
            ("redvelvet", 7),
            ("seventeen", 6),
        ],
    ),
    (
        "ballad",
        &[
            ("mamamoo", 7),
            ("akmu", 8),
            ("day6", 6),
            ("iu", 10),
            ("therose", 8),
            ("bts", 5),
        ],
    ),
    // Hip hop / Rap
    (
        "hip-hop",
        &[
            ("straykids", 10),
            ("ikon", 10),
            ("blackpink", 7),
            ("bts", 9),
            ("nct127", 8),
            ("seventeen", 6),
            ("youngposse", 10),
            ("monstax", 7),
        ],
    ),
    (
        "trap",
        &[
            ("straykids", 9),
            ("ikon", 8),
            ("blackpink", 8),
            ("nct127", 7),
            ("monstax", 7),
            ("youngposse", 8),
        ],
    ),
    (
        "party",
        &[("ikon", 8), ("kard", 7), ("blackpink", 5), ("youngposse", 8)],
    ),
    // Indie / Alternative
    (
        "indie",
        &[
            ("akmu", 10),
            ("day6", 7),
            ("iu", 7),
            ("qwer", 6),
            ("therose", 6),
        ],
    ),
    ("folk", &[("akmu", 10), ("day6", 6), ("iu", 8)]),
    (
        "acoustic",
        &[
            ("akmu", 10),
            ("day6", 5),
            ("mamamoo", 3),
            ("iu", 9),
            ("therose", 7),
        ],
    ),
    ("dream-pop", &[("akmu", 8)]),
    ("bossa-nova", &[("akmu", 8), ("mamamoo", 4)]),
    // Electronic / Hyperpop
    ("hyperpop", &[("aespa", 10), ("nmixx", 10)]),
    (
        "electropop",
        &[
            ("aespa", 9),
            ("kard", 7),
            ("nmixx", 6),
            ("lesserafim", 6),
            ("redvelvet", 6),
            ("shinee", 7),
            ("nct127", 6),
        ],
    ),
    (
        "synth-pop",
        &[
            ("aespa", 7),
            ("kard", 8),
            ("enhypen", 6),
            ("shinee", 8),
            ("nct127", 7),
        ],
    ),
    (
        "experimental",
        &[
            ("aespa", 8),
            ("nmixx", 9),
            ("straykids", 8),
            ("nct127", 10),
            ("redvelvet", 7),
            ("shinee", 6),
        ],
    ),
    ("art-pop", &[("aespa", 7), ("nmixx", 8), ("akmu", 6)]),
    // EDM
    (
        "edm",
        &[
            ("ateez", 9),
            ("kard", 10),
            ("aespa", 7),
            ("straykids", 6),
            ("blackpink", 5),
            ("dreamcatcher", 5),
            ("monstax", 9),
            ("nct127", 7),
        ],
    ),
    ("progressive", &[("ateez", 8), ("kard", 6)]),
    ("tropical", &[("kard", 10)]),
    // World / Latin
    ("dancehall", &[("kard", 10), ("blackpink", 4)]),
    ("reggaeton", &[("kard", 9), ("blackpink", 5)]),
    ("afrobeats", &[("kard", 8)]),
    // Rock / Metal
    (
        "rock",
        &[
            ("day6", 10),
            ("dreamcatcher", 9),
            ("straykids", 5),
            ("qwer", 10),
            ("xdinaryheroes", 10),
            ("therose", 9),
        ],
    ),
    (
        "alt-rock",
        &[
            ("day6", 10),
            ("dreamcatcher", 8),
            ("qwer", 8),
            ("xdinaryheroes", 8),
            ("therose", 7),
        ],
    ),
    (
        "band",
        &[
            ("day6", 10),
            ("qwer", 10),
            ("xdinaryheroes", 10),
            ("therose", 10),
        ],
    ),
    ("metal", &[("dreamcatcher", 10)]),
    ("metalcore", &[("dreamcatcher", 10), ("straykids", 5)]),
    ("nu-metal", &[("dreamcatcher", 9), ("straykids", 7)]),
    ("hardcore", &[("dreamcatcher", 8), ("straykids", 8)]),
    ("glam", &[("dreamcatcher", 5)]),
    (
        "dark",
        &[("dreamcatcher", 7), ("straykids", 6), ("enhypen", 8)],
    ),
    // Orchestral / Theatrical
    ("orchestral", &[("ateez", 10)]),
    ("epic", &[("ateez", 10)]),
    ("theatrical", &[("ateez", 10), ("enhypen", 7)]),
    (
        "anthemic",
        &[
            ("ateez", 9),
            ("straykids", 5),
            ("bts", 8),
            ("seventeen", 7),
            ("xdinaryheroes", 6),
            ("monstax", 6),
        ],
    ),
    // Ambient / Minimalist
    ("ambient", &[("akmu", 8)]),
    ("minimalist", &[("akmu", 9)]),
    (
        "emotional",
        &[
            ("day6", 8),
            ("akmu", 7),
            ("mamamoo", 6),
            ("bts", 9),
            ("iu", 10),
            ("therose", 9),
            ("seventeen", 6),
        ],
    ),
    // Jazz
    ("jazz", &[("mamamoo", 8), ("akmu", 7), ("iu", 6)]),
];
