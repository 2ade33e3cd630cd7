pub mod diversity;
pub mod matcher;
pub mod result_store;
pub mod scoring;

pub use diversity::{detect_categories, CategoryCount, DiversityConfig, DiversityReranker};
pub use matcher::{Matcher, DEFAULT_MATCH_COUNT};
pub use result_store::{InMemoryResultStore, ResultStore};
