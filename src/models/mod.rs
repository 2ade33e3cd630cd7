mod match_result;
mod stored_result;

pub use match_result::{assign_percentages, percentage_of, MatchResult};
pub use stored_result::{StoredResult, SubmitResultRequest};
