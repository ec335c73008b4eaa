mod age;
mod types;

pub use age::format_age;
pub use types::FeedbackRecord;
