pub mod client;
pub mod parse;
pub mod prompt;

pub use client::{JobId, JobStatus, TemplateClient};
pub use parse::{board_from_response, clean_fenced_json};
pub use prompt::GENERATOR_PROMPT;
