//! Submission storage adapters
//!
//! Both adapters implement the
//! [`SubmissionSource`](rendezvous_application::SubmissionSource) port and
//! hand out owned snapshots.

mod json_file;
mod memory;

pub use json_file::JsonFileSubmissionSource;
pub use memory::InMemorySubmissionStore;
