pub mod status_notice;

pub use status_notice::SubmissionNotice;
