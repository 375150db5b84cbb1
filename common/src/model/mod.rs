pub mod attendee;
pub mod notice;
pub mod progress;
pub mod source;
