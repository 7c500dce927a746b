pub mod contact;
mod message;
mod service;

pub use contact::SubmissionHandler;
pub use message::*;
pub use service::*;
