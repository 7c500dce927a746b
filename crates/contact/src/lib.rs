mod auto_advance;
mod session;
mod step;
mod submission;
mod wizard;

pub use auto_advance::*;
pub use session::*;
pub use step::*;
pub use submission::*;
pub use wizard::*;

pub use visionflow_shared::contact::{DiscoveryChannel, Service};
