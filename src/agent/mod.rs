//! Agent records, draft fields and name handling

mod icon;
mod name;
mod profile;

pub use icon::AgentIcon;
pub use name::normalize;
pub use profile::{Agent, AgentOrigin, DraftField};
