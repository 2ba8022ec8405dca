//! BDD step definitions for channel management

pub mod browsing_steps;
pub mod creating_steps;
pub mod deleting_steps;
pub mod editing_steps;
pub mod notification_steps;
pub mod setup_steps;
