//! Mappers between database models and domain entities

mod activity;
mod inbox;
mod memo;
mod reaction;
mod user;

pub use activity::{activity_level_str, activity_type_str};
pub use inbox::inbox_status_str;
