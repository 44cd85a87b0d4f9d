//! Domain entities - core business objects

mod activity;
mod inbox;
mod memo;
mod reaction;
mod user;

pub use activity::{Activity, ActivityLevel, ActivityPayload, ActivityType};
pub use inbox::{Inbox, InboxMessage, InboxMessageType, InboxStatus};
pub use memo::Memo;
pub use reaction::Reaction;
pub use user::User;
