//! PostgreSQL repository implementations

mod activity;
mod error;
mod inbox;
mod memo;
mod reaction;
mod user;

pub use activity::PgActivityRepository;
pub use inbox::PgInboxRepository;
pub use memo::PgMemoRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;

pub(crate) use error::map_db_error;
