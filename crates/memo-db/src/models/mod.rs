//! Database models - structs mapping directly to table rows

mod memo;
mod reaction;
mod user;

pub use memo::MemoModel;
pub use reaction::ReactionModel;
pub use user::UserModel;
