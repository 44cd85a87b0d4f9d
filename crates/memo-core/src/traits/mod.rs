//! Repository traits (ports) for the domain layer

mod repositories;

pub use repositories::{
    ActivityRepository, InboxRepository, MemoRepository, ReactionRepository, RepoResult,
    UserRepository,
};
