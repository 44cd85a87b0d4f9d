//! Value objects - immutable types that represent domain concepts

mod resource_name;
mod snowflake;

pub use resource_name::{
    extract_memo_uid, format_memo_name, format_user_name, ResourceNameError, MEMO_NAME_PREFIX,
    USER_NAME_PREFIX,
};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
