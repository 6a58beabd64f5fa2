pub mod errors;
pub mod id;

pub use errors::{ChannelError, ConfigError, ShellError};
pub use id::{new_id, TabId};

pub type Result<T> = std::result::Result<T, ShellError>;
