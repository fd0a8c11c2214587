pub mod alias_style;
pub mod env_var_name;
pub mod owner_identity;
pub mod sync_strategy;

pub use alias_style::AliasStyle;
pub use env_var_name::EnvVarName;
pub use owner_identity::{is_owned_by, OwnerIdentity};
pub use sync_strategy::SyncStrategy;
