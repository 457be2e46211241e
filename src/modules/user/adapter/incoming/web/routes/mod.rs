mod create_user;
mod delete_user;
mod get_single_user;
mod get_users;
mod update_user;

pub use create_user::*;
pub use delete_user::*;
pub use get_single_user::*;
pub use get_users::*;
pub use update_user::*;
