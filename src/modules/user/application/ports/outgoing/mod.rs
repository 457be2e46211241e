pub mod password_hasher;
pub mod user_archiver;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use user_archiver::{UserArchiver, UserArchiverError};
pub use user_query::{UserDetailView, UserListItem, UserQuery, UserQueryError, UserTaskItem};
pub use user_repository::{
    CreateUserData, PatchUserData, UserRepository, UserRepositoryError, UserResult,
};
