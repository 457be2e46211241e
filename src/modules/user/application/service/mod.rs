mod create_user_service;
mod delete_user_service;
mod get_single_user_service;
mod get_users_service;
mod update_user_service;

pub use create_user_service::CreateUserService;
pub use delete_user_service::DeleteUserService;
pub use get_single_user_service::GetSingleUserService;
pub use get_users_service::GetUsersService;
pub use update_user_service::UpdateUserService;
