pub mod sea_orm_entity;
pub mod security;
mod user_archiver_postgres;
mod user_query_postgres;
mod user_repository_postgres;

pub use security::argon2_hasher::Argon2Hasher;
pub use user_archiver_postgres::UserArchiverPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
