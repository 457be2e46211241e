pub mod sea_orm_entity;
mod task_archiver_postgres;
pub(crate) mod task_query_postgres;
mod task_repository_postgres;

pub use task_archiver_postgres::TaskArchiverPostgres;
pub use task_query_postgres::TaskQueryPostgres;
pub use task_repository_postgres::TaskRepositoryPostgres;
