// src/modules/user/application/service/delete_user_service.rs

use async_trait::async_trait;

use crate::modules::user::application::ports::incoming::use_cases::{
    DeleteUserError, DeleteUserUseCase,
};
use crate::modules::user::application::ports::outgoing::{UserArchiver, UserArchiverError};

pub struct DeleteUserService<A>
where
    A: UserArchiver,
{
    archiver: A,
}

impl<A> DeleteUserService<A>
where
    A: UserArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> DeleteUserUseCase for DeleteUserService<A>
where
    A: UserArchiver + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<(), DeleteUserError> {
        self.archiver
            .soft_delete(user_id)
            .await
            .map_err(|e| match e {
                UserArchiverError::NotFound => DeleteUserError::NotFound,
                UserArchiverError::DatabaseError(msg) => DeleteUserError::RepositoryError(msg),
            })
    }
}
