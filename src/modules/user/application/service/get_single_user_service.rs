// src/modules/user/application/service/get_single_user_service.rs

use async_trait::async_trait;

use crate::modules::user::application::ports::incoming::use_cases::{
    GetSingleUserError, GetSingleUserUseCase,
};
use crate::modules::user::application::ports::outgoing::{
    UserDetailView, UserQuery, UserQueryError,
};

pub struct GetSingleUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> GetSingleUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleUserUseCase for GetSingleUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<UserDetailView, GetSingleUserError> {
        self.query.get_detail(user_id).await.map_err(|e| match e {
            UserQueryError::NotFound => GetSingleUserError::NotFound,
            UserQueryError::DatabaseError(msg) => GetSingleUserError::QueryFailed(msg),
        })
    }
}
