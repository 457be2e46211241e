// src/modules/user/application/service/get_users_service.rs

use async_trait::async_trait;

use crate::modules::user::application::ports::incoming::use_cases::{
    GetUsersError, GetUsersUseCase,
};
use crate::modules::user::application::ports::outgoing::{UserListItem, UserQuery};
use crate::shared::pagination::{ListResult, PageRequest};

pub struct GetUsersService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> GetUsersService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUsersUseCase for GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<ListResult<UserListItem>, GetUsersError> {
        self.query.list(page).await.map_err(GetUsersError::from)
    }
}
