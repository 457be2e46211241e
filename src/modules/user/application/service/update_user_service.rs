// src/modules/user/application/service/update_user_service.rs

use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{normalize_email, UserRole};
use crate::modules::user::application::ports::incoming::use_cases::{
    UpdateUserCommand, UpdateUserError, UpdateUserUseCase,
};
use crate::modules::user::application::ports::outgoing::{
    PasswordHasher, PatchUserData, UserRepository, UserRepositoryError, UserResult,
};
use crate::shared::patch_field::PatchField;

pub struct UpdateUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    user_repository: R,
    password_hasher: H,
}

impl<R, H> UpdateUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_repository: R, password_hasher: H) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R, H> UpdateUserUseCase for UpdateUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(
        &self,
        user_id: i32,
        command: UpdateUserCommand,
    ) -> Result<UserResult, UpdateUserError> {
        let full_name = command.full_name.try_map(|name| match name.trim() {
            "" => Err(UpdateUserError::EmptyFullName),
            name => Ok(name.to_string()),
        })?;
        let role = command
            .role
            .try_map(|r| r.trim().parse::<UserRole>())
            .map_err(UpdateUserError::InvalidRole)?;
        let email = command
            .email
            .try_map(|e| normalize_email(&e))
            .map_err(UpdateUserError::InvalidEmail)?;

        let password_hash = match command.password {
            PatchField::Value(password) => PatchField::Value(
                self.password_hasher
                    .hash_password(&password)
                    .await
                    .map_err(|e| UpdateUserError::HashFailed(e.to_string()))?,
            ),
            // password is non-nullable; null keeps the stored hash
            _ => PatchField::Unset,
        };

        let data = PatchUserData {
            full_name,
            email,
            role,
            password_hash,
        };

        self.user_repository
            .patch_user(user_id, data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UpdateUserError::NotFound,
                UserRepositoryError::EmailAlreadyExists => UpdateUserError::EmailAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => UpdateUserError::RepositoryError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::modules::user::application::ports::outgoing::{CreateUserData, HashError};
    use crate::tests::support::fixtures::user_result;

    #[derive(Clone)]
    struct MockUserRepo {
        result: Result<UserResult, UserRepositoryError>,
        received: Arc<Mutex<Option<PatchUserData>>>,
    }

    impl MockUserRepo {
        fn returning(result: Result<UserResult, UserRepositoryError>) -> Self {
            Self {
                result,
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepo {
        async fn create_user(
            &self,
            _data: CreateUserData,
        ) -> Result<UserResult, UserRepositoryError> {
            unimplemented!("not needed for update_user tests")
        }

        async fn patch_user(
            &self,
            _user_id: i32,
            data: PatchUserData,
        ) -> Result<UserResult, UserRepositoryError> {
            *self.received.lock().unwrap() = Some(data);
            self.result.clone()
        }
    }

    struct MockHasher;

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }
    }

    #[tokio::test]
    async fn test_password_is_rehashed() {
        let repo = MockUserRepo::returning(Ok(user_result(2)));
        let received = repo.received.clone();
        let service = UpdateUserService::new(repo, MockHasher);

        let command = UpdateUserCommand {
            password: PatchField::Value("new-pass".to_string()),
            ..Default::default()
        };
        assert!(service.execute(2, command).await.is_ok());

        let data = received.lock().unwrap().clone().unwrap();
        assert_eq!(
            data.password_hash,
            PatchField::Value("hashed:new-pass".to_string())
        );
        assert!(data.email.is_unset());
    }

    #[tokio::test]
    async fn test_null_password_keeps_hash() {
        let repo = MockUserRepo::returning(Ok(user_result(2)));
        let received = repo.received.clone();
        let service = UpdateUserService::new(repo, MockHasher);

        let command = UpdateUserCommand {
            password: PatchField::Null,
            ..Default::default()
        };
        assert!(service.execute(2, command).await.is_ok());

        let data = received.lock().unwrap().clone().unwrap();
        assert!(data.password_hash.is_unset());
    }

    #[tokio::test]
    async fn test_role_and_email_are_validated() {
        let service = UpdateUserService::new(MockUserRepo::returning(Ok(user_result(2))), MockHasher);

        let res = service
            .execute(
                2,
                UpdateUserCommand {
                    role: PatchField::Value("owner".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(res.unwrap_err(), UpdateUserError::InvalidRole(_)));

        let res = service
            .execute(
                2,
                UpdateUserCommand {
                    email: PatchField::Value("broken@".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(res.unwrap_err(), UpdateUserError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_full_name_is_trimmed_and_must_not_be_blank() {
        let repo = MockUserRepo::returning(Ok(user_result(2)));
        let received = repo.received.clone();
        let service = UpdateUserService::new(repo, MockHasher);

        let res = service
            .execute(
                2,
                UpdateUserCommand {
                    full_name: PatchField::Value("   ".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(res.unwrap_err(), UpdateUserError::EmptyFullName));
        assert!(received.lock().unwrap().is_none());

        service
            .execute(
                2,
                UpdateUserCommand {
                    full_name: PatchField::Value(" Ada Lovelace ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let data = received.lock().unwrap().clone().unwrap();
        assert_eq!(data.full_name, PatchField::Value("Ada Lovelace".to_string()));
    }

    #[tokio::test]
    async fn test_maps_repository_errors() {
        let service = UpdateUserService::new(
            MockUserRepo::returning(Err(UserRepositoryError::EmailAlreadyExists)),
            MockHasher,
        );
        let res = service.execute(2, UpdateUserCommand::default()).await;
        assert!(matches!(
            res.unwrap_err(),
            UpdateUserError::EmailAlreadyExists
        ));

        let service = UpdateUserService::new(
            MockUserRepo::returning(Err(UserRepositoryError::NotFound)),
            MockHasher,
        );
        let res = service.execute(2, UpdateUserCommand::default()).await;
        assert!(matches!(res.unwrap_err(), UpdateUserError::NotFound));
    }
}
