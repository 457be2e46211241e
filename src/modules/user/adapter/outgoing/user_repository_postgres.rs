// src/modules/user/adapter/outgoing/user_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::user::adapter::outgoing::sea_orm_entity::users::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::user::application::domain::entities::UserRole;
use crate::modules::user::application::ports::outgoing::{
    CreateUserData, PatchUserData, UserRepository, UserRepositoryError, UserResult,
};
use crate::shared::patch_field::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: NotSet,
            full_name: Set(data.full_name),
            email: Set(data.email),
            role: Set(data.role.as_str().to_string()),
            password: Set(data.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let result = model.insert(&*self.db).await.map_err(map_email_error)?;

        model_to_result(result)
    }

    async fn patch_user(
        &self,
        user_id: i32,
        data: PatchUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(full_name) = data.full_name {
            model.full_name = Set(full_name);
        }

        if let PatchField::Value(email) = data.email {
            model.email = Set(email);
        }

        if let PatchField::Value(role) = data.role {
            model.role = Set(role.as_str().to_string());
        }

        if let PatchField::Value(hash) = data.password_hash {
            model.password = Set(hash);
        }

        let has_changes = model.full_name.is_set()
            || model.email.is_set()
            || model.role.is_set()
            || model.password.is_set();

        if !has_changes {
            let result = Entity::find_by_id(user_id)
                .filter(Column::DeletedAt.is_null())
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(UserRepositoryError::NotFound)?;

            return model_to_result(result);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(user_id))
            .filter(Column::DeletedAt.is_null())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_email_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(UserRepositoryError::NotFound)?;

        model_to_result(result)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: users::Model) -> Result<UserResult, UserRepositoryError> {
    Ok(UserResult {
        id: model.id,
        role: model
            .role
            .parse::<UserRole>()
            .map_err(UserRepositoryError::DatabaseError)?,
        full_name: model.full_name,
        email: model.email,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_email_error(e: DbErr) -> UserRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("email")
    {
        UserRepositoryError::EmailAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_user_data() -> CreateUserData {
        CreateUserData {
            full_name: "Ann Lee".to_string(),
            email: "ann@example.com".to_string(),
            role: UserRole::Manager,
            password_hash: "$argon2id$v=19$hash".to_string(),
        }
    }

    fn create_mock_user_model(id: i32, full_name: &str) -> users::Model {
        let now = Utc::now().fixed_offset();

        users::Model {
            id,
            full_name: full_name.to_string(),
            email: "ann@example.com".to_string(),
            role: "manager".to_string(),
            password: "$argon2id$v=19$hash".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    // ========================================================================
    // create_user Tests
    // ========================================================================

    #[tokio::test]
    async fn test_create_user_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(1, "Ann Lee")]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo.create_user(create_test_user_data()).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.role, UserRole::Manager);
        assert_eq!(user.email, "ann@example.com");
    }

    #[tokio::test]
    async fn test_create_user_email_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_users_email_active\""
                    .to_string(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(create_test_user_data()).await;

        assert!(matches!(
            result.unwrap_err(),
            UserRepositoryError::EmailAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(create_test_user_data()).await;

        assert!(matches!(
            result.unwrap_err(),
            UserRepositoryError::DatabaseError(_)
        ));
    }

    // ========================================================================
    // patch_user Tests
    // ========================================================================

    #[tokio::test]
    async fn test_patch_user_update_full_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(1, "Ann Smith")]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo
            .patch_user(
                1,
                PatchUserData {
                    full_name: PatchField::Value("  Ann Smith ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(user.full_name, "Ann Smith");
    }

    #[tokio::test]
    async fn test_patch_user_null_fields_return_current_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(1, "Ann Lee")]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo
            .patch_user(
                1,
                PatchUserData {
                    full_name: PatchField::Null,
                    email: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(user.full_name, "Ann Lee");
    }

    #[tokio::test]
    async fn test_patch_user_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<users::Model>::new()])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .patch_user(
                9,
                PatchUserData {
                    role: PatchField::Value(UserRole::Worker),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), UserRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_patch_user_email_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "error 23505: key (email)=(bob@example.com) already exists".to_string(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .patch_user(
                1,
                PatchUserData {
                    email: PatchField::Value("bob@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UserRepositoryError::EmailAlreadyExists
        ));
    }

    // ========================================================================
    // Helper Function Tests
    // ========================================================================

    #[test]
    fn test_map_email_error_unrelated_unique() {
        let err = map_email_error(DbErr::Custom("duplicate key on slug".to_string()));
        assert!(matches!(err, UserRepositoryError::DatabaseError(_)));
    }
}
