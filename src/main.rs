pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub mod time;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use crate::modules::export::adapter::outgoing::XlsxWorkbookWriter;
use crate::modules::export::application::service::ExportWorkbookService;
use crate::modules::export::application::ExportUseCases;

use crate::modules::project::adapter::outgoing::{
    ProjectArchiverPostgres, ProjectQueryPostgres, ProjectRepositoryPostgres,
};
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    UpdateProjectService,
};
use crate::modules::project::application::ProjectUseCases;

use crate::modules::task::adapter::outgoing::{
    TaskArchiverPostgres, TaskQueryPostgres, TaskRepositoryPostgres,
};
use crate::modules::task::application::service::{
    CreateTaskService, DeleteTaskService, GetSingleTaskService, GetTasksService,
    UpdateTaskService,
};
use crate::modules::task::application::TaskUseCases;

use crate::modules::user::adapter::outgoing::{
    Argon2Hasher, UserArchiverPostgres, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::modules::user::application::service::{
    CreateUserService, DeleteUserService, GetSingleUserService, GetUsersService,
    UpdateUserService,
};
use crate::modules::user::application::UserUseCases;

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub user: UserUseCases,
    pub project: ProjectUseCases,
    pub task: TaskUseCases,
    pub export: ExportUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let server_url = config.server_url();

    // Database connection
    let db_config = &config.database;
    let mut opt = ConnectOptions::new(db_config.url.clone());
    opt.max_connections(db_config.max_connections)
        .min_connections(db_config.min_connections)
        .connect_timeout(db_config.connect_timeout)
        .acquire_timeout(db_config.acquire_timeout)
        .idle_timeout(db_config.idle_timeout)
        .max_lifetime(db_config.max_lifetime)
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(io::Error::other)?;

    if config.run_migrations {
        info!("Running migrations");
        Migrator::up(&conn, None).await.map_err(io::Error::other)?;
    }

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_archiver = UserArchiverPostgres::new(Arc::clone(&db_arc));
    let password_hasher = Argon2Hasher::from_config(&config.argon2).map_err(io::Error::other)?;

    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let project_archiver = ProjectArchiverPostgres::new(Arc::clone(&db_arc));

    let task_repo = TaskRepositoryPostgres::new(Arc::clone(&db_arc));
    let task_query = TaskQueryPostgres::new(Arc::clone(&db_arc));
    let task_archiver = TaskArchiverPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        user: UserUseCases {
            create: Arc::new(CreateUserService::new(
                user_repo.clone(),
                password_hasher.clone(),
            )),
            get_list: Arc::new(GetUsersService::new(user_query.clone())),
            get_single: Arc::new(GetSingleUserService::new(user_query.clone())),
            update: Arc::new(UpdateUserService::new(user_repo, password_hasher)),
            delete: Arc::new(DeleteUserService::new(user_archiver)),
        },
        project: ProjectUseCases {
            create: Arc::new(CreateProjectService::new(project_repo.clone())),
            get_list: Arc::new(GetProjectsService::new(project_query.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_query.clone())),
            update: Arc::new(UpdateProjectService::new(project_repo)),
            delete: Arc::new(DeleteProjectService::new(project_archiver)),
        },
        task: TaskUseCases {
            create: Arc::new(CreateTaskService::new(task_repo.clone())),
            get_list: Arc::new(GetTasksService::new(task_query.clone())),
            get_single: Arc::new(GetSingleTaskService::new(task_query.clone())),
            update: Arc::new(UpdateTaskService::new(task_repo)),
            delete: Arc::new(DeleteTaskService::new(task_archiver)),
        },
        export: ExportUseCases {
            excel: Arc::new(ExportWorkbookService::new(
                user_query,
                project_query,
                task_query,
                XlsxWorkbookWriter::new(),
            )),
        },
    };

    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::export::adapter::incoming::web::routes as export_routes;
    use crate::modules::project::adapter::incoming::web::routes as project_routes;
    use crate::modules::task::adapter::incoming::web::routes as task_routes;
    use crate::modules::user::adapter::incoming::web::routes as user_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Time
    cfg.service(crate::time::time_handler);
    // Users (static segments before {id})
    cfg.service(user_routes::get_users_handler);
    cfg.service(user_routes::create_user_handler);
    cfg.service(user_routes::get_single_user_handler);
    cfg.service(user_routes::update_user_handler);
    cfg.service(user_routes::delete_user_handler);
    // Projects
    cfg.service(project_routes::get_projects_handler);
    cfg.service(project_routes::create_project_handler);
    cfg.service(project_routes::get_single_project_handler);
    cfg.service(project_routes::update_project_handler);
    cfg.service(project_routes::delete_project_handler);
    // Tasks
    cfg.service(task_routes::get_tasks_handler);
    cfg.service(task_routes::create_task_handler);
    cfg.service(task_routes::get_single_task_handler);
    cfg.service(task_routes::update_task_handler);
    cfg.service(task_routes::delete_task_handler);
    // Export
    cfg.service(export_routes::export_excel_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
