mod auth;
mod config;
mod db;
mod translation;

use std::sync::Arc;

use axum::{routing::post, Router};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use auth::{AuthService, PgUserStore, TokenService, UserStore};
use config::Config;
use translation::{GoogleTranslator, Translator};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::sign_up,
        auth::handlers::sign_in,
        translation::handlers::translate,
    ),
    components(
        schemas(
            auth::SignUpRequest,
            auth::SignInRequest,
            auth::AuthResponse,
            auth::UserResponse,
            translation::handlers::TranslateRequest,
            translation::handlers::TranslateResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Account registration and login"),
        (name = "translation", description = "Protected translation proxy")
    ),
    info(
        title = "Translator API",
        version = "1.0.0",
        description = "Account registration, login and an authenticated text-translation proxy"
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Application state shared across handlers.
///
/// The store and the translator sit behind traits so tests can run the full
/// router without Postgres or the external translation service.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub tokens: Arc<TokenService>,
    pub auth: Arc<AuthService>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        jwt_secret: String,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(jwt_secret));
        let auth = Arc::new(AuthService::new(store.clone(), tokens.clone()));
        Self {
            store,
            tokens,
            auth,
            translator,
        }
    }
}

/// Creates and configures the application router
/// Maps all endpoints to their handlers and adds CORS middleware
pub fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API routes
        .route("/signup", post(auth::handlers::sign_up))
        .route("/sign-in", post(auth::handlers::sign_in))
        .route("/translate", post(translation::handlers::translate))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Translator API - Starting...");

    let config = Config::from_env().expect("incomplete configuration");

    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(db_pool));
    let translator: Arc<dyn Translator> = Arc::new(GoogleTranslator::new());
    let state = AppState::new(store, config.jwt_secret.clone(), translator);

    let app = create_router(state);

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Translator API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}
