// Authentication module
// Credential storage, password hashing, token issuance/verification and the
// request gate protecting downstream routes

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use middleware::CurrentUser;
pub use models::{AuthResponse, SignInRequest, SignUpRequest, User, UserResponse};
pub use repository::{PgUserStore, UserStore};
pub use service::AuthService;
pub use token::TokenService;
