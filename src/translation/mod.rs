// Translation proxy module
// The boundary collaborator protected by the auth gate

pub mod client;
pub mod error;
pub mod handlers;

pub use client::{GoogleTranslator, Translation, Translator};
pub use error::TranslationError;
pub use handlers::translate;
