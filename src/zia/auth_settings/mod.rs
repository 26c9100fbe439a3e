//! Auth settings module - cookie-authentication exempt URLs

mod api;
mod commands;
mod models;

pub use commands::{run_auth_urls_command, run_update_auth_urls_command};
pub use models::{ExemptedUrls, UrlListAction};
