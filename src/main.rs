//! Stashboard CLI entry point.
//!
//! Thin shell over the library: restores the session from the local store,
//! fetches the workspace bookmark list, and prints normalized cards. The
//! backend base URL comes from `STASHBOARD_API`.

use stashboard::app::App;
use stashboard::services::api_client::ListQuery;
use stashboard::services::normalizer;
use stashboard::types::errors::AuthError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let base_url =
        std::env::var("STASHBOARD_API").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let mut app = match App::new(&base_url, None) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to load local state: {}", err);
            std::process::exit(1);
        }
    };

    let user = match app.auth.bootstrap().await {
        Ok(user) => user,
        Err(AuthError::NotAuthenticated) => {
            eprintln!("not signed in; log in through the dashboard first");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("session restore failed: {}", err);
            std::process::exit(1);
        }
    };

    let mut list = app.list_controller(user.workspace_id.clone());
    if let Err(err) = list.load(ListQuery::default()).await {
        eprintln!("failed to load bookmarks: {}", err);
        std::process::exit(1);
    }

    for bookmark in list.bookmarks() {
        let card = normalizer::normalize(bookmark);
        let preview = normalizer::preview(&card);
        println!(
            "[{}] {} | {}",
            card.badge.label, card.author.name, preview.text
        );
    }
}
