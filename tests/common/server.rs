//! Real server fixture for end-to-end tests

use snipvault::backend::server::create_app_with_pool;
use snipvault::client::{Config, SnippetSync};
use sqlx::SqlitePool;
use tokio::task::JoinHandle;

use super::database::create_test_pool;

/// A snippet server running on 127.0.0.1 with its own store
pub struct TestApp {
    pub base_url: String,
    pub pool: SqlitePool,
    handle: JoinHandle<()>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let pool = create_test_pool().await;
        let app = create_app_with_pool(Some(pool.clone()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener has an address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            pool,
            handle,
        }
    }

    pub fn config(&self) -> Config {
        Config::with_server_url(&self.base_url).expect("test URL is valid")
    }

    /// A new synchronizer talking to this server
    pub fn sync(&self) -> SnippetSync {
        SnippetSync::new(self.config())
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
