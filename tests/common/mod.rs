//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use dashboard_routes::config::DashboardConfig;
use dashboard_routes::http::DashboardServer;
use dashboard_routes::lifecycle::Shutdown;
use dashboard_routes::views::dashboard_registry;

/// Start the dashboard host on an ephemeral port with the built-in table.
pub async fn start_host(config: DashboardConfig) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = DashboardServer::new(config, Arc::new(dashboard_registry().unwrap()))
        .expect("dashboard table must be servable");

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
