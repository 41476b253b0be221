//! Shared utilities for integration tests.

use std::net::SocketAddr;

use secure_greeting::config::ServiceConfig;
use secure_greeting::http::HttpServer;
use secure_greeting::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A running service bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service with default configuration.
pub async fn start_server() -> TestServer {
    start_server_with(ServiceConfig::default()).await
}

/// Start the service with `config`. The listener is bound before this returns,
/// so requests can be sent immediately.
pub async fn start_server_with(mut config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}

/// Client without connection pooling or system proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
