

fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

/// config aimed at a port that was bound once and released, so connecting
/// to it gets refused instead of hanging.
async fn refused_config() -> crate::config::SmokeConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    crate::config::SmokeConfig {
        api_base: format!("http://{addr}/api"),
        ws_url: format!("ws://{addr}/ws/notifications/"),
    }
}
