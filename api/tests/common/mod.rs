#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use krishiarogya_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs, LogArgs, MlServiceArgs, ServerArgs},
};
use tokio::net::TcpListener;

pub struct TestConfig {
    pub api_key: Option<String>,
    pub chat_base_url: String,
    pub ml_service_url: String,
    pub root_path: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            chat_base_url: "http://127.0.0.1:9/v1".to_string(),
            ml_service_url: "http://127.0.0.1:9/predict".to_string(),
            root_path: String::new(),
        }
    }
}

pub fn args(config: TestConfig) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: config.root_path,
            allowed_origins: vec!["*".to_string()],
            metrics_enabled: false,
        },
        llm: LlmArgs {
            api_key: config.api_key,
            base_url: config.chat_base_url,
            model: "test-model".to_string(),
        },
        ml_service: MlServiceArgs {
            predict_url: config.ml_service_url,
        },
        log: LogArgs {
            filter: "warn".to_string(),
            json: false,
        },
    }
}

pub fn test_server(config: TestConfig) -> TestServer {
    let state = state(Arc::new(args(config))).expect("failed to build state");
    TestServer::new(router(state).expect("failed to build router")).expect("failed to start server")
}

/// Serves `router` on an ephemeral local port.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
