#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower::Layer;

use linklet::api::handlers::{health_handler, redirect_handler};
use linklet::api::routes::api_routes;
use linklet::domain::entities::Link;
use linklet::state::AppState;

/// Injects a fixed peer address so `ConnectInfo` extraction works without a
/// real TCP connection.
pub const TEST_PEER_IP: &str = "127.0.0.1";

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = format!("{TEST_PEER_IP}:12345").parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

pub fn create_test_state() -> AppState {
    AppState::new("http://localhost:3000".to_string())
}

/// The full route surface with the mock peer address layer applied.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

/// Seeds a link directly through the service layer.
pub async fn create_test_link(state: &AppState, code: &str, url: &str) -> Link {
    state
        .link_service
        .create_short_link(Some(url.to_string()), None, Some(code.to_string()))
        .await
        .unwrap()
}

/// Seeds a link whose validity window has already passed.
pub async fn create_expired_link(state: &AppState, code: &str, url: &str) -> Link {
    state
        .link_service
        .create_short_link(Some(url.to_string()), Some(-60), Some(code.to_string()))
        .await
        .unwrap()
}
