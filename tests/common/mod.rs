#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum_test::TestServer;
use link_shortener::infrastructure::memory::InMemoryUrlStore;
use link_shortener::routes::router;
use link_shortener::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const TEST_BASE_URL: &str = "https://s.example.com";

/// State over a fresh store; the store handle is returned for direct inspection.
pub fn create_test_state(base_url: Option<&str>) -> (AppState, Arc<InMemoryUrlStore>) {
    let store = Arc::new(InMemoryUrlStore::new());
    let state = AppState::new(store.clone(), base_url.map(str::to_string));
    (state, store)
}

/// Full router without rate limiting.
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state, None)).unwrap()
}

/// Injects a fixed peer address so `ConnectInfo` extractors work without a socket.
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
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
