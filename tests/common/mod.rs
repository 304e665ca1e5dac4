#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use shortlink::application::services::ShortenerService;
use shortlink::config::Config;
use shortlink::domain::entities::Algorithm;
use shortlink::domain::verifier::HumanVerifier;
use shortlink::infrastructure::verification::NullVerifier;
use shortlink::routes::router;
use shortlink::state::AppState;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use tower::Layer;

pub const HOST: &str = "s.example.com";

/// Verifier with a fixed verdict that counts calls.
#[derive(Default)]
pub struct StaticVerifier {
    pub accept: bool,
    pub calls: AtomicUsize,
}

impl StaticVerifier {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            accept: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self {
            accept: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HumanVerifier for StaticVerifier {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn verify(&self, token: Option<String>, _remote_ip: Option<IpAddr>) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.accept && token.is_some_and(|t| !t.is_empty())
    }
}

/// Store-mode state backed by a fresh temporary directory.
///
/// The directory must outlive the state, so it is returned alongside.
pub fn create_store_state() -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let state = store_state_at(dir.path().join("store.json"));
    (state, dir)
}

pub fn store_state_at(path: PathBuf) -> AppState {
    let config = Config {
        data_path: path,
        ..Config::default()
    };
    AppState::from_config(&config).unwrap()
}

pub fn create_codec_state(secret: &str) -> AppState {
    let config = Config {
        algorithm: Algorithm::KeyedHash,
        shortlink_key: secret.to_string(),
        ..Config::default()
    };
    AppState::from_config(&config).unwrap()
}

pub fn with_verifier(state: AppState, verifier: Arc<dyn HumanVerifier>) -> AppState {
    AppState { verifier, ..state }
}

pub fn null_verifier_state(shortener: ShortenerService) -> AppState {
    AppState::new(shortener, Arc::new(NullVerifier))
}

pub fn server(state: AppState) -> TestServer {
    let app: Router = router(state).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

/// Code part of a returned short URL.
pub fn code_of(short_url: &str) -> String {
    short_url.rsplit('/').next().unwrap().to_string()
}

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
