//! Live site server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, Query, State,
    },
    handler::Handler,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::services::ServeDir;

use showroom_contact::HttpTransport;
use showroom_content::{Lightbox, NavState, Page};
use showroom_static::{AssetPipeline, PageState, SiteRenderer, SiteSettings};

use crate::contact::{form_handler, relay_handler};
use crate::reload::{
    reload_client_script, ReloadHub, ReloadMessage, RELOAD_SCRIPT_PATH, RELOAD_SOCKET_PATH,
};
use crate::watcher::{FileWatcher, WatchEvent};

/// Configuration for the live server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Site title
    pub site_title: String,

    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,

    /// Directory served for paths that match no page
    pub public_dir: Option<PathBuf>,

    /// Root of the inquiry backend the relay forwards to
    pub backend_base_url: String,

    /// Reload browsers when watched files change
    pub live_reload: bool,

    /// Configuration file, watched in live-reload mode
    pub config_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            open: false,
            site_title: "MH ENTERPRISES".to_string(),
            styles: vec![],
            public_dir: None,
            backend_base_url: String::new(),
            live_reload: false,
            config_path: None,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Failed to create backend client: {0}")]
    ClientError(String),
}

/// Shared, immutable server state.
pub struct AppState {
    pub(crate) renderer: SiteRenderer,
    pub(crate) transport: HttpTransport,
    styles: Vec<PathBuf>,
    reload: Option<ReloadHub>,
}

/// Live site server.
pub struct SiteServer {
    config: ServerConfig,
    transport: HttpTransport,
}

impl SiteServer {
    /// Create a new server. Fails only if the backend client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let transport = HttpTransport::new(&config.backend_base_url)
            .map_err(|e| ServerError::ClientError(e.to_string()))?;

        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Address the server listens on.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        addr.parse().map_err(|_| ServerError::InvalidAddress(addr))
    }

    /// Build the router. In live-reload mode the reload endpoints are mounted
    /// but nothing is watched.
    pub fn router(&self) -> Router {
        self.router_with(self.config.live_reload.then(ReloadHub::new))
    }

    fn router_with(&self, reload: Option<ReloadHub>) -> Router {
        let renderer = SiteRenderer::new(SiteSettings {
            site_title: self.config.site_title.clone(),
            base_url: "/".to_string(),
            styles: self.config.styles.clone(),
            contact_endpoint: "/api/contact".to_string(),
            form_action: "/contact".to_string(),
            live_reload: reload.as_ref().map(|_| RELOAD_SCRIPT_PATH.to_string()),
        });

        let state = Arc::new(AppState {
            renderer,
            transport: self.transport.clone(),
            styles: self.config.styles.iter().map(PathBuf::from).collect(),
            reload,
        });

        let mut app = Router::new();
        for page in Page::ALL {
            app = app.route(page.path(), get(page_handler));
        }

        app = app
            .route("/contact", post(form_handler))
            .route("/api/contact", post(relay_handler))
            .route("/assets/main.css", get(css_handler))
            .route("/assets/main.js", get(js_handler))
            .route("/assets/{file}", get(style_handler));

        if state.reload.is_some() {
            app = app
                .route(RELOAD_SOCKET_PATH, get(ws_handler))
                .route(RELOAD_SCRIPT_PATH, get(reload_script_handler));
        }

        let app = match &self.config.public_dir {
            Some(dir) => app.fallback_service(
                ServeDir::new(dir).fallback(not_found_handler.with_state(Arc::clone(&state))),
            ),
            None => app.fallback(not_found_handler),
        };

        app.with_state(state)
    }

    /// Start the server and run until it fails.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = self.addr()?;

        let reload = self.config.live_reload.then(ReloadHub::new);
        if let Some(hub) = &reload {
            self.spawn_watcher(hub.clone())?;
        }

        let app = self.router_with(reload);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        tracing::info!("Serving site at http://{}", addr);
        tracing::info!("Contact relay forwards to {}", self.transport.endpoint());

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }

    fn spawn_watcher(&self, hub: ReloadHub) -> Result<(), ServerError> {
        let mut watch_paths: Vec<PathBuf> = self.config.styles.iter().map(PathBuf::from).collect();
        watch_paths.extend(self.config.public_dir.iter().cloned());
        watch_paths.extend(self.config.config_path.iter().cloned());

        let (watcher, mut rx) =
            FileWatcher::new(&watch_paths).map_err(|e| ServerError::WatchError(e.to_string()))?;

        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&hub, event);
            }
            // Keep watcher alive
            drop(watcher);
        });

        Ok(())
    }
}

fn handle_watch_event(hub: &ReloadHub, event: WatchEvent) {
    match &event {
        WatchEvent::StyleChanged(path) => tracing::info!("Stylesheet changed: {}", path.display()),
        WatchEvent::AssetChanged(path) => tracing::info!("Public file changed: {}", path.display()),
        WatchEvent::ConfigChanged(path) => tracing::warn!(
            "{} changed; restart to apply server settings",
            path.display()
        ),
    }
    hub.send(ReloadMessage::Reload);
}

/// Render a page or answer with a plain 500.
pub(crate) fn render_page(
    state: &AppState,
    page: Page,
    page_state: &PageState,
    status: StatusCode,
) -> Response {
    match state.renderer.render(page, page_state) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render {}: {}", page.path(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    /// Gallery picture to enlarge, as `section-index`
    image: Option<String>,
    /// `open` when the mobile menu was toggled without scripts
    menu: Option<String>,
}

async fn page_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Response {
    let Some(page) = Page::from_path(uri.path()) else {
        return not_found(&state, uri.path());
    };

    let mut page_state = PageState {
        nav: NavState::from_query(query.menu.as_deref()),
        ..Default::default()
    };
    if page == Page::Gallery {
        page_state.lightbox = Lightbox::from_key(query.image.as_deref());
    }

    render_page(&state, page, &page_state, StatusCode::OK)
}

async fn not_found_handler(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    // `/about/` and friends are pages too.
    if let Some(page) = Page::from_path(uri.path()) {
        return Redirect::permanent(page.path()).into_response();
    }
    not_found(&state, uri.path())
}

fn not_found(state: &AppState, path: &str) -> Response {
    tracing::debug!("No page at {}", path);
    match state.renderer.render_not_found(path) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render not-found page: {}", e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn css_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        AssetPipeline::generate_css(),
    )
}

async fn js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        AssetPipeline::generate_js(),
    )
}

/// Serve a configured stylesheet by file name, read fresh on every request.
async fn style_handler(State(state): State<Arc<AppState>>, Path(file): Path<String>) -> Response {
    let Some(path) = state
        .styles
        .iter()
        .find(|p| p.file_name().and_then(|n| n.to_str()) == Some(file.as_str()))
    else {
        return not_found(&state, &format!("/assets/{}", file));
    };

    match tokio::fs::read_to_string(path).await {
        Ok(css) => ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read stylesheet {}: {}", path.display(), e);
            not_found(&state, &format!("/assets/{}", file))
        }
    }
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    match state.reload.clone() {
        Some(hub) => ws.on_upgrade(move |socket| handle_ws(socket, hub)),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Forward reload messages to one browser until it goes away.
async fn handle_ws(mut socket: WebSocket, hub: ReloadHub) {
    let mut rx = hub.subscribe();

    if send_message(&mut socket, &ReloadMessage::Connected).await.is_err() {
        return;
    }

    while let Ok(msg) = rx.recv().await {
        if send_message(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}

async fn reload_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        reload_client_script(),
    )
}
