//! In-process mock of the dating backend, serving the endpoint contract the
//! suite exercises. Behavior toggles let tests force each failure mode the
//! harness has to survive.

use std::net::TcpListener as StdTcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::runtime::Builder;
use tokio::sync::oneshot;

const SESSION_COOKIE: &str = "session=mock-session-token";

/// Behavior switches for the mock backend. Defaults describe a fully
/// compliant deployment that requires the session cookie everywhere past
/// auth.
#[derive(Clone)]
pub struct BackendOptions {
    pub healthy: bool,
    pub plain_text_health: bool,
    pub accept_signup: bool,
    pub accept_login: bool,
    pub complete_categories: bool,
    pub require_session: bool,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            healthy: true,
            plain_text_health: false,
            accept_signup: true,
            accept_login: true,
            complete_categories: true,
            require_session: true,
        }
    }
}

#[derive(Clone)]
struct BackendState {
    options: BackendOptions,
    hits: Arc<Mutex<Vec<String>>>,
}

impl BackendState {
    fn hit(&self, endpoint: &str) {
        self.hits.lock().unwrap().push(endpoint.to_string());
    }

    fn session_ok(&self, headers: &HeaderMap) -> bool {
        !self.options.require_session
            || headers
                .get(header::COOKIE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|cookies| cookies.contains(SESSION_COOKIE))
    }
}

/// Running mock backend; shuts down when dropped.
pub struct BackendHandle {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
    hits: Arc<Mutex<Vec<String>>>,
}

impl BackendHandle {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint paths hit so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

impl Drop for BackendHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawn the mock backend on an ephemeral port, serving from a
/// current-thread runtime on a background thread.
pub fn spawn_backend(options: BackendOptions) -> BackendHandle {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind mock listener");
    listener.set_nonblocking(true).expect("set mock listener nonblocking");
    let addr = listener.local_addr().expect("mock listener local addr");
    let base_url = format!("http://{addr}");

    let hits = Arc::new(Mutex::new(Vec::new()));
    let state = BackendState {
        options,
        hits: Arc::clone(&hits),
    };
    let app = router(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build mock runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("adopt mock listener");
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });

    BackendHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
        hits,
    }
}

fn router(state: BackendState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/prompts/categories", get(prompt_categories))
        .route("/api/prompts/category/{name}", get(prompts_by_category))
        .route("/api/prompts/usage", post(prompt_usage))
        .route("/api/filters", get(filters))
        .route("/api/filters/apply", post(filters_apply))
        .route("/api/filters/clear", delete(filters_clear))
        .route("/api/ai-enhanced/icebreakers/{match_id}", get(icebreakers))
        .route("/api/ai-enhanced/date-ideas/{match_id}", post(date_ideas))
        .route("/api/ai-enhanced/conversation-topics/{match_id}", get(conversation_topics))
        .route("/api/ai-enhanced/compatibility/{match_id}", get(compatibility))
        .route("/api/ai-enhanced/flirting-tips/{match_id}", get(flirting_tips))
        .route("/api/users/profile", get(profile))
        .route("/api/matches", get(matches))
        .with_state(state)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Not authenticated"})),
    )
        .into_response()
}

async fn health(State(state): State<BackendState>) -> Response {
    state.hit("health");
    if !state.options.healthy {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "database unavailable"})),
        )
            .into_response();
    }
    if state.options.plain_text_health {
        return "OK".into_response();
    }
    Json(json!({"status": "ok"})).into_response()
}

async fn signup(State(state): State<BackendState>, Json(body): Json<Value>) -> Response {
    state.hit("auth/signup");
    if body.get("email").is_none() || body.get("password").is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Missing required fields"})),
        )
            .into_response();
    }
    if !state.options.accept_signup {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "Email already registered"})),
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/"))],
        Json(json!({"user": {"_id": "abc123"}})),
    )
        .into_response()
}

async fn login(State(state): State<BackendState>, Json(body): Json<Value>) -> Response {
    state.hit("auth/login");
    if body.get("email").is_none() || body.get("password").is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Missing required fields"})),
        )
            .into_response();
    }
    if !state.options.accept_login {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid credentials"})),
        )
            .into_response();
    }
    (
        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/"))],
        Json(json!({"user": {"_id": "abc123"}})),
    )
        .into_response()
}

async fn prompt_categories(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("prompts/categories");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    let categories = if state.options.complete_categories {
        json!([
            {"name": "personality"},
            {"name": "lifestyle"},
            {"name": "relationship"},
        ])
    } else {
        json!([{"name": "personality"}, {"name": "travel"}])
    };
    Json(json!({"categories": categories})).into_response()
}

async fn prompts_by_category(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("prompts/category");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({
        "prompts": [
            {"id": "p1", "text": "What makes you laugh the hardest?"},
            {"id": "p2", "text": "Describe your perfect Sunday."},
            {"id": "p3", "text": "What are you weirdly good at?"},
        ]
    }))
    .into_response()
}

async fn prompt_usage(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("prompts/usage");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({"success": true})).into_response()
}

async fn filters(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("filters");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({
        "filterOptions": {
            "ageRange": {"min": 18, "max": 99},
            "education": ["high-school", "college", "graduate"],
            "interests": ["music", "travel", "movies", "food"],
        },
        "savedFilters": {"location": "New York"},
    }))
    .into_response()
}

async fn filters_apply(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("filters/apply");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({"matches": [{"id": 1}, {"id": 2}]})).into_response()
}

async fn filters_clear(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("filters/clear");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({"success": true})).into_response()
}

async fn icebreakers(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("ai-enhanced/icebreakers");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({
        "icebreakers": [
            "If you could teleport anywhere right now, where would we be?",
            "Pancakes or waffles? This determines everything.",
        ]
    }))
    .into_response()
}

async fn date_ideas(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("ai-enhanced/date-ideas");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({
        "dateIdeas": [
            {"title": "Indoor mini golf", "budget": "medium"},
            {"title": "Cooking class", "budget": "medium"},
        ]
    }))
    .into_response()
}

async fn conversation_topics(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("ai-enhanced/conversation-topics");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({"topics": ["travel stories", "guilty-pleasure music", "dream jobs"]})).into_response()
}

async fn compatibility(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("ai-enhanced/compatibility");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({"compatibility": {"score": 87, "summary": "strong shared interests"}})).into_response()
}

async fn flirting_tips(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("ai-enhanced/flirting-tips");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({
        "tips": [
            "Ask about the story behind their photos.",
            "Keep the first message short and specific.",
            "Mirror their energy, not their word count.",
        ]
    }))
    .into_response()
}

async fn profile(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("users/profile");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({"user": {"_id": "abc123", "name": "Test User", "age": 25}})).into_response()
}

async fn matches(State(state): State<BackendState>, headers: HeaderMap) -> Response {
    state.hit("matches");
    if !state.session_ok(&headers) {
        return unauthorized();
    }
    Json(json!({"matches": [{"id": "m1"}, {"id": "m2"}]})).into_response()
}
