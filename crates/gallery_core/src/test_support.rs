use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Number, Value};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    view::{ActionElement, GalleryView, SlideState},
    GalleryError, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPost {
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
pub struct MockBackend {
    photos: Arc<Value>,
    pub comment_queries: Arc<Mutex<Vec<String>>>,
    pub action_posts: Arc<Mutex<Vec<RecordedPost>>>,
    pub form_posts: Arc<Mutex<Vec<RecordedPost>>>,
    action_reply: Arc<Mutex<(StatusCode, Value)>>,
    form_reply: Arc<Mutex<(StatusCode, Value)>>,
}

impl MockBackend {
    pub fn with_photo_ids(ids: &[i64]) -> Self {
        let photos = ids
            .iter()
            .map(|id| json!({ "id": id, "title": format!("photo {id}"), "likes": 0, "favorites": 0 }))
            .collect::<Vec<_>>();
        Self::with_photos(Value::Array(photos))
    }

    pub fn with_photos(photos: Value) -> Self {
        Self {
            photos: Arc::new(photos),
            comment_queries: Arc::default(),
            action_posts: Arc::default(),
            form_posts: Arc::default(),
            action_reply: Arc::new(Mutex::new((StatusCode::OK, json!({ "total": 1 })))),
            form_reply: Arc::new(Mutex::new((StatusCode::OK, json!({})))),
        }
    }

    pub async fn reply_to_actions(&self, status: StatusCode, body: Value) {
        *self.action_reply.lock().await = (status, body);
    }

    pub async fn reply_to_forms(&self, status: StatusCode, body: Value) {
        *self.form_reply.lock().await = (status, body);
    }

    pub async fn spawn(&self) -> std::io::Result<String> {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = Router::new()
            .route("/photos", get(handle_photos))
            .route("/comments", get(handle_comments))
            .route("/photos/like", post(handle_action))
            .route("/photos/favorite", post(handle_action))
            .route("/comments/new", post(handle_form))
            .with_state(self.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(format!("http://{addr}"))
    }
}

fn recorded(uri: &Uri, headers: &HeaderMap, body: String) -> RecordedPost {
    RecordedPost {
        path: uri.path().to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body,
    }
}

async fn handle_photos(State(backend): State<MockBackend>) -> Json<Value> {
    Json(backend.photos.as_ref().clone())
}

async fn handle_comments(
    State(backend): State<MockBackend>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let photo_id = query.get("photo_id").cloned().unwrap_or_default();
    backend.comment_queries.lock().await.push(photo_id.clone());
    Json(json!([
        { "photo_id": photo_id.parse::<i64>().unwrap_or_default(), "name": "seed", "body": format!("comment on {photo_id}") }
    ]))
}

async fn handle_action(
    State(backend): State<MockBackend>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    backend
        .action_posts
        .lock()
        .await
        .push(recorded(&uri, &headers, body));
    let (status, reply) = backend.action_reply.lock().await.clone();
    (status, Json(reply))
}

async fn handle_form(
    State(backend): State<MockBackend>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    backend
        .form_posts
        .lock()
        .await
        .push(recorded(&uri, &headers, body));
    let (status, reply) = backend.form_reply.lock().await.clone();
    (status, Json(reply))
}

/// View that records what the controller placed into it.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub slides: String,
    pub slide_states: Vec<Option<SlideState>>,
    pub information: String,
    pub comments: Vec<String>,
    pub totals: HashMap<String, String>,
    pub form_resets: usize,
}

impl RecordingView {
    pub fn active_slides(&self) -> Vec<usize> {
        self.slide_states
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == Some(SlideState::Active))
            .map(|(index, _)| index)
            .collect()
    }
}

impl GalleryView for RecordingView {
    fn render_slides(&mut self, markup: String) {
        self.slide_states = vec![None; markup.matches("<figure").count()];
        self.slides = markup;
    }

    fn set_slide_state(&mut self, index: usize, state: SlideState) -> Result<()> {
        let len = self.slide_states.len();
        let slot = self
            .slide_states
            .get_mut(index)
            .ok_or(GalleryError::SlideOutOfRange { index, len })?;
        *slot = Some(state);
        Ok(())
    }

    fn render_information(&mut self, markup: String) {
        self.information = markup;
    }

    fn render_comments(&mut self, markup: String) {
        self.comments = vec![markup];
    }

    fn append_comment(&mut self, markup: String) {
        self.comments.push(markup);
    }

    fn update_action_total(&mut self, element: &ActionElement, total: &Number) {
        let key = element.property.clone().unwrap_or_default();
        self.totals.insert(key, total.to_string());
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }
}
