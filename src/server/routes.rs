use std::sync::Arc;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, DefaultBodyLimit, FromRequest},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::dispatch::{TaskKind, TaskOutput, TaskParams, TaskRequest};
use crate::server::AppState;
use crate::{WorkdeskError, VERSION};

pub fn router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/tasks", post(run_task))
        .route("/text-to-audio", post(text_to_audio))
        .route("/generate-minutes", post(generate_minutes))
        .route("/generate-email", post(generate_email))
        .route("/make-ppt", post(make_presentation))
        .route("/review-code", post(review_code))
        .route("/translate", post(translate))
        .route("/generate-quiz", post(generate_quiz))
        .route("/api/stats", get(stats))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(Extension(state))
}

/// Successful task response envelope.
#[derive(Debug, Serialize)]
struct TaskResponse {
    success: bool,
    task_kind: TaskKind,
    output: TaskOutput,
}

impl TaskResponse {
    fn new(task_kind: TaskKind, output: TaskOutput) -> Json<Self> {
        Json(Self {
            success: true,
            task_kind,
            output,
        })
    }
}

/// Error response envelope; `kind` is one of the documented error kinds.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    kind: &'static str,
}

struct ApiError(WorkdeskError);

impl From<WorkdeskError> for ApiError {
    fn from(err: WorkdeskError) -> Self {
        Self(err)
    }
}

/// JSON extractor that maps body rejections (malformed JSON, missing
/// fields, wrong content type) into the invalid_request error envelope
/// instead of axum's plain-text response.
struct ApiJson<T>(T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for ApiJson<T>
where
    Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
    S: Send + Sync,
    B: Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError(WorkdeskError::InvalidRequest(
                rejection.to_string(),
            ))),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self.0 {
            WorkdeskError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            WorkdeskError::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream_unavailable"),
            WorkdeskError::Config(_) | WorkdeskError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };

        let body = ErrorBody {
            success: false,
            error: self.0.to_string(),
            kind,
        };

        (status, Json(body)).into_response()
    }
}

async fn dispatch_and_count(
    state: &AppState,
    request: TaskRequest,
) -> Result<Json<TaskResponse>, ApiError> {
    let output = state.dispatcher.dispatch(&request).await?;
    state.stats.record(request.kind);
    Ok(TaskResponse::new(request.kind, output))
}

/// Generic task body; the kind stays a string so an unsupported value maps
/// to an invalid_request error instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
struct RawTaskBody {
    task_kind: String,
    input: String,
    #[serde(default)]
    params: TaskParams,
}

/// Generic task endpoint: the body names the task kind.
async fn run_task(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(body): ApiJson<RawTaskBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let kind: TaskKind = body
        .task_kind
        .parse()
        .map_err(WorkdeskError::InvalidRequest)?;

    let request = TaskRequest {
        kind,
        input: body.input,
        params: body.params,
    };
    dispatch_and_count(&state, request).await
}

#[derive(Debug, Deserialize)]
struct TextToAudioBody {
    text: String,
    #[serde(default)]
    target_language: Option<String>,
    #[serde(default)]
    voice: Option<String>,
}

async fn text_to_audio(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(body): ApiJson<TextToAudioBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let request = TaskRequest {
        kind: TaskKind::Speech,
        input: body.text,
        params: TaskParams {
            language: body.target_language,
            voice: body.voice,
            ..TaskParams::default()
        },
    };
    dispatch_and_count(&state, request).await
}

#[derive(Debug, Deserialize)]
struct GenerateMinutesBody {
    notes: String,
}

async fn generate_minutes(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(body): ApiJson<GenerateMinutesBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    dispatch_and_count(&state, TaskRequest::new(TaskKind::Minutes, body.notes)).await
}

#[derive(Debug, Deserialize)]
struct GenerateEmailBody {
    topic: String,
    #[serde(default)]
    recipient: Option<String>,
    #[serde(default)]
    tone: Option<String>,
}

async fn generate_email(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(body): ApiJson<GenerateEmailBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let request = TaskRequest {
        kind: TaskKind::Email,
        input: body.topic,
        params: TaskParams {
            recipient: body.recipient,
            tone: body.tone,
            ..TaskParams::default()
        },
    };
    dispatch_and_count(&state, request).await
}

#[derive(Debug, Deserialize)]
struct MakePresentationBody {
    #[serde(default)]
    topic: Option<String>,
    source_text: String,
}

async fn make_presentation(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(body): ApiJson<MakePresentationBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let request = TaskRequest {
        kind: TaskKind::Presentation,
        input: body.source_text,
        params: TaskParams {
            topic: body.topic,
            ..TaskParams::default()
        },
    };
    dispatch_and_count(&state, request).await
}

#[derive(Debug, Deserialize)]
struct ReviewCodeBody {
    code: String,
}

async fn review_code(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(body): ApiJson<ReviewCodeBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    dispatch_and_count(&state, TaskRequest::new(TaskKind::CodeReview, body.code)).await
}

#[derive(Debug, Deserialize)]
struct TranslateBody {
    text: String,
    target_language: String,
}

async fn translate(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(body): ApiJson<TranslateBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let request = TaskRequest {
        kind: TaskKind::Translate,
        input: body.text,
        params: TaskParams {
            language: Some(body.target_language),
            ..TaskParams::default()
        },
    };
    dispatch_and_count(&state, request).await
}

#[derive(Debug, Deserialize)]
struct GenerateQuizBody {
    topic: String,
    #[serde(default)]
    count: Option<u32>,
}

async fn generate_quiz(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(body): ApiJson<GenerateQuizBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let request = TaskRequest {
        kind: TaskKind::Quiz,
        input: body.topic,
        params: TaskParams {
            count: body.count,
            ..TaskParams::default()
        },
    };
    dispatch_and_count(&state, request).await
}

async fn stats(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(state.stats.snapshot())
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    version: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(HealthBody {
        status: "ok",
        version: VERSION,
    })
}
