use axum::{
    body::Body,
    extract::{Json, State},
    http::{HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
};

use app_api::{EmptyRequest, RecordCreateRequest, RecordDeleteRequest, RecordsRequest};

use crate::{assets, errors::HttpError, state::HttpState};

pub async fn summary(
    State(state): State<HttpState>,
    Json(req): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::summary(&state.context, req)?;
    Ok(Json(response))
}

pub async fn records_list(
    State(state): State<HttpState>,
    Json(req): Json<RecordsRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::records_list(&state.context, req)?;
    Ok(Json(response))
}

pub async fn records_create(
    State(state): State<HttpState>,
    Json(req): Json<RecordCreateRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::records_create(&state.context, req)?;
    Ok(Json(response))
}

pub async fn records_delete(
    State(state): State<HttpState>,
    Json(req): Json<RecordDeleteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::records_delete(&state.context, req)?;
    Ok(Json(response))
}

pub async fn ui_fallback(
    State(state): State<HttpState>,
    req: Request<Body>,
) -> Result<Response, HttpError> {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return Err(HttpError::new(
            StatusCode::METHOD_NOT_ALLOWED,
            "method not allowed",
            None,
        ));
    }

    let path = req.uri().path().trim_start_matches('/');
    if path.is_empty() || !path.contains('.') {
        return Ok(render_index(&state.csrf_token));
    }

    Err(HttpError::new(
        StatusCode::NOT_FOUND,
        "not found",
        Some("not_found".to_string()),
    ))
}

fn render_index(csrf_token: &str) -> Response {
    let html = inject_csrf(assets::INDEX_HTML, csrf_token);
    let mut response = Response::new(Body::from(html));
    response.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

fn inject_csrf(html: &str, csrf_token: &str) -> String {
    let snippet = format!(
        "<script>window.__WATER_TRACKER_CSRF__=\"{}\";</script>",
        csrf_token
    );
    if html.contains("</head>") {
        html.replacen("</head>", &format!("{}</head>", snippet), 1)
    } else {
        format!("{}{}", snippet, html)
    }
}
