use axum::{
    http::{HeaderMap, StatusCode},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// A fixture record for the `/users` route.
#[derive(Clone, Debug, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub active: bool,
}

pub fn app() -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/inventory", get(inventory))
        .route("/profile", get(profile))
        .route("/greeting", get(greeting))
        .route("/plain", get(plain))
        .route("/teapot", get(teapot))
        .route("/echo/headers", any(echo_headers))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users() -> Json<Vec<User>> {
    Json(vec![
        User {
            id: 1,
            name: "Ada".to_string(),
            active: true,
        },
        User {
            id: 2,
            name: "Grace".to_string(),
            active: false,
        },
    ])
}

/// The second element carries a key the first does not; clients deriving
/// columns from the first row will not show it.
async fn inventory() -> Json<Value> {
    Json(json!([
        {"item": "A-100", "qty": 1},
        {"item": "A-101", "qty": 2, "warehouse": "east"},
    ]))
}

async fn profile() -> Json<Value> {
    Json(json!({"name": "Ada", "role": "admin"}))
}

async fn greeting() -> Json<Value> {
    Json(json!("hello"))
}

async fn plain() -> &'static str {
    "just text, not json"
}

async fn teapot() -> StatusCode {
    StatusCode::IM_A_TEAPOT
}

/// Reflect the request headers back as a JSON object, names lowercased by
/// the HTTP layer.
async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let mut map = serde_json::Map::new();
    for (name, value) in headers.iter() {
        map.insert(
            name.as_str().to_string(),
            Value::String(value.to_str().unwrap_or_default().to_string()),
        );
    }
    Json(Value::Object(map))
}
