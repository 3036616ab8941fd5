use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub address: String,
}

#[derive(Deserialize)]
pub struct ReplaceUser {
    pub name: String,
    pub address: String,
}

pub type Db = Arc<RwLock<HashMap<String, User>>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

fn reject(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "message": message })))
}

fn not_found() -> (StatusCode, Json<Value>) {
    reject(StatusCode::NOT_FOUND, "no found user")
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/user", post(create_user))
        .route("/user/{user_id}", get(get_user).put(replace_user).delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock user server listening");
    }
    axum::serve(listener, app()).await
}

async fn create_user(State(db): State<Db>, Json(user): Json<User>) -> ApiResult<(StatusCode, Json<User>)> {
    let mut users = db.write().await;
    if users.contains_key(&user.user_id) {
        return Err(reject(StatusCode::CONFLICT, "user already exists"));
    }
    debug!(user_id = %user.user_id, "created user");
    users.insert(user.user_id.clone(), user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(State(db): State<Db>, Path(user_id): Path<String>) -> ApiResult<Json<User>> {
    let users = db.read().await;
    users.get(&user_id).cloned().map(Json).ok_or_else(not_found)
}

async fn replace_user(
    State(db): State<Db>,
    Path(user_id): Path<String>,
    Json(input): Json<ReplaceUser>,
) -> ApiResult<Json<User>> {
    let mut users = db.write().await;
    let user = users.get_mut(&user_id).ok_or_else(not_found)?;
    user.name = input.name;
    user.address = input.address;
    debug!(%user_id, "replaced user");
    Ok(Json(user.clone()))
}

async fn delete_user(State(db): State<Db>, Path(user_id): Path<String>) -> ApiResult<StatusCode> {
    let mut users = db.write().await;
    users.remove(&user_id).map(|_| StatusCode::NO_CONTENT).ok_or_else(not_found)
}
