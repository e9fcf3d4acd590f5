#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{Duration, Utc};
use clap::Parser;
use curely_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use uuid::Uuid;

pub const SECRET: &str = "integration-secret";

pub async fn server() -> TestServer {
    let args = Args::parse_from([
        "curely-api",
        "--store",
        "memory",
        "--jwt-secret",
        SECRET,
        "--server-root-path",
        "",
    ]);
    let app_state = state(Arc::new(args)).await.unwrap();

    TestServer::new(router(app_state).unwrap()).unwrap()
}

pub fn token_with(secret: &str, user_id: Uuid, role: &str, expires_in: Duration) -> String {
    let claims = json!({
        "sub": user_id,
        "role": role,
        "exp": (Utc::now() + expires_in).timestamp(),
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub struct User {
    pub id: Uuid,
    pub token: String,
}

pub fn user(role: &str) -> User {
    let id = Uuid::new_v4();
    User {
        id,
        token: token_with(SECRET, id, role, Duration::hours(1)),
    }
}
