#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{Method, StatusCode, header},
};
use filmapi::{
    AppState,
    auth::{AuthUser, TokenService},
    config::{
        AuthConfig, Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig,
    },
};
use filmapi_user::{HashParams, RegisterInput, Role};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub fn test_config(allow_admin_registration: bool) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3300,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: SECRET.to_string(),
            lifetime_seconds: 3600,
        },
        // Cheap work factor, hashing cost is not under test here
        password: HashParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
        auth: AuthConfig {
            allow_admin_registration,
        },
        root: None,
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_db() -> SqlitePool {
    let pool = filmapi_db::create_pool("sqlite::memory:", 1).await.unwrap();
    filmapi_db::migrate(&pool).await.unwrap();

    pool
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config(true)).await
    }

    pub async fn with_config(config: Config) -> Self {
        let pool = setup_test_db().await;
        let state = filmapi::app_state(config, pool).unwrap();

        Self {
            router: filmapi::routes::router(state.clone()),
            state,
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.state.tokens
    }

    /// Send a request, returns the status and the parsed JSON body
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    /// Create an account directly in the store
    pub async fn create_account(&self, username: &str, role: Role) -> AuthUser {
        self.state
            .user_command
            .register(
                RegisterInput {
                    username: Some(username.to_string()),
                    password: Some("my_password".to_string()),
                },
                role,
            )
            .await
            .unwrap()
            .into()
    }

    /// Token for a freshly created account with the given role
    pub async fn token_for(&self, username: &str, role: Role) -> String {
        let user = self.create_account(username, role).await;
        self.tokens().issue(user).unwrap()
    }

    pub async fn create_director(&self, admin_token: &str, name: &str) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/directors",
                Some(admin_token),
                Some(serde_json::json!({"name": name, "birthYear": 1970})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");

        body
    }
}
