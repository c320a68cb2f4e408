use std::future::Future;

use axum::{response::Response, http::{Request, request::Builder}, body::Body};
use club_entities::mock::{self, MockOption};
use club_server::state::AppState;
use http_body::{combinators::UnsyncBoxBody, Body as _};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;


#[derive(Default)]
pub struct FixtureOptions {
    pub mock_default_club: bool,
}

pub struct Fixture {
    pub app: axum::Router,
    pub db: DatabaseConnection,
}

pub struct APIResponse {
    response: Response<UnsyncBoxBody<axum::body::Bytes, axum::Error>>,
}

impl APIResponse {
    pub fn status(&self) -> axum::http::StatusCode {
        self.response.status()
    }

    async fn bytes(&mut self) -> Vec<u8> {
        let mut buf = Vec::new();

        let body = self.response.body_mut();

        while let Some(next) = body.data().await {
            buf.extend_from_slice(&next.unwrap());
        }
        buf
    }

    pub async fn json<T: serde::de::DeserializeOwned>(&mut self) -> T {
        let buf = self.bytes().await;
        serde_json::from_slice(&buf).unwrap()
    }

    #[allow(dead_code)]
    pub async fn text(&mut self) -> String {
        String::from_utf8(self.bytes().await).unwrap()
    }
}

impl From<Response<UnsyncBoxBody<axum::body::Bytes, axum::Error>>> for APIResponse {
    fn from(response: Response<UnsyncBoxBody<hyper::body::Bytes, axum::Error>>) -> Self {
        Self {
            response,
        }
    }
}

impl Fixture {
    pub async fn new(options: FixtureOptions) -> Self {
        Self::new_with_setup(options, |_| async {  }).await
    }

    pub async fn new_with_setup<F, Fut>(options: FixtureOptions, setup_func: F) -> Self
    where
    F: FnOnce(DatabaseConnection) -> Fut,
    Fut: Future<Output = ()>,
    {
        let state = AppState::new_test_app().await.unwrap();
        if options.mock_default_club {
            mock::make_mock_club_with_options(MockOption {
                deterministic_uuids: true,
                ..Default::default()
            }).save_all(&state.db).await.unwrap();
        }
        setup_func(state.db.clone()).await;

        let db = state.db.clone();
        let app = club_server::app_with_state(state).await;

        Self { app, db }
    }

    #[allow(dead_code)]
    pub async fn default() -> Self {
        Self::new(FixtureOptions::default()).await
    }

    async fn send(&mut self, request: Request<Body>) -> APIResponse {
        self.app.clone()
            .oneshot(request)
            .await
            .unwrap().into()
    }

    fn json_request<T>(method: &str, path: &str, body: T) -> Request<Body> where T: serde::Serialize {
        Builder::new()
            .method(method)
            .header("Content-Type", "application/json")
            .uri(path)
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    #[allow(dead_code)]
    pub async fn get(&mut self, path: &str) -> APIResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    #[allow(dead_code)]
    pub async fn post_json<T>(&mut self, path: &str, body: T) -> APIResponse where T: serde::Serialize {
        self.send(Self::json_request("POST", path, body)).await
    }

    #[allow(dead_code)]
    pub async fn put_json<T>(&mut self, path: &str, body: T) -> APIResponse where T: serde::Serialize {
        self.send(Self::json_request("PUT", path, body)).await
    }

    #[allow(dead_code)]
    pub async fn patch_json<T>(&mut self, path: &str, body: T) -> APIResponse where T: serde::Serialize {
        self.send(Self::json_request("PATCH", path, body)).await
    }
}
