//! Shared wiremock fixtures for client integration tests

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const API_KEY: &str = "test-api-key";

pub fn user_json(id: &str, username: &str, email: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": email,
        "displayName": username,
        "isAdmin": false
    })
}

pub fn sign_in_json(local_id: &str, email: &str, id_token: &str) -> Value {
    json!({
        "kind": "identitytoolkit#VerifyPasswordResponse",
        "localId": local_id,
        "email": email,
        "idToken": id_token,
        "refreshToken": format!("refresh-{local_id}"),
        "expiresIn": "3600"
    })
}

pub fn toolkit_error_json(message: &str) -> Value {
    json!({
        "error": {
            "code": 400,
            "message": message,
            "errors": [{"message": message, "domain": "global", "reason": "invalid"}]
        }
    })
}

/// Mount a toolkit accounts endpoint answering with `status` and `body`
pub async fn mount_accounts(server: &MockServer, action: &str, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/v1/accounts:{action}")))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}
