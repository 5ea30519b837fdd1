use tracing::{error, info};

use crate::backend::BackendApi;
use crate::errors::AppError;
use crate::graphql::types::{LoginInput, RegisterInput};
use crate::models::user::{LoginResponse, RegisterResponse};

pub async fn login(api: &dyn BackendApi, input: &LoginInput) -> Result<LoginResponse, AppError> {
    let raw = api
        .login(&input.email, &input.password)
        .await
        .map_err(|e| {
            error!("Login failed: {e}");
            e
        })?;

    let response = LoginResponse::from_backend(&raw);
    info!("User {} logged in", response.user.id);
    Ok(response)
}

pub async fn register(
    api: &dyn BackendApi,
    input: &RegisterInput,
) -> Result<RegisterResponse, AppError> {
    let raw = api
        .signup(&input.username, &input.email, &input.password)
        .await
        .map_err(|e| {
            error!("Registration failed for {}: {e}", input.username);
            e
        })?;

    let response = RegisterResponse::from_backend(&raw);
    info!("Registered user {} ({})", response.id, response.username);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::FakeBackend;
    use crate::backend::BackendError;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_forwards_credentials_and_maps_response() {
        let api = FakeBackend::default().with_auth_response(
            json!({"ID": 4, "Username": "aoi", "Email": "aoi@example.com", "Token": "abc"}),
        );
        let input = LoginInput {
            email: "aoi@example.com".to_string(),
            password: "secret".to_string(),
        };

        let response = login(&api, &input).await.unwrap();
        assert_eq!(response.user.username, "aoi");
        assert_eq!(response.token, "abc");
        assert_eq!(
            api.last_body().unwrap(),
            json!({"email": "aoi@example.com", "password": "secret"})
        );
    }

    #[tokio::test]
    async fn test_login_error_is_propagated() {
        let api = FakeBackend::default().failing("/login");
        let input = LoginInput {
            email: "x@example.com".to_string(),
            password: "nope".to_string(),
        };
        let err = login(&api, &input).await.unwrap_err();
        assert!(matches!(err, AppError::Backend(BackendError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_register_maps_response() {
        let api = FakeBackend::default()
            .with_auth_response(json!({"id": 9, "username": "sora", "email": "sora@example.com"}));
        let input = RegisterInput {
            username: "sora".to_string(),
            email: "sora@example.com".to_string(),
            password: "pw".to_string(),
        };
        let response = register(&api, &input).await.unwrap();
        assert_eq!(response.id, "9");
        assert_eq!(response.email, "sora@example.com");
        assert!(api.calls().contains(&"/signup".to_string()));
    }
}
