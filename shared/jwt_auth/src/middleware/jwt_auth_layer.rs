use super::jwt_auth_service::JwtAuthService;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower::Layer;

#[derive(Clone)]
pub struct JwtAuthLayer {
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl JwtAuthLayer {
    ///
    /// All algorithms must belong to the same family as the key.
    ///
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;

        Self {
            validation: Arc::new(validation),
            key: Arc::new(key),
        }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService::new(inner, self.validation.clone(), self.key.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::User;
    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, HeaderValue, Method, Request, StatusCode},
        routing::get,
        Extension, Router,
    };
    use jsonwebtoken::{EncodingKey, Header};
    use serde::Serialize;
    use tower::ServiceExt;
    use uuid::Uuid;

    const SECRET: &[u8] = b"agency secret";

    #[derive(Serialize)]
    struct TestClaims<'a> {
        sub: Uuid,
        exp: i64,
        roles: &'a [&'a str],
    }

    fn encode(sub: Uuid, exp: i64, roles: &[&str], secret: &[u8]) -> String {
        let claims = TestClaims { sub, exp, roles };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    fn router() -> Router {
        Router::new()
            .route("/", get(|| async { StatusCode::OK }))
            .route_layer(JwtAuthLayer::new(
                DecodingKey::from_secret(SECRET),
                vec![Algorithm::HS256],
            ))
    }

    #[tokio::test]
    async fn missing_authorization_header() {
        test_invalid_authorization_header(None).await;
    }

    #[tokio::test]
    async fn authorization_type_not_bearer() {
        test_invalid_authorization_header("Basic YWRtaW46YWRtaW4=").await;
    }

    #[tokio::test]
    async fn empty_bearer_token() {
        test_invalid_authorization_header("Bearer ").await;
    }

    #[tokio::test]
    async fn invalid_token() {
        test_invalid_authorization_header("Bearer not even close to jwt").await;
    }

    #[tokio::test]
    async fn expired_token() {
        let token = encode(Uuid::new_v4(), 12312, &[], SECRET);
        test_invalid_authorization_header(format!("Bearer {token}").as_str()).await;
    }

    #[tokio::test]
    async fn invalid_signature() {
        let token = encode(Uuid::new_v4(), 253402210800, &[], b"wrong secret");
        test_invalid_authorization_header(format!("Bearer {token}").as_str()).await;
    }

    #[tokio::test]
    async fn correct_request_extension() {
        let user_id = Uuid::new_v4();
        let token = encode(
            user_id,
            253402210800,
            &["travel_agency_floating_tickets", "travel_agency_packages"],
            SECRET,
        );

        let router = Router::new()
            .route(
                "/",
                get(move |Extension(user): Extension<User>| async move {
                    if user.id != user_id {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }

                    let expected_roles = vec![
                        "travel_agency_floating_tickets".to_string(),
                        "travel_agency_packages".to_string(),
                    ];
                    if user.roles != expected_roles {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }

                    StatusCode::OK
                }),
            )
            .route_layer(JwtAuthLayer::new(
                DecodingKey::from_secret(SECRET),
                vec![Algorithm::HS256],
            ));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK)
    }

    async fn test_invalid_authorization_header(authorization: impl Into<Option<&str>>) {
        let mut request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        if let Some(authorization) = authorization.into() {
            request
                .headers_mut()
                .insert(AUTHORIZATION, HeaderValue::try_from(authorization).unwrap());
        }

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
