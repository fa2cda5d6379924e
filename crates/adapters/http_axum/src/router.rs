//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use fitbook_app::ports::{BookingRepository, FitnessClassRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the API routes at the root next to `/health`. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// and, when `cors` is set, a permissive [`CorsLayer`] for browser clients.
pub fn build<UR, CR, BR>(state: AppState<UR, CR, BR>, cors: bool) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    CR: FitnessClassRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let router: Router<AppState<UR, CR, BR>> = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes::<UR, CR, BR>());

    let router = if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use fitbook_app::services::booking_service::BookingService;
    use fitbook_app::services::class_service::FitnessClassService;
    use fitbook_app::services::user_service::UserService;
    use fitbook_domain::booking::{Booking, NewBooking};
    use fitbook_domain::error::FitbookError;
    use fitbook_domain::fitness_class::{FitnessClass, FitnessClassDraft};
    use fitbook_domain::id::{BookingId, FitnessClassId, UserId};
    use fitbook_domain::user::{NewUser, User};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct StubUserRepo;
    struct StubClassRepo;
    struct StubBookingRepo;

    impl UserRepository for StubUserRepo {
        async fn create(&self, user: NewUser) -> Result<User, FitbookError> {
            Ok(user.with_id(UserId::new(1)))
        }
        async fn get_by_id(&self, _id: UserId) -> Result<Option<User>, FitbookError> {
            Ok(None)
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, FitbookError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<User>, FitbookError> {
            Ok(vec![])
        }
        async fn update(&self, user: User) -> Result<User, FitbookError> {
            Ok(user)
        }
        async fn delete(&self, _id: UserId) -> Result<bool, FitbookError> {
            Ok(false)
        }
    }

    impl FitnessClassRepository for StubClassRepo {
        async fn create(&self, draft: FitnessClassDraft) -> Result<FitnessClass, FitbookError> {
            Ok(draft.with_id(FitnessClassId::new(1)))
        }
        async fn get_by_id(&self, _id: FitnessClassId) -> Result<Option<FitnessClass>, FitbookError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<FitnessClass>, FitbookError> {
            Ok(vec![])
        }
        async fn update(&self, class: FitnessClass) -> Result<FitnessClass, FitbookError> {
            Ok(class)
        }
        async fn delete(&self, _id: FitnessClassId) -> Result<bool, FitbookError> {
            Ok(false)
        }
    }

    impl BookingRepository for StubBookingRepo {
        async fn create(&self, booking: NewBooking) -> Result<Booking, FitbookError> {
            Ok(booking.with_id(BookingId::new(1)))
        }
        async fn get_by_id(&self, _id: BookingId) -> Result<Option<Booking>, FitbookError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Booking>, FitbookError> {
            Ok(vec![])
        }
        async fn update(&self, booking: Booking) -> Result<Booking, FitbookError> {
            Ok(booking)
        }
        async fn delete(&self, _id: BookingId) -> Result<bool, FitbookError> {
            Ok(false)
        }
    }

    fn test_app(cors: bool) -> Router {
        let state = AppState::new(
            UserService::new(StubUserRepo),
            FitnessClassService::new(StubClassRepo),
            BookingService::new(StubBookingRepo, StubUserRepo, StubClassRepo),
        );
        build(state, cors)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = test_app(true);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_users() {
        let app = test_app(true);

        let response = app
            .oneshot(Request::get("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_return_404_with_message_when_user_missing() {
        let app = test_app(true);

        let response = app
            .oneshot(Request::get("/users/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "User not found (id 1)");
    }

    #[tokio::test]
    async fn should_return_400_when_path_id_not_integer() {
        let app = test_app(true);

        let response = app
            .oneshot(Request::get("/classes/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_400_when_body_is_not_json() {
        let app = test_app(true);

        let response = app
            .oneshot(json_request("POST", "/users", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn should_return_400_when_required_field_missing() {
        let app = test_app(true);

        let response = app
            .oneshot(json_request("POST", "/users", r#"{"name":"Ann"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_400_when_email_invalid() {
        let app = test_app(true);

        let response = app
            .oneshot(json_request(
                "POST",
                "/users",
                r#"{"name":"Ann","email":"not-an-email"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_201_with_user_when_created() {
        let app = test_app(true);

        let response = app
            .oneshot(json_request(
                "POST",
                "/users",
                r#"{"name":"Ann","email":"ann@x.com"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"id": 1, "name": "Ann", "email": "ann@x.com"})
        );
    }

    #[tokio::test]
    async fn should_return_class_with_readable_schedule_when_created() {
        let app = test_app(true);

        let response = app
            .oneshot(json_request(
                "POST",
                "/classes",
                r#"{"name":"Yoga","description":"d","instructor":"Bo","schedule":"2024-01-01T10:00:00"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["schedule"], "2024-01-01T10:00:00");
        assert_eq!(body["readable_schedule"], "2024-01-01 10:00:00");
    }

    #[tokio::test]
    async fn should_return_404_when_booking_references_missing_user() {
        let app = test_app(true);

        let response = app
            .oneshot(json_request(
                "POST",
                "/bookings",
                r#"{"user_id":5,"fitness_class_id":1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "User not found (id 5)");
    }

    #[tokio::test]
    async fn should_return_404_when_deleting_missing_booking() {
        let app = test_app(true);

        let response = app
            .oneshot(
                Request::delete("/bookings/9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_add_cors_headers_when_enabled() {
        let app = test_app(true);

        let response = app
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn should_omit_cors_headers_when_disabled() {
        let app = test_app(false);

        let response = app
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }
}
