//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, patch, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::ports::SharedCrmSync;
use crate::application::services::{
    AvailabilityService, BookingService, CatalogService, ContactService, HoldService,
    HoldSettings, PricingService, UnitLocks,
};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;

use super::modules::{
    availability, bookings, catalog, contacts, health, holds, metrics, pricing, request_id, units,
};

/// Unified state for every `/api/v1` route.
/// Axum extracts each handler's own state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<CatalogService>,
    pub availability: Arc<AvailabilityService>,
    pub pricing: Arc<PricingService>,
    pub holds: Arc<HoldService>,
    pub bookings: Arc<BookingService>,
    pub contacts: Arc<ContactService>,
    pub calendar_days: i64,
}

impl ApiState {
    /// Wire the services over one repository provider.
    ///
    /// Holds and bookings share a single [`UnitLocks`] so they serialize
    /// against each other.
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        crm: SharedCrmSync,
        hold_settings: HoldSettings,
        calendar_days: i64,
    ) -> Self {
        let locks = UnitLocks::new();
        let availability = Arc::new(AvailabilityService::new(repos.clone()));
        let pricing = Arc::new(PricingService::new(repos.clone(), availability.clone()));
        let holds = Arc::new(HoldService::new(
            repos.clone(),
            availability.clone(),
            locks.clone(),
            hold_settings,
        ));
        let bookings = Arc::new(BookingService::new(
            repos.clone(),
            availability.clone(),
            pricing.clone(),
            locks,
            crm.clone(),
        ));
        Self {
            catalog: Arc::new(CatalogService::new(repos)),
            availability,
            pricing,
            holds,
            bookings,
            contacts: Arc::new(ContactService::new(crm)),
            calendar_days,
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiState> for units::UnitsState {
    fn from_ref(s: &ApiState) -> Self {
        units::UnitsState {
            catalog: Arc::clone(&s.catalog),
            availability: Arc::clone(&s.availability),
            calendar_days: s.calendar_days,
        }
    }
}

impl FromRef<ApiState> for pricing::PricingState {
    fn from_ref(s: &ApiState) -> Self {
        pricing::PricingState {
            pricing: Arc::clone(&s.pricing),
        }
    }
}

impl FromRef<ApiState> for availability::AvailabilityState {
    fn from_ref(s: &ApiState) -> Self {
        availability::AvailabilityState {
            availability: Arc::clone(&s.availability),
        }
    }
}

impl FromRef<ApiState> for holds::HoldsState {
    fn from_ref(s: &ApiState) -> Self {
        holds::HoldsState {
            holds: Arc::clone(&s.holds),
        }
    }
}

impl FromRef<ApiState> for bookings::BookingsState {
    fn from_ref(s: &ApiState) -> Self {
        bookings::BookingsState {
            bookings: Arc::clone(&s.bookings),
        }
    }
}

impl FromRef<ApiState> for catalog::CatalogState {
    fn from_ref(s: &ApiState) -> Self {
        catalog::CatalogState {
            catalog: Arc::clone(&s.catalog),
        }
    }
}

impl FromRef<ApiState> for contacts::ContactsState {
    fn from_ref(s: &ApiState) -> Self {
        contacts::ContactsState {
            contacts: Arc::clone(&s.contacts),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Units
        units::list_units,
        units::get_unit,
        units::availability_calendar,
        // Pricing
        pricing::get_pricing,
        pricing::get_pricing_by_type,
        // Availability
        availability::check_availability,
        // Holds
        holds::create_hold,
        holds::get_hold,
        holds::release_hold,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::update_booking_status,
        // Seasons & fees
        catalog::list_seasons,
        catalog::create_season,
        catalog::list_fees,
        catalog::create_fee,
        // Contacts
        contacts::submit_contact,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            units::UnitDto,
            units::RatePlanDto,
            units::UnitSummaryDto,
            units::AvailabilityCalendarDto,
            units::FreeRangeDto,
            pricing::QuoteDto,
            pricing::PriceBreakdownDto,
            pricing::FeeLineDto,
            availability::AvailabilityDto,
            holds::CreateHoldRequest,
            holds::HoldDto,
            bookings::CreateBookingRequest,
            bookings::UpdateBookingStatusRequest,
            bookings::BookingDto,
            bookings::BookingCreatedDto,
            bookings::BookingDetailsDto,
            bookings::CustomerDto,
            bookings::PaymentDto,
            catalog::SeasonDto,
            catalog::CreateSeasonRequest,
            catalog::FeeDto,
            catalog::CreateFeeRequest,
            contacts::ContactRequest,
            contacts::ContactReceiptDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Units", description = "Unit catalog with applicable rate plans and free-date calendar"),
        (name = "Pricing", description = "Stay quotes: tiered rates, seasonal discount, fees"),
        (name = "Availability", description = "Conflict check against bookings and live holds"),
        (name = "Holds", description = "Short-lived holds between quote and payment"),
        (name = "Bookings", description = "Booking creation, lookup and status changes"),
        (name = "Seasons & Fees", description = "Seasonal discounts and stay fees"),
        (name = "Contacts", description = "Contact form forwarding to the CRM"),
    ),
    info(
        title = "Palm Aire Booking API",
        version = "1.0.0",
        description = "REST API for pricing, availability, holds and bookings at Palm Aire",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    state: ApiState,
    db: DatabaseConnection,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let api_routes = Router::new()
        // Units
        .route("/api/v1/units", get(units::list_units))
        .route("/api/v1/units/{unit}", get(units::get_unit))
        .route(
            "/api/v1/units/{unit}/availability-calendar",
            get(units::availability_calendar),
        )
        // Pricing
        .route("/api/v1/pricing", get(pricing::get_pricing))
        .route("/api/v1/pricing/type", get(pricing::get_pricing_by_type))
        // Availability
        .route("/api/v1/availability", get(availability::check_availability))
        // Holds
        .route("/api/v1/holds", post(holds::create_hold))
        .route(
            "/api/v1/holds/{id}",
            get(holds::get_hold).delete(holds::release_hold),
        )
        // Bookings
        .route(
            "/api/v1/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/api/v1/bookings/{id}", get(bookings::get_booking))
        .route(
            "/api/v1/bookings/{id}/status",
            patch(bookings::update_booking_status),
        )
        // Seasons & fees
        .route(
            "/api/v1/seasons",
            get(catalog::list_seasons).post(catalog::create_season),
        )
        .route("/api/v1/fees", get(catalog::list_fees).post(catalog::create_fee))
        // Contacts
        .route("/api/v1/contacts", post(contacts::submit_contact))
        .with_state(state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: prometheus_handle,
        });

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .merge(api_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::crm::LoggingCrmSync;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::seed::seed_catalog;
    use crate::infrastructure::database::test_database;

    struct TestApp {
        router: Router,
        repos: Arc<dyn RepositoryProvider>,
    }

    async fn app() -> TestApp {
        let db = test_database().await;
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        seed_catalog(repos.as_ref()).await.unwrap();
        let state = ApiState::new(
            repos.clone(),
            Arc::new(LoggingCrmSync::new()),
            HoldSettings::default(),
            365,
        );
        let handle = PrometheusBuilder::new().build_recorder().handle();
        TestApp {
            router: create_api_router(state, db, handle),
            repos,
        }
    }

    impl TestApp {
        async fn unit_id(&self, slug: &str) -> String {
            self.repos.units().find_by_slug(slug).await.unwrap().unwrap().id
        }

        async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
            let resp = self.router.clone().oneshot(req).await.unwrap();
            let status = resp.status();
            let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
                .await
                .unwrap();
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, body)
        }

        async fn get(&self, uri: &str) -> (StatusCode, Value) {
            self.send(Request::get(uri).body(Body::empty()).unwrap()).await
        }

        async fn json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
            self.send(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
        }
    }

    fn booking_body(unit_id: &str) -> Value {
        json!({
            "unit_id": unit_id,
            "check_in": "2030-02-01",
            "check_out": "2030-02-04",
            "guests": 2,
            "guest_name": "Jane Doe",
            "guest_email": "jane@example.com",
            "guest_phone": "555-123-4567"
        })
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = app().await;
        let (status, body) = app.get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn request_id_is_echoed() {
        let app = app().await;
        let resp = app
            .router
            .clone()
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn lists_and_fetches_units() {
        let app = app().await;
        let (status, body) = app.get("/api/v1/units").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 22);

        let (status, body) = app.get("/api/v1/units/cottage-9606").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["unit_type"], "COTTAGE_2BR");
        assert_eq!(body["data"]["rate_plan"]["nightly"], 8500);

        let (status, body) = app.get("/api/v1/units/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn pricing_quote_and_date_errors() {
        let app = app().await;
        let id = app.unit_id("trailer-05").await;

        let (status, body) = app
            .get(&format!(
                "/api/v1/pricing?unit_id={}&check_in=2030-03-01&check_out=2030-03-04&guests=2",
                id
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["pricing"]["total"], 13500);
        assert_eq!(body["data"]["pricing"]["tier"], "nightly");

        let (status, body) = app
            .get(&format!(
                "/api/v1/pricing?unit_id={}&check_in=2030-03-04&check_out=2030-03-04",
                id
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Check-out date must be after check-in date");
    }

    #[tokio::test]
    async fn pricing_by_type() {
        let app = app().await;
        let (status, body) = app
            .get("/api/v1/pricing/type?unit_type=COTTAGE_1BR&check_in=2030-03-01&check_out=2030-03-08")
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["unit"]["slug"], "cottage-9608");
        assert_eq!(body["data"]["pricing"]["tier"], "weekly");

        let (status, _) = app
            .get("/api/v1/pricing/type?unit_type=CASTLE&check_in=2030-03-01&check_out=2030-03-08")
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn hold_lifecycle_over_http() {
        let app = app().await;
        let id = app.unit_id("cottage-9612").await;
        let hold_body = json!({
            "unit_id": id,
            "check_in": "2030-04-01",
            "check_out": "2030-04-03"
        });

        let (status, body) = app.json("POST", "/api/v1/holds", hold_body.clone()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["status"], "ACTIVE");
        let hold_id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, _) = app.json("POST", "/api/v1/holds", hold_body.clone()).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = app
            .get(&format!(
                "/api/v1/availability?unit_id={}&check_in=2030-04-02&check_out=2030-04-05",
                id
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["available"], false);
        assert_eq!(body["data"]["conflicts"][0], "Apr 1 - Apr 3");

        let uri = format!("/api/v1/holds/{}", hold_id);
        let (status, body) = app
            .send(Request::delete(&uri).body(Body::empty()).unwrap())
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "CANCELLED");

        let (_, body) = app.get(&uri).await;
        assert_eq!(body["data"]["status"], "CANCELLED");

        let (status, _) = app.json("POST", "/api/v1/holds", hold_body).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn hold_expiration_out_of_range_is_400() {
        let app = app().await;
        let id = app.unit_id("cottage-9612").await;
        let (status, _) = app
            .json(
                "POST",
                "/api/v1/holds",
                json!({
                    "unit_id": id,
                    "check_in": "2030-04-01",
                    "check_out": "2030-04-03",
                    "expiration_minutes": 90
                }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn booking_flow_over_http() {
        let app = app().await;
        let id = app.unit_id("cottage-9618").await;

        let (status, body) = app.json("POST", "/api/v1/bookings", booking_body(&id)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["booking"]["status"], "CONFIRMED");
        assert_eq!(body["data"]["booking"]["total_cents"], 3 * 8500);
        assert_eq!(body["data"]["customer"]["last_name"], "Doe");
        assert!(body["data"].get("crm_sync_error").is_none());
        let booking_id = body["data"]["booking"]["id"].as_str().unwrap().to_string();

        let (status, body) = app.json("POST", "/api/v1/bookings", booking_body(&id)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Dates are no longer available");

        let (status, body) = app.get(&format!("/api/v1/bookings/{}", booking_id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["unit"]["slug"], "cottage-9618");

        let (status, body) = app
            .json(
                "PATCH",
                &format!("/api/v1/bookings/{}/status", booking_id),
                json!({"status": "CHECKED_IN"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "CHECKED_IN");

        let (status, _) = app
            .json(
                "PATCH",
                &format!("/api/v1/bookings/{}/status", booking_id),
                json!({"status": "LOST"}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = app
            .get("/api/v1/bookings?start_date=2030-02-03&end_date=2030-02-10")
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn booking_validation_errors() {
        let app = app().await;
        let id = app.unit_id("cottage-9618").await;

        let mut bad_email = booking_body(&id);
        bad_email["guest_email"] = json!("jane-at-example");
        let (status, _) = app.json("POST", "/api/v1/bookings", bad_email).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let mut no_unit = booking_body(&id);
        no_unit["unit_id"] = Value::Null;
        let (status, body) = app.json("POST", "/api/v1/bookings", no_unit).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Either unit_id or unit_type is required");

        let mut crowded = booking_body(&id);
        crowded["guests"] = json!(9);
        let (status, _) = app.json("POST", "/api/v1/bookings", crowded).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn seasons_and_fees_feed_pricing() {
        let app = app().await;
        let (status, _) = app
            .json(
                "POST",
                "/api/v1/seasons",
                json!({"name": "Winter", "start_date": "2030-01-01", "end_date": "2030-03-31", "discount_pct": 20}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = app
            .json("POST", "/api/v1/fees", json!({"name": "Cleaning", "amount": 5000}))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = app.get("/api/v1/fees").await;
        assert_eq!(body["data"][0]["per_stay"], true);

        let id = app.unit_id("trailer-05").await;
        let (_, body) = app
            .get(&format!(
                "/api/v1/pricing?unit_id={}&check_in=2030-03-01&check_out=2030-03-04",
                id
            ))
            .await;
        let pricing = &body["data"]["pricing"];
        assert_eq!(pricing["seasonal_discount"], 2700);
        assert_eq!(pricing["season_name"], "Winter");
        assert_eq!(pricing["total"], 13500 - 2700 + 5000);
    }

    #[tokio::test]
    async fn calendar_and_contacts() {
        let app = app().await;
        let (status, body) = app
            .get("/api/v1/units/trailer-07/availability-calendar?start_date=2030-01-01&end_date=2030-01-31")
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["free_ranges"][0]["nights"], 30);

        let (status, body) = app
            .json(
                "POST",
                "/api/v1/contacts",
                json!({
                    "name": "Sam Lee",
                    "email": "sam@example.com",
                    "phone": "5559876543",
                    "message": "Is a trailer free in March?"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["submitted"], true);

        let (status, _) = app
            .json(
                "POST",
                "/api/v1/contacts",
                json!({"name": "S", "email": "sam@example.com", "phone": "1", "message": "hi"}),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn fee_and_stay_magnitudes_are_capped() {
        let app = app().await;
        let (status, _) = app
            .json(
                "POST",
                "/api/v1/fees",
                json!({"name": "Huge", "amount": 4611686018427387903i64, "per_stay": false}),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let id = app.unit_id("trailer-05").await;
        let (status, body) = app
            .get(&format!(
                "/api/v1/pricing?unit_id={}&check_in=2030-01-01&check_out=2040-01-01",
                id
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Stays are limited to 730 nights");
    }

    #[tokio::test]
    async fn converted_hold_cannot_be_released() {
        let app = app().await;
        let id = app.unit_id("cottage-9618").await;
        let (status, body) = app
            .json(
                "POST",
                "/api/v1/holds",
                json!({"unit_id": id, "check_in": "2030-02-01", "check_out": "2030-02-04"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let hold_id = body["data"]["id"].as_str().unwrap().to_string();

        let mut booking = booking_body(&id);
        booking["hold_id"] = json!(hold_id);
        let (status, _) = app.json("POST", "/api/v1/bookings", booking).await;
        assert_eq!(status, StatusCode::CREATED);

        let uri = format!("/api/v1/holds/{}", hold_id);
        let (status, body) = app
            .send(Request::delete(&uri).body(Body::empty()).unwrap())
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);

        let (_, body) = app.get(&uri).await;
        assert_eq!(body["data"]["status"], "CONVERTED");
    }

    #[tokio::test]
    async fn reconfirming_over_a_rebooked_stay_is_409() {
        let app = app().await;
        let id = app.unit_id("cottage-9618").await;

        let (_, body) = app.json("POST", "/api/v1/bookings", booking_body(&id)).await;
        let first = body["data"]["booking"]["id"].as_str().unwrap().to_string();
        let status_uri = format!("/api/v1/bookings/{}/status", first);
        let (status, _) = app
            .json("PATCH", &status_uri, json!({"status": "CANCELLED"}))
            .await;
        assert_eq!(status, StatusCode::OK);

        let mut second = booking_body(&id);
        second["guest_email"] = json!("sam@example.com");
        let (status, _) = app.json("POST", "/api/v1/bookings", second).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = app
            .json("PATCH", &status_uri, json!({"status": "CONFIRMED"}))
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn openapi_lists_booking_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/bookings"));
        assert!(doc.paths.paths.contains_key("/api/v1/holds/{id}"));
    }
}
