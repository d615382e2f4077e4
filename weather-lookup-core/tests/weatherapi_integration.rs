//! Integration tests for WeatherApiProvider using wiremock.

use weather_lookup_core::{
    AppShell, MemoryStore, Phase, Submission, TemperatureUnit, WeatherApiProvider,
    WeatherProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn london_body() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "London",
            "region": "City of London, Greater London",
            "country": "United Kingdom",
            "lat": 51.52,
            "lon": -0.11,
            "localtime_epoch": 1700000100
        },
        "current": {
            "last_updated_epoch": 1700000000,
            "temp_c": 12.0,
            "temp_f": 53.6,
            "condition": {
                "text": "Light rain",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/296.png",
                "code": 1183
            },
            "wind_kph": 15.1,
            "pressure_mb": 1002.0,
            "humidity": 88,
            "vis_km": 9.0
        }
    })
}

fn not_found_body() -> serde_json::Value {
    serde_json::json!({
        "error": { "code": 1006, "message": "No matching location found." }
    })
}

async fn mount_london(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", "TEST_KEY"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .mount(server)
        .await;
}

async fn mount_atlantis(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "Atlantis"))
        .respond_with(ResponseTemplate::new(400).set_body_json(not_found_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_current_success() {
    let server = MockServer::start().await;
    mount_london(&server).await;

    let provider = WeatherApiProvider::with_base_url("TEST_KEY".into(), &server.uri());
    let result = provider.current("London").await.unwrap();

    assert_eq!(result.location.name, "London");
    assert_eq!(result.location.country, "United Kingdom");
    assert_eq!(result.current.temp_c, 12.0);
    assert_eq!(result.current.temp_f, 53.6);
    assert_eq!(result.current.condition.text, "Light rain");
    assert_eq!(result.current.humidity, 88);
    assert_eq!(result.current.pressure_mb, 1002.0);
    assert_eq!(result.current.vis_km, 9.0);
}

#[tokio::test]
async fn test_city_not_found_message_is_verbatim() {
    let server = MockServer::start().await;
    mount_atlantis(&server).await;

    let provider = WeatherApiProvider::with_base_url("TEST_KEY".into(), &server.uri());
    let err = provider.current("Atlantis").await.unwrap_err();

    assert_eq!(err.to_string(), "No matching location found.");
}

#[tokio::test]
async fn test_non_json_error_mentions_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::with_base_url("TEST_KEY".into(), &server.uri());
    let err = provider.current("London").await.unwrap_err().to_string();

    assert!(err.contains("503"), "Error should mention 503 status: {}", err);
    assert!(err.contains("upstream unavailable"));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": { "name": "London" }
        })))
        .mount(&server)
        .await;

    let provider = WeatherApiProvider::with_base_url("TEST_KEY".into(), &server.uri());
    let err = provider.current("London").await.unwrap_err().to_string();

    assert!(err.contains("Failed to parse"), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_unreachable_provider() {
    // Nothing listens on port 1.
    let provider = WeatherApiProvider::with_base_url("TEST_KEY".into(), "http://127.0.0.1:1");
    let err = provider.current("London").await.unwrap_err().to_string();

    assert!(err.contains("Failed to reach"), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_shell_scenario_against_provider() {
    let server = MockServer::start().await;
    mount_london(&server).await;
    mount_atlantis(&server).await;

    let provider = WeatherApiProvider::with_base_url("TEST_KEY".into(), &server.uri());
    let mut app = AppShell::new(provider, MemoryStore::new());

    app.set_input("London");
    assert_eq!(app.submit().await, Submission::Succeeded);
    assert_eq!(app.view().weather.map(|p| p.temperature), Some(12.0));

    app.toggle_unit();
    assert_eq!(app.unit(), TemperatureUnit::Fahrenheit);
    assert_eq!(app.view().weather.map(|p| p.temperature), Some(53.6));

    app.set_input("Atlantis");
    assert!(matches!(app.submit().await, Submission::Failed(_)));
    assert_eq!(app.phase(), Phase::Failure);
    assert_eq!(app.error(), Some("No matching location found."));
    assert_eq!(app.recent_searches(), ["London"]);
    assert!(app.view().weather.is_some());

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 2);
}
