//! Tests for the aggregate requests against a mock Meteomatics server.

use chrono::NaiveDate;
use meteomatics::{
    Coordinates, Credentials, DateRange, MeteomaticsClient, MeteomaticsError, Metric,
};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ELEVATION: u32 = 2000;

fn create_test_client(mock_server: &MockServer) -> MeteomaticsClient {
    MeteomaticsClient::builder()
        .credentials(Credentials::new("alice", "s3cret").unwrap())
        .coordinates(Coordinates::new(46.5547, 7.3785))
        .date_range(DateRange::new(
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        ))
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap()
}

fn metric_path(metric: Metric) -> String {
    format!(
        "/2023-12-31Z--2024-01-02Z:PT1H/{}/46.5547,7.3785/json",
        metric.parameter()
    )
}

/// Mounts one mock per metric that echoes the parameter token as body.
async fn mount_all_metrics(mock_server: &MockServer, slow: Option<Metric>) {
    for metric in Metric::all(ELEVATION) {
        let mut template = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "parameter": metric.parameter(),
        }));
        if slow == Some(metric) {
            template = template.set_delay(Duration::from_secs(5));
        }
        Mock::given(method("GET"))
            .and(path(metric_path(metric)))
            .respond_with(template)
            .expect(1)
            .mount(mock_server)
            .await;
    }
}

async fn parameter_of(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.unwrap();
    body["parameter"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_all_returns_six_ordered_responses() {
    let mock_server = MockServer::start().await;
    mount_all_metrics(&mock_server, None).await;

    let client = create_test_client(&mock_server);
    let responses = client.all(ELEVATION).await.unwrap();
    assert_eq!(responses.len(), 6);

    let mut parameters = Vec::new();
    for response in responses {
        parameters.push(parameter_of(response).await);
    }
    assert_eq!(
        parameters,
        [
            "prob_snowfall:p",
            "relative_humidity_2000m:p",
            "t_2000m:C",
            "clear_sky_rad:W",
            "wind_speed_2000m:kmh",
            "pressure_2000m:hPa",
        ]
    );

    let mut paths: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 6, "expected six distinct requests");
}

#[tokio::test]
async fn test_all_fails_as_a_whole() {
    let mock_server = MockServer::start().await;
    let slow = Metric::Pressure {
        elevation: ELEVATION,
    };
    mount_all_metrics(&mock_server, Some(slow)).await;

    let client = create_test_client(&mock_server);
    let err = client.all(ELEVATION).await.unwrap_err();

    match err {
        MeteomaticsError::Timeout { url, after } => {
            assert!(url.ends_with(&metric_path(slow)), "unexpected url {}", url);
            assert_eq!(after, Duration::from_millis(500));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_all_settled_keeps_successful_results() {
    let mock_server = MockServer::start().await;
    let slow = Metric::WindSpeed {
        elevation: ELEVATION,
    };
    mount_all_metrics(&mock_server, Some(slow)).await;

    let client = create_test_client(&mock_server);
    let outcomes = client.all_settled(ELEVATION).await;

    let metrics: Vec<Metric> = outcomes.iter().map(|o| o.metric).collect();
    assert_eq!(metrics, Metric::all(ELEVATION));

    for outcome in outcomes {
        if outcome.metric == slow {
            assert!(matches!(
                outcome.result,
                Err(MeteomaticsError::Timeout { .. })
            ));
        } else {
            let response = outcome.result.unwrap();
            assert_eq!(parameter_of(response).await, outcome.metric.parameter());
        }
    }
}

#[tokio::test]
async fn test_concurrent_calls_on_one_client_do_not_interfere() {
    let mock_server = MockServer::start().await;
    mount_all_metrics(&mock_server, None).await;

    let client = create_test_client(&mock_server);
    let (snow, humidity, temperature, clear_sky, wind, pressure) = tokio::join!(
        client.snow_probability(),
        client.humidity_prediction(ELEVATION),
        client.temperature_prediction(ELEVATION),
        client.clear_solar_sky_prediction(),
        client.wind_speed_prediction(ELEVATION),
        client.pressure_prediction(ELEVATION),
    );

    assert_eq!(parameter_of(snow.unwrap()).await, "prob_snowfall:p");
    assert_eq!(parameter_of(humidity.unwrap()).await, "relative_humidity_2000m:p");
    assert_eq!(parameter_of(temperature.unwrap()).await, "t_2000m:C");
    assert_eq!(parameter_of(clear_sky.unwrap()).await, "clear_sky_rad:W");
    assert_eq!(parameter_of(wind.unwrap()).await, "wind_speed_2000m:kmh");
    assert_eq!(parameter_of(pressure.unwrap()).await, "pressure_2000m:hPa");
}

#[test]
fn test_from_env_requires_both_credentials() {
    // The only test in this binary that touches the process environment.
    let coordinates = Coordinates::new(46.5547, 7.3785);
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    std::env::remove_var(meteomatics::USERNAME_ENV);
    std::env::set_var(meteomatics::PASSWORD_ENV, "s3cret");
    assert!(matches!(
        MeteomaticsClient::from_env(coordinates, day),
        Err(MeteomaticsError::MissingCredential(meteomatics::USERNAME_ENV))
    ));

    std::env::set_var(meteomatics::USERNAME_ENV, "alice");
    std::env::remove_var(meteomatics::PASSWORD_ENV);
    assert!(matches!(
        MeteomaticsClient::from_env(coordinates, day),
        Err(MeteomaticsError::MissingCredential(meteomatics::PASSWORD_ENV))
    ));

    std::env::set_var(meteomatics::PASSWORD_ENV, "");
    assert!(matches!(
        MeteomaticsClient::from_env(coordinates, day),
        Err(MeteomaticsError::MissingCredential(meteomatics::PASSWORD_ENV))
    ));

    std::env::set_var(meteomatics::PASSWORD_ENV, "s3cret");
    assert!(MeteomaticsClient::from_env(coordinates, day).is_ok());

    std::env::remove_var(meteomatics::USERNAME_ENV);
    std::env::remove_var(meteomatics::PASSWORD_ENV);
}
