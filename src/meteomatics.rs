//! This module provides the main entry point for querying the Meteomatics API.
//! A client is bound to one location and date range and can then request any
//! of the supported weather metrics for it, one at a time or all at once.

use crate::credentials::Credentials;
use crate::error::MeteomaticsError;
use crate::request::{build_request, QueryConfig, RequestDescriptor};
use crate::types::coordinates::Coordinates;
use crate::types::date_range::AnyDateRange;
use crate::types::format::OutputFormat;
use crate::types::frequency::Frequency;
use crate::types::metric::Metric;
use crate::utils::{normalize_base_url, DEFAULT_BASE_URL};
use bon::bon;
use futures_util::future::{join_all, try_join_all};
use log::{debug, info, warn};
use reqwest::{Client, Response};
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The outcome of one metric request inside [`MeteomaticsClient::all_settled`].
#[derive(Debug)]
pub struct MetricResponse {
    pub metric: Metric,
    pub result: Result<Response, MeteomaticsError>,
}

/// The client for one query session: a fixed location, date range and sampling frequency.
///
/// The client holds no per-request state. Every metric call builds its own
/// [`RequestDescriptor`] before anything is sent, so calls on the same client
/// may run concurrently, and the client may be shared by reference.
///
/// Responses are returned as received. Neither the body nor the status code is
/// inspected, so a `401` or `404` from the provider is an `Ok` response.
///
/// # Examples
///
/// ```no_run
/// # use meteomatics::{Coordinates, Credentials, DateRange, MeteomaticsClient, MeteomaticsError};
/// # use chrono::NaiveDate;
/// # async fn run() -> Result<(), MeteomaticsError> {
/// let client = MeteomaticsClient::builder()
///     .credentials(Credentials::new("user", "password")?)
///     .coordinates(Coordinates::new(46.5547, 7.3785))
///     .date_range(DateRange::new(
///         NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
///     ))
///     .build()?;
///
/// let response = client.temperature_prediction(2000).await?;
/// println!("{}", response.text().await.unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MeteomaticsClient {
    http: Client,
    credentials: Credentials,
    config: QueryConfig,
    timeout: Option<Duration>,
}

#[bon]
impl MeteomaticsClient {
    /// Creates a client for one location and date range.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.credentials(Credentials)`: **Required.** Basic-auth username and password.
    /// * `.coordinates(Coordinates)`: **Required.** The location to query.
    /// * `.date_range(impl AnyDateRange)`: **Required.** The inclusive dates to query: a
    ///   [`crate::DateRange`], a single `NaiveDate`, a `(start, end)` pair, a [`crate::Year`]
    ///   or a [`crate::Month`].
    /// * `.frequency(Frequency)`: Optional. Sampling interval. Defaults to one hour (`PT1H`).
    /// * `.format(OutputFormat)`: Optional. Response format. Defaults to JSON.
    /// * `.base_url(impl Into<String>)`: Optional. Defaults to `https://api.meteomatics.com`.
    /// * `.timeout(Duration)`: Optional. Limit on waiting for response headers. Reading
    ///   the body afterwards is not limited. No timeout by default.
    ///
    /// No network I/O happens during construction.
    ///
    /// # Errors
    ///
    /// Returns [`MeteomaticsError::MissingCredential`] if the username or password is empty.
    /// Returns [`MeteomaticsError::InvalidDateRange`] if the date range is not a valid calendar period.
    /// Returns [`MeteomaticsError::InvalidBaseUrl`] if the base URL is not an http(s) URL.
    /// Returns [`MeteomaticsError::HttpClientBuild`] if the HTTP client cannot be initialised.
    #[builder]
    pub fn new<D: AnyDateRange>(
        credentials: Credentials,
        coordinates: Coordinates,
        date_range: D,
        frequency: Option<Frequency>,
        format: Option<OutputFormat>,
        #[builder(into)] base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, MeteomaticsError> {
        credentials.validate()?;
        let date_range = date_range
            .date_range()
            .ok_or(MeteomaticsError::InvalidDateRange)?;
        let base_url = normalize_base_url(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(MeteomaticsError::HttpClientBuild)?;

        Ok(Self {
            http,
            credentials,
            config: QueryConfig {
                base_url,
                coordinates,
                date_range,
                frequency: frequency.unwrap_or_default(),
                format: format.unwrap_or_default(),
            },
            timeout,
        })
    }

    /// Creates a client with default settings, reading credentials from the
    /// `METEO_USERNAME` and `METEO_PASSWORD` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`MeteomaticsError::MissingCredential`] naming the variable that is
    /// unset or empty. Nothing else is attempted in that case.
    pub fn from_env(
        coordinates: Coordinates,
        date_range: impl AnyDateRange,
    ) -> Result<Self, MeteomaticsError> {
        Self::from_credential_lookup(
            |key| std::env::var(key).ok(),
            DEFAULT_BASE_URL,
            coordinates,
            date_range,
        )
    }

    fn from_credential_lookup<F>(
        lookup: F,
        base_url: &str,
        coordinates: Coordinates,
        date_range: impl AnyDateRange,
    ) -> Result<Self, MeteomaticsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(lookup)?;
        Self::builder()
            .credentials(credentials)
            .coordinates(coordinates)
            .date_range(date_range)
            .base_url(base_url)
            .build()
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Describes the request for `metric` without sending it.
    pub fn request(&self, metric: Metric) -> RequestDescriptor {
        build_request(&self.config, metric)
    }

    /// The URL that would be requested for `metric`.
    pub fn build_request_url(&self, metric: Metric) -> String {
        self.request(metric).url
    }

    /// Sends a prepared request with Basic authentication and returns the raw response.
    ///
    /// The configured timeout covers the wait for the response headers only, so the
    /// body of a returned response stays readable however long the caller takes.
    ///
    /// # Errors
    ///
    /// Returns [`MeteomaticsError::NetworkRequest`] wrapping the transport error if
    /// the request could not be completed, or [`MeteomaticsError::Timeout`] if no
    /// response arrived in time. HTTP error statuses are not errors here.
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<Response, MeteomaticsError> {
        debug!("Requesting {} from {}", request.metric.name(), request.url);

        let send = self
            .http
            .get(&request.url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send();
        let sent = match self.timeout {
            Some(after) => tokio::time::timeout(after, send).await.map_err(|_| {
                warn!("Request for {} timed out after {:?}", request.metric.name(), after);
                MeteomaticsError::Timeout {
                    url: request.url.clone(),
                    after,
                }
            })?,
            None => send.await,
        };

        let response = sent.map_err(|e| {
            warn!("Request for {} failed: {}", request.metric.name(), e);
            MeteomaticsError::NetworkRequest {
                url: request.url.clone(),
                source: e,
            }
        })?;

        info!(
            "Received {} for {} from {}",
            response.status(),
            request.metric.name(),
            request.url
        );
        Ok(response)
    }

    /// Builds and sends the request for any metric.
    pub async fn fetch(&self, metric: Metric) -> Result<Response, MeteomaticsError> {
        let request = self.request(metric);
        self.execute(&request).await
    }

    /// Probability of snowfall over the date range.
    pub async fn snow_probability(&self) -> Result<Response, MeteomaticsError> {
        self.fetch(Metric::SnowProbability).await
    }

    /// Relative humidity at `elevation` meters.
    pub async fn humidity_prediction(&self, elevation: u32) -> Result<Response, MeteomaticsError> {
        self.fetch(Metric::RelativeHumidity { elevation }).await
    }

    /// Temperature in degrees Celsius at `elevation` meters.
    pub async fn temperature_prediction(
        &self,
        elevation: u32,
    ) -> Result<Response, MeteomaticsError> {
        self.fetch(Metric::Temperature { elevation }).await
    }

    /// Clear-sky solar radiation in W/m².
    pub async fn clear_solar_sky_prediction(&self) -> Result<Response, MeteomaticsError> {
        self.fetch(Metric::ClearSkyRadiation).await
    }

    /// Wind speed in km/h at `elevation` meters.
    pub async fn wind_speed_prediction(
        &self,
        elevation: u32,
    ) -> Result<Response, MeteomaticsError> {
        self.fetch(Metric::WindSpeed { elevation }).await
    }

    /// Pressure in hPa at `elevation` meters.
    pub async fn pressure_prediction(&self, elevation: u32) -> Result<Response, MeteomaticsError> {
        self.fetch(Metric::Pressure { elevation }).await
    }

    /// Requests all six metrics concurrently.
    ///
    /// The responses are ordered snow probability, humidity, temperature,
    /// clear-sky radiation, wind speed, pressure (see [`Metric::all`]).
    ///
    /// # Errors
    ///
    /// Fails as a whole with the first error encountered. The remaining requests
    /// are dropped and no partial results are returned; use
    /// [`MeteomaticsClient::all_settled`] to keep the successful ones.
    pub async fn all(&self, elevation: u32) -> Result<Vec<Response>, MeteomaticsError> {
        try_join_all(Metric::all(elevation).map(|metric| self.fetch(metric))).await
    }

    /// Requests all six metrics concurrently and reports each outcome separately,
    /// in the same order as [`MeteomaticsClient::all`].
    pub async fn all_settled(&self, elevation: u32) -> Vec<MetricResponse> {
        let outcomes = join_all(Metric::all(elevation).map(|metric| async move {
            MetricResponse {
                metric,
                result: self.fetch(metric).await,
            }
        }))
        .await;

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        if failed > 0 {
            warn!("{} of {} metric requests failed", failed, outcomes.len());
        }
        outcomes
    }
}
