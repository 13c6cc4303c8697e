//! Pure request construction: a query configuration plus a metric yields a
//! complete, self-contained request description.

use crate::types::coordinates::Coordinates;
use crate::types::date_range::DateRange;
use crate::types::format::OutputFormat;
use crate::types::frequency::Frequency;
use crate::types::metric::Metric;

/// Everything about a query session except the metric and the credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    /// Endpoint without a trailing slash.
    pub base_url: String,
    pub coordinates: Coordinates,
    pub date_range: DateRange,
    pub frequency: Frequency,
    pub format: OutputFormat,
}

/// One fully built request, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub metric: Metric,
    pub url: String,
}

/// Builds the request for `metric` under `config`.
///
/// The URL has the shape
/// `{base}/{start}Z--{end}Z:{frequency}/{parameter}/{lat},{lon}/{format}`
/// and depends on nothing but the two arguments.
pub fn build_request(config: &QueryConfig, metric: Metric) -> RequestDescriptor {
    let url = format!(
        "{}/{}:{}/{}/{}/{}",
        config.base_url,
        config.date_range,
        config.frequency,
        metric.parameter(),
        config.coordinates,
        config.format
    );
    RequestDescriptor { metric, url }
}
