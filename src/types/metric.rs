//! The weather metrics that can be requested and their provider parameter tokens.

use std::fmt;

/// One of the six supported weather metrics.
///
/// Metrics sampled at a height carry their elevation in meters. The parameter
/// token sent to the provider is available through [`Metric::parameter`] or
/// `Display`.
///
/// # Examples
///
/// ```
/// use meteomatics::Metric;
///
/// assert_eq!(Metric::Temperature { elevation: 1500 }.parameter(), "t_1500m:C");
/// assert_eq!(Metric::SnowProbability.parameter(), "prob_snowfall:p");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Probability of snowfall, in percent.
    SnowProbability,
    /// Relative humidity at an elevation, in percent.
    RelativeHumidity { elevation: u32 },
    /// Air temperature at an elevation, in degrees Celsius.
    Temperature { elevation: u32 },
    /// Clear-sky solar radiation, in W/m².
    ClearSkyRadiation,
    /// Wind speed at an elevation, in km/h.
    WindSpeed { elevation: u32 },
    /// Pressure at an elevation, in hPa.
    Pressure { elevation: u32 },
}

impl Metric {
    /// Every metric, in the order [`crate::MeteomaticsClient::all`] returns them.
    pub fn all(elevation: u32) -> [Metric; 6] {
        [
            Metric::SnowProbability,
            Metric::RelativeHumidity { elevation },
            Metric::Temperature { elevation },
            Metric::ClearSkyRadiation,
            Metric::WindSpeed { elevation },
            Metric::Pressure { elevation },
        ]
    }

    /// The provider parameter token for this metric.
    pub fn parameter(&self) -> String {
        match self {
            Metric::SnowProbability => "prob_snowfall:p".to_string(),
            Metric::RelativeHumidity { elevation } => {
                format!("relative_humidity_{}m:p", elevation)
            }
            Metric::Temperature { elevation } => format!("t_{}m:C", elevation),
            Metric::ClearSkyRadiation => "clear_sky_rad:W".to_string(),
            Metric::WindSpeed { elevation } => format!("wind_speed_{}m:kmh", elevation),
            Metric::Pressure { elevation } => format!("pressure_{}m:hPa", elevation),
        }
    }

    /// Short human-readable name, used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::SnowProbability => "snow probability",
            Metric::RelativeHumidity { .. } => "relative humidity",
            Metric::Temperature { .. } => "temperature",
            Metric::ClearSkyRadiation => "clear-sky radiation",
            Metric::WindSpeed { .. } => "wind speed",
            Metric::Pressure { .. } => "pressure",
        }
    }

    pub fn elevation(&self) -> Option<u32> {
        match self {
            Metric::SnowProbability | Metric::ClearSkyRadiation => None,
            Metric::RelativeHumidity { elevation }
            | Metric::Temperature { elevation }
            | Metric::WindSpeed { elevation }
            | Metric::Pressure { elevation } => Some(*elevation),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parameter())
    }
}
