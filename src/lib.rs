mod credentials;
mod error;
mod meteomatics;
mod request;
mod types;
mod utils;

pub use credentials::{Credentials, PASSWORD_ENV, USERNAME_ENV};
pub use error::MeteomaticsError;
pub use meteomatics::*;
pub use request::{build_request, QueryConfig, RequestDescriptor};

pub use types::coordinates::Coordinates;
pub use types::date_range::{AnyDateRange, DateRange, Month, Year};
pub use types::format::OutputFormat;
pub use types::frequency::{Frequency, ParseFrequencyError};
pub use types::metric::Metric;
