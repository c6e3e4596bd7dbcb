use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    client::{evaluate_response, BaseClient},
    error::{ApiError, ModelError},
    request::RequestType,
    response::Response,
};

/// The object counted by a metrics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsKind {
    Dataverses,
    Datasets,
    Files,
    Downloads,
}

impl MetricsKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricsKind::Dataverses => "dataverses",
            MetricsKind::Datasets => "datasets",
            MetricsKind::Files => "files",
            MetricsKind::Downloads => "downloads",
        }
    }
}

impl FromStr for MetricsKind {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "dataverses" => Ok(MetricsKind::Dataverses),
            "datasets" => Ok(MetricsKind::Datasets),
            "files" => Ok(MetricsKind::Files),
            "downloads" => Ok(MetricsKind::Downloads),
            _ => Err(format!("Invalid metrics kind: {}", input)),
        }
    }
}

impl fmt::Display for MetricsKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsCount {
    pub count: u64,
}

/// Total number of published objects of `kind`.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `kind` - What to count.
pub async fn metrics_total(
    client: &BaseClient,
    kind: MetricsKind,
) -> Result<Response<MetricsCount>, ApiError> {
    let url = format!("api/info/metrics/{kind}");
    fetch_count(client, &url).await
}

/// Number of objects of `kind` up to the end of `month`.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `kind` - What to count.
/// * `month` - A month in `YYYY-MM` form.
///
/// # Errors
///
/// A malformed `month` is rejected with [`ModelError::Misuse`] before any
/// request is sent.
pub async fn metrics_to_month(
    client: &BaseClient,
    kind: MetricsKind,
    month: &str,
) -> Result<Response<MetricsCount>, ApiError> {
    check_month(month)?;

    let url = format!("api/info/metrics/{kind}/toMonth/{month}");
    fetch_count(client, &url).await
}

/// Number of objects of `kind` added during the last `days` days.
pub async fn metrics_past_days(
    client: &BaseClient,
    kind: MetricsKind,
    days: u32,
) -> Result<Response<MetricsCount>, ApiError> {
    let url = format!("api/info/metrics/{kind}/pastDays/{days}");
    fetch_count(client, &url).await
}

async fn fetch_count(client: &BaseClient, url: &str) -> Result<Response<MetricsCount>, ApiError> {
    let context = RequestType::Plain;
    let response = client.get(url, None, context, None).await;

    evaluate_response::<MetricsCount>(response).await
}

fn check_month(month: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::misuse(format!("'{month}' is not a month in YYYY-MM form"));

    let (year, number) = month.split_once('-').ok_or_else(invalid)?;
    let digits = |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());

    if !digits(year, 4) || !digits(number, 2) {
        return Err(invalid());
    }

    match number.parse::<u8>() {
        Ok(1..=12) => Ok(()),
        _ => Err(invalid()),
    }
}
