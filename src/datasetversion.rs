use std::fmt::Display;
use std::str::FromStr;

/// Represents different versions of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetVersion {
    /// The latest version of the dataset.
    Latest,
    /// The latest published version of the dataset.
    LatestPublished,
    /// The draft version of the dataset.
    Draft,
    /// A specific version of the dataset, e.g. `1.0`.
    Version(String),
}

impl FromStr for DatasetVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches(':') {
            "latest" => Ok(DatasetVersion::Latest),
            "draft" => Ok(DatasetVersion::Draft),
            "latest-published" => Ok(DatasetVersion::LatestPublished),
            "" => Err("Dataset version must not be empty".to_string()),
            other => Ok(DatasetVersion::Version(other.to_string())),
        }
    }
}

impl Display for DatasetVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetVersion::Latest => write!(f, ":latest"),
            DatasetVersion::Draft => write!(f, ":draft"),
            DatasetVersion::LatestPublished => write!(f, ":latest-published"),
            DatasetVersion::Version(v) => write!(f, "{v}"),
        }
    }
}

/// Determines the version of the dataset to fetch.
///
/// # Arguments
///
/// * `version` - The requested version, if any.
/// * `has_api_token` - Whether the client is authenticated. Anonymous users cannot see drafts.
///
/// # Returns
///
/// The requested version, or `:draft` for authenticated and `:latest` for anonymous clients.
pub fn determine_version(version: Option<&DatasetVersion>, has_api_token: bool) -> DatasetVersion {
    match version {
        Some(v) => v.clone(),
        None if has_api_token => DatasetVersion::Draft,
        None => DatasetVersion::Latest,
    }
}

/// How publishing a dataset bumps its version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionType {
    #[default]
    Major,
    Minor,
    /// Overwrites the current published version. Superusers only.
    UpdateCurrent,
}

impl VersionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionType::Major => "major",
            VersionType::Minor => "minor",
            VersionType::UpdateCurrent => "updatecurrent",
        }
    }
}

impl FromStr for VersionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(VersionType::Major),
            "minor" => Ok(VersionType::Minor),
            "updatecurrent" | "update-current" => Ok(VersionType::UpdateCurrent),
            _ => Err(format!("Invalid version type: {}", s)),
        }
    }
}

impl Display for VersionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
