use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::client::QueryParams;

// We differentiate between persistent identifiers and
// database identifiers here. Users can supply either one as a
// string; numbers are treated as database ids, everything else
// as a persistent identifier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Identifier {
    PersistentId(String),
    Id(i64),
}

impl Identifier {
    /// Path segment addressing the object under `prefix`, e.g.
    /// `api/datasets/42` or `api/datasets/:persistentId`.
    pub(crate) fn path(&self, prefix: &str) -> String {
        match self {
            Identifier::PersistentId(_) => format!("{prefix}/:persistentId"),
            Identifier::Id(id) => format!("{prefix}/{id}"),
        }
    }

    /// The `persistentId` query parameter for persistent identifiers.
    pub(crate) fn query_params(&self) -> Option<QueryParams> {
        match self {
            Identifier::PersistentId(pid) => {
                Some(vec![("persistentId".to_string(), pid.clone())])
            }
            Identifier::Id(_) => None,
        }
    }
}

impl FromStr for Identifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(id) => Ok(Identifier::Id(id)),
            Err(_) if s.trim().is_empty() => Err("Identifier must not be empty".to_string()),
            Err(_) => Ok(Identifier::PersistentId(s.to_owned())),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::PersistentId(pid) => write!(f, "{}", pid),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::PersistentId(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the conversion of string literals to `Identifier` enum variants.
    ///
    /// A numeric string parses into an `Identifier::Id`, a DOI string into
    /// an `Identifier::PersistentId`.
    #[test]
    fn test_identifier_from_str() {
        let id = Identifier::from_str("123").unwrap();
        let pid = Identifier::from_str("doi:10.5072/FK2/ABC123").unwrap();

        assert_eq!(id, Identifier::Id(123));
        assert_eq!(
            pid,
            Identifier::PersistentId("doi:10.5072/FK2/ABC123".to_string())
        );
        assert!(Identifier::from_str(" ").is_err());
    }

    #[test]
    fn test_from_i64() {
        assert_eq!(Identifier::from(123), Identifier::Id(123));
    }

    #[test]
    fn test_path_and_query() {
        let pid = Identifier::from("doi:10.5072/FK2/ABC123");
        let id = Identifier::Id(42);

        assert_eq!(pid.path("api/datasets"), "api/datasets/:persistentId");
        assert_eq!(
            pid.query_params(),
            Some(vec![(
                "persistentId".to_string(),
                "doi:10.5072/FK2/ABC123".to_string()
            )])
        );
        assert_eq!(id.path("api/files"), "api/files/42");
        assert!(id.query_params().is_none());
    }
}
