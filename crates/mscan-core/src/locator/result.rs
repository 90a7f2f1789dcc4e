//! Lookup outcome and progress events.

use crate::mirror::Mirror;
use crate::transport::FailureKind;
use serde::Serialize;

/// Outcome of one manifest lookup. Exactly one case per completed lookup.
///
/// "Not found" is a confirmed absence on both mirrors; "error" means the
/// primary could not give a definitive answer, so absence is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupResult {
    Found { download_url: String, mirror: Mirror },
    NotFound,
    Error { reason: String },
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found { .. })
    }

    /// Download URL when found.
    pub fn download_url(&self) -> Option<&str> {
        match self {
            LookupResult::Found { download_url, .. } => Some(download_url),
            _ => None,
        }
    }
}

/// Progress notification emitted while a lookup runs, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A request to `mirror` is about to be sent.
    Querying { mirror: Mirror },
    /// `mirror` answered with an HTTP status.
    Responded { mirror: Mirror, status: u32 },
    /// The request to `mirror` failed before a status arrived.
    Failed { mirror: Mirror, kind: FailureKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let found = LookupResult::Found {
            download_url: "https://example.com/1.zip".to_string(),
            mirror: Mirror::Secondary,
        };
        assert_eq!(
            serde_json::to_string(&found).unwrap(),
            r#"{"outcome":"found","download_url":"https://example.com/1.zip","mirror":"secondary"}"#
        );
        assert_eq!(
            serde_json::to_string(&LookupResult::NotFound).unwrap(),
            r#"{"outcome":"not_found"}"#
        );
        let err = LookupResult::Error {
            reason: "registry unavailable (HTTP 503)".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"outcome":"error","reason":"registry unavailable (HTTP 503)"}"#
        );
    }

    #[test]
    fn accessors() {
        let found = LookupResult::Found {
            download_url: "u".to_string(),
            mirror: Mirror::Primary,
        };
        assert!(found.is_found());
        assert_eq!(found.download_url(), Some("u"));
        assert!(!LookupResult::NotFound.is_found());
        assert_eq!(LookupResult::NotFound.download_url(), None);
    }
}
