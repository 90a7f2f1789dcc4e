//! Terminal readout: the line-oriented scan transcript.

use mscan_core::transport::FailureKind;
use mscan_core::{AppId, LookupResult, Mirror, ProbeStatus, ScanEvent};

const INDENT: &str = "      └─";

pub fn banner(id: &AppId) -> Vec<String> {
    vec![
        "┌─ mscan manifest scanner".to_string(),
        format!("│ Scanning App ID: {}", id),
        "└─ Initializing...".to_string(),
        String::new(),
    ]
}

pub fn event_lines(event: &ScanEvent) -> Vec<String> {
    match *event {
        ScanEvent::Querying { mirror } => vec![
            format!("[{}/2] Testing {}", mirror.position(), mirror),
            format!("{} Querying...", INDENT),
        ],
        ScanEvent::Responded { status, .. } if (200..300).contains(&status) => {
            vec![format!("{} ✓ SUCCESS", INDENT), String::new()]
        }
        ScanEvent::Responded {
            mirror: Mirror::Primary,
            status: 404,
        } => vec![format!("{} ✗ NOT FOUND (404)", INDENT), String::new()],
        ScanEvent::Responded {
            mirror: Mirror::Primary,
            status,
        } => vec![format!("{} ✗ HTTP {}", INDENT, status), String::new()],
        ScanEvent::Responded {
            mirror: Mirror::Secondary,
            ..
        } => vec![format!("{} ✗ NOT FOUND", INDENT), String::new()],
        ScanEvent::Failed {
            kind: FailureKind::Timeout,
            ..
        } => vec![format!("{} ✗ TIMED OUT", INDENT), String::new()],
        ScanEvent::Failed { .. } => vec![format!("{} ✗ UNREACHABLE", INDENT), String::new()],
    }
}

pub fn result_lines(id: &AppId, result: &LookupResult) -> Vec<String> {
    match result {
        LookupResult::Found { download_url, .. } => vec![
            "[RESULT] Manifest found".to_string(),
            "[STATUS] Ready for download".to_string(),
            format!("[URL] {}", download_url),
        ],
        LookupResult::NotFound => vec![
            "[RESULT] Manifest not available".to_string(),
            format!("[STATUS] App ID {} has no manifest", id),
        ],
        LookupResult::Error { reason } => vec![
            "[ERROR] Connection failed".to_string(),
            format!("[STATUS] Unable to reach servers ({})", reason),
        ],
    }
}

pub fn status_line(status: ProbeStatus) -> String {
    match status {
        ProbeStatus::Online => "● Primary mirror Online".to_string(),
        ProbeStatus::Offline => "○ Primary mirror Offline".to_string(),
    }
}

pub fn emit(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_the_id() {
        let lines = banner(&AppId::from(431960));
        assert_eq!(lines[1], "│ Scanning App ID: 431960");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn querying_shows_position() {
        let lines = event_lines(&ScanEvent::Querying {
            mirror: Mirror::Secondary,
        });
        assert_eq!(lines[0], "[2/2] Testing Server 2");
    }

    #[test]
    fn responses_render_by_mirror_and_status() {
        let ok = event_lines(&ScanEvent::Responded {
            mirror: Mirror::Secondary,
            status: 200,
        });
        assert!(ok[0].ends_with("✓ SUCCESS"));

        let primary_404 = event_lines(&ScanEvent::Responded {
            mirror: Mirror::Primary,
            status: 404,
        });
        assert!(primary_404[0].ends_with("✗ NOT FOUND (404)"));

        let primary_503 = event_lines(&ScanEvent::Responded {
            mirror: Mirror::Primary,
            status: 503,
        });
        assert!(primary_503[0].ends_with("✗ HTTP 503"));

        let secondary_403 = event_lines(&ScanEvent::Responded {
            mirror: Mirror::Secondary,
            status: 403,
        });
        assert!(secondary_403[0].ends_with("✗ NOT FOUND"));
    }

    #[test]
    fn failures_render_by_kind() {
        let timeout = event_lines(&ScanEvent::Failed {
            mirror: Mirror::Primary,
            kind: FailureKind::Timeout,
        });
        assert!(timeout[0].ends_with("TIMED OUT"));
        let refused = event_lines(&ScanEvent::Failed {
            mirror: Mirror::Primary,
            kind: FailureKind::Connection,
        });
        assert!(refused[0].ends_with("UNREACHABLE"));
    }

    #[test]
    fn result_lines_per_outcome() {
        let id = AppId::from(999999999);
        let found = result_lines(
            &id,
            &LookupResult::Found {
                download_url: "https://x/1.zip".to_string(),
                mirror: Mirror::Primary,
            },
        );
        assert_eq!(found[2], "[URL] https://x/1.zip");

        let missing = result_lines(&id, &LookupResult::NotFound);
        assert_eq!(missing[1], "[STATUS] App ID 999999999 has no manifest");

        let err = result_lines(
            &id,
            &LookupResult::Error {
                reason: "registry unavailable (HTTP 503)".to_string(),
            },
        );
        assert_eq!(err[0], "[ERROR] Connection failed");
        assert!(err[1].contains("HTTP 503"));
    }

    #[test]
    fn status_lines() {
        assert!(status_line(ProbeStatus::Online).ends_with("Online"));
        assert!(status_line(ProbeStatus::Offline).ends_with("Offline"));
    }
}
