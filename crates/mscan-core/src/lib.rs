pub mod config;
pub mod logging;

pub mod app_id;
pub mod artwork;
pub mod locator;
pub mod mirror;
pub mod status;
pub mod transport;

pub use app_id::{AppId, AppIdError};
pub use locator::{LookupResult, ManifestLocator, ScanEvent};
pub use mirror::{Mirror, MirrorEndpoints};
pub use status::{ProbeStatus, StatusProber};
