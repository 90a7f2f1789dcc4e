//! libcurl-backed transport.

use super::{Method, ProbeRequest, Transport, TransportError};

/// Maximum redirects followed per request (mirrors redirect to CDNs).
const MAX_REDIRECTS: u32 = 10;

/// Blocking transport built on the curl crate.
///
/// A fresh easy handle is created per request; `timeout` bounds the whole
/// call and libcurl aborts the transfer when it fires. The handle (and with
/// it the timer) is dropped as soon as the call settles.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    user_agent: String,
}

impl CurlTransport {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl Transport for CurlTransport {
    fn send(&self, request: &ProbeRequest) -> Result<u32, TransportError> {
        let fail = |e: curl::Error| TransportError::from_curl(&request.url, &e);

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url).map_err(fail)?;
        match request.method {
            Method::Get => easy.get(true).map_err(fail)?,
            Method::Head => easy.nobody(true).map_err(fail)?,
        }
        easy.follow_location(true).map_err(fail)?;
        easy.max_redirections(MAX_REDIRECTS).map_err(fail)?;
        easy.useragent(&self.user_agent).map_err(fail)?;
        easy.timeout(request.timeout).map_err(fail)?;

        // Build curl list for custom headers (e.g. "Name: value").
        if !request.headers.is_empty() {
            let mut list = curl::easy::List::new();
            for (k, v) in &request.headers {
                list.append(&format!("{}: {}", k.trim(), v.trim()))
                    .map_err(fail)?;
            }
            easy.http_headers(list).map_err(fail)?;
        }

        {
            let mut transfer = easy.transfer();
            // Only the status matters; drop any body instead of echoing it to stdout.
            transfer.write_function(|data| Ok(data.len())).map_err(fail)?;
            transfer.perform().map_err(fail)?;
        }

        easy.response_code().map_err(fail)
    }
}
