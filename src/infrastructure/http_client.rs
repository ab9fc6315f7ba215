use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the shared client used by every provider adapter.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}
