use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::error::PipelineError;

/// Blocking client; the run is strictly sequential.
pub fn client(user_agent: &str) -> Result<Client, PipelineError> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(PipelineError::from)
}

pub fn fetch(client: &Client, url: &Url) -> Result<String, PipelineError> {
    debug!("fetching {}", url);

    let resp = client.get(url.clone()).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(PipelineError::Status(status));
    }

    let body = resp.text()?;
    debug!("fetched {} bytes", body.len());

    Ok(body)
}
