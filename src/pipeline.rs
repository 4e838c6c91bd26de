use log::info;
use rand::Rng;
use reqwest::blocking::Client;
use url::Url;

use crate::{
    compose::compose,
    error::PipelineError,
    extract::extract,
    fetch::fetch,
    interpret::interpret,
    publish::Publisher,
};

/// Turns the source document into a finished message, or fails before anything is emitted.
pub fn generate<R: Rng + ?Sized>(html: &str, current_year: i32, rng: &mut R) -> Result<String, PipelineError> {
    let record = extract(html, rng)?;
    let prediction = interpret(&record, current_year, rng)?;

    Ok(compose(&prediction, current_year, rng))
}

pub fn run<P, R>(
    client: &Client,
    source: &Url,
    current_year: i32,
    publisher: &mut P,
    rng: &mut R,
) -> Result<(), PipelineError>
    where P: Publisher + ?Sized,
          R: Rng + ?Sized,
{
    let html = fetch(client, source)?;
    let message = generate(&html, current_year, rng)?;

    info!("publishing: {}", message);
    publisher.publish(&message)
}
