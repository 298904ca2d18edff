use std::time::Duration;

use actix_web::Either;
use serde::de::DeserializeOwned;

use crate::cache::{RefVal, CACHE};

// Freshness window requested from the remote api, 24h.
pub const REVALIDATE: Duration = Duration::from_secs(86_400);

pub fn pokemon_url(id: &str) -> String {
    format!("https://pokeapi.co/api/v2/pokemon/{id}")
}

pub async fn get_json<T, E>(
    req_client: &reqwest::Client,
    url: &str,
    max_age: Duration,
    on_error: impl Fn(reqwest::Error) -> E,
) -> Result<RefVal<T>, E>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let entry = CACHE.entry::<T>(url.to_string(), max_age).await;
    let mut data_lock = match entry.get_or_write_lock().await {
        Either::Left(data) => return Ok(data),
        Either::Right(write_lock) => write_lock,
    };

    let response = req_client.get(url).send().await;
    match response.and_then(reqwest::Response::error_for_status) {
        Ok(res) => match res.json::<T>().await {
            Ok(data) => {
                data_lock.set(data);
                Ok(RefVal(data_lock.into_read()))
            }
            Err(error) => {
                tracing::warn!("Failed to decode response from {url}: {error}");
                Err(on_error(error))
            }
        },
        Err(error) => {
            tracing::warn!("Request to {url} failed: {error}");
            Err(on_error(error))
        }
    }
}
