//! Outbound HTTP client with retry and exponential backoff.
//!
//! Every request is attempted up to `max_attempts` times. Between attempts
//! the client sleeps `initial_delay * multiplier^k`, so the defaults give a
//! 1s then 2s pause. There is no sleep after the final attempt. A single
//! pause never exceeds [`MAX_RETRY_DELAY`].

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, error, warn};

use crate::error::{Error, Result};
use crate::infrastructure::config::http::{HttpConfig, RetryConfig};

#[cfg(test)]
pub(crate) mod stub;

/// Upper bound on one pause between attempts.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

/// Backoff schedule derived from [`RetryConfig`].
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_delay: Duration,
    multiplier: f64,
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_attempts: u32, initial_delay: Duration, multiplier: f64) -> Self {
        let multiplier = if multiplier.is_finite() && multiplier >= 1.0 {
            multiplier
        } else {
            1.0
        };
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            multiplier,
        }
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay after failed attempt `attempt` (zero-based), or `None` when it
    /// was the last one.
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt + 1 >= self.max_attempts {
            return None;
        }
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let secs = self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent);
        let delay = Duration::try_from_secs_f64(secs).unwrap_or(MAX_RETRY_DELAY);
        Some(delay.min(MAX_RETRY_DELAY))
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_millis(config.initial_delay_ms),
            config.backoff_multiplier,
        )
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

/// HTTP client that retries failed requests.
///
/// Cheap to clone; the inner [`Client`] shares its connection pool.
#[derive(Debug, Clone)]
pub struct RetryingClient {
    client: Client,
    policy: RetryPolicy,
}

impl RetryingClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            policy: RetryPolicy::from(&config.retry),
        })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn with_client(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    #[must_use]
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// GET `url` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns the last error once every attempt has failed.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.execute(url, || self.client.get(url)).await
    }

    /// POST a JSON body to `url` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns the last error once every attempt has failed.
    pub async fn post_json<B, T>(&self, url: &str, headers: HeaderMap, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(url, || {
            self.client.post(url).headers(headers.clone()).json(body)
        })
        .await
    }

    async fn execute<T, F>(&self, url: &str, build: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            match send_once::<T>(build()).await {
                Ok(value) => {
                    debug!(url, attempt = attempt + 1, "Request succeeded");
                    return Ok(value);
                }
                Err(e) => match self.policy.delay_after(attempt) {
                    Some(delay) => {
                        warn!(
                            url,
                            attempt = attempt + 1,
                            max_attempts = self.policy.max_attempts,
                            retry_in_ms = delay.as_millis() as u64,
                            error = %e,
                            "Request failed, retrying"
                        );
                        sleep(delay).await;
                        attempt += 1;
                    }
                    None => {
                        error!(
                            url,
                            attempts = self.policy.max_attempts,
                            error = %e,
                            "Request failed after all attempts"
                        );
                        return Err(e);
                    }
                },
            }
        }
    }
}

async fn send_once<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Connection(format!(
            "unexpected status {status}: {}",
            body.chars().take(200).collect::<String>()
        )));
    }
    Ok(response.json::<T>().await?)
}
