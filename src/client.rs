extern crate reqwest;

use std::time::Duration;

use grammr::{
    analysis::{Analysis, AnalysisRequest},
    inflection::{Inflections, InflectionsRequest},
};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::{config::Config, error::Error};

pub const TRANSLATION_PATH: &str = "/api/v1/translation";
pub const INFLECTION_PATH: &str = "/api/v1/inflection";

/// HTTP client of the analysis service.
#[derive(Clone, Debug)]
pub struct BackendClient {
    client: Client,
    config: Config,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(2).min(config.timeout()))
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<Analysis, Error> {
        self.post(TRANSLATION_PATH, request).await
    }

    pub async fn inflections(&self, request: &InflectionsRequest) -> Result<Inflections, Error> {
        self.post(INFLECTION_PATH, request).await
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let endpoint = self.config.endpoint(path);
        debug!(%endpoint, "sending request");

        let response = self.client.post(&endpoint).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(%endpoint, status = status.as_u16(), "backend rejected request");
            return Err(Error::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        Ok(response.json::<R>().await?)
    }
}
