use grammr::{
    analysis::{Analysis, AnalysisRequest},
    inflection::{InflectionTable, Inflections, InflectionsRequest},
    token::Token,
};
use tracing::info;

use crate::{client::BackendClient, config::Config, error::Error};

/// Fetches analyses and inflections and runs them through the core.
#[derive(Debug)]
pub struct GrammrFacade {
    pub client: BackendClient,
    pub config: Config,
}

impl GrammrFacade {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = BackendClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Requests a translation and analysis of `phrase`. Alignment is left to
    /// the caller, see [`Analysis::aligned_tokens`].
    pub async fn translate(&self, phrase: &str) -> Result<Analysis, Error> {
        if phrase.trim().is_empty() {
            return Err(Error::input("please enter some text to translate"));
        }

        let request = AnalysisRequest::new(
            phrase,
            &self.config.language_spoken,
            &self.config.language_learned,
        );
        let analysis = self.client.analyze(&request).await?;

        info!(
            tokens = analysis.analyzed_tokens.len(),
            translated = analysis.translated_phrase(),
            "received analysis"
        );

        Ok(analysis)
    }

    /// Requests every inflection of `token` and projects them.
    pub async fn inflect(&self, token: Token) -> Result<(Inflections, InflectionTable), Error> {
        let request = InflectionsRequest {
            token,
            language_code: self.config.language_learned.clone(),
        };
        let inflections = self.client.inflections(&request).await?;
        let table = inflections.table();

        info!(
            lemma = %inflections.lemma,
            part_of_speech = %inflections.part_of_speech,
            rows = table.len(),
            "received inflections"
        );

        Ok((inflections, table))
    }
}
