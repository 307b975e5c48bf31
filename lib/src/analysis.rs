//! Wire types of the analysis endpoint.

use serde::{Deserialize, Serialize};

use crate::{
    align::align,
    error::AlignError,
    token::{DisplayToken, Token},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub phrase: String,
    pub user_language_spoken: String,
    pub user_language_learned: String,
    pub perform_semantic_translation: bool,
}

impl AnalysisRequest {
    pub fn new<P, S, L>(phrase: P, spoken: S, learned: L) -> Self
    where
        P: Into<String>,
        S: Into<String>,
        L: Into<String>,
    {
        Self {
            phrase: phrase.into(),
            user_language_spoken: spoken.into(),
            user_language_learned: learned.into(),
            perform_semantic_translation: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTranslation {
    pub source_phrase: String,
    pub translated_phrase: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub source_phrase: String,
    pub semantic_translation: SemanticTranslation,

    #[serde(default)]
    pub analyzed_tokens: Vec<Token>,
}

impl Analysis {
    #[inline]
    pub fn translated_phrase(&self) -> &str {
        &self.semantic_translation.translated_phrase
    }

    /// Analyzed tokens placed back into the translated phrase.
    pub fn aligned_tokens(&self) -> Result<Vec<DisplayToken<'_>>, AlignError> {
        align(self.translated_phrase(), &self.analyzed_tokens)
    }

    /// Replaces the analyzed tokens with their aligned, punctuated sequence.
    pub fn into_aligned(mut self) -> Result<Self, AlignError> {
        let aligned = self
            .aligned_tokens()?
            .iter()
            .map(DisplayToken::to_token)
            .collect();

        self.analyzed_tokens = aligned;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Analysis, AnalysisRequest};

    const RESPONSE: &str = r#"{
        "sourcePhrase": "wie geht es dir?",
        "semanticTranslation": {
            "sourcePhrase": "wie geht es dir?",
            "translatedPhrase": "Как дела?"
        },
        "analyzedTokens": [
            {
                "text": "дела",
                "translation": {"source": "дела", "translation": "Wie geht's?"},
                "morphology": {
                    "text": "дела",
                    "lemma": "дело",
                    "pos": "NOUN",
                    "features": [
                        {"type": "CASE", "value": "NOM", "enumValue": "NOM"},
                        {"type": "NUMBER", "value": "PLUR", "enumValue": "PLUR"}
                    ]
                }
            },
            {
                "text": "Как",
                "translation": {"source": "как", "translation": "wie"},
                "morphology": {"text": "Как", "lemma": "как", "features": [], "pos": "SCONJ"}
            }
        ]
    }"#;

    #[test]
    fn test_analysis_aligned_tokens() {
        let analysis: Analysis = serde_json::from_str(RESPONSE).unwrap();
        let aligned = analysis.aligned_tokens().unwrap();

        let texts = aligned.iter().map(|t| t.text()).collect::<Vec<_>>();
        assert_eq!(texts, ["Как", "дела", "?"]);
        assert_eq!(aligned[1].word().unwrap().morphology.lemma, "дело");
    }

    #[test]
    fn test_analysis_into_aligned() {
        let analysis: Analysis = serde_json::from_str(RESPONSE).unwrap();
        let aligned = analysis.into_aligned().unwrap();

        assert_eq!(aligned.analyzed_tokens.len(), 3);
        assert_eq!(aligned.analyzed_tokens[0].translation.translation, "wie");
        assert_eq!(aligned.analyzed_tokens[2].text, "?");
        assert!(aligned.analyzed_tokens[2].morphology.is_empty());
    }

    #[test]
    fn test_analysis_request_serializes_camel_case() {
        let request = AnalysisRequest::new("How are you?", "en", "ru");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["phrase"], "How are you?");
        assert_eq!(json["userLanguageSpoken"], "en");
        assert_eq!(json["userLanguageLearned"], "ru");
        assert_eq!(json["performSemanticTranslation"], true);
    }
}
