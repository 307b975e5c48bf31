use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::feature::{describe_all, Feature};

/// Morphological analysis of a single word.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Morphology {
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub features: Vec<Feature>,
}

impl Morphology {
    /// `Case: Nom, Number: Plur`
    pub fn describe_features(&self) -> String {
        describe_all(&self.features)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.lemma.is_empty()
            && self.pos.is_empty()
            && self.features.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub source: String,
    pub translation: String,
}

/// One analyzed word as returned by the analysis service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,

    #[serde(default)]
    pub morphology: Morphology,

    #[serde(default)]
    pub translation: Translation,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, morphology: Morphology, translation: Translation) -> Self {
        Self {
            text: text.into(),
            morphology,
            translation,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// `true` when the surface form differs from its lemma, ignoring case.
    pub fn is_inflected(&self) -> bool {
        !self.morphology.lemma.is_empty()
            && self.text.to_lowercase() != self.morphology.lemma.to_lowercase()
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::from(String::from(text))
    }
}

impl From<&&str> for Token {
    fn from(text: &&str) -> Self {
        Token::from(*text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Recovered punctuation between analyzed words. Carries empty morphology
/// and translation so it serializes exactly like a [`Token`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SyntheticToken(Token);

impl SyntheticToken {
    #[inline]
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(Token::from(text.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0.text
    }

    #[inline]
    pub fn into_inner(self) -> Token {
        self.0
    }
}

/// Entry of an aligned sentence: either an input token, borrowed as is, or
/// a synthetic filler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DisplayToken<'t> {
    Word(&'t Token),
    Synthetic(SyntheticToken),
}

impl DisplayToken<'_> {
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            DisplayToken::Word(token) => token.as_str(),
            DisplayToken::Synthetic(token) => token.as_str(),
        }
    }

    #[inline]
    pub fn is_synthetic(&self) -> bool {
        matches!(self, DisplayToken::Synthetic(_))
    }

    #[inline]
    pub fn word(&self) -> Option<&Token> {
        match self {
            DisplayToken::Word(token) => Some(token),
            DisplayToken::Synthetic(_) => None,
        }
    }

    pub fn to_token(&self) -> Token {
        match self {
            DisplayToken::Word(token) => (*token).clone(),
            DisplayToken::Synthetic(token) => token.clone().into_inner(),
        }
    }
}

impl Display for DisplayToken<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Builds a `Vec<Token>` with empty morphology from string literals.
#[macro_export]
macro_rules! tokens {
    ( $( $token:expr ),* $(,)? ) => {{
        let tokens: Vec<$crate::token::Token> = vec![
            $( $crate::token::Token::from($token) ),*
        ];
        tokens
    }};
}
