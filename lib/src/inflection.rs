//! Inflection tables.
//!
//! [`project`] turns a flat list of inflection records into a sparse grammar
//! table: one row per value of the paradigm's primary feature (case for
//! nominals, person for verbs), one column per grammatical number.

use serde::{
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};
use tracing::debug;

use crate::{
    feature::{contains_all, Feature, FeatureKey, CASE, NUMBER, PERSON, PLURAL, SINGULAR},
    token::Token,
};

/// One realized wordform and the features that license it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inflection {
    pub lemma: String,
    pub inflected: String,

    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Request body of the inflection endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflectionsRequest {
    pub token: Token,
    pub language_code: String,
}

/// Response of the inflection endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inflections {
    pub lemma: String,

    #[serde(default)]
    pub part_of_speech: String,

    #[serde(default)]
    pub inflections: Vec<Inflection>,
}

impl Inflections {
    #[inline]
    pub fn table(&self) -> InflectionTable {
        project(&self.part_of_speech, &self.inflections)
    }
}

/// Row key feature type and its values, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paradigm {
    pub primary: &'static str,
    pub values: &'static [&'static str],
}

const NOMINAL: Paradigm = Paradigm {
    primary: CASE,
    values: &["NOM", "GEN", "DAT", "ACC", "ABL", "LOC"],
};

const VERBAL: Paradigm = Paradigm {
    primary: PERSON,
    values: &["FIRST", "SECOND", "THIRD"],
};

/// Parts of speech with a dedicated paradigm.
static PARADIGMS: &[(&str, &Paradigm)] = &[("NOUN", &NOMINAL), ("ADJ", &NOMINAL)];

/// Used for every part of speech missing from [`PARADIGMS`], unknown
/// and empty values included.
static FALLBACK: &Paradigm = &VERBAL;

impl Paradigm {
    pub fn for_part_of_speech(part_of_speech: &str) -> &'static Paradigm {
        match PARADIGMS.iter().find(|(pos, _)| *pos == part_of_speech) {
            Some((_, paradigm)) => *paradigm,
            None => {
                debug!(part_of_speech, "no dedicated paradigm, using person paradigm");
                FALLBACK
            }
        }
    }

    /// Form for `value` in the given grammatical number, empty if missing.
    fn cell(&self, inflections: &[Inflection], value: &str, number: &str) -> String {
        let required = [
            FeatureKey::new(self.primary, value),
            FeatureKey::new(NUMBER, number),
        ];

        find_inflection(inflections, &required)
            .map(|inflection| inflection.inflected.clone())
            .unwrap_or_default()
    }
}

/// First record, in input order, whose features contain every required key.
pub fn find_inflection<'a>(
    inflections: &'a [Inflection],
    required: &[FeatureKey<'_>],
) -> Option<&'a Inflection> {
    inflections
        .iter()
        .find(|inflection| contains_all(&inflection.features, required))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cells {
    pub singular: String,
    pub plural: String,
}

impl Cells {
    pub fn new<S: Into<String>, P: Into<String>>(singular: S, plural: P) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.singular.is_empty() && self.plural.is_empty()
    }
}

/// Rows keyed by primary feature value, in paradigm order. Never holds a
/// row whose cells are both empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InflectionTable {
    rows: Vec<(String, Cells)>,
}

impl InflectionTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Cells> {
        self.rows
            .iter()
            .find(|(value, _)| value == key)
            .map(|(_, cells)| cells)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(value, _)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cells)> {
        self.rows.iter().map(|(value, cells)| (value.as_str(), cells))
    }
}

impl<K: Into<String>> FromIterator<(K, Cells)> for InflectionTable {
    fn from_iter<I: IntoIterator<Item = (K, Cells)>>(iter: I) -> Self {
        let rows = iter
            .into_iter()
            .filter(|(_, cells)| !cells.is_empty())
            .map(|(key, cells)| (key.into(), cells))
            .collect();

        Self { rows }
    }
}

impl Serialize for InflectionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;

        for (value, cells) in &self.rows {
            map.serialize_entry(value, cells)?;
        }

        map.end()
    }
}

/// Projects `inflections` onto the paradigm of `part_of_speech`.
///
/// For every paradigm value the singular and plural cell hold the first
/// record carrying both `{primary: value}` and `{NUMBER: SING|PLUR}`.
/// Rows without any form are dropped. Never fails: missing data only makes
/// the table sparser.
pub fn project(part_of_speech: &str, inflections: &[Inflection]) -> InflectionTable {
    let paradigm = Paradigm::for_part_of_speech(part_of_speech);

    let table = paradigm
        .values
        .iter()
        .map(|&value| {
            let cells = Cells {
                singular: paradigm.cell(inflections, value, SINGULAR),
                plural: paradigm.cell(inflections, value, PLURAL),
            };

            (value, cells)
        })
        .collect::<InflectionTable>();

    debug!(
        part_of_speech,
        primary = paradigm.primary,
        records = inflections.len(),
        rows = table.len(),
        "projected inflection table"
    );

    table
}
