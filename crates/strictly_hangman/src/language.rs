//! Languages with a bundled word list.

use serde::{Deserialize, Serialize};

/// A language a random word can be drawn from.
///
/// Serialized as `ENG` / `GER`, which is also the value of the HTTP `lang`
/// query parameter.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Language {
    /// English (USA).
    #[default]
    Eng,
    /// German (Germany).
    Ger,
}

impl Language {
    /// Locale code, which is also the stem of the dictionary file.
    pub fn locale(self) -> &'static str {
        match self {
            Language::Eng => "en_US",
            Language::Ger => "de_DE",
        }
    }

    /// Human-readable name, as shown to console players.
    pub fn name(self) -> &'static str {
        match self {
            Language::Eng => "ENGLISH",
            Language::Ger => "GERMAN",
        }
    }

    /// File name of this language's word list (`<locale>.dict`).
    pub fn dictionary_file_name(self) -> String {
        format!("{}.dict", self.locale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ENG".parse::<Language>().ok(), Some(Language::Eng));
        assert_eq!("ger".parse::<Language>().ok(), Some(Language::Ger));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_dictionary_file_names() {
        let names: Vec<String> = Language::iter().map(Language::dictionary_file_name).collect();
        assert_eq!(names, ["en_US.dict", "de_DE.dict"]);
    }
}
