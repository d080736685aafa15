// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::Error;

/// A two word display name, e.g. "Orange Peafowl".
///
/// Always two capitalised ASCII words joined by a single space.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Build a label from two lowercase vocabulary words.
    pub(crate) fn compose(first: &str, second: &str) -> Self {
        Self(format!("{} {}", capitalise(first), capitalise(second)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two words of the label.
    pub fn words(&self) -> (&str, &str) {
        self.0.split_once(' ').unwrap_or((&self.0, ""))
    }
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_capitalised_word(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_lowercase())
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(' ') {
            Some((first, second)) if is_capitalised_word(first) && is_capitalised_word(second) => {
                Ok(Self(s.to_string()))
            }
            _ => Err(Error::InvalidLabel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Label {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Label").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_capitalises_both_words() {
        let label = Label::compose("orange", "peafowl");
        assert_eq!(label.as_str(), "Orange Peafowl");
        assert_eq!(label.words(), ("Orange", "Peafowl"));
    }

    #[test]
    fn parse_accepts_two_capitalised_words() -> eyre::Result<()> {
        let label: Label = "Amber Walrus".parse()?;
        assert_eq!(label, Label::compose("amber", "walrus"));
        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_labels() {
        for bad in [
            "",
            "Amber",
            "amber Walrus",
            "Amber walrus",
            "Amber  Walrus",
            "Amber Walrus Three",
            " Amber Walrus",
            "Amber Wal-rus",
            "AMBER Walrus",
        ] {
            assert_eq!(
                bad.parse::<Label>(),
                Err(Error::InvalidLabel(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn deserialising_validates_the_label() {
        assert!(serde_json::from_str::<Label>("\"Teal Otter\"").is_ok());
        assert!(serde_json::from_str::<Label>("\"teal otter\"").is_err());
    }
}
