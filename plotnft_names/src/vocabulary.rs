// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Fixed word lists that labels are drawn from.
//!
//! Changing any list changes every generated label, so the lists are append only in spirit:
//! reordering or removing a word reshuffles names users have already seen.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

pub const COLORS: &[&str] = &[
    "amaranth", "amber", "amethyst", "apricot", "aqua", "aquamarine", "azure", "beige", "black",
    "blue", "blush", "bronze", "brown", "chocolate", "coffee", "copper", "coral", "crimson",
    "cyan", "emerald", "fuchsia", "gold", "gray", "green", "harlequin", "indigo", "ivory", "jade",
    "lavender", "lime", "magenta", "maroon", "moccasin", "olive", "orange", "peach", "pink",
    "plum", "purple", "red", "rose", "salmon", "sapphire", "scarlet", "silver", "tan", "teal",
    "tomato", "turquoise", "violet", "white", "yellow",
];

pub const ANIMALS: &[&str] = &[
    "aardvark", "albatross", "alligator", "alpaca", "anaconda", "anteater", "antelope",
    "armadillo", "baboon", "badger", "barracuda", "bat", "beaver", "bee", "bison", "bobcat",
    "buffalo", "butterfly", "camel", "capybara", "caribou", "cat", "chameleon", "cheetah",
    "chimpanzee", "chinchilla", "cobra", "condor", "cougar", "coyote", "crab", "crane", "crow",
    "deer", "dingo", "dolphin", "donkey", "dove", "dragonfly", "duck", "eagle", "eel", "elephant",
    "elk", "emu", "falcon", "ferret", "finch", "flamingo", "fox", "frog", "gazelle", "gecko",
    "gerbil", "gibbon", "giraffe", "gnu", "goat", "goose", "gorilla", "grasshopper", "grouse",
    "hamster", "hare", "hawk", "hedgehog", "heron", "hippopotamus", "hornet", "horse",
    "hummingbird", "hyena", "ibis", "iguana", "impala", "jackal", "jaguar", "jellyfish",
    "kangaroo", "kingfisher", "kiwi", "koala", "lemur", "leopard", "lion", "lizard", "llama",
    "lobster", "lynx", "macaw", "magpie", "manatee", "meerkat", "mink", "mole", "mongoose",
    "moose", "narwhal", "newt", "ocelot", "octopus", "opossum", "orca", "ostrich", "otter", "owl",
    "panda", "panther", "parrot", "peacock", "peafowl", "pelican", "penguin", "pheasant",
    "porcupine", "puffin", "puma", "quail", "rabbit", "raccoon", "raven", "reindeer",
    "rhinoceros", "salamander", "seahorse", "seal", "shark", "sheep", "skunk", "sloth", "snail",
    "sparrow", "squid", "squirrel", "starling", "stingray", "stork", "swan", "tapir", "tiger",
    "toucan", "turtle", "vulture", "walrus", "weasel", "whale", "wolf", "wombat", "woodpecker",
    "yak", "zebra",
];

pub const ADJECTIVES: &[&str] = &[
    "able", "absent", "active", "adorable", "agreeable", "amateur", "ancient", "angry", "anxious",
    "arctic", "artistic", "awkward", "bold", "brave", "bright", "busy", "calm", "careful",
    "cheerful", "clever", "cold", "colorful", "cosmic", "crazy", "curious", "dainty", "decent",
    "delightful", "distant", "dizzy", "eager", "early", "electric", "elegant", "enormous",
    "fancy", "fast", "fierce", "friendly", "funny", "gentle", "giant", "glad", "graceful",
    "grumpy", "happy", "hidden", "honest", "humble", "hungry", "icy", "jolly", "keen", "kind",
    "lazy", "little", "lively", "lucky", "magnificent", "mellow", "mighty", "modest", "noble",
    "odd", "patient", "polite", "proud", "quick", "quiet", "rapid", "rare", "roaring", "royal",
    "rustic", "shy", "silent", "sleepy", "smooth", "sneaky", "solar", "steady", "swift",
    "tender", "tiny", "tough", "tricky", "vast", "wandering", "wild", "wise", "witty", "young",
    "zealous",
];

/// One word drawn from each vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Picks {
    pub(crate) color: &'static str,
    pub(crate) animal: &'static str,
    pub(crate) adjective: &'static str,
}

/// Which two of the three vocabularies make up a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelStyle {
    /// "Orange Peafowl"
    #[default]
    ColorAnimal,
    /// "Sleepy Peafowl"
    AdjectiveAnimal,
    /// "Sleepy Orange"
    AdjectiveColor,
}

impl LabelStyle {
    pub fn parse_from_str(val: &str) -> Result<Self> {
        match val {
            "color-animal" => Ok(LabelStyle::ColorAnimal),
            "adjective-animal" => Ok(LabelStyle::AdjectiveAnimal),
            "adjective-color" => Ok(LabelStyle::AdjectiveColor),
            _ => Err(Error::InvalidConfig(format!(
                "unknown label style {val:?}, valid values are \"color-animal\", \
                 \"adjective-animal\" or \"adjective-color\""
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelStyle::ColorAnimal => "color-animal",
            LabelStyle::AdjectiveAnimal => "adjective-animal",
            LabelStyle::AdjectiveColor => "adjective-color",
        }
    }

    /// Number of distinct labels this style can produce.
    pub fn label_space(&self) -> usize {
        let (first, second) = self.vocabularies();
        first.len() * second.len()
    }

    fn vocabularies(&self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            LabelStyle::ColorAnimal => (COLORS, ANIMALS),
            LabelStyle::AdjectiveAnimal => (ADJECTIVES, ANIMALS),
            LabelStyle::AdjectiveColor => (ADJECTIVES, COLORS),
        }
    }

    pub(crate) fn select(&self, picks: &Picks) -> (&'static str, &'static str) {
        match self {
            LabelStyle::ColorAnimal => (picks.color, picks.animal),
            LabelStyle::AdjectiveAnimal => (picks.adjective, picks.animal),
            LabelStyle::AdjectiveColor => (picks.adjective, picks.color),
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn assert_well_formed(name: &str, words: &[&str]) {
        let unique: BTreeSet<_> = words.iter().collect();
        assert_eq!(unique.len(), words.len(), "{name} contains duplicates");
        for word in words {
            assert!(
                !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()),
                "{name} word {word:?} must be a single lowercase ascii word"
            );
        }
    }

    #[test]
    fn vocabularies_are_well_formed() {
        assert_well_formed("COLORS", COLORS);
        assert_well_formed("ANIMALS", ANIMALS);
        assert_well_formed("ADJECTIVES", ADJECTIVES);
    }

    #[test]
    fn style_names_round_trip() -> eyre::Result<()> {
        for style in [
            LabelStyle::ColorAnimal,
            LabelStyle::AdjectiveAnimal,
            LabelStyle::AdjectiveColor,
        ] {
            assert_eq!(LabelStyle::parse_from_str(style.as_str())?, style);
            assert_eq!(
                serde_json::to_string(&style)?,
                format!("\"{}\"", style.as_str())
            );
        }
        assert!(LabelStyle::parse_from_str("animal-color").is_err());
        Ok(())
    }

    #[test]
    fn label_space_is_the_product_of_both_vocabularies() {
        assert_eq!(
            LabelStyle::ColorAnimal.label_space(),
            COLORS.len() * ANIMALS.len()
        );
        assert_eq!(
            LabelStyle::AdjectiveColor.label_space(),
            ADJECTIVES.len() * COLORS.len()
        );
    }

    #[test]
    fn select_picks_the_configured_pair() {
        let picks = Picks {
            color: "orange",
            animal: "peafowl",
            adjective: "sleepy",
        };
        assert_eq!(LabelStyle::ColorAnimal.select(&picks), ("orange", "peafowl"));
        assert_eq!(
            LabelStyle::AdjectiveAnimal.select(&picks),
            ("sleepy", "peafowl")
        );
        assert_eq!(LabelStyle::AdjectiveColor.select(&picks), ("sleepy", "orange"));
    }
}
