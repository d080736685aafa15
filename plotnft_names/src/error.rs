// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use thiserror::Error;

use crate::{Label, Seed};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// No free label was found for the seed within the allowed number of attempts
    #[error("Label space exhausted for seed {seed} after {attempts} attempts")]
    LabelSpaceExhausted {
        /// The seed being resolved
        seed: Seed,
        /// Number of candidates generated before giving up
        attempts: u32,
    },
    /// The label is already assigned to a different seed
    #[error("Label {label} is already assigned to seed {owner}")]
    LabelTaken {
        /// The conflicting label
        label: Label,
        /// The seed currently holding the label
        owner: Seed,
    },
    /// The seed already holds a different label
    #[error("Seed {seed} is already labelled as {label}")]
    SeedAlreadyLabelled {
        /// The conflicting seed
        seed: Seed,
        /// The label the seed currently holds
        label: Label,
    },
    #[error("Invalid label {0:?}, expected two capitalised words separated by a single space")]
    InvalidLabel(String),
    #[error("Invalid name allocator configuration: {0}")]
    InvalidConfig(String),
    /// The plot NFT record could not be decoded
    #[error("Could not deserialise plot NFT record: {0}")]
    Deserialisation(String),
    /// The plot NFT record carries no puzzle hash to derive a name from
    #[error("Plot NFT record has an empty p2 singleton puzzle hash")]
    MissingSeed,
    #[error("The shared name registry lock was poisoned")]
    RegistryLockPoisoned,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Deserialisation(err.to_string())
    }
}
