// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use std::collections::{BTreeMap, HashMap};

use crate::{Error, Label, Result, Seed};

/// Bidirectional label <-> seed mapping.
///
/// Grows monotonically: entries are never removed or reassigned, so a label held by one seed
/// can never be handed to another.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    by_label: BTreeMap<Label, Seed>,
    by_seed: HashMap<Seed, Label>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The label previously assigned to `seed`.
    pub fn label_of(&self, seed: &str) -> Option<&Label> {
        self.by_seed.get(seed)
    }

    /// The seed holding `label`.
    pub fn seed_of(&self, label: &Label) -> Option<&Seed> {
        self.by_label.get(label)
    }

    /// Whether `label` can be given to `seed`: it is unassigned or already belongs to `seed`.
    pub fn is_free_for(&self, label: &Label, seed: &Seed) -> bool {
        match self.by_label.get(label) {
            Some(owner) => owner == seed,
            None => true,
        }
    }

    /// Record `label -> seed`.
    ///
    /// Re-inserting an existing pair is a no-op. Errors if the label belongs to another seed
    /// or the seed already holds another label.
    pub fn insert(&mut self, label: Label, seed: Seed) -> Result<()> {
        if let Some(owner) = self.by_label.get(&label) {
            if owner == &seed {
                return Ok(());
            }
            return Err(Error::LabelTaken {
                label,
                owner: owner.clone(),
            });
        }
        if let Some(existing) = self.by_seed.get(&seed) {
            return Err(Error::SeedAlreadyLabelled {
                seed,
                label: existing.clone(),
            });
        }

        let _ = self.by_seed.insert(seed.clone(), label.clone());
        let _ = self.by_label.insert(label, seed);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    /// Entries ordered by label.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, &Seed)> {
        self.by_label.iter()
    }
}
