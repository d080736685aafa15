// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use std::sync::{Arc, Mutex};

use crate::{candidate, AllocatorConfig, Error, Label, Registry, Result, Seed};

/// Assigns each seed a stable label that no other seed resolved by this allocator shares.
#[derive(Debug, Default, Clone)]
pub struct NameAllocator {
    config: AllocatorConfig,
    registry: Registry,
}

impl NameAllocator {
    /// Fails with [`Error::InvalidConfig`] if `config` does not validate.
    pub fn new(config: AllocatorConfig) -> Result<Self> {
        Self::with_registry(config, Registry::new())
    }

    /// Resume over an existing registry, e.g. one built up earlier in the session.
    pub fn with_registry(config: AllocatorConfig, registry: Registry) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, registry })
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn label_of(&self, seed: &str) -> Option<&Label> {
        self.registry.label_of(seed)
    }

    pub fn seed_of(&self, label: &Label) -> Option<&Seed> {
        self.registry.seed_of(label)
    }

    /// Number of distinct labels the configured style can produce.
    pub fn label_space(&self) -> usize {
        self.config.style.label_space()
    }

    /// The label for `seed`, assigning a new one on first sight.
    ///
    /// A seed seen before gets its earlier label back. Otherwise candidates are generated for
    /// attempt 0, 1, 2... until one is not held by another seed. Collisions are only checked
    /// against seeds already resolved, so the label a seed ends up with depends on which seeds
    /// were resolved before it, not on the seed alone.
    pub fn resolve(&mut self, seed: &str) -> Result<Label> {
        if let Some(label) = self.registry.label_of(seed) {
            trace!("Seed {seed} already labelled as {label}");
            return Ok(label.clone());
        }

        let seed = Seed::from(seed);
        for attempt in 0..self.config.max_attempts {
            let label = candidate(&seed, attempt, self.config.style);
            if self.registry.is_free_for(&label, &seed) {
                debug!("Assigned label {label} to seed {seed} on attempt {attempt}");
                self.registry.insert(label.clone(), seed)?;
                return Ok(label);
            }
            warn!(
                "Label {label} for seed {seed} is already taken, retrying with counter {}",
                attempt + 1
            );
        }

        error!(
            "Could not find a free label for seed {seed} within {} attempts ({} labels assigned)",
            self.config.max_attempts,
            self.registry.len()
        );
        Err(Error::LabelSpaceExhausted {
            seed,
            attempts: self.config.max_attempts,
        })
    }
}

/// A [`NameAllocator`] that can be shared across threads.
///
/// The lookup, generation and insert of a resolve all happen under one lock acquisition.
#[derive(Debug, Default, Clone)]
pub struct SharedNameAllocator(Arc<Mutex<NameAllocator>>);

impl SharedNameAllocator {
    pub fn new(config: AllocatorConfig) -> Result<Self> {
        NameAllocator::new(config).map(Self::from)
    }

    pub fn resolve(&self, seed: &str) -> Result<Label> {
        self.0
            .lock()
            .map_err(|_| Error::RegistryLockPoisoned)?
            .resolve(seed)
    }

    pub fn label_of(&self, seed: &str) -> Result<Option<Label>> {
        let allocator = self.0.lock().map_err(|_| Error::RegistryLockPoisoned)?;
        Ok(allocator.label_of(seed).cloned())
    }

    pub fn len(&self) -> Result<usize> {
        let allocator = self.0.lock().map_err(|_| Error::RegistryLockPoisoned)?;
        Ok(allocator.len())
    }

    /// A copy of the current registry.
    pub fn snapshot(&self) -> Result<Registry> {
        let allocator = self.0.lock().map_err(|_| Error::RegistryLockPoisoned)?;
        Ok(allocator.registry().clone())
    }
}

impl From<NameAllocator> for SharedNameAllocator {
    fn from(allocator: NameAllocator) -> Self {
        Self(Arc::new(Mutex::new(allocator)))
    }
}
