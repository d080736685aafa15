// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use serde::{Deserialize, Serialize};

use crate::{Error, LabelStyle, Result};

/// Candidates tried per seed before giving up with `LabelSpaceExhausted`.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1_000;

/// Env variable overriding `max_attempts`.
pub const MAX_ATTEMPTS_ENV: &str = "PLOTNFT_NAMES_MAX_ATTEMPTS";

/// Env variable overriding `style`, e.g. `adjective-animal`.
pub const STYLE_ENV: &str = "PLOTNFT_NAMES_STYLE";

/// Configuration for a [`crate::NameAllocator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AllocatorConfig {
    /// Upper bound on generated candidates per seed, counting the unsalted first attempt.
    pub max_attempts: u32,
    /// Which vocabularies labels are composed from.
    pub style: LabelStyle,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            style: LabelStyle::default(),
        }
    }
}

impl AllocatorConfig {
    /// Sets the maximum number of candidates per seed
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the label style
    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    /// The default config with any `PLOTNFT_NAMES_*` env overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by env variable name.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup(MAX_ATTEMPTS_ENV) {
            self.max_attempts = value.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!(
                    "{MAX_ATTEMPTS_ENV} must be a positive integer, got {value:?}"
                ))
            })?;
        }
        if let Some(value) = lookup(STYLE_ENV) {
            self.style = LabelStyle::parse_from_str(value.trim())?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
