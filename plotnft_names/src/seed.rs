// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt};

/// Opaque identity string a label is derived from, usually a hex encoded puzzle hash.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    /// Construct a new `Seed`.
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The string fed to the label generator on the given attempt.
    /// Attempt 0 uses the seed as is, retries append `-<attempt>`.
    pub fn salted(&self, attempt: u32) -> String {
        if attempt == 0 {
            self.0.clone()
        } else {
            format!("{}-{attempt}", self.0)
        }
    }
}

impl From<&str> for Seed {
    fn from(seed: &str) -> Self {
        Self(seed.to_string())
    }
}

impl From<String> for Seed {
    fn from(seed: String) -> Self {
        Self(seed)
    }
}

impl Borrow<str> for Seed {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Seed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Seed").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_attempt_is_not_salted() {
        let seed = Seed::from("b1715c3b");
        assert_eq!(seed.salted(0), "b1715c3b");
    }

    #[test]
    fn retries_append_the_counter() {
        let seed = Seed::from("b1715c3b");
        assert_eq!(seed.salted(1), "b1715c3b-1");
        assert_eq!(seed.salted(12), "b1715c3b-12");
    }

    #[test]
    fn serialises_as_a_plain_string() -> eyre::Result<()> {
        let seed = Seed::from("abc");
        assert_eq!(serde_json::to_string(&seed)?, "\"abc\"");
        Ok(())
    }
}
