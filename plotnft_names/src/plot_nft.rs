// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::{casing::to_snake_case_keys, Error, Label, NameAllocator, Result};

/// A plot NFT as reported by the wallet daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotNft {
    pub pool_state: PoolState,
    pub pool_wallet_status: PoolWalletStatus,
    #[serde(default)]
    pub wallet_balance: WalletBalance,
}

/// Balance of the pool wallet, in mojos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletBalance {
    pub wallet_id: u32,
    pub confirmed_wallet_balance: u64,
    pub unconfirmed_wallet_balance: u64,
    pub spendable_balance: u64,
    pub pending_change: u64,
    pub max_send_amount: u64,
    pub unspent_coin_count: u32,
    pub pending_coin_removal_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    /// Hex puzzle hash of the pool singleton, used as the naming seed.
    pub p2_singleton_puzzle_hash: String,
    pub pool_config: PoolConfig,
    #[serde(default)]
    pub current_points: u64,
    #[serde(default)]
    pub current_difficulty: Option<u64>,
    #[serde(default)]
    pub points_found_since_start: u64,
    #[serde(default)]
    pub points_acknowledged_since_start: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub launcher_id: String,
    #[serde(default)]
    pub pool_url: String,
    #[serde(default)]
    pub payout_instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolWalletStatus {
    pub launcher_id: String,
    pub wallet_id: u32,
    pub current: PoolSingletonState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSingletonState {
    pub state: PoolSingletonStatus,
    pub target_puzzle_hash: String,
    #[serde(default)]
    pub pool_url: Option<String>,
    #[serde(default)]
    pub relative_lock_height: u32,
}

/// Singleton state, encoded on the wire as 1, 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PoolSingletonStatus {
    SelfPooling,
    LeavingPool,
    FarmingToPool,
}

impl TryFrom<u8> for PoolSingletonStatus {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(PoolSingletonStatus::SelfPooling),
            2 => Ok(PoolSingletonStatus::LeavingPool),
            3 => Ok(PoolSingletonStatus::FarmingToPool),
            other => Err(format!("unknown pool singleton state {other}")),
        }
    }
}

impl From<PoolSingletonStatus> for u8 {
    fn from(status: PoolSingletonStatus) -> Self {
        match status {
            PoolSingletonStatus::SelfPooling => 1,
            PoolSingletonStatus::LeavingPool => 2,
            PoolSingletonStatus::FarmingToPool => 3,
        }
    }
}

impl fmt::Display for PoolSingletonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolSingletonStatus::SelfPooling => write!(f, "Self pooling"),
            PoolSingletonStatus::LeavingPool => write!(f, "Leaving pool"),
            PoolSingletonStatus::FarmingToPool => write!(f, "Farming to pool"),
        }
    }
}

impl PlotNft {
    /// Decode a record from an RPC payload, accepting either snake_case or camelCase keys.
    pub fn from_rpc_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(to_snake_case_keys(value))?)
    }

    /// The seed the display name is derived from.
    pub fn seed(&self) -> &str {
        &self.pool_state.p2_singleton_puzzle_hash
    }

    pub fn launcher_id(&self) -> &str {
        &self.pool_wallet_status.launcher_id
    }

    pub fn status(&self) -> PoolSingletonStatus {
        self.pool_wallet_status.current.state
    }

    pub fn is_self_pooling(&self) -> bool {
        self.status() == PoolSingletonStatus::SelfPooling
    }
}

/// The display name of a plot NFT.
pub fn plot_nft_name(allocator: &mut NameAllocator, nft: &PlotNft) -> Result<Label> {
    let seed = nft.seed();
    if seed.is_empty() {
        return Err(Error::MissingSeed);
    }
    allocator.resolve(seed)
}
