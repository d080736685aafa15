// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Human friendly names for plot NFTs.
//!
//! A [`NameAllocator`] turns an opaque seed (the pool singleton puzzle hash of a plot NFT)
//! into a two word label such as "Orange Peafowl". Labels are stable for a seed and unique
//! across all seeds resolved by the same allocator.

#[macro_use]
extern crate tracing;

mod allocator;
pub mod casing;
mod config;
mod error;
mod generator;
mod label;
mod plot_nft;
mod registry;
mod seed;
pub mod vocabulary;

/// Types used in the public API
pub use crate::{
    allocator::{NameAllocator, SharedNameAllocator},
    config::{AllocatorConfig, DEFAULT_MAX_ATTEMPTS, MAX_ATTEMPTS_ENV, STYLE_ENV},
    error::{Error, Result},
    generator::candidate,
    label::Label,
    plot_nft::{
        plot_nft_name, PlotNft, PoolConfig, PoolSingletonState, PoolSingletonStatus, PoolState,
        PoolWalletStatus, WalletBalance,
    },
    registry::Registry,
    seed::Seed,
    vocabulary::LabelStyle,
};
