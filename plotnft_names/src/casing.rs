// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Key casing for wallet RPC payloads.
//!
//! The daemon speaks snake_case while the GUI layer works in camelCase. Only object keys are
//! rewritten; string values are left untouched.

use heck::{ToLowerCamelCase, ToSnakeCase};
use serde_json::Value;

/// Recursively rewrite every object key to snake_case.
pub fn to_snake_case_keys(value: Value) -> Value {
    rename_keys(value, &|key| key.to_snake_case())
}

/// Recursively rewrite every object key to camelCase.
pub fn to_camel_case_keys(value: Value) -> Value {
    rename_keys(value, &|key| key.to_lower_camel_case())
}

fn rename_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (rename(&key), rename_keys(value, rename)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rename_keys(item, rename))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn camel_case_keys_become_snake_case() {
        let value = json!({
            "poolState": {
                "p2SingletonPuzzleHash": "b1715c3b",
                "poolConfig": { "launcherId": "0xabc", "poolUrl": "https://pool.example" }
            },
            "walletBalance": 1
        });

        assert_eq!(
            to_snake_case_keys(value),
            json!({
                "pool_state": {
                    "p2_singleton_puzzle_hash": "b1715c3b",
                    "pool_config": { "launcher_id": "0xabc", "pool_url": "https://pool.example" }
                },
                "wallet_balance": 1
            })
        );
    }

    #[test]
    fn snake_case_keys_become_camel_case() {
        let value = json!({ "pool_wallet_status": { "relative_lock_height": 32 } });
        assert_eq!(
            to_camel_case_keys(value),
            json!({ "poolWalletStatus": { "relativeLockHeight": 32 } })
        );
    }

    #[test]
    fn arrays_are_walked_and_values_kept() {
        let value = json!([{ "launcherId": "keepThisValue" }, "plainString", 7, null]);
        assert_eq!(
            to_snake_case_keys(value),
            json!([{ "launcher_id": "keepThisValue" }, "plainString", 7, null])
        );
    }

    #[test]
    fn already_snake_case_is_unchanged() {
        let value = json!({ "launcher_id": "0xabc", "wallet_id": 2 });
        assert_eq!(to_snake_case_keys(value.clone()), value);
    }
}
