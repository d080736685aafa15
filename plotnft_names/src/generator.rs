// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{
    vocabulary::{Picks, ADJECTIVES, ANIMALS, COLORS},
    Label, LabelStyle, Seed,
};

/// The candidate label for `seed` on the given attempt, ignoring any registry.
///
/// This is a pure function of `(seed, attempt, style)`: the salted seed is hashed with sha3 256
/// and the digest seeds a ChaCha20 stream, so the result is the same on every platform and run.
pub fn candidate(seed: &Seed, attempt: u32, style: LabelStyle) -> Label {
    let salt = seed.salted(attempt);
    let mut rng = ChaCha20Rng::from_seed(sha3_256(salt.as_bytes()));

    // always draw all three, in this order, so every style sees the same stream
    let picks = Picks {
        color: pick(&mut rng, COLORS),
        animal: pick(&mut rng, ANIMALS),
        adjective: pick(&mut rng, ADJECTIVES),
    };

    let (first, second) = style.select(&picks);
    Label::compose(first, second)
}

// Indices are drawn as `u32` so every target consumes the stream the same way.
fn pick<R: Rng>(rng: &mut R, words: &'static [&'static str]) -> &'static str {
    let len = u32::try_from(words.len()).unwrap_or(u32::MAX);
    words[rng.gen_range(0..len) as usize]
}

pub(crate) fn sha3_256(input: &[u8]) -> [u8; 32] {
    use tiny_keccak::{Hasher, Sha3};

    let mut sha3 = Sha3::v256();
    let mut output = [0; 32];
    sha3.update(input);
    sha3.finalize(&mut output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "b1715c3b64c2dc24d3c6127bd45f6a7e46d12a2e10a32821fc7112bf00d4ce72";
    const OTHER_SEED: &str = "c2715c3b64c2dc24d3c6127bd45f6a7e46d12a2e10a32821fc7112bf00d4ce72";

    #[test]
    fn sha3_matches_known_digest() {
        let expected = b"\
            \x64\x4b\xcc\x7e\x56\x43\x73\x04\x09\x99\xaa\xc8\x9e\x76\x22\xf3\
            \xca\x71\xfb\xa1\xd9\x72\xfd\x94\xa3\x1c\x3b\xfb\xf2\x4e\x39\x38\
        ";
        assert_eq!(sha3_256(b"hello world"), *expected);
    }

    #[test]
    fn candidate_is_deterministic() {
        let seed = Seed::from(SEED);
        let first = candidate(&seed, 0, LabelStyle::ColorAnimal);
        let second = candidate(&seed, 0, LabelStyle::ColorAnimal);
        assert_eq!(first, second);
    }

    #[test]
    fn candidate_matches_known_labels() {
        let seed = Seed::from(SEED);
        assert_eq!(
            candidate(&seed, 0, LabelStyle::ColorAnimal).as_str(),
            "Violet Alpaca"
        );
        assert_eq!(
            candidate(&seed, 1, LabelStyle::ColorAnimal).as_str(),
            "Teal Ostrich"
        );
        assert_eq!(
            candidate(&seed, 0, LabelStyle::AdjectiveAnimal).as_str(),
            "Distant Alpaca"
        );
        assert_eq!(
            candidate(&seed, 2, LabelStyle::AdjectiveColor).as_str(),
            "Giant Aquamarine"
        );

        let other = Seed::from(OTHER_SEED);
        assert_eq!(
            candidate(&other, 0, LabelStyle::ColorAnimal).as_str(),
            "Purple Chameleon"
        );
    }

    #[test]
    fn candidate_draws_from_the_style_vocabularies() {
        let seed = Seed::from(SEED);

        let label = candidate(&seed, 0, LabelStyle::ColorAnimal);
        let (color, animal) = label.words();
        assert!(COLORS.contains(&color.to_lowercase().as_str()));
        assert!(ANIMALS.contains(&animal.to_lowercase().as_str()));

        let label = candidate(&seed, 0, LabelStyle::AdjectiveColor);
        let (adjective, color) = label.words();
        assert!(ADJECTIVES.contains(&adjective.to_lowercase().as_str()));
        assert!(COLORS.contains(&color.to_lowercase().as_str()));
    }

    #[test]
    fn styles_share_the_same_draws() {
        let seed = Seed::from(SEED);
        let color_animal = candidate(&seed, 0, LabelStyle::ColorAnimal);
        let adjective_animal = candidate(&seed, 0, LabelStyle::AdjectiveAnimal);
        let adjective_color = candidate(&seed, 0, LabelStyle::AdjectiveColor);

        assert_eq!(color_animal.words().1, adjective_animal.words().1);
        assert_eq!(adjective_animal.words().0, adjective_color.words().0);
        assert_eq!(color_animal.words().0, adjective_color.words().1);
    }

    #[test]
    fn retries_explore_other_candidates() {
        let seed = Seed::from(SEED);
        let labels: std::collections::BTreeSet<_> = (0..20)
            .map(|attempt| candidate(&seed, attempt, LabelStyle::ColorAnimal))
            .collect();
        assert!(labels.len() > 10);
    }
}
