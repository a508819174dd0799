use rand::{rngs::StdRng, Rng, SeedableRng};

const COUNTS: [usize; 3] = [6, 8, 12];
const MAX_CARD: u8 = 5;

// Seed for the empty path, which would otherwise divide by zero below.
const DEFAULT_SEED: u64 = 0;

/// Sum of `codepoint % n` over the path's code points, `n` being their count.
fn seed(path: &str) -> u64 {
    let total = path.chars().count() as u32;
    if total == 0 {
        return DEFAULT_SEED;
    }
    path.chars().map(|c| u64::from(c as u32 % total)).sum()
}

/// Builds the card layout for a level: the path seeds the rng, so the same
/// path always yields the same sequence within a process run. Half the cards
/// are drawn, duplicated to form pairs, then shuffled.
pub fn generate(path: &str) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed(path));
    let count = COUNTS[rng.gen_range(0..COUNTS.len())];
    let mut half: Vec<u8> = (0..count / 2).map(|_| rng.gen_range(0..MAX_CARD)).collect();
    let mut cards = half.clone();
    cards.append(&mut half);
    // Fisher-Yates, back to front
    for i in (1..cards.len()).rev() {
        let j = rng.gen_range(0..=i);
        cards.swap(i, j);
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn occurrences(cards: &[u8]) -> HashMap<u8, usize> {
        let mut counts = HashMap::new();
        for &card in cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn same_path_same_layout() {
        for path in ["/level1", "/level2", "/level3", "/a", "привет"] {
            assert_eq!(generate(path), generate(path));
        }
    }

    #[test]
    fn layout_has_a_valid_count() {
        for path in ["/level1", "/level2", "/level3", "/x/y/z", "42"] {
            let cards = generate(path);
            assert!(
                [6, 8, 12].contains(&cards.len()),
                "unexpected count {} for {}",
                cards.len(),
                path
            );
        }
    }

    #[test]
    fn every_card_appears_an_even_number_of_times() {
        for path in ["/level1", "/level2", "/level3", "/memory", "abcdef"] {
            for (card, count) in occurrences(&generate(path)) {
                assert_eq!(count % 2, 0, "card {} appears {} times", card, count);
            }
        }
    }

    #[test]
    fn cards_stay_in_range() {
        for path in ["/level1", "/level2", "/level3"] {
            assert!(generate(path).iter().all(|&card| card < MAX_CARD));
        }
    }

    #[test]
    fn empty_path_gets_the_default_seed() {
        assert_eq!(seed(""), DEFAULT_SEED);
        let cards = generate("");
        assert!([6, 8, 12].contains(&cards.len()));
        assert_eq!(cards, generate(""));
    }

    #[test]
    fn seed_is_the_sum_of_codepoints_mod_length() {
        // "/ab" has 3 code points: 47 % 3 + 97 % 3 + 98 % 3 = 2 + 1 + 2
        assert_eq!(seed("/ab"), 5);
        assert_eq!(seed("a"), 0);
    }

    #[test]
    fn different_paths_usually_get_different_seeds() {
        // Not guaranteed for arbitrary inputs, but these seeds differ.
        assert_ne!(seed("/level1"), seed("/level12"));
    }
}
