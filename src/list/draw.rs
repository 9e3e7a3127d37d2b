// Random winner selection from the draw pool.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("the draw pool is empty")]
    EmptyPool,

    #[error("requested {requested} winners but only {available} names remain in the pool")]
    NotEnough { requested: usize, available: usize },
}

/// Draw `count` winners uniformly at random from `pool`.
///
/// Shuffles a copy of the pool (Fisher-Yates, via `SliceRandom::shuffle`)
/// and takes the first `count` entries, so a name at any pool position has
/// the same chance of winning. The pool itself is not modified; callers
/// append the winners to their results to shrink future no-repeat pools.
///
/// Generic over `Rng` so tests can pass a seeded generator.
pub fn draw_winners<R: Rng>(
    pool: &[String],
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, DrawError> {
    if pool.is_empty() {
        return Err(DrawError::EmptyPool);
    }
    if count > pool.len() {
        return Err(DrawError::NotEnough {
            requested: count,
            available: pool.len(),
        });
    }

    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    Ok(shuffled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_pool_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(draw_winners(&[], 1, &mut rng), Err(DrawError::EmptyPool));
    }

    #[test]
    fn oversized_request_is_rejected_with_both_numbers() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = draw_winners(&pool(&["A", "B"]), 3, &mut rng).unwrap_err();
        assert_eq!(
            err,
            DrawError::NotEnough {
                requested: 3,
                available: 2,
            }
        );
    }

    #[test]
    fn draws_exactly_count_winners_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let source = pool(&["A", "B", "C", "D", "E"]);
        let winners = draw_winners(&source, 3, &mut rng).unwrap();
        assert_eq!(winners.len(), 3);
        for winner in &winners {
            assert!(source.contains(winner));
        }
    }

    #[test]
    fn winners_are_distinct_pool_entries() {
        // Drawing the whole pool must yield a permutation of it.
        let mut rng = StdRng::seed_from_u64(7);
        let source = pool(&["A", "B", "C", "D"]);
        let mut winners = draw_winners(&source, 4, &mut rng).unwrap();
        winners.sort();
        assert_eq!(winners, pool(&["A", "B", "C", "D"]));
    }

    #[test]
    fn draw_does_not_modify_the_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = pool(&["A", "B", "C"]);
        let before = source.clone();
        let _ = draw_winners(&source, 2, &mut rng).unwrap();
        assert_eq!(source, before);
    }

    #[test]
    fn every_name_is_reachable() {
        // Single-name draws across many seeds should eventually hit every
        // pool entry; a biased shuffle would leave gaps.
        let source = pool(&["A", "B", "C"]);
        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let winners = draw_winners(&source, 1, &mut rng).unwrap();
            seen.insert(winners[0].clone());
        }
        assert_eq!(seen.len(), 3);
    }
}
