// Random partitioning of the name list into fixed-size groups.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("the name list is empty")]
    EmptyList,
}

/// Randomly partition `names` into consecutive groups of `group_size`.
///
/// Shuffles a copy of the list, then chunks it: every group has exactly
/// `group_size` members except possibly the last, which holds the
/// remainder. The concatenation of all groups is a permutation of the
/// input. A `group_size` of zero is treated as one.
pub fn group_names<R: Rng>(
    names: &[String],
    group_size: usize,
    rng: &mut R,
) -> Result<Vec<Vec<String>>, GroupError> {
    if names.is_empty() {
        return Err(GroupError::EmptyList);
    }

    let size = group_size.max(1);
    let mut shuffled = names.to_vec();
    shuffled.shuffle(rng);
    Ok(shuffled.chunks(size).map(<[String]>::to_vec).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_list_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(group_names(&[], 2, &mut rng), Err(GroupError::EmptyList));
    }

    #[test]
    fn five_names_in_pairs_gives_sizes_2_2_1() {
        let mut rng = StdRng::seed_from_u64(9);
        let groups = group_names(&list(&["A", "B", "C", "D", "E"]), 2, &mut rng).unwrap();
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn groups_cover_the_input_exactly_once() {
        let mut rng = StdRng::seed_from_u64(12);
        let input = list(&["A", "B", "A", "C", "D", "E", "F"]);
        let groups = group_names(&input, 3, &mut rng).unwrap();

        let mut flattened: Vec<String> = groups.into_iter().flatten().collect();
        let mut expected = input.clone();
        flattened.sort();
        expected.sort();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn group_size_larger_than_list_gives_one_group() {
        let mut rng = StdRng::seed_from_u64(4);
        let groups = group_names(&list(&["A", "B"]), 10, &mut rng).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn zero_group_size_is_clamped_to_one() {
        let mut rng = StdRng::seed_from_u64(4);
        let groups = group_names(&list(&["A", "B", "C"]), 0, &mut rng).unwrap();
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1, 1, 1]);
    }

    #[test]
    fn exact_division_has_no_remainder_group() {
        let mut rng = StdRng::seed_from_u64(2);
        let groups = group_names(&list(&["A", "B", "C", "D"]), 2, &mut rng).unwrap();
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2]);
    }
}
