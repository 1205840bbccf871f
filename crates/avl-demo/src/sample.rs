//! Random unique samples, with the random source supplied by the caller.

use indexmap::IndexSet;
use rand::Rng;

/// Distinct integers in `0..max`, in first-seen order, at most
/// `min(len, max)` of them. The insertion-ordered set keeps the draw order
/// callers see identical to the order the generator produced.
pub fn random_unique<R: Rng + ?Sized>(rng: &mut R, len: usize, max: u32) -> Vec<u32> {
    let target = len.min(max as usize);
    let mut seen: IndexSet<u32> = IndexSet::with_capacity(target);
    while seen.len() < target {
        seen.insert(rng.gen_range(0..max));
    }
    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn respects_length_and_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let sample = random_unique(&mut rng, 20, 100);
        assert_eq!(sample.len(), 20);
        assert!(sample.iter().all(|&n| n < 100));
    }

    #[test]
    fn values_are_distinct() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let sample = random_unique(&mut rng, 50, 60);
        let mut sorted = sample.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), sample.len());
    }

    #[test]
    fn length_is_capped_by_the_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let sample = random_unique(&mut rng, 10, 4);
        assert_eq!(sample.len(), 4);
    }

    #[test]
    fn empty_range_yields_an_empty_sample() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(4);
        assert!(random_unique(&mut rng, 5, 0).is_empty());
    }

    #[test]
    fn same_seed_same_sample() {
        let mut a = Xoshiro256StarStar::seed_from_u64(5);
        let mut b = Xoshiro256StarStar::seed_from_u64(5);
        assert_eq!(random_unique(&mut a, 20, 100), random_unique(&mut b, 20, 100));
    }
}
