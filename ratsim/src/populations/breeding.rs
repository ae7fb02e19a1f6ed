use super::Weight;
use crate::SimulationRng;

use rand::seq::SliceRandom;
use rand::Rng;

/// Pairs males with females at random and returns
/// `litter_size` offspring per pair.
///
/// Both groups are shuffled (on copies) and paired by
/// index; whichever group is larger leaves its surplus
/// unpaired. Each child's weight is drawn uniformly from
/// the closed range between its parents' weights.
///
/// # Examples
/// ```
/// use ratsim::{breed, SimulationRng};
///
/// let mut rng = SimulationRng::seeded(5);
/// let children = breed(&[500, 600], &[200, 300, 400], 8, &mut rng);
///
/// // Two pairs, the third female is left out.
/// assert_eq!(children.len(), 16);
/// assert!(children.iter().all(|w| (200..=600).contains(w)));
/// ```
pub fn breed<R>(
    males: &[Weight],
    females: &[Weight],
    litter_size: usize,
    rng: &mut SimulationRng<R>,
) -> Vec<Weight>
where
    R: Rng,
{
    let mut males = males.to_vec();
    let mut females = females.to_vec();
    males.shuffle(rng);
    females.shuffle(rng);

    let pairs = males.len().min(females.len());
    let mut children = Vec::with_capacity(pairs * litter_size);
    for (&male, &female) in males.iter().zip(&females) {
        let (lightest, heaviest) = (male.min(female), male.max(female));
        children.extend((0..litter_size).map(|_| rng.gen_range(lightest..=heaviest)));
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn litter_count_follows_smaller_group() {
        let mut rng = SimulationRng::seeded(11);
        assert_eq!(breed(&[1, 2, 3, 4], &[5; 10], 8, &mut rng).len(), 32);
        assert_eq!(breed(&[1; 7], &[5, 6], 3, &mut rng).len(), 6);
        assert!(breed(&[], &[5, 6], 3, &mut rng).is_empty());
    }

    #[test]
    fn identical_parents_breed_true() {
        let mut rng = SimulationRng::seeded(11);
        let children = breed(&[420], &[420], 5, &mut rng);
        assert_eq!(children, vec![420; 5]);
    }

    #[test]
    fn each_litter_lies_between_its_parents() {
        let males = [100, 5000, 20, 9000];
        let females = [7000, 3, 450, 800, 60];
        for seed in 0..200 {
            let mut rng = SimulationRng::seeded(seed);
            // Replaying the shuffles on a copy of the generator
            // recovers which parents produced each litter.
            let mut replay = rng.clone();
            let (mut m, mut f) = (males.to_vec(), females.to_vec());
            m.shuffle(&mut replay);
            f.shuffle(&mut replay);

            let children = breed(&males, &females, 6, &mut rng);
            assert_eq!(children.len(), 6 * 4);
            for (i, litter) in children.chunks(6).enumerate() {
                let (lo, hi) = (m[i].min(f[i]), m[i].max(f[i]));
                assert!(
                    litter.iter().all(|w| (lo..=hi).contains(w)),
                    "litter {:?} outside [{}, {}]",
                    litter,
                    lo,
                    hi
                );
            }
        }
    }

    #[test]
    fn inputs_are_not_shuffled_in_place() {
        let mut rng = SimulationRng::seeded(11);
        let males = vec![1, 2, 3, 4, 5];
        let females = vec![6, 7, 8, 9, 10];
        breed(&males, &females, 1, &mut rng);
        assert_eq!(males, vec![1, 2, 3, 4, 5]);
        assert_eq!(females, vec![6, 7, 8, 9, 10]);
    }
}
