use super::{Population, Weight};

/// Breeding groups retained from a ranked population.
///
/// The population is sorted and split at its midpoint
/// into a lower and an upper selection tier; "males"
/// come from the upper tier and "females" from the lower
/// one. Tiers are positions in the ranking, nothing more.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Heaviest members of the upper tier.
    pub males: Vec<Weight>,
    /// Heaviest members of the lower tier.
    pub females: Vec<Weight>,
    requested_males: usize,
    requested_females: usize,
}

impl Selection {
    /// Returns whether either request exceeded the size
    /// of its tier, so fewer members were retained than asked.
    pub fn is_degenerate(&self) -> bool {
        self.males.len() < self.requested_males || self.females.len() < self.requested_females
    }

    /// Returns the number of (males, females) requested.
    pub fn requested(&self) -> (usize, usize) {
        (self.requested_males, self.requested_females)
    }

    /// Returns the retained members, males first.
    pub fn survivors(&self) -> impl Iterator<Item = Weight> + '_ {
        self.males.iter().chain(&self.females).copied()
    }
}

/// Ranks the population and retains the `num_males` heaviest
/// members of the upper tier and the `num_females` heaviest
/// members of the lower tier.
///
/// A request larger than its tier is clamped to the whole
/// tier and reported through [`Selection::is_degenerate`]
/// and a warning.
///
/// # Examples
/// ```
/// use ratsim::{select, Population};
///
/// let population = Population::from(vec![5, 1, 8, 3, 9, 2, 7, 4]);
/// let selection = select(&population, 2, 3);
///
/// // Lower tier is [1, 2, 3, 4], upper tier is [5, 7, 8, 9].
/// assert_eq!(selection.males, vec![8, 9]);
/// assert_eq!(selection.females, vec![2, 3, 4]);
/// assert!(!selection.is_degenerate());
/// ```
pub fn select(population: &Population, num_males: usize, num_females: usize) -> Selection {
    let mut ranked = population.weights().to_vec();
    ranked.sort_unstable();
    let (lower_tier, upper_tier) = ranked.split_at(ranked.len() / 2);

    let selection = Selection {
        males: heaviest(upper_tier, num_males).to_vec(),
        females: heaviest(lower_tier, num_females).to_vec(),
        requested_males: num_males,
        requested_females: num_females,
    };
    if selection.is_degenerate() {
        tracing::warn!(
            requested_males = num_males,
            retained_males = selection.males.len(),
            requested_females = num_females,
            retained_females = selection.females.len(),
            "retention request exceeds tier size, clamping to the whole tier"
        );
    }
    selection
}

/// Returns the last `count` members of a sorted tier,
/// or the whole tier if it is smaller than that.
fn heaviest(tier: &[Weight], count: usize) -> &[Weight] {
    &tier[tier.len().saturating_sub(count)..]
}
