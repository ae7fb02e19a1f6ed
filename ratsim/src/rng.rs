use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of randomness for a whole run.
///
/// Wraps any `R: Rng` so the initializer, breeder
/// and mutator all draw from the same explicitly
/// owned generator. Seeding it makes a run replayable.
#[derive(Clone, Debug)]
pub struct SimulationRng<R: Rng = StdRng>(R);

impl SimulationRng<StdRng> {
    /// Returns a generator with a fixed seed.
    ///
    /// # Examples
    /// ```
    /// use rand::Rng;
    /// use ratsim::SimulationRng;
    ///
    /// let mut a = SimulationRng::seeded(7);
    /// let mut b = SimulationRng::seeded(7);
    /// assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    /// ```
    pub fn seeded(seed: u64) -> SimulationRng<StdRng> {
        SimulationRng(StdRng::seed_from_u64(seed))
    }

    /// Returns a generator seeded from the operating system.
    pub fn from_entropy() -> SimulationRng<StdRng> {
        SimulationRng(StdRng::from_entropy())
    }
}

impl<R> SimulationRng<R>
where
    R: Rng,
{
    /// Wraps an existing generator.
    pub fn new(rng: R) -> SimulationRng<R> {
        SimulationRng(rng)
    }

    /// Returns `true` with probability `chance`.
    ///
    /// Draws from `[0, 1)`, so a chance of 0 never
    /// succeeds and a chance of 1 always does.
    pub fn chance(&mut self, chance: f64) -> bool {
        self.0.gen::<f64>() < chance
    }
}

impl<R> RngCore for SimulationRng<R>
where
    R: Rng,
{
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
