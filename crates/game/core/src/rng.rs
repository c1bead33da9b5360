//! RNG oracle for battle rolls.
//!
//! The engine draws exactly one uniform value per random event (debuff resist
//! check, capture attempt). Callers inject the source so battles can be
//! replayed from a seed and tests can pin individual rolls.

/// Source of uniform random values for the engine.
pub trait RngOracle {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Same seed, same sequence. Small enough to embed in a battle runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::step(seed ^ 0x9E37_79B9_7F4A_7C15),
        }
    }

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::step(old);
        Self::output(old)
    }
}

/// Oracle that always returns the same roll. Handy for pinning outcomes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedRoll(pub f64);

impl RngOracle for FixedRoll {
    fn next_u32(&mut self) -> u32 {
        (self.0.clamp(0.0, 1.0) * f64::from(u32::MAX)) as u32
    }

    fn uniform(&mut self) -> f64 {
        self.0
    }
}
