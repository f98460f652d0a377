use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

/// A source of die faces.
///
/// Implemented for every [`rand::Rng`], so a thread-local generator, a seeded
/// `StdRng`, or a mutable reference to either can be used directly.
pub trait Roller {
    /// Returns a value in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let sides = NonZeroUInt::new(6).unwrap();
        for _ in 0..1000 {
            let x = rng.roll(sides);
            assert!((1..=6).contains(&x));
        }
    }

    #[test]
    fn test_one_sided_die() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(rng.roll(NonZeroUInt::new(1).unwrap()), 1);
    }

    #[test]
    fn test_step_roller() {
        let mut roller = StepRoller::new(NonZeroUInt::new(10).unwrap(), 1);
        let sides = NonZeroUInt::new(6).unwrap();
        let rolled: Vec<_> = (0..4).map(|_| roller.roll(sides)).collect();
        assert_eq!(rolled, vec![4, 5, 6, 1]);
    }
}
