//! Random position selection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

use crate::model::Position;

/// Pick one position uniformly at random. `None` for an empty slice.
pub fn pick_position<'a, R: Rng + ?Sized>(
    positions: &'a [Position],
    rng: &mut R,
) -> Option<&'a Position> {
    positions.choose(rng)
}

/// Random source for a poller: seeded when reproducible output is wanted,
/// OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> Box<dyn RngCore + Send> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(n: usize) -> Vec<Position> {
        (0..n)
            .map(|i| Position {
                pos_x: f64::from(u32::try_from(i).unwrap_or(u32::MAX)),
                pos_y: 0.5,
            })
            .collect()
    }

    #[test]
    fn empty_slice_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_position(&[], &mut rng).is_none());
    }

    #[test]
    fn pick_is_member_of_input() {
        let set = positions(5);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let picked = pick_position(&set, &mut rng);
            assert!(picked.is_some_and(|p| set.contains(p)));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let set = positions(10);
        let mut a = rng_from_seed(Some(7));
        let mut b = rng_from_seed(Some(7));
        for _ in 0..20 {
            assert_eq!(
                pick_position(&set, &mut *a),
                pick_position(&set, &mut *b)
            );
        }
    }

    #[test]
    fn every_entry_is_reachable() {
        let set = positions(4);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..400 {
            if let Some(p) = pick_position(&set, &mut rng) {
                seen[p.pos_x as usize] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
