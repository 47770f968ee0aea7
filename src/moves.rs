//! The single move shared by both search phases.
//!
//! A move picks a probably-most-overloaded worker and a
//! probably-most-underloaded worker with a noisy greedy scan, then
//! rewrites one task's target from the former to the latter.

use crate::problem::Pairing;
use crate::random::UniformExt;
use rand::Rng;

/// Chance (in percent) that the scan follows a strictly better candidate.
pub const FOLLOW_PERCENT: usize = 95;

/// Which of a task's two targets a move rewrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

/// Workers chosen by [`select_targets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTargets {
    /// Worker whose deviation the move lowers.
    pub overloaded: usize,
    /// Worker whose deviation the move raises.
    pub underloaded: usize,
}

/// A one-field rewrite of a pairing, kept so it can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retarget {
    pub task: usize,
    pub slot: Slot,
    pub from: usize,
    pub to: usize,
}

impl Retarget {
    fn set(pairing: &mut Pairing, task: usize, slot: Slot, worker: usize) {
        match slot {
            Slot::First => pairing[task].0 = worker,
            Slot::Second => pairing[task].1 = worker,
        }
    }

    /// Writes `to` into the rewritten field.
    pub fn apply(&self, pairing: &mut Pairing) {
        Self::set(pairing, self.task, self.slot, self.to);
    }

    /// Restores the field's previous target. Touches nothing else.
    pub fn revert(&self, pairing: &mut Pairing) {
        Self::set(pairing, self.task, self.slot, self.from);
    }
}

/// Noisy greedy scan for the extreme deviations.
///
/// Draws initial `overloaded`, `underloaded` and a start offset, then walks
/// every worker once from the offset, wrapping around. A strictly lower
/// (resp. higher) deviation replaces the current pick with probability
/// [`FOLLOW_PERCENT`]%. The two picks may coincide.
pub fn select_targets<R: Rng>(dev: &[i64], rng: &mut R) -> MoveTargets {
    let n = dev.len();
    let mut overloaded = rng.next_int(n);
    let mut underloaded = rng.next_int(n);
    let cut = rng.next_int(n);

    for k in 0..n {
        let i = (cut + k) % n;
        if dev[i] < dev[underloaded] && rng.percent(FOLLOW_PERCENT) {
            underloaded = i;
        }
        if dev[i] > dev[overloaded] && rng.percent(FOLLOW_PERCENT) {
            overloaded = i;
        }
    }

    MoveTargets {
        overloaded,
        underloaded,
    }
}

/// Rewrites the first task (scanning circularly from a random offset) that
/// targets `targets.overloaded`, preferring its first field.
///
/// Returns `None` and leaves `pairing` untouched when no task targets the
/// overloaded worker.
pub fn retarget<R: Rng>(
    pairing: &mut Pairing,
    targets: MoveTargets,
    rng: &mut R,
) -> Option<Retarget> {
    let n = pairing.len();
    let cut = rng.next_int(n);

    let (task, slot) = (0..n).map(|k| (cut + k) % n).find_map(|i| {
        let (a, b) = pairing[i];
        if a == targets.overloaded {
            Some((i, Slot::First))
        } else if b == targets.overloaded {
            Some((i, Slot::Second))
        } else {
            None
        }
    })?;

    let mv = Retarget {
        task,
        slot,
        from: targets.overloaded,
        to: targets.underloaded,
    };
    mv.apply(pairing);
    Some(mv)
}

/// [`select_targets`] followed by [`retarget`].
pub fn random_move<R: Rng>(pairing: &mut Pairing, dev: &[i64], rng: &mut R) -> Option<Retarget> {
    let targets = select_targets(dev, rng);
    retarget(pairing, targets, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::score::deviations;
    use proptest::prelude::*;

    #[test]
    fn test_single_worker_is_self_move() {
        let mut rng = create_rng(1);
        let mut pairing = vec![(0, 0)];
        let mv = random_move(&mut pairing, &[0], &mut rng).unwrap();
        assert_eq!(mv.from, 0);
        assert_eq!(mv.to, 0);
        assert_eq!(mv.slot, Slot::First);
        assert_eq!(pairing, vec![(0, 0)]);
    }

    #[test]
    fn test_select_targets_usually_finds_extremes() {
        let dev = [0, 50, -3, 7, -40, 1, 2, -17];
        let mut rng = create_rng(11);
        let mut hits = 0;
        for _ in 0..200 {
            let t = select_targets(&dev, &mut rng);
            if t.overloaded == 1 && t.underloaded == 4 {
                hits += 1;
            }
        }
        // Both picks are exact far more often than not.
        assert!(hits > 100, "only {hits} exact picks");
    }

    #[test]
    fn test_retarget_prefers_first_field() {
        let mut rng = create_rng(3);
        let mut pairing = vec![(2, 2), (2, 2), (2, 2)];
        let targets = MoveTargets {
            overloaded: 2,
            underloaded: 0,
        };
        let mv = retarget(&mut pairing, targets, &mut rng).unwrap();
        assert_eq!(mv.slot, Slot::First);
        assert_eq!(pairing[mv.task], (0, 2));
    }

    #[test]
    fn test_retarget_uses_second_field() {
        let mut rng = create_rng(3);
        let mut pairing = vec![(0, 1), (0, 0)];
        let targets = MoveTargets {
            overloaded: 1,
            underloaded: 0,
        };
        let mv = retarget(&mut pairing, targets, &mut rng).unwrap();
        assert_eq!(
            mv,
            Retarget {
                task: 0,
                slot: Slot::Second,
                from: 1,
                to: 0
            }
        );
        assert_eq!(pairing, vec![(0, 0), (0, 0)]);
    }

    #[test]
    fn test_retarget_no_match_is_noop() {
        let mut rng = create_rng(5);
        let mut pairing = vec![(0, 0), (0, 0), (0, 0)];
        let before = pairing.clone();
        let targets = MoveTargets {
            overloaded: 2,
            underloaded: 1,
        };
        assert!(retarget(&mut pairing, targets, &mut rng).is_none());
        assert_eq!(pairing, before);
    }

    fn instance_and_pairing() -> impl Strategy<Value = (Vec<i64>, Vec<(usize, usize)>)> {
        (1usize..20).prop_flat_map(|n| {
            (
                prop::collection::vec(0i64..10_000, n),
                prop::collection::vec((0..n, 0..n), n),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_move_then_revert_restores(
            (weights, pairing) in instance_and_pairing(),
            seed in any::<u64>(),
        ) {
            let (_, dev) = deviations(&weights, &pairing);
            let mut rng = create_rng(seed);
            let mut moved = pairing.clone();
            if let Some(mv) = random_move(&mut moved, &dev, &mut rng) {
                let changed = (0..pairing.len()).filter(|&i| moved[i] != pairing[i]).count();
                prop_assert!(changed <= 1);
                mv.revert(&mut moved);
            }
            prop_assert_eq!(moved, pairing);
        }

        #[test]
        fn prop_move_stays_in_range(
            (weights, pairing) in instance_and_pairing(),
            seed in any::<u64>(),
        ) {
            let n = weights.len();
            let (_, dev) = deviations(&weights, &pairing);
            let mut rng = create_rng(seed);
            let mut moved = pairing;
            let _ = random_move(&mut moved, &dev, &mut rng);
            prop_assert!(moved.iter().all(|&(a, b)| a < n && b < n));
        }
    }
}
