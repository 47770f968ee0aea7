//! Instance and pairing types.

use super::err::ProblemError;

/// One task's two charge targets `(a, b)`.
pub type Pair = (usize, usize);

/// A full solution: `pairing[i]` holds task `i`'s two target workers.
pub type Pairing = Vec<Pair>;

/// An immutable problem instance.
///
/// Every index `i` is both a task with weight `weights[i]` and a worker
/// whose target load is `2 * weights[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    pub(super) weights: Vec<i64>,
    pub(super) horizon: u64,
}

impl Instance {
    /// Builds an instance, rejecting empty or negative weight vectors.
    ///
    /// `horizon` is the step count `L` of the original process. The search
    /// ignores it; only [`simulate`](super::simulate) reads it.
    pub fn new(weights: Vec<i64>, horizon: u64) -> Result<Self, ProblemError> {
        if weights.is_empty() {
            return Err(ProblemError::Empty);
        }
        if let Some((index, &weight)) = weights.iter().enumerate().find(|&(_, &w)| w < 0) {
            return Err(ProblemError::NegativeWeight { index, weight });
        }
        Ok(Self { weights, horizon })
    }

    /// Number of tasks (and workers).
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false; an instance holds at least one task.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    #[inline]
    pub fn horizon(&self) -> u64 {
        self.horizon
    }

    /// The pairing `((i+1) mod N, (i+2) mod N)`, used before any search runs.
    pub fn fallback_pairing(&self) -> Pairing {
        let n = self.len();
        (0..n).map(|i| ((i + 1) % n, (i + 2) % n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Instance::new(vec![], 0), Err(ProblemError::Empty));
    }

    #[test]
    fn test_new_rejects_negative() {
        let err = Instance::new(vec![3, -1, 2], 10).unwrap_err();
        assert_eq!(
            err,
            ProblemError::NegativeWeight {
                index: 1,
                weight: -1
            }
        );
    }

    #[test]
    fn test_accessors() {
        let inst = Instance::new(vec![4, 0, 9], 13).unwrap();
        assert_eq!(inst.len(), 3);
        assert!(!inst.is_empty());
        assert_eq!(inst.weights(), &[4, 0, 9]);
        assert_eq!(inst.horizon(), 13);
    }

    #[test]
    fn test_fallback_pairing() {
        let inst = Instance::new(vec![1, 1, 1], 3).unwrap();
        assert_eq!(inst.fallback_pairing(), vec![(1, 2), (2, 0), (0, 1)]);

        let single = Instance::new(vec![5], 5).unwrap();
        assert_eq!(single.fallback_pairing(), vec![(0, 0)]);
    }
}
