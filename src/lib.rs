//! Deadline-bounded local search for self-referential pair load balancing.
//!
//! Each of `N` tasks has a weight `T[i]` and is also a worker whose target
//! load is `2 * T[i]`. A solution names two workers per task; each receives
//! the task's weight. The goal is to minimise the total absolute deviation
//! between every worker's load and its target.
//!
//! - **Scoring** ([`score`]): linear-time deviation and score computation,
//!   plus an O(1) update for a single retarget.
//! - **Seeding** ([`seed`]): heaviest-first seed order and rotated
//!   starting pairings.
//! - **Moves** ([`moves`]): noisy greedy choice of an overloaded and an
//!   underloaded worker, and a reversible one-field rewrite.
//! - **Warm start** ([`warm`]): fixed-budget drift over rotated candidates.
//! - **Local search** ([`local`]): deadline-bounded descent with a flat
//!   chance of inverting each accept/reject decision.
//! - **Solver** ([`solver`]): runs both phases with one random stream.
//!
//! # Architecture
//!
//! Everything is single-threaded and sequential. Randomness comes from one
//! explicitly passed generator ([`random`]) and time from a [`clock::Clock`],
//! so runs with a fixed seed and a fake clock are fully reproducible.
//!
//! ```
//! use u_pairbal::clock::TimeKeeper;
//! use u_pairbal::problem::Instance;
//! use u_pairbal::solver::{Solver, SolverConfig};
//!
//! let instance = Instance::new(vec![3, 1, 2], 6).unwrap();
//! let config = SolverConfig::default().with_seed(1).with_time_limit_ms(10.0);
//! let result = Solver::solve(&instance, &config, &mut TimeKeeper::start());
//! assert_eq!(result.pairing.len(), 3);
//! ```

pub mod clock;
pub mod local;
pub mod moves;
pub mod problem;
pub mod random;
pub mod score;
pub mod seed;
pub mod solver;
pub mod warm;
