//! Problem data: instances, pairings, text I/O and the reference process.
//!
//! An instance is a list of `N` non-negative task weights plus the horizon
//! `L` of the process the pairing drives. Pairings are plain vectors of
//! `(a, b)` worker indices.

mod err;
mod evaluate;
mod generate;
mod io;
mod types;

pub use err::ProblemError;
pub use evaluate::{simulate, Evaluation};
pub use generate::{generate, generate_with, GENERATED_HORIZON, GENERATED_TASKS};
pub use io::{parse_input, parse_output, write_pairing};
pub use types::{Instance, Pair, Pairing};
