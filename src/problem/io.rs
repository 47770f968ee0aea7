//! Text formats: `N L` followed by `N` weights in, one `a b` line per task out.

use super::err::ProblemError;
use super::types::{Instance, Pairing};
use std::io::Write;
use std::str::{FromStr, SplitWhitespace};

fn next_token<T: FromStr>(
    tokens: &mut SplitWhitespace<'_>,
    expected: &'static str,
) -> Result<T, ProblemError> {
    let token = tokens
        .next()
        .ok_or(ProblemError::UnexpectedEof { expected })?;
    token.parse().map_err(|_| ProblemError::InvalidToken {
        token: token.to_string(),
    })
}

/// Parses an instance from whitespace-separated text.
///
/// Tokens after the `N`-th weight are ignored.
pub fn parse_input(text: &str) -> Result<Instance, ProblemError> {
    let mut tokens = text.split_whitespace();
    let n: usize = next_token(&mut tokens, "task count")?;
    let horizon: u64 = next_token(&mut tokens, "horizon")?;
    let weights = (0..n)
        .map(|_| next_token::<i64>(&mut tokens, "task weight"))
        .collect::<Result<Vec<_>, _>>()?;
    Instance::new(weights, horizon)
}

/// Writes one `a b` line per task.
pub fn write_pairing<W: Write>(out: &mut W, pairing: &Pairing) -> std::io::Result<()> {
    for &(a, b) in pairing {
        writeln!(out, "{a} {b}")?;
    }
    Ok(())
}

/// Parses and validates a solver output against `instance`.
///
/// Every index must lie in `[0, N)` and exactly `N` pairs must be present.
pub fn parse_output(instance: &Instance, text: &str) -> Result<Pairing, ProblemError> {
    let n = instance.len();
    let mut tokens = text.split_whitespace();
    let mut pairing = Vec::with_capacity(n);
    let check = |value: usize| {
        if value < n {
            Ok(value)
        } else {
            Err(ProblemError::OutOfRange { value, n })
        }
    };

    while let Some(token) = tokens.next() {
        let a: usize = token.parse().map_err(|_| ProblemError::InvalidToken {
            token: token.to_string(),
        })?;
        let b: usize = next_token(&mut tokens, "second target")?;
        pairing.push((check(a)?, check(b)?));
    }

    if pairing.len() != n {
        return Err(ProblemError::LengthMismatch {
            declared: n,
            actual: pairing.len(),
        });
    }
    Ok(pairing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_basic() {
        let inst = parse_input("3 500\n1 2 3\n").unwrap();
        assert_eq!(inst.weights(), &[1, 2, 3]);
        assert_eq!(inst.horizon(), 500);
    }

    #[test]
    fn test_parse_input_any_whitespace() {
        let inst = parse_input("  2\t7\n\n 10\n 1 ").unwrap();
        assert_eq!(inst.weights(), &[10, 1]);
    }

    #[test]
    fn test_parse_input_truncated() {
        assert_eq!(
            parse_input("3 10 1 2"),
            Err(ProblemError::UnexpectedEof {
                expected: "task weight"
            })
        );
        assert!(matches!(
            parse_input(""),
            Err(ProblemError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_parse_input_garbage() {
        assert!(matches!(
            parse_input("2 10 4 x"),
            Err(ProblemError::InvalidToken { .. })
        ));
        assert!(matches!(
            parse_input("-1 10"),
            Err(ProblemError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_parse_input_zero_tasks() {
        assert_eq!(parse_input("0 10"), Err(ProblemError::Empty));
    }

    #[test]
    fn test_write_pairing() {
        let mut buf = Vec::new();
        write_pairing(&mut buf, &vec![(1, 2), (0, 0)]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 2\n0 0\n");
    }

    #[test]
    fn test_parse_output_ok() {
        let inst = Instance::new(vec![1, 1, 1], 3).unwrap();
        let pairing = parse_output(&inst, "1 2\n2 0\n0 1\n").unwrap();
        assert_eq!(pairing, vec![(1, 2), (2, 0), (0, 1)]);
    }

    #[test]
    fn test_parse_output_rejects_bad_index() {
        let inst = Instance::new(vec![1, 1], 2).unwrap();
        assert_eq!(
            parse_output(&inst, "0 1\n1 2\n"),
            Err(ProblemError::OutOfRange { value: 2, n: 2 })
        );
    }

    #[test]
    fn test_parse_output_rejects_wrong_count() {
        let inst = Instance::new(vec![1, 1], 2).unwrap();
        assert_eq!(
            parse_output(&inst, "0 1\n"),
            Err(ProblemError::LengthMismatch {
                declared: 2,
                actual: 1
            })
        );
        assert!(matches!(
            parse_output(&inst, "0 1\n1"),
            Err(ProblemError::UnexpectedEof { .. })
        ));
    }
}
