//! The article's snippets, one function per encoding.

use sumlist::algebra::{self, List as _, ListAlgebra};
use sumlist::{scott, tagged};

use crate::config::{Config, Encoding};
use crate::error::SnippetError;

/// The outcome of running one encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Which encoding ran.
    pub encoding: Encoding,
    /// `to_vec(map(cons(3, cons(2, empty())), n => n * n))`.
    pub squares: Vec<i64>,
    /// The workload list after every `map` layer.
    pub workload: Vec<i64>,
}

/// Runs the squares scenario and the workload for each selected encoding.
///
/// # Errors
///
/// Returns [`SnippetError::TooLong`] when `config.length` exceeds
/// `config.max_length`, and [`SnippetError::Mismatch`] when an encoding does
/// not produce the expected sequence.
pub fn run(config: &Config) -> Result<Vec<Outcome>, SnippetError> {
    if config.length > config.max_length {
        return Err(SnippetError::TooLong {
            length: config.length,
            maximum: config.max_length,
        });
    }

    let expected = expected_workload(config);
    config
        .encoding
        .expand()
        .iter()
        .map(|&encoding| {
            let outcome = run_encoding(encoding, config)?;
            tracing::debug!(%encoding, squares = ?outcome.squares, "scenario finished");
            check(&outcome.squares, &[9, 4], encoding)?;
            check(&outcome.workload, &expected, encoding)?;
            Ok(outcome)
        })
        .collect()
}

fn run_encoding(encoding: Encoding, config: &Config) -> Result<Outcome, SnippetError> {
    let (squares, workload) = match encoding {
        Encoding::Tagged => (tagged_squares(), tagged_workload(config)),
        Encoding::Scott => (scott_squares(), scott_workload(config)),
        Encoding::Algebra => (algebra_squares()?, algebra_workload(config)),
        Encoding::All => unreachable!("`Encoding::expand` yields concrete encodings only"),
    };
    Ok(Outcome {
        encoding,
        squares,
        workload,
    })
}

fn check(actual: &[i64], expected: &[i64], encoding: Encoding) -> Result<(), SnippetError> {
    if actual == expected {
        Ok(())
    } else {
        tracing::warn!(%encoding, "encoding disagrees with the expected sequence");
        Err(SnippetError::Mismatch {
            encoding,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        })
    }
}

fn workload_elements(config: &Config) -> Vec<i64> {
    (0_i64..).take(config.length).collect()
}

fn expected_workload(config: &Config) -> Vec<i64> {
    let offset = i64::try_from(config.map_layers).unwrap_or(i64::MAX);
    workload_elements(config)
        .into_iter()
        .map(|element| element.saturating_add(offset))
        .collect()
}

// =============================================================================
// Tagged union
// =============================================================================

fn tagged_squares() -> Vec<i64> {
    let numbers = tagged::cons(3, tagged::cons(2, tagged::empty()));
    let squares = tagged::map(&numbers, |n| n * n);
    tagged::to_vec(&squares)
}

fn tagged_workload(config: &Config) -> Vec<i64> {
    let mut list: tagged::List<i64> = workload_elements(config).into_iter().collect();
    for _ in 0..config.map_layers {
        list = tagged::map(&list, |n| n + 1);
    }
    tagged::to_vec(&list)
}

// =============================================================================
// Scott encoding
// =============================================================================

fn scott_squares() -> Vec<i64> {
    let numbers = scott::cons(3, scott::cons(2, scott::empty()));
    let squares = scott::map(&numbers, |n| n * n);
    let first = squares.match_cases(scott::Cases {
        empty: || None,
        cons: |head: &i64, _: &scott::List<i64>| Some(*head),
    });
    tracing::trace!(?first, "keyed dispatch on the mapped list");
    scott::to_vec(&squares)
}

fn scott_workload(config: &Config) -> Vec<i64> {
    let mut list: scott::List<i64> = workload_elements(config).into_iter().collect();
    for _ in 0..config.map_layers {
        list = scott::map(&list, |n| n + 1);
    }
    tracing::trace!("scott workload built; mapping runs on materialization");
    scott::to_vec(&list)
}

// =============================================================================
// Object algebra
// =============================================================================

/// `(L) => L.cons(3, L.cons(2, L.empty()))`
struct ThreeTwo;

impl algebra::List<i64> for ThreeTwo {
    fn fold<L>(&self, algebra: &L) -> L::Output
    where
        L: ListAlgebra<i64> + ?Sized,
    {
        algebra.cons(&3, algebra.cons(&2, algebra.empty()))
    }
}

fn algebra_squares() -> Result<Vec<i64>, SnippetError> {
    let numbers = algebra::cons(3, algebra::cons(2, algebra::empty()));
    let squares = algebra::to_vec(&algebra::map(numbers, |n: &i64| n * n));
    let literal = algebra::to_vec(&algebra::map(ThreeTwo, |n: &i64| n * n));
    tracing::trace!(count = ThreeTwo.fold(&algebra::Length), "literal list interpreted");
    check(&literal, &[9, 4], Encoding::Algebra)?;
    Ok(squares)
}

/// The workload elements under `layers` chained `map` calls.
///
/// Each layer is an `algebra::map` over the layer below it, and nothing is
/// evaluated until the whole stack is folded once.
struct Layered<'a> {
    base: &'a [i64],
    layers: usize,
}

impl algebra::List<i64> for Layered<'_> {
    fn fold<L>(&self, algebra: &L) -> L::Output
    where
        L: ListAlgebra<i64> + ?Sized,
    {
        self.fold_erased(&Forward(algebra))
    }
}

impl Layered<'_> {
    // The layer count is only known at run time, so each level folds through
    // a `dyn` algebra to keep the instantiated types finite.
    fn fold_erased<O>(&self, algebra: &dyn ListAlgebra<i64, Output = O>) -> O {
        match self.layers.checked_sub(1) {
            None => self.base.fold(algebra),
            Some(layers) => {
                let below = Layered {
                    base: self.base,
                    layers,
                };
                algebra::map(below, |n: &i64| n + 1).fold(algebra)
            }
        }
    }
}

/// A sized handle on a possibly unsized algebra, so it can be passed as `dyn`.
struct Forward<'a, L: ?Sized>(&'a L);

impl<L> ListAlgebra<i64> for Forward<'_, L>
where
    L: ListAlgebra<i64> + ?Sized,
{
    type Output = L::Output;

    fn empty(&self) -> Self::Output {
        self.0.empty()
    }

    fn cons(&self, head: &i64, tail: Self::Output) -> Self::Output {
        self.0.cons(head, tail)
    }
}

fn algebra_workload(config: &Config) -> Vec<i64> {
    let elements = workload_elements(config);
    let layered = Layered {
        base: &elements,
        layers: config.map_layers,
    };
    tracing::trace!("algebra workload built; one fold runs every layer");
    algebra::to_vec(&layered)
}
