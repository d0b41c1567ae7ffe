use crate::criteria::Criterion;
use crate::errors::{EseError, Result};
use linfa::Float;
use ndarray::{Array, Array2, ArrayBase, Data, Ix2};
use ndarray_rand::rand::{seq::SliceRandom, Rng};
use ndarray_stats::QuantileExt;

/// Perturbs one column of a design and returns the best neighbor found.
///
/// Draws `n_exchanges` distinct row pairs uniformly among the
/// `ns * (ns - 1) / 2` possible ones, builds one candidate per pair by
/// swapping the two cells of `column`, and scores every candidate with
/// `criterion`. The candidate with the lowest value wins, the first one
/// found on ties. Swapping cells within a column keeps each column of the
/// candidate a permutation of the original one, so a Latin Hypercube
/// structure is preserved.
///
/// Returns the winning candidate with its criterion value, or a
/// configuration error when `n_exchanges` exceeds the number of row pairs.
/// With `n_exchanges == 0` the design is returned unchanged.
pub fn perturb<F: Float, R: Rng>(
    dm: &ArrayBase<impl Data<Elem = F>, Ix2>,
    column: usize,
    n_exchanges: usize,
    criterion: &Criterion,
    rng: &mut R,
) -> Result<(Array2<F>, F)> {
    let n = dm.nrows();
    let n_pairs = n * (n - 1) / 2;
    if n_exchanges > n_pairs {
        return Err(EseError::TooManyExchanges {
            requested: n_exchanges,
            available: n_pairs,
        });
    }
    if n_exchanges == 0 {
        return Ok((dm.to_owned(), criterion.evaluate(dm)));
    }

    let mut pairs = Vec::with_capacity(n_pairs);
    for r1 in 0..n {
        for r2 in (r1 + 1)..n {
            pairs.push((r1, r2));
        }
    }

    let mut candidates: Vec<Array2<F>> = Vec::with_capacity(n_exchanges);
    let mut scores: Vec<F> = Vec::with_capacity(n_exchanges);
    for &(r1, r2) in pairs.choose_multiple(rng, n_exchanges) {
        let mut candidate = dm.to_owned();
        candidate.swap([r1, column], [r2, column]);
        scores.push(criterion.evaluate(&candidate));
        candidates.push(candidate);
    }

    let scores = Array::from_shape_vec(scores.len(), scores).unwrap();
    let winner = scores.argmin().unwrap();
    Ok((candidates.swap_remove(winner), scores[winner]))
}
