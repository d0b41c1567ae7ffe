use crate::criteria::Criterion;
use crate::errors::{EseError, Result};
use crate::perturb::perturb;
use crate::threshold::{adjust, Phase};
use env_logger::{Builder, Env};
use linfa::Float;
use log::{debug, info};
use ndarray::{Array2, ArrayBase, Data, Ix2};
use ndarray_rand::rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use std::cmp;

/// Outcome of one [Ese::optimize] run.
///
/// Holds the untouched starting design next to the best design found and
/// the evolution of the search: `best_history` records the best criterion
/// value after each outer sweep (starting with the initial design's value,
/// hence never increasing), `accepted_history` the criterion value of every
/// accepted trial in order of acceptance.
#[derive(Debug, Clone)]
pub struct EseResult<F: Float> {
    /// The initial design, as handed to the optimizer
    pub dm_init: Array2<F>,
    /// The best design found within the iteration budget
    pub dm_best: Array2<F>,
    /// Best criterion value after each outer sweep, non-increasing
    pub best_history: Vec<F>,
    /// Criterion value of each accepted trial design
    pub accepted_history: Vec<F>,
}

impl<F: Float> EseResult<F> {
    /// Criterion value of the best design found
    pub fn best_objective(&self) -> F {
        *self.best_history.last().unwrap()
    }
}

/// Optimizer improving the uniformity of a Latin Hypercube design with the
/// Enhanced Stochastic Evolutionary (ESE) algorithm.
///
/// The search walks the space of designs reachable by swapping two values
/// within a column, so every visited design keeps each column a permutation
/// of the initial one. An inner loop scores a batch of such exchanges per
/// column and applies a thresholded acceptance test; an outer loop adapts
/// the acceptance threshold from the inner loop's statistics, alternating
/// between an improving and an exploring phase.
///
/// **Reference**
///
/// R. Jin, W. Chen, and A. Sudjianto, "An Efficient Algorithm for
/// Constructing Optimal Design of Computer Experiments," Proceedings of
/// DETC'03, ASME Design Engineering Technical Conferences, Chicago, 2003.
pub struct Ese<F: Float, R: Rng + Clone> {
    /// Name of the uniformity criterion, resolved at [Ese::optimize] time
    objective: String,
    /// Initial acceptance threshold, auto-computed when non-positive
    threshold_init: F,
    /// Exchange candidates per perturbation, auto-computed when 0
    n_exchanges: usize,
    /// Inner iterations per outer sweep, auto-computed when 0
    max_inner: usize,
    /// Outer iteration budget
    max_outer: usize,
    /// Whether improving outer sweeps are refunded to the budget
    reward: bool,
    /// Hard cap on total outer sweeps, uncapped when `None`
    outer_cap: Option<usize>,
    improving: (F, F),
    exploring: (F, F, F, F),
    rng: R,
}

impl<F: Float> Ese<F, Xoshiro256Plus> {
    /// Constructor of an optimizer with default parameters
    /// and entropy-seeded random generator.
    ///
    /// Log verbosity is controlled by the `LHSOPT_LOG` environment variable.
    pub fn new() -> Self {
        let env = Env::new().filter_or("LHSOPT_LOG", "info");
        let mut builder = Builder::from_env(env);
        let builder = builder.target(env_logger::Target::Stdout);
        builder.try_init().ok();
        Self::with_rng_impl(Xoshiro256Plus::from_entropy())
    }
}

impl<F: Float> Default for Ese<F, Xoshiro256Plus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float, R: Rng + Clone> Ese<F, R> {
    fn with_rng_impl(rng: R) -> Self {
        Ese {
            objective: "w2_discrepancy".to_string(),
            threshold_init: F::zero(),
            n_exchanges: 0,
            max_inner: 0,
            max_outer: 100,
            reward: false,
            outer_cap: None,
            improving: (F::cast(0.1), F::cast(0.8)),
            exploring: (F::cast(0.1), F::cast(0.8), F::cast(0.9), F::cast(0.7)),
            rng,
        }
    }

    /// Sets the random generator used for pair sampling and acceptance draws
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> Ese<F, R2> {
        Ese {
            objective: self.objective,
            threshold_init: self.threshold_init,
            n_exchanges: self.n_exchanges,
            max_inner: self.max_inner,
            max_outer: self.max_outer,
            reward: self.reward,
            outer_cap: self.outer_cap,
            improving: self.improving,
            exploring: self.exploring,
            rng,
        }
    }

    /// Sets the uniformity criterion by name; `"w2_discrepancy"` is the one
    /// recognized value. Unknown names make [Ese::optimize] fail before any
    /// computation.
    pub fn objective(mut self, name: &str) -> Self {
        self.objective = name.to_string();
        self
    }

    /// Sets the initial acceptance threshold. A non-positive value (the
    /// default) stands for `0.005 x criterion(initial design)`.
    pub fn threshold(mut self, threshold_init: F) -> Self {
        self.threshold_init = threshold_init;
        self
    }

    /// Sets the number of exchange candidates scored per perturbation.
    /// 0 (the default) stands for `min(n_pairs / 5, 50)` where `n_pairs`
    /// is the number of distinct row pairs of the design.
    pub fn exchanges(mut self, n_exchanges: usize) -> Self {
        self.n_exchanges = n_exchanges;
        self
    }

    /// Sets the number of inner iterations per outer sweep. 0 (the default)
    /// stands for `min(2 * n_pairs * nx / n_exchanges, 100)`.
    pub fn inner_iters(mut self, max_inner: usize) -> Self {
        self.max_inner = max_inner;
        self
    }

    /// Sets the outer iteration budget (default 100)
    pub fn outer_iters(mut self, max_outer: usize) -> Self {
        self.max_outer = max_outer;
        self
    }

    /// Enables refunding of improving outer sweeps: a sweep that finds a new
    /// best design does not count against the outer budget, it is credited
    /// back instead.
    ///
    /// A run where improvements keep arriving can therefore exceed
    /// `max_outer` sweeps by an unbounded amount; combine with
    /// [Ese::outer_cap] to bound the wall-clock cost.
    pub fn reward(mut self, reward: bool) -> Self {
        self.reward = reward;
        self
    }

    /// Caps the total number of outer sweeps regardless of refunds granted
    /// by [Ese::reward]. Off by default.
    pub fn outer_cap(mut self, cap: usize) -> Self {
        self.outer_cap = Some(cap);
        self
    }

    /// Sets the improving-phase parameters: acceptance-ratio cut-off above
    /// which the threshold is tightened, and the tightening multiplier
    /// (default `(0.1, 0.8)`).
    pub fn improving_params(mut self, params: (F, F)) -> Self {
        self.improving = params;
        self
    }

    /// Sets the exploring-phase parameters: lower and upper acceptance-ratio
    /// cut-offs, cooling multiplier and warming divisor
    /// (default `(0.1, 0.8, 0.9, 0.7)`).
    pub fn exploring_params(mut self, params: (F, F, F, F)) -> Self {
        self.exploring = params;
        self
    }

    /// Optimizes the given `(ns, nx)` design on the unit hypercube.
    ///
    /// The design is expected to carry a Latin Hypercube structure; the
    /// optimizer does not validate it but preserves whatever column
    /// multisets it is given. Fails before any search on an unknown
    /// criterion name or a design with fewer than 2 columns, and at the
    /// first perturbation when more exchanges are requested than row pairs
    /// exist. The run itself cannot fail: the best design found within the
    /// budget is always returned, even when nothing beat the initial one.
    pub fn optimize(&self, dm: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Result<EseResult<F>> {
        let criterion: Criterion = self.objective.parse()?;
        let n = dm.nrows();
        let k = dm.ncols();
        if k < 2 {
            return Err(EseError::InvalidDimension(k));
        }
        let mut rng = self.rng.clone();

        let n_pairs = n * (n - 1) / 2;
        let n_exchanges = if self.n_exchanges == 0 {
            cmp::max(cmp::min(n_pairs / 5, 50), 1)
        } else {
            self.n_exchanges
        };
        let max_inner = if self.max_inner == 0 {
            cmp::min(2 * n_pairs * k / n_exchanges, 100)
        } else {
            self.max_inner
        };
        let mut threshold = if self.threshold_init <= F::zero() {
            F::cast(0.005) * criterion.evaluate(dm)
        } else {
            self.threshold_init
        };
        info!(
            "ESE run on a {}x{} design: criterion={:?}, threshold={}, exchanges={}, inner={}, outer={}",
            n, k, criterion, threshold, n_exchanges, max_inner, self.max_outer
        );

        let dm_init = dm.to_owned();
        let mut current = dm.to_owned();
        let mut current_obj = criterion.evaluate(&current);
        let mut best = current.clone();
        let mut best_obj = current_obj;
        let mut best_history = vec![best_obj];
        let mut accepted_history = Vec::new();

        let mut phase = Phase::Improving;
        let mut outer: i64 = 0;
        let mut sweeps = 0usize;
        while outer < self.max_outer as i64 {
            let prev_best = best_obj;
            let mut n_accepted = 0;
            let mut n_improved = 0;

            for inner in 0..max_inner {
                let column = inner % k;
                let (candidate, candidate_obj) =
                    perturb(&current, column, n_exchanges, &criterion, &mut rng)?;

                // A worse candidate may still pass, scaled by the threshold;
                // a better one always does.
                if candidate_obj - current_obj <= threshold * F::cast(rng.gen::<f64>()) {
                    current = candidate;
                    current_obj = candidate_obj;
                    n_accepted += 1;
                    accepted_history.push(candidate_obj);

                    if candidate_obj < best_obj {
                        best = current.clone();
                        best_obj = candidate_obj;
                        n_improved += 1;
                    }
                }
            }
            best_history.push(best_obj);

            let improved = (prev_best - best_obj) / best_obj > F::cast(1e-6);
            if improved && self.reward {
                outer -= 1;
            } else {
                outer += 1;
            }
            sweeps += 1;

            let (next_phase, next_threshold) = adjust(
                threshold,
                improved,
                phase,
                n_accepted,
                n_improved,
                n_exchanges,
                self.improving,
                self.exploring,
            );
            phase = next_phase;
            threshold = next_threshold;
            debug!(
                "sweep {}: accepted={}, improved={}, best={}, threshold={}",
                sweeps, n_accepted, n_improved, best_obj, threshold
            );

            if let Some(cap) = self.outer_cap {
                if sweeps >= cap {
                    info!("outer sweep cap {} reached", cap);
                    break;
                }
            }
        }

        Ok(EseResult {
            dm_init,
            dm_best: best,
            best_history,
            accepted_history,
        })
    }
}
