/*!
This library optimizes the space-filling uniformity of
[Latin Hypercube designs](https://en.wikipedia.org/wiki/Latin_hypercube_sampling)
with the Enhanced Stochastic Evolutionary (ESE) algorithm.

A design is an `(ns, nx)` matrix of values in `[0, 1)` whose columns each
hold exactly one value per interval `[i/ns, (i+1)/ns)`. The optimizer walks
the neighborhood obtained by swapping two values within one column, which
keeps that structure intact, and accepts candidates through an adaptive
threshold steering the search between exploitation and exploration. The
uniformity of a design is measured by its wrap-around L2-discrepancy,
lower values meaning a better spread.

Example:
```
use lhsopt::{Ese, Lhd};
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

// A 10-point, 3-dimensional stratified design on the unit hypercube.
let design = Lhd::new()
    .with_rng(Xoshiro256Plus::seed_from_u64(42))
    .sample::<f64>(10, 3);

// Improve its wrap-around L2-discrepancy within 5 outer iterations.
let res = Ese::new()
    .with_rng(Xoshiro256Plus::seed_from_u64(42))
    .outer_iters(5)
    .optimize(&design)
    .unwrap();
assert!(res.best_objective() <= lhsopt::w2_discrepancy(&design));
```

**References**

* R. Jin, W. Chen, and A. Sudjianto, "An Efficient Algorithm for
  Constructing Optimal Design of Computer Experiments," Proceedings of
  DETC'03, ASME Design Engineering Technical Conferences, Chicago, 2003.
* K.T. Fang and C.X. Ma, "Wrap-Around L2-Discrepancy of Random Sampling,
  Latin Hypercube, and Uniform Designs," Journal of Complexity, vol. 17,
  pp. 608-624, 2001.
*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod criteria;
mod errors;
mod ese;
mod lhs;
mod perturb;
mod random;
mod threshold;

pub use criteria::*;
pub use errors::*;
pub use ese::*;
pub use lhs::*;
pub use perturb::*;
pub use random::*;
