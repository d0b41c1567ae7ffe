//! Adaptive acceptance-threshold control for the ESE outer loop.
//!
//! The controller is a two-phase hysteresis machine rather than a monotone
//! cooling schedule: it may tighten or loosen the threshold in either phase
//! depending on the acceptance statistics of the last outer sweep.

use linfa::Float;

/// Operating mode of the threshold controller.
///
/// The improving phase is (re)entered whenever an outer sweep found a new
/// best design; otherwise the controller explores, remembering whether it
/// was last warming (loosening) or cooling (tightening).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Improving,
    Exploring { warming: bool },
}

/// Pure transition of the acceptance threshold after one outer sweep.
///
/// `n_accepted` and `n_improved` are the sweep's counters and `n_exchanges`
/// the number of candidates scored per perturbation; their ratio drives the
/// decision. Returns the next phase together with the updated threshold.
#[allow(clippy::too_many_arguments)]
pub(crate) fn adjust<F: Float>(
    threshold: F,
    improved: bool,
    phase: Phase,
    n_accepted: usize,
    n_improved: usize,
    n_exchanges: usize,
    improving: (F, F),
    exploring: (F, F, F, F),
) -> (Phase, F) {
    let ratio = F::cast(n_accepted as f64 / n_exchanges as f64);
    if improved {
        // Many acceptances of which only a part improved: the search is too
        // lax, tighten. Otherwise loosen to keep the neighborhood alive.
        let threshold = if ratio > improving.0 && n_accepted > n_improved {
            threshold * improving.1
        } else {
            threshold / improving.1
        };
        (Phase::Improving, threshold)
    } else {
        let warming = match phase {
            Phase::Exploring { warming } => warming,
            Phase::Improving => false,
        };
        // The flag only flips outside the [lower, upper] acceptance band.
        let warming = if ratio < exploring.0 {
            true
        } else if ratio > exploring.1 {
            false
        } else {
            warming
        };
        let threshold = if warming {
            threshold / exploring.3
        } else {
            threshold * exploring.2
        };
        (Phase::Exploring { warming }, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const IMPROVING: (f64, f64) = (0.1, 0.8);
    const EXPLORING: (f64, f64, f64, f64) = (0.1, 0.8, 0.9, 0.7);

    #[test]
    fn test_improving_tightens_when_lax() {
        // 10/20 accepted, 3 improved: acceptance is high but mostly lateral.
        let (phase, t) = adjust(1.0, true, Phase::Improving, 10, 3, 20, IMPROVING, EXPLORING);
        assert_eq!(phase, Phase::Improving);
        assert_abs_diff_eq!(t, 0.8);
    }

    #[test]
    fn test_improving_loosens_when_scarce() {
        let (phase, t) = adjust(1.0, true, Phase::Improving, 1, 1, 20, IMPROVING, EXPLORING);
        assert_eq!(phase, Phase::Improving);
        assert_abs_diff_eq!(t, 1.0 / 0.8);
    }

    #[test]
    fn test_improving_loosens_when_all_accepted_improve() {
        // High acceptance but every accepted trial improved.
        let (_, t) = adjust(1.0, true, Phase::Improving, 10, 10, 20, IMPROVING, EXPLORING);
        assert_abs_diff_eq!(t, 1.0 / 0.8);
    }

    #[test]
    fn test_exploring_starts_warming_below_cutoff() {
        let (phase, t) = adjust(1.0, false, Phase::Improving, 1, 0, 20, IMPROVING, EXPLORING);
        assert_eq!(phase, Phase::Exploring { warming: true });
        assert_abs_diff_eq!(t, 1.0 / 0.7);
    }

    #[test]
    fn test_exploring_cools_above_cutoff() {
        let (phase, t) = adjust(1.0, false, Phase::Improving, 18, 0, 20, IMPROVING, EXPLORING);
        assert_eq!(phase, Phase::Exploring { warming: false });
        assert_abs_diff_eq!(t, 0.9);
    }

    #[test]
    fn test_exploring_flag_persists_inside_band() {
        // Acceptance ratio between the cutoffs keeps the previous flag.
        let prev = Phase::Exploring { warming: true };
        let (phase, t) = adjust(1.0, false, prev, 10, 0, 20, IMPROVING, EXPLORING);
        assert_eq!(phase, Phase::Exploring { warming: true });
        assert_abs_diff_eq!(t, 1.0 / 0.7);

        let prev = Phase::Exploring { warming: false };
        let (phase, t) = adjust(1.0, false, prev, 10, 0, 20, IMPROVING, EXPLORING);
        assert_eq!(phase, Phase::Exploring { warming: false });
        assert_abs_diff_eq!(t, 0.9);
    }
}
