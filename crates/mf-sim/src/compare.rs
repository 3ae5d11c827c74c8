//! Head-to-head comparison of two agents over random tasks.

use mf_behavior::{Agent, Memory};
use mf_core::{SimRng, TrialConfig};
use mf_graph::RoadGraph;
use mf_village::VillageState;

use crate::{NoopObserver, SimError, SimObserver, SimResult, run_agent};

/// Aggregate turn counts from [`compare_agents`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub trials:  usize,
    pub total_a: u64,
    pub total_b: u64,
}

impl Comparison {
    /// Mean turns per task for the first agent.
    pub fn mean_a(&self) -> f64 {
        self.total_a as f64 / self.trials as f64
    }

    /// Mean turns per task for the second agent.
    pub fn mean_b(&self) -> f64 {
        self.total_b as f64 / self.trials as f64
    }
}

/// Everything one trial needs, drawn before any trial runs.
struct Trial {
    task:  VillageState,
    rng_a: SimRng,
    rng_b: SimRng,
}

/// Run both agents on `config.trials` random tasks and total their turns.
///
/// Each task is generated once and handed to both agents, so they are
/// measured on identical work.  Tasks and per-agent RNG streams all come
/// from one `SimRng` seeded with `config.seed`: the same config always gives
/// the same result, with or without the `parallel` feature.
///
/// `observer` receives one `on_trial_end` per trial, in trial order.
/// Individual turns are not reported.
pub fn compare_agents<A, B, O>(
    graph:    &RoadGraph,
    (agent_a, memory_a): (&A, Memory),
    (agent_b, memory_b): (&B, Memory),
    config:   &TrialConfig,
    observer: &mut O,
) -> SimResult<Comparison>
where
    A: Agent + ?Sized,
    B: Agent + ?Sized,
    O: SimObserver + ?Sized,
{
    if config.trials == 0 {
        return Err(SimError::Config("trials must be at least 1".into()));
    }
    let start = graph.require(&config.start)?;

    // ── Draw every task and RNG stream up front (sequential) ──────────────
    let mut root = SimRng::new(config.seed);
    let mut trials = Vec::with_capacity(config.trials);
    for i in 0..config.trials as u64 {
        let task = VillageState::random(graph, start, config.parcel_count, root.inner())?;
        let rng_a = root.child(2 * i);
        let rng_b = root.child(2 * i + 1);
        trials.push(Trial { task, rng_a, rng_b });
    }

    let run_trial = |mut t: Trial| -> SimResult<(u64, u64)> {
        let turns_a = run_agent(
            graph, t.task.clone(), agent_a, memory_a.clone(), t.rng_a.inner(), &mut NoopObserver,
        )?;
        let turns_b = run_agent(
            graph, t.task, agent_b, memory_b.clone(), t.rng_b.inner(), &mut NoopObserver,
        )?;
        Ok((turns_a, turns_b))
    };

    // ── Run trials ────────────────────────────────────────────────────────
    #[cfg(feature = "parallel")]
    let results: Vec<(u64, u64)> = {
        use rayon::prelude::*;
        trials.into_par_iter().map(run_trial).collect::<SimResult<_>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<(u64, u64)> =
        trials.into_iter().map(run_trial).collect::<SimResult<_>>()?;

    // ── Report in trial order ─────────────────────────────────────────────
    let mut total_a = 0;
    let mut total_b = 0;
    for (i, &(turns_a, turns_b)) in results.iter().enumerate() {
        observer.on_trial_end(i, turns_a, turns_b);
        total_a += turns_a;
        total_b += turns_b;
    }

    Ok(Comparison { trials: config.trials, total_a, total_b })
}
