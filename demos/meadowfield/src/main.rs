//! meadowfield — delivery agents on the Meadowfield village graph.
//!
//! Runs every built-in agent on one shared random task, logging each move,
//! then compares neighboring agents head to head over many random tasks.
//!
//! ```text
//! meadowfield [config.json]
//! RUST_LOG=debug meadowfield        # also log every move
//! ```

mod observer;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mf_behavior::{Agent, AgentKind};
use mf_core::{SimRng, TrialConfig};
use mf_graph::meadowfield;
use mf_sim::{compare_agents, run_agent};
use mf_village::VillageState;

use observer::TracingObserver;

/// Load the trial config from `path`, or use defaults when none is given.
fn load_config(path: Option<&Path>) -> Result<TrialConfig> {
    let Some(path) = path else {
        return Ok(TrialConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;
    info!(
        seed = config.seed,
        trials = config.trials,
        parcels = config.parcel_count,
        start = %config.start,
        "configuration loaded"
    );

    // 1. Build the village.
    let graph = meadowfield()?;
    info!(
        locations = graph.location_count(),
        roads = graph.road_count() / 2,
        "road graph built"
    );

    let agents = AgentKind::LABELS
        .iter()
        .map(|label| AgentKind::from_label(label, &graph))
        .collect::<Result<Vec<_>, _>>()?;

    // 2. Every agent on the same task.
    let start = graph.require(&config.start)?;
    let mut rng = SimRng::new(config.seed);
    let task = VillageState::random(&graph, start, config.parcel_count, rng.inner())?;

    println!();
    println!("=== single task ({} parcels) ===", task.parcel_count());
    for agent in &agents {
        let mut observer = TracingObserver::new(&graph);
        let turns = run_agent(
            &graph,
            task.clone(),
            agent,
            agent.initial_memory(),
            rng.inner(),
            &mut observer,
        )?;
        println!("  {:<8} {turns:>4} turns", agent.name());
    }

    // 3. Head-to-head comparisons over random tasks.
    println!();
    println!("=== {} trials, seed {} ===", config.trials, config.seed);
    for pair in agents.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let mut observer = TracingObserver::new(&graph);
        let cmp = compare_agents(
            &graph,
            (a, a.initial_memory()),
            (b, b.initial_memory()),
            &config,
            &mut observer,
        )?;
        info!(
            a = a.name(),
            b = b.name(),
            mean_a = cmp.mean_a(),
            mean_b = cmp.mean_b(),
            "comparison finished"
        );
        println!(
            "  {:<8} {:>6.2} turns/task   vs   {:<8} {:>6.2} turns/task",
            a.name(),
            cmp.mean_a(),
            b.name(),
            cmp.mean_b(),
        );
    }

    Ok(())
}
