//! Integration tests for mf-sim.

use rand::RngCore;
use rand::rngs::mock::StepRng;

use mf_behavior::{
    Agent, AgentError, AgentResult, Decision, FixedRouteAgent, GoalOrientedAgent, Memory,
    RandomAgent, ScoringAgent,
};
use mf_core::{LocationId, SimRng, TrialConfig};
use mf_graph::{GraphError, RoadGraph, meadowfield};
use mf_village::{Parcel, VillageState};

use crate::{NoopObserver, Sim, SimError, SimObserver, compare_agents, run_agent};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn village() -> RoadGraph {
    meadowfield().unwrap()
}

fn id(graph: &RoadGraph, name: &str) -> LocationId {
    graph.location(name).unwrap()
}

fn config(seed: u64, trials: usize) -> TrialConfig {
    TrialConfig { seed, trials, ..TrialConfig::default() }
}

/// Records every callback for later inspection.
#[derive(Default)]
struct Recorder {
    started:  Vec<String>,
    moves:    Vec<(u64, LocationId, LocationId)>,
    finished: Vec<(String, u64)>,
    trials:   Vec<(usize, u64, u64)>,
}

impl SimObserver for Recorder {
    fn on_run_start(&mut self, agent: &str, _state: &VillageState) {
        self.started.push(agent.to_owned());
    }

    fn on_turn(&mut self, turn: u64, direction: LocationId, state: &VillageState) {
        self.moves.push((turn, direction, state.place));
    }

    fn on_run_end(&mut self, agent: &str, turns: u64) {
        self.finished.push((agent.to_owned(), turns));
    }

    fn on_trial_end(&mut self, trial: usize, turns_a: u64, turns_b: u64) {
        self.trials.push((trial, turns_a, turns_b));
    }
}

/// Tries an illegal move first, then defers to the goal-oriented planner.
struct Clumsy {
    nowhere: LocationId,
}

impl Agent for Clumsy {
    fn name(&self) -> &'static str {
        "clumsy"
    }

    fn initial_memory(&self) -> Memory {
        [self.nowhere].into_iter().collect()
    }

    fn decide(
        &self,
        state:  &VillageState,
        mut memory: Memory,
        graph:  &RoadGraph,
        rng:    &mut dyn RngCore,
    ) -> AgentResult<Decision> {
        match memory.pop_next() {
            Some(direction) => Ok(Decision { direction, memory }),
            None => GoalOrientedAgent.decide(state, memory, graph, rng),
        }
    }
}

// ── Sim / run_agent ───────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn finished_task_takes_zero_turns() {
        let g = village();
        let state = VillageState::new(id(&g, "Post Office"), vec![]);
        let mut rec = Recorder::default();
        let turns = run_agent(&g, state, &GoalOrientedAgent, Memory::empty(), &mut StepRng::new(0, 0), &mut rec)
            .unwrap();
        assert_eq!(turns, 0);
        assert_eq!(rec.started, ["goal"]);
        assert_eq!(rec.finished, [("goal".to_owned(), 0)]);
        assert!(rec.moves.is_empty());
    }

    #[test]
    fn single_adjacent_delivery() {
        let g = village();
        let post = id(&g, "Post Office");
        let alice = id(&g, "Alice's House");
        let state = VillageState::new(post, vec![Parcel::new(post, alice)]);
        let mut rec = Recorder::default();

        let turns = run_agent(&g, state, &GoalOrientedAgent, Memory::empty(), SimRng::new(0).inner(), &mut rec)
            .unwrap();
        assert_eq!(turns, 1);
        assert_eq!(rec.moves, [(1, alice, alice)]);
    }

    #[test]
    fn observer_sees_every_turn() {
        let g = village();
        let mut rng = SimRng::new(17);
        let task = VillageState::random(&g, id(&g, "Post Office"), 5, rng.inner()).unwrap();
        let mut rec = Recorder::default();

        let turns = run_agent(&g, task, &ScoringAgent, Memory::empty(), rng.inner(), &mut rec).unwrap();
        assert_eq!(rec.moves.len() as u64, turns);
        let numbers: Vec<u64> = rec.moves.iter().map(|m| m.0).collect();
        assert_eq!(numbers, (1..=turns).collect::<Vec<_>>());
    }

    #[test]
    fn illegal_move_costs_a_turn_but_changes_nothing() {
        let g = village();
        let post = id(&g, "Post Office");
        let farm = id(&g, "Farm");
        let alice = id(&g, "Alice's House");
        let state = VillageState::new(post, vec![Parcel::new(post, alice)]);
        let agent = Clumsy { nowhere: farm };
        let mut rec = Recorder::default();

        let turns = run_agent(&g, state, &agent, agent.initial_memory(), &mut StepRng::new(0, 0), &mut rec)
            .unwrap();
        assert_eq!(turns, 2);
        assert_eq!(rec.moves[0], (1, farm, post)); // refused, still at the post office
        assert_eq!(rec.moves[1], (2, alice, alice));
    }

    #[test]
    fn step_by_step_matches_run() {
        let g = village();
        let task = VillageState::random(&g, id(&g, "Post Office"), 5, SimRng::new(4).inner()).unwrap();

        let mut stepped = Sim::new(&g, &GoalOrientedAgent, task.clone(), Memory::empty());
        let mut rng = StepRng::new(0, 0);
        while !stepped.is_done() {
            stepped.step(&mut rng).unwrap();
        }
        let ran = run_agent(&g, task, &GoalOrientedAgent, Memory::empty(), &mut rng, &mut NoopObserver)
            .unwrap();
        assert_eq!(stepped.turns, ran);
    }

    #[test]
    fn task_is_not_consumed_by_run() {
        let g = village();
        let task = VillageState::random(&g, id(&g, "Post Office"), 5, SimRng::new(6).inner()).unwrap();
        let before = task.clone();
        run_agent(&g, task.clone(), &ScoringAgent, Memory::empty(), SimRng::new(0).inner(), &mut NoopObserver)
            .unwrap();
        assert_eq!(task, before);
    }

    #[test]
    fn routing_failure_aborts_run() {
        let g = RoadGraph::from_edges(["A-B", "C-D"]).unwrap();
        let state = VillageState::new(id(&g, "A"), vec![Parcel::new(id(&g, "C"), id(&g, "D"))]);
        let err = run_agent(&g, state, &GoalOrientedAgent, Memory::empty(), &mut StepRng::new(0, 0), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, SimError::Agent(AgentError::Routing(GraphError::Unreachable { .. }))));
    }

    #[test]
    fn random_agent_finishes() {
        let g = village();
        let mut rng = SimRng::new(2);
        let task = VillageState::random(&g, id(&g, "Post Office"), 5, rng.inner()).unwrap();
        let turns = run_agent(&g, task, &RandomAgent, Memory::empty(), rng.inner(), &mut NoopObserver).unwrap();
        assert!(turns > 0);
    }
}

// ── compare_agents ────────────────────────────────────────────────────────────

#[cfg(test)]
mod compare_tests {
    use super::*;

    #[test]
    fn same_seed_same_means() {
        let g = village();
        let run = || {
            compare_agents(
                &g,
                (&RandomAgent, Memory::empty()),
                (&GoalOrientedAgent, Memory::empty()),
                &config(1234, 100),
                &mut NoopObserver,
            )
            .unwrap()
        };
        let first = run();
        let second = run();
        assert_eq!(first, second);
        assert_eq!(first.mean_a(), second.mean_a());
        assert_eq!(first.mean_b(), second.mean_b());
    }

    #[test]
    fn scoring_no_worse_than_goal() {
        let g = village();
        let cmp = compare_agents(
            &g,
            (&ScoringAgent, Memory::empty()),
            (&GoalOrientedAgent, Memory::empty()),
            &config(42, 100),
            &mut NoopObserver,
        )
        .unwrap();
        assert!(cmp.mean_a() <= cmp.mean_b(), "scoring {} vs goal {}", cmp.mean_a(), cmp.mean_b());
    }

    #[test]
    fn identical_agents_tie_on_shared_tasks() {
        let g = village();
        let cmp = compare_agents(
            &g,
            (&GoalOrientedAgent, Memory::empty()),
            (&GoalOrientedAgent, Memory::empty()),
            &config(7, 50),
            &mut NoopObserver,
        )
        .unwrap();
        assert_eq!(cmp.total_a, cmp.total_b);
    }

    #[test]
    fn fixed_route_bounded_by_two_laps() {
        let g = village();
        let route = FixedRouteAgent::mail_route(&g).unwrap();
        let mut rec = Recorder::default();
        let cmp = compare_agents(
            &g,
            (&route, route.initial_memory()),
            (&ScoringAgent, Memory::empty()),
            &config(3, 40),
            &mut rec,
        )
        .unwrap();
        assert!(rec.trials.iter().all(|&(_, a, _)| a <= 26));
        assert!(cmp.mean_a() <= 26.0);
    }

    #[test]
    fn trial_callbacks_in_order() {
        let g = village();
        let mut rec = Recorder::default();
        let cmp = compare_agents(
            &g,
            (&ScoringAgent, Memory::empty()),
            (&GoalOrientedAgent, Memory::empty()),
            &config(9, 10),
            &mut rec,
        )
        .unwrap();
        let order: Vec<usize> = rec.trials.iter().map(|t| t.0).collect();
        assert_eq!(order, (0..10).collect::<Vec<_>>());
        assert_eq!(cmp.total_a, rec.trials.iter().map(|t| t.1).sum::<u64>());
        assert_eq!(cmp.total_b, rec.trials.iter().map(|t| t.2).sum::<u64>());
        assert!(rec.started.is_empty(), "per-run callbacks are not forwarded");
    }

    #[test]
    fn zero_trials_rejected() {
        let g = village();
        let err = compare_agents(
            &g,
            (&ScoringAgent, Memory::empty()),
            (&GoalOrientedAgent, Memory::empty()),
            &config(1, 0),
            &mut NoopObserver,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn unknown_start_rejected() {
        let g = village();
        let cfg = TrialConfig { start: "Lighthouse".into(), ..config(1, 5) };
        let err = compare_agents(
            &g,
            (&ScoringAgent, Memory::empty()),
            (&GoalOrientedAgent, Memory::empty()),
            &cfg,
            &mut NoopObserver,
        )
        .unwrap_err();
        assert_eq!(err, SimError::Graph(GraphError::UnknownLocation("Lighthouse".into())));
    }

    #[test]
    fn works_through_trait_objects() {
        let g = village();
        let a: &dyn Agent = &ScoringAgent;
        let b: &dyn Agent = &GoalOrientedAgent;
        let cmp = compare_agents(
            &g,
            (a, a.initial_memory()),
            (b, b.initial_memory()),
            &config(5, 5),
            &mut NoopObserver,
        )
        .unwrap();
        assert_eq!(cmp.trials, 5);
    }
}
