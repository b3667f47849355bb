//! # factoryplan-algo: LP model builder, solver driver, and graph extractor
//!
//! Turns a normalized [`factoryplan_core::FactoryConfig`] into a solved
//! [`graph::SolutionGraph`] in three stages:
//!
//! 1. [`builder::build`] emits a [`model::ConstraintSystem`] plus a typed
//!    [`variable_index::VariableIndex`].
//! 2. [`solver::solve`] hands that system to `good_lp`'s `microlp` backend.
//! 3. [`extractor::extract`] turns the solved values back into a graph.
//!
//! [`plan`] runs all three and is the one entry point most callers need.

pub mod builder;
pub mod extractor;
pub mod graph;
pub mod model;
pub mod solver;
pub mod variable_index;

use factoryplan_core::{FactoryConfig, FactoryError};
use graph::SolutionGraph;
use solver::SolveStatus;

/// Builds, solves, and extracts a solution graph for `config` in one call.
///
/// An infeasible LP is surfaced as [`FactoryError::TargetUnreachable`],
/// naming the first configured target — the LP does not report which
/// target specifically drove infeasibility when several are combined, so
/// this is a representative attribution, not a precise diagnosis. An
/// unbounded LP (no target rate pins the objective down) surfaces as
/// [`FactoryError::SolverError`].
pub fn plan(config: &FactoryConfig) -> Result<SolutionGraph, FactoryError> {
    let (system, index) = builder::build(config);
    let result = solver::solve(&system)?;

    match result.status {
        SolveStatus::Optimal => Ok(extractor::extract(config, &index, &result.values)),
        SolveStatus::Infeasible => {
            let target = config.targets.first();
            Err(FactoryError::TargetUnreachable {
                item: target
                    .map(|t| config.items.name(t.item).to_string())
                    .unwrap_or_else(|| "<no target configured>".to_string()),
                quantity_per_second: target.map(|t| t.quantity_per_second).unwrap_or(0.0),
            })
        }
        SolveStatus::Unbounded => Err(FactoryError::SolverError(
            "linear program is unbounded".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factoryplan_core::{FactoryConfig, GameTime, ItemStack, ItemTable, Recipe, RecipeKind, TargetRate, Voltage, VoltageTier};

    #[test]
    fn trivial_scenario_s1_matches_expected_values() {
        let mut items = ItemTable::new();
        let water = items.intern("water");
        let hydrogen = items.intern("hydrogen");
        let recipe = Recipe::new(
            "Electrolyzer",
            RecipeKind::Standard,
            VoltageTier::from_rank(1),
            vec![ItemStack::new(water, 1000.0)],
            vec![ItemStack::new(hydrogen, 1000.0)],
            GameTime::from_ticks(20).unwrap(),
            Voltage::new(8),
        )
        .unwrap();
        let config = FactoryConfig::new(items, vec![recipe], vec![TargetRate::new(hydrogen, 500.0)]);

        let (system, _) = builder::build(&config);
        let solved = solver::solve(&system).unwrap();
        assert_eq!(solved.status, SolveStatus::Optimal);
        assert!((solved.values["M0"] - 0.5).abs() < 1e-6);
        assert!((solved.values["SOURCE_water"] - (-500.0)).abs() < 1e-6);
        assert!((solved.values["SINK_hydrogen"] - 500.0).abs() < 1e-6);

        let graph = plan(&config).unwrap();
        assert!(graph.node_count() > 0);
    }

    #[test]
    fn unreachable_target_surfaces_as_target_unreachable() {
        let mut items = ItemTable::new();
        let gold = items.intern("gold");
        let config = FactoryConfig::new(items, vec![], vec![TargetRate::new(gold, 1.0)]);
        let result = plan(&config);
        assert!(matches!(result, Err(FactoryError::TargetUnreachable { .. })));
    }
}
