//! Hands a [`ConstraintSystem`] to an LP solver and reports what came back.
//!
//! Uses `good_lp`'s `microlp` backend: a pure-Rust simplex implementation,
//! so this crate never needs a system solver installed to run. Constraints
//! here are built dynamically (one per named [`crate::model::Constraint`]),
//! so we reach for `Expression::{eq,leq,geq}` rather than the `constraint!`
//! macro, which assumes a constraint written out at the call site.

use crate::model::{ConstraintSystem, Domain, Relation};
use factoryplan_core::FactoryError;
use good_lp::solvers::microlp::microlp;
use good_lp::{variable, Expression, ResolutionError, Solution, SolverModel, Variable};
use indexmap::IndexMap;
use std::collections::HashMap;

/// How the solve attempt concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
}

/// The solved values for every declared variable, in declaration order, plus
/// the resulting objective value. Only populated when `status` is `Optimal`.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub status: SolveStatus,
    pub values: IndexMap<String, f64>,
    pub objective: f64,
}

/// A wide-but-finite bound for nominally unbounded variables. `microlp`
/// models an unbounded LP var as a finite box; this is large enough that no
/// plan in this domain's scale plausibly saturates it, while staying small
/// enough to keep the simplex tableau well conditioned.
const WIDE_BOUND: f64 = 1.0e12;

/// Builds and solves `system`, translating every named variable, constraint,
/// and the objective into `good_lp` terms. Returns `FactoryError::SolverError`
/// only for solver failures that aren't infeasibility/unboundedness (e.g. a
/// numerical failure inside `microlp` itself); those two outcomes are
/// reported as [`SolveStatus`] values instead, since a caller presenting an
/// unreachable target is an ordinary outcome, not a bug.
pub fn solve(system: &ConstraintSystem) -> Result<SolveResult, FactoryError> {
    let mut builder = good_lp::variables!();
    let mut handles: HashMap<&str, Variable> = HashMap::with_capacity(system.vars.len());

    for (name, domain) in &system.vars {
        let var = match domain {
            Domain::Real => builder.add(variable().min(-WIDE_BOUND).max(WIDE_BOUND)),
            Domain::NonNegativeReal => builder.add(variable().min(0.0).max(WIDE_BOUND)),
        };
        handles.insert(name.as_str(), var);
    }

    let objective = to_expression(&system.objective, &handles);
    let mut problem = builder.minimise(objective).using(microlp);

    for constraint in &system.constraints {
        let expr = to_expression(&constraint.expr, &handles);
        let built = match constraint.relation {
            Relation::Eq => expr.eq(0.0),
            Relation::Le => expr.leq(0.0),
            Relation::Ge => expr.geq(0.0),
        };
        problem = problem.with(built);
    }

    match problem.solve() {
        Ok(solution) => {
            let mut values = IndexMap::with_capacity(system.vars.len());
            let mut objective_value = 0.0;
            for (name, _) in &system.vars {
                let var = handles[name.as_str()];
                let value = solution.value(var);
                values.insert(name.clone(), value);
            }
            for (name, coeff) in &system.objective.terms {
                objective_value += coeff * values.get(name).copied().unwrap_or(0.0);
            }
            objective_value += system.objective.constant;
            Ok(SolveResult {
                status: SolveStatus::Optimal,
                values,
                objective: objective_value,
            })
        }
        Err(ResolutionError::Infeasible) => Ok(SolveResult {
            status: SolveStatus::Infeasible,
            values: IndexMap::new(),
            objective: 0.0,
        }),
        Err(ResolutionError::Unbounded) => Ok(SolveResult {
            status: SolveStatus::Unbounded,
            values: IndexMap::new(),
            objective: 0.0,
        }),
        Err(other) => Err(FactoryError::SolverError(format!("{other:?}"))),
    }
}

fn to_expression(expr: &crate::model::LinearExpr, handles: &HashMap<&str, Variable>) -> Expression {
    let mut out = Expression::from(expr.constant);
    for (name, coeff) in &expr.terms {
        let var = handles[name.as_str()];
        out += *coeff * var;
    }
    out
}
