//! An inspectable, solver-agnostic constraint system.
//!
//! Rather than assigning named variables as dynamic attributes on a live
//! solver-model object, [`crate::builder`] produces this explicit data
//! structure: a variable table, an ordered constraint list, and an
//! objective, all testable without touching a solver. [`crate::solver`] is
//! the only module that knows how to hand this to an actual LP solver.

use indexmap::IndexMap;
use std::fmt;

/// The feasible domain of a variable. Only these two domains are
/// recognized; sign constraints beyond "non-negative" (e.g. `SOURCE_<x> <=
/// 0`) are expressed as ordinary constraints, not domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Real,
    NonNegativeReal,
}

/// A linear combination of named variables plus a constant term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    pub terms: IndexMap<String, f64>,
    pub constant: f64,
}

impl LinearExpr {
    pub fn constant(value: f64) -> LinearExpr {
        LinearExpr {
            terms: IndexMap::new(),
            constant: value,
        }
    }

    pub fn term(name: impl Into<String>, coefficient: f64) -> LinearExpr {
        let mut terms = IndexMap::new();
        terms.insert(name.into(), coefficient);
        LinearExpr {
            terms,
            constant: 0.0,
        }
    }

    pub fn add_term(&mut self, name: impl Into<String>, coefficient: f64) -> &mut Self {
        *self.terms.entry(name.into()).or_insert(0.0) += coefficient;
        self
    }

    pub fn add(&mut self, other: &LinearExpr) -> &mut Self {
        for (name, coeff) in &other.terms {
            *self.terms.entry(name.clone()).or_insert(0.0) += coeff;
        }
        self.constant += other.constant;
        self
    }

    pub fn sub(&mut self, other: &LinearExpr) -> &mut Self {
        for (name, coeff) in &other.terms {
            *self.terms.entry(name.clone()).or_insert(0.0) -= coeff;
        }
        self.constant -= other.constant;
        self
    }
}

impl fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, coeff) in &self.terms {
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "{coeff}*{name}")?;
            first = false;
        }
        if self.constant != 0.0 || first {
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "{}", self.constant)?;
        }
        Ok(())
    }
}

/// The relation between a constraint's linear expression and zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Eq,
    Le,
    Ge,
}

/// One constraint: `expr <relation> 0`, where `expr` already folds the
/// original `lhs <relation> rhs` into a single expression (`lhs - rhs`).
#[derive(Debug, Clone)]
pub struct Constraint {
    pub expr: LinearExpr,
    pub relation: Relation,
    pub label: String,
}

impl Constraint {
    pub fn new(label: impl Into<String>, expr: LinearExpr, relation: Relation) -> Constraint {
        Constraint {
            expr,
            relation,
            label: label.into(),
        }
    }
}

/// The full linear program: variable declarations, ordered constraints, and
/// an objective to minimize. Produced once by [`crate::builder::build`],
/// consumed once by [`crate::solver::solve`].
#[derive(Debug, Clone, Default)]
pub struct ConstraintSystem {
    pub vars: IndexMap<String, Domain>,
    pub constraints: Vec<Constraint>,
    pub objective: LinearExpr,
}

impl ConstraintSystem {
    pub fn new() -> ConstraintSystem {
        ConstraintSystem::default()
    }

    /// Declares `name` with `domain`, returning the name unchanged for
    /// convenient chaining. Re-declaring the same name with a different
    /// domain silently keeps the first one; callers are expected never to
    /// do that.
    pub fn declare(&mut self, name: impl Into<String>, domain: Domain) -> String {
        let name = name.into();
        self.vars.entry(name.clone()).or_insert(domain);
        name
    }

    pub fn constrain(&mut self, label: impl Into<String>, expr: LinearExpr, relation: Relation) {
        self.constraints.push(Constraint::new(label, expr, relation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_preserves_insertion_order() {
        let mut system = ConstraintSystem::new();
        system.declare("M0", Domain::NonNegativeReal);
        system.declare("SOURCE_water", Domain::Real);
        system.declare("M1", Domain::NonNegativeReal);
        let names: Vec<&str> = system.vars.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["M0", "SOURCE_water", "M1"]);
    }

    #[test]
    fn linear_expr_add_and_sub_combine_terms() {
        let mut a = LinearExpr::term("x", 1.0);
        let b = LinearExpr::term("x", 2.0);
        a.add(&b);
        assert_eq!(a.terms["x"], 3.0);
        a.sub(&b);
        assert_eq!(a.terms["x"], 1.0);
    }
}
