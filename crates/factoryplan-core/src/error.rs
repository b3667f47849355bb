//! Unified error type for the factory-planner ecosystem.
//!
//! [`FactoryError`] is shared by every crate in the workspace: recipe
//! normalization, LP model building, solving, and config loading all return
//! `Result<_, FactoryError>` so a caller handles one enum regardless of which
//! layer failed.

use thiserror::Error;

/// Unified error type for all factory-planning operations.
#[derive(Error, Debug)]
pub enum FactoryError {
    /// Ill-formed JSON/YAML config, or a schema mismatch.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A tier name did not match any known `VoltageTier`.
    #[error("unknown voltage tier: {0}")]
    UnknownVoltageTier(String),

    /// An item name referenced by a target has no producing recipe or source.
    #[error("unknown item: {0}")]
    UnknownItemName(String),

    /// A recipe's duration was zero or negative.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// A recipe had neither inputs nor outputs.
    #[error("recipe '{0}' has no inputs and no outputs")]
    EmptyRecipe(String),

    /// A recipe's base voltage tier exceeds the machine tier it is run at.
    #[error("recipe '{machine}' requires tier {recipe_tier} but machine is tier {machine_tier}")]
    RecipeExceedsMachineTier {
        machine: String,
        recipe_tier: u8,
        machine_tier: u8,
    },

    /// The solver reported the LP as infeasible for the given target.
    #[error("target unreachable: {item} @ {quantity_per_second}/s")]
    TargetUnreachable { item: String, quantity_per_second: f64 },

    /// The black-box LP solver emitted an internal failure.
    #[error("solver error: {0}")]
    SolverError(String),

    /// I/O failure reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias, mirrored across every crate in the workspace.
pub type FactoryResult<T> = Result<T, FactoryError>;

impl From<serde_json::Error> for FactoryError {
    fn from(err: serde_json::Error) -> Self {
        FactoryError::ConfigParse(err.to_string())
    }
}

impl From<serde_yaml::Error> for FactoryError {
    fn from(err: serde_yaml::Error) -> Self {
        FactoryError::ConfigParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_variant_context() {
        let err = FactoryError::RecipeExceedsMachineTier {
            machine: "EBF".into(),
            recipe_tier: 3,
            machine_tier: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("EBF"));
        assert!(msg.contains('3'));
        assert!(msg.contains('1'));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FactoryError = io_err.into();
        assert!(matches!(err, FactoryError::Io(_)));
    }
}
