//! Recipe construction and the three overclock-policy variants.
//!
//! A recipe is specified at some base voltage (`v_base`) and run in a
//! machine operated at a (generally higher) voltage tier. Overclocking
//! trades power for speed: duration shrinks, energy draw per tick grows.
//! `RecipeKind` is a tagged union over the three machine families rather
//! than a base-class-plus-subclasses hierarchy: the policy is a pure
//! function of `(kind, duration, eu, machine_tier)`, not a virtual method
//! dispatch.

use crate::error::FactoryError;
use crate::game_time::GameTime;
use crate::item::ItemStack;
use crate::voltage::{Voltage, VoltageTier};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which overclock formula a machine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipeKind {
    /// Duration halves and power quadruples per tier step.
    Standard,
    /// Duration quarters and power quadruples per tier step.
    Perfect,
    /// Industrial Centrifuge-style parallel overclocking.
    Centrifuge,
}

/// A normalized recipe: ready to feed into the LP builder.
///
/// Invariant: `eu_per_gametick.tier() <= machine_tier` always holds after
/// construction via [`Recipe::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub machine_name: String,
    pub machine_tier: VoltageTier,
    pub inputs: Vec<ItemStack>,
    pub outputs: Vec<ItemStack>,
    pub duration: GameTime,
    pub eu_per_gametick: Voltage,
}

impl Recipe {
    /// Builds a normalized recipe, applying `kind`'s overclock policy to the
    /// base `(duration, eu_per_gametick)` given at `machine_tier`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        machine_name: impl Into<String>,
        kind: RecipeKind,
        machine_tier: VoltageTier,
        inputs: Vec<ItemStack>,
        outputs: Vec<ItemStack>,
        duration: GameTime,
        eu_per_gametick: Voltage,
    ) -> Result<Recipe, FactoryError> {
        let machine_name = machine_name.into();
        if inputs.is_empty() && outputs.is_empty() {
            return Err(FactoryError::EmptyRecipe(machine_name));
        }
        if duration.as_ticks() <= 0 {
            return Err(FactoryError::InvalidDuration(format!(
                "recipe '{machine_name}' has zero duration"
            )));
        }

        let recipe_tier = eu_per_gametick.tier();
        if recipe_tier.rank() > machine_tier.rank() {
            return Err(FactoryError::RecipeExceedsMachineTier {
                machine: machine_name,
                recipe_tier: recipe_tier.rank(),
                machine_tier: machine_tier.rank(),
            });
        }

        if recipe_tier == machine_tier {
            return Ok(Recipe {
                machine_name,
                machine_tier,
                inputs,
                outputs,
                duration,
                eu_per_gametick,
            });
        }

        let overclocked = apply_overclock(kind, duration, eu_per_gametick, machine_tier)?;
        let (inputs, outputs) = if overclocked.parallels > 1.0 {
            (
                scale_stacks(&inputs, overclocked.parallels),
                scale_stacks(&outputs, overclocked.parallels),
            )
        } else {
            (inputs, outputs)
        };

        Ok(Recipe {
            machine_name,
            machine_tier,
            inputs,
            outputs,
            duration: overclocked.duration,
            eu_per_gametick: overclocked.eu_per_gametick,
        })
    }
}

fn scale_stacks(stacks: &[ItemStack], factor: f64) -> Vec<ItemStack> {
    stacks
        .iter()
        .map(|s| ItemStack::new(s.item, s.quantity * factor))
        .collect()
}

struct Overclocked {
    duration: GameTime,
    eu_per_gametick: Voltage,
    parallels: f64,
}

/// Applies one of the three overclock policies. `machine_tier` must be
/// strictly above the recipe's base tier (callers that special-case equal
/// tiers never reach here).
fn apply_overclock(
    kind: RecipeKind,
    duration: GameTime,
    eu_per_gametick: Voltage,
    machine_tier: VoltageTier,
) -> Result<Overclocked, FactoryError> {
    match kind {
        RecipeKind::Standard => {
            let delta = machine_tier.rank() - eu_per_gametick.tier().rank();
            let orig_ticks = duration.as_ticks();
            let new_ticks = ((orig_ticks as f64) / 2f64.powi(delta as i32)).ceil().max(1.0) as i64;
            Ok(Overclocked {
                duration: GameTime::from_ticks(new_ticks)?,
                eu_per_gametick: eu_per_gametick.checked_mul_pow4(delta as u32),
                parallels: 1.0,
            })
        }
        RecipeKind::Perfect => {
            let delta = machine_tier.rank() - eu_per_gametick.tier().rank();
            let orig_ticks = duration.as_ticks();
            let new_ticks = ((orig_ticks as f64) / 4f64.powi(delta as i32)).ceil().max(1.0) as i64;
            Ok(Overclocked {
                duration: GameTime::from_ticks(new_ticks)?,
                eu_per_gametick: eu_per_gametick.checked_mul_pow4(delta as u32),
                parallels: 1.0,
            })
        }
        RecipeKind::Centrifuge => {
            let max_parallels = 2 * machine_tier.rank() as i64;
            let machine_max_voltage = Voltage::from_tier(machine_tier).value();
            let per_parallel_cost = (eu_per_gametick.value() as f64 * 0.9 * max_parallels as f64).max(1.0);
            let parallels = (max_parallels as f64).min((machine_max_voltage as f64 / per_parallel_cost).floor());
            let parallels = if parallels < 1.0 { 1.0 } else { parallels };

            let scaled_voltage = eu_per_gametick * parallels;
            let delta_prime = machine_tier.rank() as i64 - scaled_voltage.tier().rank() as i64;
            let delta_prime = delta_prime.max(0) as u32;

            let orig_ticks = duration.as_ticks();
            let new_ticks = ((orig_ticks as f64) / (1.8 * 4f64.powi(delta_prime as i32)))
                .ceil()
                .max(1.0) as i64;
            let new_eu = eu_per_gametick * 0.9 * 4f64.powi(delta_prime as i32);

            Ok(Overclocked {
                duration: GameTime::from_ticks(new_ticks)?,
                eu_per_gametick: new_eu,
                parallels,
            })
        }
    }
}

/// Maps machine-name aliases (case-insensitive) to a canonical name and the
/// overclock policy it runs. Unknown machine names default to `Standard`.
/// Exposed as an extension point so callers can register additional
/// machines without touching the builder.
#[derive(Debug, Clone)]
pub struct MachineRegistry {
    aliases: HashMap<String, (String, RecipeKind)>,
}

impl MachineRegistry {
    pub fn new() -> MachineRegistry {
        MachineRegistry {
            aliases: HashMap::new(),
        }
    }

    /// Registers `canonical_name` under itself plus every alias, case-insensitively.
    pub fn register(&mut self, canonical_name: &str, aliases: &[&str], policy: RecipeKind) {
        let key = canonical_name.to_ascii_lowercase();
        self.aliases
            .insert(key, (canonical_name.to_string(), policy));
        for alias in aliases {
            self.aliases.insert(
                alias.to_ascii_lowercase(),
                (canonical_name.to_string(), policy),
            );
        }
    }

    /// Resolves a raw machine name to its canonical name and policy,
    /// defaulting unknown names to `(name, Standard)`.
    pub fn resolve(&self, machine_name: &str) -> (String, RecipeKind) {
        match self.aliases.get(&machine_name.to_ascii_lowercase()) {
            Some((canonical, policy)) => (canonical.clone(), *policy),
            None => (machine_name.to_string(), RecipeKind::Standard),
        }
    }

    /// Whether `machine_name` (or a case-insensitive variant of it) has been
    /// registered under some canonical name, as opposed to falling back to
    /// the default standard-overclock policy in [`MachineRegistry::resolve`].
    pub fn is_registered(&self, machine_name: &str) -> bool {
        self.aliases.contains_key(&machine_name.to_ascii_lowercase())
    }
}

impl Default for MachineRegistry {
    fn default() -> Self {
        let mut registry = MachineRegistry::new();
        registry.register(
            "Electric Blast Furnace",
            &["ebf", "electric blast furnace"],
            RecipeKind::Standard,
        );
        registry.register(
            "Large Chemical Reactor",
            &["lcr", "large chemical reactor"],
            RecipeKind::Perfect,
        );
        registry.register(
            "Industrial Centrifuge",
            &["centrifuge", "industrial centrifuge"],
            RecipeKind::Centrifuge,
        );
        registry
    }
}
