//! # factoryplan-io: loads a [`FactoryConfig`] from JSON or YAML
//!
//! Dispatches on the config path's extension (`.json` vs `.yaml`/`.yml`,
//! case-insensitive), then normalizes every raw recipe through
//! [`factoryplan_core::MachineRegistry`] into a [`FactoryConfig`] the LP
//! builder can consume directly.

pub mod schema;

use factoryplan_core::{
    FactoryConfig, FactoryError, FactoryResult, GameTime, ItemStack, ItemTable, MachineRegistry,
    Recipe, TargetRate, Voltage, VoltageTier,
};
use schema::RawFactoryConfig;
use std::path::Path;
use tracing::debug;

/// Loads and normalizes a factory config from `path`, dispatching on its
/// extension. Malformed JSON/YAML surfaces as [`FactoryError::ConfigParse`];
/// a bad tier name, zero duration, empty recipe, or over-tier recipe
/// surfaces as the corresponding normalization error.
pub fn load_factory_config(path: impl AsRef<Path>) -> FactoryResult<FactoryConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let raw = parse_raw(path, &text)?;
    normalize(raw)
}

/// Same as [`load_factory_config`] but parses `text` as the given format
/// directly, for callers that already have the config in memory (tests,
/// embedding). `extension` drives the same `.json` vs `.yaml`/`.yml`
/// dispatch as the file-based entry point.
pub fn parse_factory_config(text: &str, extension: &str) -> FactoryResult<FactoryConfig> {
    let raw = parse_raw_by_extension(extension, text)?;
    normalize(raw)
}

fn parse_raw(path: &Path, text: &str) -> FactoryResult<RawFactoryConfig> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    parse_raw_by_extension(ext, text)
}

fn parse_raw_by_extension(extension: &str, text: &str) -> FactoryResult<RawFactoryConfig> {
    match extension.to_ascii_lowercase().as_str() {
        "json" => Ok(serde_json::from_str(text)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(text)?),
        other => Err(FactoryError::ConfigParse(format!(
            "unrecognized config extension '{other}' (expected .json, .yaml, or .yml)"
        ))),
    }
}

fn normalize(raw: RawFactoryConfig) -> FactoryResult<FactoryConfig> {
    let registry = MachineRegistry::default();
    let mut items = ItemTable::new();
    let mut recipes = Vec::with_capacity(raw.recipes.len());

    for raw_recipe in raw.recipes {
        let (canonical_name, policy) = registry.resolve(&raw_recipe.m);
        if !registry.is_registered(&raw_recipe.m) {
            debug!(machine = %raw_recipe.m, "machine name not registered, defaulting to standard overclock");
        }

        let machine_tier = VoltageTier::from_name(&raw_recipe.tier)?;
        let inputs = intern_stacks(&mut items, &raw_recipe.inputs);
        let outputs = intern_stacks(&mut items, &raw_recipe.outputs);
        let duration = GameTime::from_ticks(raw_recipe.dur)?;
        let eu_per_gametick = Voltage::new(raw_recipe.eut);

        let recipe = Recipe::new(
            canonical_name,
            policy,
            machine_tier,
            inputs,
            outputs,
            duration,
            eu_per_gametick,
        )?;
        recipes.push(recipe);
    }

    let mut targets = Vec::with_capacity(raw.targets.len());
    for (item_name, quantity_per_second) in raw.targets {
        let item = items.intern(&item_name);
        targets.push(TargetRate::new(item, quantity_per_second));
    }

    Ok(FactoryConfig::new(items, recipes, targets))
}

fn intern_stacks(items: &mut ItemTable, raw: &std::collections::BTreeMap<String, f64>) -> Vec<ItemStack> {
    raw.iter()
        .map(|(name, &quantity)| ItemStack::new(items.intern(name), quantity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON_FIXTURE: &str = r#"
    {
        "recipes": [
            {
                "m": "Electrolyzer",
                "tier": "LV",
                "inputs": { "water": 1000 },
                "outputs": { "hydrogen": 1000 },
                "dur": 20,
                "eut": 8
            }
        ],
        "targets": { "hydrogen": 500.0 }
    }
    "#;

    const YAML_FIXTURE: &str = r#"
recipes:
  - m: Electrolyzer
    tier: LV
    inputs:
      water: 1000
    outputs:
      hydrogen: 1000
    dur: 20
    eut: 8
targets:
  hydrogen: 500.0
"#;

    #[test]
    fn parses_json_fixture() {
        let config = parse_factory_config(JSON_FIXTURE, "json").unwrap();
        assert_eq!(config.recipes.len(), 1);
        assert_eq!(config.targets.len(), 1);
        assert_eq!(config.targets[0].quantity_per_second, 500.0);
    }

    #[test]
    fn parses_yaml_fixture() {
        let config = parse_factory_config(YAML_FIXTURE, "yaml").unwrap();
        assert_eq!(config.recipes.len(), 1);
        assert_eq!(config.recipes[0].machine_name, "Electrolyzer");
    }

    #[test]
    fn json_and_yaml_fixtures_agree() {
        let from_json = parse_factory_config(JSON_FIXTURE, "json").unwrap();
        let from_yaml = parse_factory_config(YAML_FIXTURE, "yaml").unwrap();
        assert_eq!(from_json.recipes.len(), from_yaml.recipes.len());
        assert_eq!(
            from_json.recipes[0].duration.as_ticks(),
            from_yaml.recipes[0].duration.as_ticks()
        );
    }

    #[test]
    fn unrecognized_extension_is_config_parse_error() {
        let result = parse_factory_config("{}", "txt");
        assert!(matches!(result, Err(FactoryError::ConfigParse(_))));
    }

    #[test]
    fn aliased_machine_name_resolves_to_canonical() {
        let text = r#"
        {
            "recipes": [
                { "m": "EBF", "tier": "HV", "inputs": { "a": 1 }, "outputs": { "b": 1 }, "dur": 100, "eut": 8 }
            ],
            "targets": { "b": 1.0 }
        }
        "#;
        let config = parse_factory_config(text, "json").unwrap();
        assert_eq!(config.recipes[0].machine_name, "Electric Blast Furnace");
    }

    #[test]
    fn malformed_json_surfaces_config_parse() {
        let result = parse_factory_config("{not valid json", "json");
        assert!(matches!(result, Err(FactoryError::ConfigParse(_))));
    }

    #[test]
    fn bad_tier_name_surfaces_unknown_voltage_tier() {
        let text = r#"
        {
            "recipes": [
                { "m": "X", "tier": "nonsense", "inputs": { "a": 1 }, "outputs": { "b": 1 }, "dur": 20, "eut": 8 }
            ],
            "targets": {}
        }
        "#;
        let result = parse_factory_config(text, "json");
        assert!(matches!(result, Err(FactoryError::UnknownVoltageTier(_))));
    }
}
