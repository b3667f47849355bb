//! The LP model builder: turns a [`FactoryConfig`] into a
//! [`ConstraintSystem`] plus a [`VariableIndex`].
//!
//! Every `declare`/`constrain` call below emits one named variable or
//! constraint into the explicit data structures in [`crate::model`], rather
//! than assigning attributes onto a host model object. Recipe indices are
//! assigned in config order; every other iteration goes through
//! `ItemTable`'s insertion order so that re-building the same config always
//! yields the same variable names in the same order.

use crate::model::{ConstraintSystem, Domain, LinearExpr, Relation};
use crate::variable_index::{LinkInfo, MachineInfo, MachinePort, SinkInfo, SourceInfo, VariableIndex};
use factoryplan_core::{FactoryConfig, Item};
use indexmap::IndexMap;
use std::collections::HashSet;

/// The penalty coefficient applied to a `SOURCE_<x>` whose item is also
/// produced internally: large enough that the solver always prefers routing
/// a cyclic item through the factory over sourcing it externally at both
/// ends of the cycle. Exposed as a constant rather than a configuration
/// knob; nothing in this workspace currently needs it to vary.
pub const SOURCE_TAX_COEFFICIENT: f64 = 50_000.0;

/// Builds the linear program for `config`. Construction never fails by
/// itself — infeasibility (e.g. an unreachable target) is only discovered
/// when [`crate::solver::solve`] runs the resulting system.
pub fn build(config: &FactoryConfig) -> (ConstraintSystem, VariableIndex) {
    let mut system = ConstraintSystem::new();
    let mut index = VariableIndex::new();

    let mut is_recipe_input: HashSet<Item> = HashSet::new();
    let mut is_recipe_output: HashSet<Item> = HashSet::new();
    for recipe in &config.recipes {
        is_recipe_input.extend(recipe.inputs.iter().map(|s| s.item));
        is_recipe_output.extend(recipe.outputs.iter().map(|s| s.item));
    }
    let target_items: HashSet<Item> = config.targets.iter().map(|t| t.item).collect();

    // Ports that can still carry flow for a given item, keyed by item in
    // ItemTable insertion order (populated as producer/consumer ports are
    // declared below).
    let mut item_producer_ports: IndexMap<Item, Vec<String>> = IndexMap::new();
    let mut item_consumer_ports: IndexMap<Item, Vec<String>> = IndexMap::new();

    build_machines(
        config,
        &mut system,
        &mut index,
        &mut item_producer_ports,
        &mut item_consumer_ports,
    );

    build_sources(
        config,
        &mut system,
        &mut index,
        &is_recipe_input,
        &target_items,
        &mut item_producer_ports,
    );

    build_sinks(
        config,
        &mut system,
        &mut index,
        &is_recipe_output,
        &target_items,
        &mut item_consumer_ports,
    );

    build_links(
        config,
        &mut system,
        &mut index,
        &item_producer_ports,
        &item_consumer_ports,
    );

    build_targets(config, &mut system);

    build_source_tax(
        config,
        &mut system,
        &mut index,
        &is_recipe_input,
        &is_recipe_output,
    );

    build_objective(&mut system, &index);

    (system, index)
}

fn build_machines(
    config: &FactoryConfig,
    system: &mut ConstraintSystem,
    index: &mut VariableIndex,
    item_producer_ports: &mut IndexMap<Item, Vec<String>>,
    item_consumer_ports: &mut IndexMap<Item, Vec<String>>,
) {
    for (i, recipe) in config.recipes.iter().enumerate() {
        let m_var = system.declare(format!("M{i}"), Domain::NonNegativeReal);
        let dur_secs = recipe.duration.as_seconds();

        let mut inputs_info = Vec::new();
        for stack in &recipe.inputs {
            let item_name = config.items.name(stack.item);
            let in_var = system.declare(format!("M{i}_IN_{item_name}"), Domain::NonNegativeReal);

            // M_i = M_i_IN * duration_seconds / q
            let mut expr = LinearExpr::term(&m_var, 1.0);
            expr.add_term(&in_var, -(dur_secs / stack.quantity));
            system.constrain(format!("throughput_in_M{i}_{item_name}"), expr, Relation::Eq);

            item_consumer_ports
                .entry(stack.item)
                .or_default()
                .push(in_var.clone());
            inputs_info.push(MachinePort {
                var: in_var,
                item: stack.item,
            });
        }

        let mut outputs_info = Vec::new();
        for stack in &recipe.outputs {
            let item_name = config.items.name(stack.item);
            let out_var = system.declare(format!("M{i}_OUT_{item_name}"), Domain::NonNegativeReal);

            let mut expr = LinearExpr::term(&m_var, 1.0);
            expr.add_term(&out_var, -(dur_secs / stack.quantity));
            system.constrain(format!("throughput_out_M{i}_{item_name}"), expr, Relation::Eq);

            item_producer_ports
                .entry(stack.item)
                .or_default()
                .push(out_var.clone());
            outputs_info.push(MachinePort {
                var: out_var,
                item: stack.item,
            });
        }

        for in_stack in &recipe.inputs {
            for out_stack in &recipe.outputs {
                let in_name = config.items.name(in_stack.item);
                let out_name = config.items.name(out_stack.item);
                let in_var = format!("M{i}_IN_{in_name}");
                let out_var = format!("M{i}_OUT_{out_name}");
                let in_rate = in_stack.quantity / dur_secs;
                let out_rate = out_stack.quantity / dur_secs;

                let mut expr = LinearExpr::term(&out_var, 1.0 / out_rate);
                expr.add_term(&in_var, -1.0 / in_rate);
                system.constrain(
                    format!("cross_M{i}_{in_name}_{out_name}"),
                    expr,
                    Relation::Eq,
                );
            }
        }

        index.machines.push(MachineInfo {
            var: m_var,
            recipe_index: i,
            machine_name: recipe.machine_name.clone(),
            inputs: inputs_info,
            outputs: outputs_info,
        });
    }
}

fn build_sources(
    config: &FactoryConfig,
    system: &mut ConstraintSystem,
    index: &mut VariableIndex,
    is_recipe_input: &HashSet<Item>,
    target_items: &HashSet<Item>,
    item_producer_ports: &mut IndexMap<Item, Vec<String>>,
) {
    for item in config.items.iter() {
        if !is_recipe_input.contains(&item) && !target_items.contains(&item) {
            continue;
        }
        let item_name = config.items.name(item);
        let source_var = system.declare(format!("SOURCE_{item_name}"), Domain::Real);
        let source_out_var = system.declare(format!("SOURCE_OUT_{item_name}"), Domain::NonNegativeReal);

        let mut bookkeeping = LinearExpr::term(&source_var, 1.0);
        bookkeeping.add_term(&source_out_var, 1.0);
        system.constrain(format!("source_bookkeeping_{item_name}"), bookkeeping, Relation::Eq);
        system.constrain(
            format!("source_nonpositive_{item_name}"),
            LinearExpr::term(&source_var, 1.0),
            Relation::Le,
        );

        item_producer_ports
            .entry(item)
            .or_default()
            .push(source_out_var.clone());

        index.sources.insert(
            item,
            SourceInfo {
                source_var,
                source_out_var,
                tax_var: None,
            },
        );
    }
}

fn build_sinks(
    config: &FactoryConfig,
    system: &mut ConstraintSystem,
    index: &mut VariableIndex,
    is_recipe_output: &HashSet<Item>,
    target_items: &HashSet<Item>,
    item_consumer_ports: &mut IndexMap<Item, Vec<String>>,
) {
    for item in config.items.iter() {
        if !is_recipe_output.contains(&item) && !target_items.contains(&item) {
            continue;
        }
        let item_name = config.items.name(item);
        let sink_var = system.declare(format!("SINK_{item_name}"), Domain::NonNegativeReal);
        let sink_in_var = system.declare(format!("SINK_IN_{item_name}"), Domain::NonNegativeReal);

        let mut bookkeeping = LinearExpr::term(&sink_var, 1.0);
        bookkeeping.add_term(&sink_in_var, -1.0);
        system.constrain(format!("sink_bookkeeping_{item_name}"), bookkeeping, Relation::Eq);

        item_consumer_ports
            .entry(item)
            .or_default()
            .push(sink_in_var.clone());

        index.sinks.insert(
            item,
            SinkInfo {
                sink_var,
                sink_in_var,
            },
        );
    }
}

fn build_links(
    config: &FactoryConfig,
    system: &mut ConstraintSystem,
    index: &mut VariableIndex,
    item_producer_ports: &IndexMap<Item, Vec<String>>,
    item_consumer_ports: &IndexMap<Item, Vec<String>>,
) {
    let mut outgoing: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut incoming: IndexMap<String, Vec<String>> = IndexMap::new();

    for item in config.items.iter() {
        let (Some(producers), Some(consumers)) = (
            item_producer_ports.get(&item),
            item_consumer_ports.get(&item),
        ) else {
            continue;
        };

        for producer_port in producers {
            for consumer_port in consumers {
                let link_var = format!("{producer_port}_TO_{consumer_port}");
                system.declare(link_var.clone(), Domain::NonNegativeReal);

                outgoing
                    .entry(producer_port.clone())
                    .or_default()
                    .push(link_var.clone());
                incoming
                    .entry(consumer_port.clone())
                    .or_default()
                    .push(link_var.clone());

                index.links.push(LinkInfo {
                    var: link_var,
                    item,
                    producer_port: producer_port.clone(),
                    consumer_port: consumer_port.clone(),
                });
            }
        }
    }

    for (port, links) in &outgoing {
        let mut expr = LinearExpr::term(port, 1.0);
        for link in links {
            expr.add_term(link, -1.0);
        }
        system.constrain(format!("port_out_{port}"), expr, Relation::Eq);
    }
    for (port, links) in &incoming {
        let mut expr = LinearExpr::term(port, 1.0);
        for link in links {
            expr.add_term(link, -1.0);
        }
        system.constrain(format!("port_in_{port}"), expr, Relation::Eq);
    }
}

fn build_targets(config: &FactoryConfig, system: &mut ConstraintSystem) {
    for target in &config.targets {
        let item_name = config.items.name(target.item);
        let sink_var = format!("SINK_{item_name}");
        let mut expr = LinearExpr::term(&sink_var, 1.0);
        expr.constant = -target.quantity_per_second;
        system.constrain(format!("target_{item_name}"), expr, Relation::Ge);
    }
}

fn build_source_tax(
    config: &FactoryConfig,
    system: &mut ConstraintSystem,
    index: &mut VariableIndex,
    is_recipe_input: &HashSet<Item>,
    is_recipe_output: &HashSet<Item>,
) {
    for item in config.items.iter() {
        if !(is_recipe_input.contains(&item) && is_recipe_output.contains(&item)) {
            continue;
        }
        let item_name = config.items.name(item);
        let source_var = format!("SOURCE_{item_name}");
        let tax_var = system.declare(format!("SOURCE_TAX_{item_name}"), Domain::NonNegativeReal);

        // tax = -COEFFICIENT * source  =>  tax + COEFFICIENT*source = 0
        let mut expr = LinearExpr::term(&tax_var, 1.0);
        expr.add_term(&source_var, SOURCE_TAX_COEFFICIENT);
        system.constrain(format!("source_tax_{item_name}"), expr, Relation::Eq);

        if let Some(info) = index.sources.get_mut(&item) {
            info.tax_var = Some(tax_var);
        }
    }
}

fn build_objective(system: &mut ConstraintSystem, index: &VariableIndex) {
    let mut objective = LinearExpr::default();
    for machine in &index.machines {
        objective.add_term(&machine.var, 1.0);
    }
    for source in index.sources.values() {
        objective.add_term(&source.source_var, -1.0);
        if let Some(tax_var) = &source.tax_var {
            objective.add_term(tax_var, 1.0);
        }
    }
    system.objective = objective;
}
