//! # factoryplan-core: recipe normalization and game-rule primitives
//!
//! Provides the value types a factory production plan is built from:
//! [`Voltage`]/[`VoltageTier`], [`GameTime`], interned [`Item`]/[`ItemStack`],
//! and [`Recipe`] construction under one of three overclock policies. None
//! of this crate knows about linear programming — it normalizes game data
//! into values the LP builder in `factoryplan-algo` can consume directly.
//!
//! ## Quick start
//!
//! ```
//! use factoryplan_core::{ItemTable, Recipe, RecipeKind, Voltage, VoltageTier, GameTime, ItemStack};
//!
//! let mut items = ItemTable::new();
//! let water = items.intern("water");
//! let hydrogen = items.intern("hydrogen");
//!
//! let recipe = Recipe::new(
//!     "Electrolyzer",
//!     RecipeKind::Standard,
//!     VoltageTier::from_rank(1), // LV
//!     vec![ItemStack::new(water, 1000.0)],
//!     vec![ItemStack::new(hydrogen, 1000.0)],
//!     GameTime::from_ticks(20).unwrap(),
//!     Voltage::new(8),
//! ).unwrap();
//! assert_eq!(recipe.duration.as_ticks(), 20);
//! ```

pub mod config;
pub mod error;
pub mod game_time;
pub mod item;
pub mod recipe;
pub mod target;
pub mod voltage;

pub use config::FactoryConfig;
pub use error::{FactoryError, FactoryResult};
pub use game_time::GameTime;
pub use item::{Item, ItemStack, ItemTable};
pub use recipe::{MachineRegistry, Recipe, RecipeKind};
pub use target::TargetRate;
pub use voltage::{Voltage, VoltageTier};
