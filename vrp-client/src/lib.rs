//! Client crate assembles a rich VRP problem and hands it to an external solver engine.
//!
//! # Examples
//!
//! ```
//! use vrp_client::ProblemBuilder;
//! use vrp_model::get_locations;
//!
//! let mut builder = ProblemBuilder::new();
//! builder.set_profile("car");
//!
//! let problem = builder.snapshot();
//!
//! assert_eq!(problem.fleet.profiles[0].name, "car");
//! assert!(get_locations(&problem).is_empty());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

pub mod builder;
pub use self::builder::ProblemBuilder;

pub mod config;
pub use self::config::{Config, TerminationConfig};

pub mod engine;
pub use self::engine::Engine;

pub mod gateway;
pub use self::gateway::{EngineGateway, GatewayError};
