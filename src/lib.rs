//! Effect-driven counter core.
//!
//! A [`Store`](store::Store) owns [`CounterState`](counter::CounterState),
//! reduces [`CounterAction`](counter::CounterAction)s one at a time through a
//! pure reducer, and runs the effects the reducer describes (fact lookups,
//! a recurring timer) against injected [`clock`] and [`facts`] capabilities.

pub mod clock;
pub mod config;
pub mod counter;
pub mod effects;
pub mod facts;
pub mod logging;
pub mod mvi;
pub mod store;
