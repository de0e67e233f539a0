//! Greedy nearest-followup route builder for courier manifests.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`RoutePlanner`](courier_core::RoutePlanner) trait. Routes are anchored by
//! the unassigned delivery closest to the hub and extended, one stop at a
//! time, with the nearest unassigned followup that still lets the driver
//! return to the hub within [`SHIFT_BUDGET`](courier_core::SHIFT_BUDGET).
//!
//! The search is first-fit and never backtracks: a locally greedy choice that
//! strands later deliveries is kept. Every delivery ends up in exactly one
//! route and the output depends only on the manifest.

#![forbid(unsafe_code)]

mod chain;
mod planner;

pub use planner::GreedyPlanner;
