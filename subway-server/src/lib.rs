//! Objectville subway route planner.
//!
//! Loads a subway network description, finds the route with the fewest
//! stops between two stations and turns it into step-by-step directions,
//! served over HTTP or printed as text.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod printer;
pub mod web;
