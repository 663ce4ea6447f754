//! AHP Prioritizer - Complaint Prioritization Engine
//!
//! This crate ranks municipal service complaints by combining weighted
//! decision criteria into a single priority score using the Analytic
//! Hierarchy Process: pairwise judgments become a reciprocal comparison
//! matrix, priority weights fall out of its principal eigenvector, and
//! complaints are scored, densely ranked, and partitioned into priority
//! bands.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
