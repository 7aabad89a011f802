//! Relationship analysis over the saju symbol tables.
//!
//! This crate provides:
//! - branch relationship predicates (six harmonies, clashes,
//!   punishments, partial/full samhap triads)
//! - the ten-god mapper between any stem and a day master
//! - shinsal special-star lookups (nobility, travel, romance, robust
//!   fortune, three disasters, empty days)
//!
//! Everything is a pure, stateless table lookup.

pub mod harmony;
pub mod shinsal;
pub mod ten_god;

pub use harmony::{
    TriadGroup, clash, hidden_stems, punishment, six_harmony, triad_group, triple_harmony_full,
    triple_harmony_partial,
};
pub use shinsal::{
    empty_day, nobility_star, robust_day, romance_star, three_disaster_year, travel_star,
};
pub use ten_god::{ten_god, ten_god_category};
