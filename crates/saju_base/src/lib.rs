//! Static symbol tables for the saju favorability core.
//!
//! This crate defines the immutable vocabulary everything else computes
//! over:
//! - the five elements with their production/destruction cycles
//! - the 10 heavenly stems and 12 earthly branches (with hidden stems)
//! - sexagenary (ganzhi) pairs and four-pillar value objects
//! - the ten-god label set and the opaque twelve-stage / solar-term inputs
//!
//! All tables are process-wide constants; nothing here allocates or
//! mutates after construction.

pub mod branch;
pub mod element;
pub mod ganzhi;
pub mod pillars;
pub mod stage;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, FiveElement, Polarity};
pub use ganzhi::GanzhiPair;
pub use pillars::FourPillars;
pub use stage::{ALL_STAGES, SolarTerm, TwelveStage};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{ALL_TEN_GODS, TenGod, TenGodCategory};
