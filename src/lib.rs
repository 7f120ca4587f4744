//! Core entry point for the promo_plan crate.
//!
//! Renders the fixed, multi-page promotion plan for the "Jeleniogórzanie To
//! My" campaign.  All content is embedded literal data; the only moving part
//! is the page layout cursor that decides when a block has to move to a fresh
//! page.

pub mod blocks;
pub mod composer;
pub mod content;
pub mod error;
pub mod fonts;
pub mod model;
pub mod report;
pub mod style;
pub mod text;
