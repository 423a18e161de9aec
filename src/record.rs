//! Records within annotation and coordinate tables.

pub mod feature;
pub mod query;

/// A contiguous molecule upon which features are located.
pub type Chromosome = String;

/// The position of a feature boundary or query upon a chromosome.
pub type Position = u64;
