//! Shared primitive types used across the seeder.

/// Primary key of a `Person` row. Sequential from 1.
pub type PersonId = u32;

/// Primary key of an `Employee` row. Sequential from 1.
pub type EmployeeId = u32;

/// The canonical run identifier.
pub type RunId = String;
