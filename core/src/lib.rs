//! Synthetic data seeder for the `company` database's Person and Employee tables.

pub mod config;
pub mod employee;
pub mod error;
pub mod event;
pub mod name_generator;
pub mod person;
pub mod rng;
pub mod seeder;
pub mod store;
pub mod types;
