//! The seeding run: generate both tables and load them in one transaction.
//!
//! EXECUTION ORDER (fixed):
//!   1. Foreign keys off, transaction open
//!   2. Person rows generated and inserted
//!   3. Employee rows generated and inserted
//!   4. Dangling supervisor check
//!   5. Commit, foreign keys on
//!
//! Any error before step 5 rolls everything back.

use crate::{
    config::SeederConfig,
    employee::{EmployeeGenerator, EmployeeRecord},
    error::SeedResult,
    event::{SeedEvent, SeedObserver},
    person::{PersonGenerator, PersonRecord},
    rng::{RngBank, StreamSlot},
    store::CompanyStore,
    types::{EmployeeId, RunId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a committed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReport {
    pub run_id: RunId,
    pub seed: u64,
    pub people_inserted: usize,
    pub employees_inserted: usize,
    /// EmpIDs whose supervisor does not exist. Empty unless only one
    /// employee was generated.
    pub dangling_supervisors: Vec<EmployeeId>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Both tables' rows, generated but not yet stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub people: Vec<PersonRecord>,
    pub employees: Vec<EmployeeRecord>,
}

pub struct Seeder {
    pub run_id: RunId,
    config: SeederConfig,
    rng_bank: RngBank,
}

impl Seeder {
    pub fn new(config: SeederConfig) -> SeedResult<Self> {
        config.validate()?;
        Ok(Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            rng_bank: RngBank::new(config.seed),
            config,
        })
    }

    pub fn config(&self) -> &SeederConfig {
        &self.config
    }

    /// Generate both tables without touching a database.
    /// Each table draws from its own stream, so the output depends only on the seed.
    pub fn generate(&self) -> Dataset {
        let mut person_rng = self.rng_bank.for_stream(StreamSlot::Person);
        let mut employee_rng = self.rng_bank.for_stream(StreamSlot::Employee);
        Dataset {
            people: PersonGenerator::generate(&self.config.person, &mut person_rng),
            employees: EmployeeGenerator::generate(&self.config.employee, &mut employee_rng),
        }
    }

    /// Generate and load both tables, then commit.
    pub fn run(
        &self,
        store: &mut CompanyStore,
        observer: &mut dyn SeedObserver,
    ) -> SeedResult<SeedReport> {
        let started_at = Utc::now();
        log::info!(
            "seeding run {} (seed {}) into {}",
            self.run_id,
            self.rng_bank.master_seed(),
            store.path().unwrap_or(":memory:")
        );
        observer.on_event(&SeedEvent::RunStarted {
            run_id: self.run_id.clone(),
            seed: self.rng_bank.master_seed(),
        });

        let dataset = self.generate();
        let session = store.begin_load()?;

        let people_inserted = session.insert_people(&dataset.people)?;
        log::info!("inserted {people_inserted} Person rows");
        observer.on_event(&SeedEvent::PeopleInserted {
            count: people_inserted,
        });

        let employees_inserted = session.insert_employees(&dataset.employees)?;
        log::info!("inserted {employees_inserted} Employee rows");
        observer.on_event(&SeedEvent::EmployeesInserted {
            count: employees_inserted,
        });

        let dangling_supervisors = session.dangling_supervisors()?;
        if !dangling_supervisors.is_empty() {
            log::warn!(
                "{} employee(s) reference a missing supervisor: {:?}",
                dangling_supervisors.len(),
                dangling_supervisors
            );
        }

        session.commit()?;
        log::info!("run {} committed", self.run_id);
        observer.on_event(&SeedEvent::Committed {
            run_id: self.run_id.clone(),
        });

        Ok(SeedReport {
            run_id: self.run_id.clone(),
            seed: self.rng_bank.master_seed(),
            people_inserted,
            employees_inserted,
            dangling_supervisors,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
