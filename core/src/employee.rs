use crate::{config::EmployeeConfig, rng::StreamRng, types::EmployeeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobRank {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl JobRank {
    pub const ALL: [JobRank; 4] = [JobRank::Junior, JobRank::Mid, JobRank::Senior, JobRank::Lead];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    Developer,
    Analyst,
    Engineer,
    Consultant,
    Manager,
    Specialist,
}

impl Title {
    pub const ALL: [Title; 6] = [
        Title::Developer,
        Title::Analyst,
        Title::Engineer,
        Title::Consultant,
        Title::Manager,
        Title::Specialist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Analyst => "Analyst",
            Self::Engineer => "Engineer",
            Self::Consultant => "Consultant",
            Self::Manager => "Manager",
            Self::Specialist => "Specialist",
        }
    }
}

/// One row of the `Employee` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub emp_id: EmployeeId,
    pub job_rank: JobRank,
    pub title: Title,
    pub supervisor_id: EmployeeId,
}

impl EmployeeRecord {
    /// True for the single row whose supervisor has a higher id.
    pub fn is_forward_reference(&self) -> bool {
        self.supervisor_id > self.emp_id
    }
}

pub struct EmployeeGenerator;

impl EmployeeGenerator {
    /// One record per id in 1..=config.count, in id order.
    pub fn generate(config: &EmployeeConfig, rng: &mut StreamRng) -> Vec<EmployeeRecord> {
        let employees: Vec<EmployeeRecord> = (1..=config.count)
            .map(|emp_id| EmployeeRecord {
                emp_id,
                job_rank: *rng.choose(&JobRank::ALL),
                title: *rng.choose(&Title::ALL),
                supervisor_id: Self::supervisor_for(emp_id, rng),
            })
            .collect();
        log::debug!("generated {} employee rows on stream '{}'", employees.len(), rng.name);
        employees
    }

    /// Uniform over 1..emp_id. Employee 1 has no lower id and reports to 2,
    /// which only inserts cleanly while foreign keys are off.
    pub fn supervisor_for(emp_id: EmployeeId, rng: &mut StreamRng) -> EmployeeId {
        if emp_id > 1 {
            rng.range_inclusive(1, emp_id - 1)
        } else {
            emp_id + 1
        }
    }
}
