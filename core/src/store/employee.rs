use super::{CompanyStore, LoadSession};
use crate::{employee::EmployeeRecord, error::SeedResult, types::EmployeeId};
use rusqlite::params;

impl LoadSession<'_> {
    // ── Employee ──────────────────────────────────────────────────

    pub fn insert_employees(&self, employees: &[EmployeeRecord]) -> SeedResult<usize> {
        let mut stmt = self.tx().prepare_cached(
            "INSERT INTO Employee (EmpID, JobRank, Title, SupervisorID)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        let mut written = 0;
        for e in employees {
            written += stmt.execute(params![
                e.emp_id,
                e.job_rank.as_str(),
                e.title.as_str(),
                e.supervisor_id,
            ])?;
        }
        Ok(written)
    }
}

impl CompanyStore {
    pub fn employee_count(&self) -> SeedResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM Employee", [], |row| row.get(0))?;
        Ok(n)
    }

    /// (EmpID, SupervisorID) ordered by id.
    pub fn supervisor_links(&self) -> SeedResult<Vec<(EmployeeId, EmployeeId)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT EmpID, SupervisorID FROM Employee ORDER BY EmpID")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
