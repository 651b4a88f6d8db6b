use super::{CompanyStore, LoadSession};
use crate::{error::SeedResult, person::PersonRecord, types::PersonId};
use rusqlite::params;

impl LoadSession<'_> {
    // ── Person ────────────────────────────────────────────────────

    /// Insert every row through one prepared statement. Returns rows written.
    pub fn insert_people(&self, people: &[PersonRecord]) -> SeedResult<usize> {
        let mut stmt = self.tx().prepare_cached(
            "INSERT INTO Person (
                PersonID, LName, FName, Age, Gender,
                Addr1, Addr2, City, State, Zip, Email
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )?;
        let mut written = 0;
        for p in people {
            written += stmt.execute(params![
                p.person_id,
                &p.last_name,
                &p.first_name,
                p.age,
                p.gender.code(),
                &p.addr1,
                &p.addr2,
                &p.city,
                &p.state,
                &p.zip,
                &p.email,
            ])?;
        }
        Ok(written)
    }
}

impl CompanyStore {
    pub fn person_count(&self) -> SeedResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM Person", [], |row| row.get(0))?;
        Ok(n)
    }

    /// (PersonID, Age, Gender) ordered by id.
    pub fn person_demographics(&self) -> SeedResult<Vec<(PersonId, u32, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT PersonID, Age, Gender FROM Person ORDER BY PersonID")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn person_addr2_count(&self) -> SeedResult<i64> {
        let n = self.conn.query_row(
            "SELECT COUNT(*) FROM Person WHERE Addr2 IS NOT NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(n)
    }
}
