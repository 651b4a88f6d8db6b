//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! Generators produce records; the seeder hands them to a LoadSession.

use crate::{error::SeedResult, types::EmployeeId};
use rusqlite::{Connection, Transaction};

mod employee;
mod person;

pub struct CompanyStore {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

impl CompanyStore {
    /// Open an existing company database. A missing file is an error;
    /// nothing is created on disk.
    pub fn open(path: &str) -> SeedResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        log::debug!("opened company database at {path}");
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SeedResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn, path: None })
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Create the Person and Employee tables if absent.
    /// Seeding runs never call this; tests and local setup do.
    pub fn migrate(&self) -> SeedResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_company.sql"))?;
        Ok(())
    }

    pub fn foreign_keys_enabled(&self) -> SeedResult<bool> {
        let enabled = self
            .conn
            .pragma_query_value(None, "foreign_keys", |row| row.get::<_, bool>(0))?;
        Ok(enabled)
    }

    /// Suspend foreign-key enforcement and open the load transaction.
    ///
    /// SQLite ignores `PRAGMA foreign_keys` inside a transaction, so the
    /// toggle brackets the transaction instead of living inside it.
    pub fn begin_load(&mut self) -> SeedResult<LoadSession<'_>> {
        LoadSession::begin(&self.conn)
    }
}

/// One all-or-nothing load.
///
/// Dropping a session without `commit` rolls the transaction back.
/// Foreign-key enforcement is re-enabled on every path.
pub struct LoadSession<'a> {
    conn: &'a Connection,
    tx: Option<Transaction<'a>>,
    foreign_keys_restored: bool,
}

impl<'a> LoadSession<'a> {
    fn begin(conn: &'a Connection) -> SeedResult<Self> {
        conn.pragma_update(None, "foreign_keys", false)?;
        let tx = match conn.unchecked_transaction() {
            Ok(tx) => tx,
            Err(e) => {
                let _ = conn.pragma_update(None, "foreign_keys", true);
                return Err(e.into());
            }
        };
        log::debug!("foreign keys off, load transaction open");
        Ok(Self {
            conn,
            tx: Some(tx),
            foreign_keys_restored: false,
        })
    }

    fn tx(&self) -> &Transaction<'a> {
        self.tx
            .as_ref()
            .expect("load transaction is only taken by commit or drop")
    }

    /// Employee rows whose SupervisorID has no matching EmpID.
    pub fn dangling_supervisors(&self) -> SeedResult<Vec<EmployeeId>> {
        let mut stmt = self.tx().prepare("PRAGMA foreign_key_check(Employee)")?;
        let rows = stmt
            .query_map([], |row| row.get::<_, Option<EmployeeId>>(1))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows.into_iter().flatten().collect())
    }

    /// Commit the load. Once the commit lands the data is durable, so a
    /// failure to re-enable foreign keys is only logged.
    pub fn commit(mut self) -> SeedResult<()> {
        if let Some(tx) = self.tx.take() {
            tx.commit()?;
        }
        match self.restore_foreign_keys() {
            Ok(()) => log::debug!("load transaction committed, foreign keys on"),
            Err(e) => log::warn!("load committed but foreign keys could not be re-enabled: {e}"),
        }
        Ok(())
    }

    fn restore_foreign_keys(&mut self) -> SeedResult<()> {
        if !self.foreign_keys_restored {
            self.conn.pragma_update(None, "foreign_keys", true)?;
            self.foreign_keys_restored = true;
        }
        Ok(())
    }
}

impl Drop for LoadSession<'_> {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            match tx.rollback() {
                Ok(()) => log::warn!("load transaction rolled back"),
                Err(e) => log::error!("rollback failed: {e}"),
            }
        }
        if let Err(e) = self.restore_foreign_keys() {
            log::error!("could not re-enable foreign keys: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_disables_then_restores_foreign_keys() {
        let mut store = CompanyStore::in_memory().unwrap();
        store.migrate().unwrap();
        assert!(store.foreign_keys_enabled().unwrap());

        {
            let session = store.begin_load().unwrap();
            drop(session);
        }
        assert!(store.foreign_keys_enabled().unwrap());
    }

    #[test]
    fn committed_session_keeps_rows_and_restores_foreign_keys() {
        let mut store = CompanyStore::in_memory().unwrap();
        store.migrate().unwrap();
        {
            let session = store.begin_load().unwrap();
            session
                .tx()
                .execute(
                    "INSERT INTO Employee (EmpID, JobRank, Title, SupervisorID)
                     VALUES (1, 'Lead', 'Manager', 1)",
                    [],
                )
                .unwrap();
            session.commit().unwrap();
        }
        assert_eq!(store.employee_count().unwrap(), 1);
        assert!(store.foreign_keys_enabled().unwrap());
    }

    #[test]
    fn open_refuses_missing_file_and_creates_nothing() {
        let path = std::env::temp_dir().join(format!("company-seed-missing-{}.db", uuid::Uuid::new_v4()));
        let result = CompanyStore::open(&path.to_string_lossy());
        assert!(matches!(result, Err(crate::error::SeedError::Database(_))));
        assert!(!path.exists(), "open must not create {}", path.display());
    }

    #[test]
    fn dropped_session_rolls_back() {
        let mut store = CompanyStore::in_memory().unwrap();
        store.migrate().unwrap();
        {
            let session = store.begin_load().unwrap();
            session
                .tx()
                .execute(
                    "INSERT INTO Employee (EmpID, JobRank, Title, SupervisorID)
                     VALUES (1, 'Lead', 'Manager', 2)",
                    [],
                )
                .unwrap();
            assert_eq!(session.dangling_supervisors().unwrap(), vec![1]);
        }
        assert_eq!(store.employee_count().unwrap(), 0);
        assert!(store.foreign_keys_enabled().unwrap());
    }
}
