use crate::error::{SeedError, SeedResult};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `database.path`.
pub const ENV_DB_PATH: &str = "COMPANY_SEED_DB";
/// Environment variable overriding `seed`.
pub const ENV_SEED: &str = "COMPANY_SEED_SEED";

/// Upper bound of the `CHECK (Age BETWEEN 0 AND 64)` constraint on Person.
pub const SCHEMA_MAX_AGE: u32 = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "company.db".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    pub count: u32,
    pub age_min: u32,
    pub age_max: u32,
    pub secondary_address_rate: f64,
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self {
            count: 150,
            age_min: 18,
            age_max: SCHEMA_MAX_AGE,
            secondary_address_rate: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeConfig {
    pub count: u32,
}

impl Default for EmployeeConfig {
    fn default() -> Self {
        Self { count: 100 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeederConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub person: PersonConfig,
    #[serde(default)]
    pub employee: EmployeeConfig,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            seed: 0,
            person: PersonConfig::default(),
            employee: EmployeeConfig::default(),
        }
    }
}

impl SeederConfig {
    /// Load from a JSON file. Missing sections fall back to defaults.
    pub fn load(path: &str) -> SeedResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_string(),
            source,
        })?;
        let config: SeederConfig = serde_json::from_str(&content)?;
        log::debug!("loaded config from {path}");
        Ok(config)
    }

    /// Layer every source, lowest priority first: defaults, the JSON file
    /// (if any), environment-style `lookup`, then explicit `--db` / `--seed`.
    pub fn resolve<F>(
        file: Option<&str>,
        lookup: F,
        cli_db: Option<&str>,
        cli_seed: Option<&str>,
    ) -> SeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let mut config = base.with_overrides_from(lookup)?;

        if let Some(db) = cli_db {
            config.database.path = db.to_string();
        }
        if let Some(raw) = cli_seed {
            config.seed = parse_seed("--seed", raw)?;
        }
        Ok(config)
    }

    /// Apply environment-style overrides from an arbitrary lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> SeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DB_PATH) {
            self.database.path = path;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            self.seed = parse_seed(ENV_SEED, &raw)?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> SeedResult<()> {
        if self.database.path.trim().is_empty() {
            return Err(invalid("database.path", "must not be empty"));
        }
        if self.person.count == 0 {
            return Err(invalid("person.count", "must be at least 1"));
        }
        if self.person.age_min > self.person.age_max {
            return Err(invalid(
                "person.age_min",
                format!(
                    "{} exceeds age_max {}",
                    self.person.age_min, self.person.age_max
                ),
            ));
        }
        if self.person.age_max > SCHEMA_MAX_AGE {
            return Err(invalid(
                "person.age_max",
                format!("{} violates the Person.Age check (0..={SCHEMA_MAX_AGE})", self.person.age_max),
            ));
        }
        if !(0.0..=1.0).contains(&self.person.secondary_address_rate) {
            return Err(invalid("person.secondary_address_rate", "must be within [0, 1]"));
        }
        if self.employee.count == 0 {
            return Err(invalid("employee.count", "must be at least 1"));
        }
        Ok(())
    }
}

fn parse_seed(source: &str, raw: &str) -> SeedResult<u64> {
    raw.trim().parse().map_err(|_| SeedError::InvalidConfig {
        field: "seed",
        reason: format!("{source}={raw} is not an unsigned integer"),
    })
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SeedError {
    SeedError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}
