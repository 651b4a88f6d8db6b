use crate::{
    config::PersonConfig,
    name_generator::NameGenerator,
    rng::StreamRng,
    types::PersonId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Single-letter code stored in `Person.Gender`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

/// One row of the `Person` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub person_id: PersonId,
    pub last_name: String,
    pub first_name: String,
    pub age: u32,
    pub gender: Gender,
    pub addr1: String,
    pub addr2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub email: String,
}

pub struct PersonGenerator;

impl PersonGenerator {
    /// One record per id in 1..=config.count, in id order.
    ///
    /// # Panics
    ///
    /// Panics if `config.age_min > config.age_max`. `SeederConfig::validate`
    /// rejects such configs, and `Seeder::new` always validates.
    pub fn generate(config: &PersonConfig, rng: &mut StreamRng) -> Vec<PersonRecord> {
        let people: Vec<PersonRecord> = (1..=config.count)
            .map(|person_id| Self::generate_one(person_id, config, rng))
            .collect();
        log::debug!("generated {} person rows on stream '{}'", people.len(), rng.name);
        people
    }

    fn generate_one(person_id: PersonId, config: &PersonConfig, rng: &mut StreamRng) -> PersonRecord {
        let gender = *rng.choose(&Gender::ALL);
        let first_name = NameGenerator::first_name(gender, rng);
        let last_name = NameGenerator::last_name(rng);
        let age = rng.range_inclusive(config.age_min, config.age_max);
        let addr1 = NameGenerator::street_address(rng);
        let addr2 = if rng.chance(config.secondary_address_rate) {
            Some(NameGenerator::secondary_address(rng))
        } else {
            None
        };
        let region = NameGenerator::region(rng);
        let zip = NameGenerator::zip_code(&region, rng);
        let email = NameGenerator::email(first_name, last_name, rng);

        PersonRecord {
            person_id,
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            age,
            gender,
            addr1,
            addr2,
            city: region.city.to_string(),
            state: region.state.to_string(),
            zip,
            email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StreamSlot};

    #[test]
    fn gender_serializes_as_single_letter() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"M\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"F\"");
        assert_eq!(Gender::Female.code(), "F");
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn inverted_age_range_panics() {
        let config = PersonConfig {
            age_min: 40,
            age_max: 30,
            ..PersonConfig::default()
        };
        let mut rng = RngBank::new(5).for_stream(StreamSlot::Person);
        PersonGenerator::generate(&config, &mut rng);
    }

    #[test]
    fn single_age_range_is_honoured() {
        let config = PersonConfig {
            age_min: 30,
            age_max: 30,
            ..PersonConfig::default()
        };
        let mut rng = RngBank::new(5).for_stream(StreamSlot::Person);
        assert!(PersonGenerator::generate(&config, &mut rng).iter().all(|p| p.age == 30));
    }

    #[test]
    fn zero_rate_never_fills_addr2() {
        let config = PersonConfig {
            secondary_address_rate: 0.0,
            ..PersonConfig::default()
        };
        let mut rng = RngBank::new(5).for_stream(StreamSlot::Person);
        let people = PersonGenerator::generate(&config, &mut rng);
        assert!(people.iter().all(|p| p.addr2.is_none()));
    }

    #[test]
    fn full_rate_always_fills_addr2() {
        let config = PersonConfig {
            secondary_address_rate: 1.0,
            ..PersonConfig::default()
        };
        let mut rng = RngBank::new(5).for_stream(StreamSlot::Person);
        let people = PersonGenerator::generate(&config, &mut rng);
        assert!(people.iter().all(|p| p.addr2.is_some()));
    }
}
