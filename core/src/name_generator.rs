//! Deterministic personal and address data from curated lists.
//!
//! Everything here draws from a StreamRng, so the same seed yields the
//! same names, addresses and emails.

use crate::{person::Gender, rng::StreamRng};

/// A city together with its state and the leading digits of its zip codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub city: &'static str,
    pub state: &'static str,
    pub zip_prefix: &'static str,
}

const fn region(city: &'static str, state: &'static str, zip_prefix: &'static str) -> Region {
    Region { city, state, zip_prefix }
}

const MALE_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark",
    "Donald", "Steven", "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian",
    "George", "Timothy", "Ronald", "Edward", "Jason", "Jeffrey", "Ryan",
    "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen", "Larry", "Justin",
    "Scott", "Brandon", "Benjamin", "Samuel", "Raymond", "Gregory", "Frank",
    "Alexander", "Patrick", "Jack", "Dennis", "Jerry", "Tyler", "Aaron", "Jose",
    "Adam", "Nathan", "Henry", "Douglas", "Zachary", "Peter", "Kyle", "Noah",
    "Ethan", "Jeremy", "Walter", "Christian", "Keith", "Roger", "Terry", "Austin",
    "Sean", "Gerald", "Carl", "Harold", "Dylan", "Arthur", "Lawrence", "Jordan",
    "Jesse", "Bryan", "Billy", "Bruce", "Gabriel", "Juan", "Albert", "Willie",
    "Elijah", "Logan", "Joe", "Mason", "Roy", "Ralph", "Eugene", "Russell",
    "Bobby", "Victor", "Martin", "Ernest", "Phillip", "Todd", "Craig",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan",
    "Jessica", "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra",
    "Ashley", "Kimberly", "Emily", "Donna", "Michelle", "Carol", "Amanda", "Dorothy",
    "Melissa", "Deborah", "Stephanie", "Rebecca", "Sharon", "Laura", "Cynthia",
    "Kathleen", "Amy", "Angela", "Shirley", "Anna", "Brenda", "Pamela", "Emma",
    "Nicole", "Helen", "Samantha", "Katherine", "Christine", "Debra", "Rachel",
    "Carolyn", "Janet", "Catherine", "Maria", "Heather", "Diane", "Ruth", "Julie",
    "Olivia", "Joyce", "Virginia", "Victoria", "Kelly", "Lauren", "Christina",
    "Joan", "Evelyn", "Judith", "Megan", "Andrea", "Cheryl", "Hannah", "Jacqueline",
    "Martha", "Gloria", "Teresa", "Ann", "Sara", "Madison", "Frances", "Kathryn",
    "Janice", "Jean", "Abigail", "Alice", "Judy", "Sophia", "Grace", "Denise",
    "Amber", "Doris", "Marilyn", "Danielle", "Beverly", "Isabella", "Theresa",
    "Diana", "Natalie", "Brittany", "Charlotte", "Marie", "Kayla", "Alexis",
    "Lori", "Ava", "Mia", "Sofia", "Ella",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson",
    "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen",
    "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera",
    "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans",
    "Turner", "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart",
    "Morris", "Morales", "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan",
    "Cooper", "Peterson", "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim",
    "Cox", "Ward", "Richardson", "Watson", "Brooks", "Chavez", "Wood", "James",
    "Bennett", "Gray", "Mendoza", "Ruiz", "Hughes", "Price", "Alvarez", "Castillo",
    "Sanders", "Patel", "Myers", "Long", "Ross", "Foster", "Jimenez", "Powell",
    "Jenkins", "Perry", "Russell", "Sullivan", "Bell", "Coleman", "Butler", "Henderson",
    "Barnes", "Fisher", "Vasquez", "Simmons", "Romero", "Jordan", "Patterson",
    "Hamilton", "Graham", "Reynolds", "Griffin", "Wallace", "Moreno", "West",
    "Chen", "Freeman", "Webb", "Tucker", "Hawkins", "Crawford", "Olson", "Dunn",
];

const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Pine", "Cedar", "Elm", "Washington", "Lake", "Hill",
    "Park", "Main", "Church", "Sunset", "Highland", "River", "Meadow", "Willow",
    "Lincoln", "Jackson", "Franklin", "Jefferson", "Spring", "Forest", "Ridge",
    "Valley", "Chestnut", "Walnut", "Birch", "Madison", "Adams", "Lakeview",
];

const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard",
    "Way", "Terrace", "Circle", "Parkway",
];

const SECONDARY_UNITS: &[&str] = &["Apt.", "Suite"];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

const REGIONS: &[Region] = &[
    region("New York", "NY", "100"),
    region("Buffalo", "NY", "142"),
    region("Boston", "MA", "021"),
    region("Philadelphia", "PA", "191"),
    region("Pittsburgh", "PA", "152"),
    region("Baltimore", "MD", "212"),
    region("Richmond", "VA", "232"),
    region("Charlotte", "NC", "282"),
    region("Atlanta", "GA", "303"),
    region("Miami", "FL", "331"),
    region("Orlando", "FL", "328"),
    region("Nashville", "TN", "372"),
    region("Columbus", "OH", "432"),
    region("Detroit", "MI", "482"),
    region("Chicago", "IL", "606"),
    region("Milwaukee", "WI", "532"),
    region("Minneapolis", "MN", "554"),
    region("St. Louis", "MO", "631"),
    region("New Orleans", "LA", "701"),
    region("Dallas", "TX", "752"),
    region("Houston", "TX", "770"),
    region("Austin", "TX", "787"),
    region("Denver", "CO", "802"),
    region("Phoenix", "AZ", "850"),
    region("Salt Lake City", "UT", "841"),
    region("Las Vegas", "NV", "891"),
    region("Los Angeles", "CA", "900"),
    region("San Diego", "CA", "921"),
    region("San Francisco", "CA", "941"),
    region("Portland", "OR", "972"),
    region("Seattle", "WA", "981"),
];

/// Deterministic generator for the Person table's text columns.
pub struct NameGenerator;

impl NameGenerator {
    /// First name from the pool matching `gender`.
    pub fn first_name(gender: Gender, rng: &mut StreamRng) -> &'static str {
        match gender {
            Gender::Male => *rng.choose(MALE_FIRST_NAMES),
            Gender::Female => *rng.choose(FEMALE_FIRST_NAMES),
        }
    }

    pub fn last_name(rng: &mut StreamRng) -> &'static str {
        *rng.choose(LAST_NAMES)
    }

    /// "<number> <street> <suffix>", e.g. "4821 Maple Avenue".
    pub fn street_address(rng: &mut StreamRng) -> String {
        let number = rng.range_inclusive(1, 9999);
        let street = rng.choose(STREET_NAMES);
        let suffix = rng.choose(STREET_SUFFIXES);
        format!("{number} {street} {suffix}")
    }

    /// "Apt. 123" or "Suite 456".
    pub fn secondary_address(rng: &mut StreamRng) -> String {
        let unit = rng.choose(SECONDARY_UNITS);
        let number = rng.range_inclusive(100, 999);
        format!("{unit} {number}")
    }

    pub fn region(rng: &mut StreamRng) -> Region {
        *rng.choose(REGIONS)
    }

    /// Five-digit zip within the region's prefix.
    pub fn zip_code(region: &Region, rng: &mut StreamRng) -> String {
        let width = 5 - region.zip_prefix.len();
        let tail = rng.next_u64_below(10u64.pow(width as u32));
        format!("{}{:0width$}", region.zip_prefix, tail, width = width)
    }

    /// Address derived from the person's names, e.g. "mary.smith42@example.com".
    pub fn email(first: &str, last: &str, rng: &mut StreamRng) -> String {
        let local = format!("{}.{}", first, last)
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
            .collect::<String>();
        let suffix = rng.range_inclusive(1, 99);
        let domain = rng.choose(EMAIL_DOMAINS);
        format!("{local}{suffix}@{domain}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StreamSlot};

    #[test]
    fn first_name_matches_gender_pool() {
        let mut rng = RngBank::new(12345).for_stream(StreamSlot::Person);
        for _ in 0..200 {
            assert!(MALE_FIRST_NAMES.contains(&NameGenerator::first_name(Gender::Male, &mut rng)));
            assert!(FEMALE_FIRST_NAMES
                .contains(&NameGenerator::first_name(Gender::Female, &mut rng)));
        }
    }

    #[test]
    fn zip_codes_are_five_digits_with_region_prefix() {
        let mut rng = RngBank::new(3).for_stream(StreamSlot::Person);
        for _ in 0..200 {
            let region = NameGenerator::region(&mut rng);
            let zip = NameGenerator::zip_code(&region, &mut rng);
            assert_eq!(zip.len(), 5, "bad zip {zip}");
            assert!(zip.starts_with(region.zip_prefix));
            assert!(zip.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn states_are_two_letter_abbreviations() {
        for r in REGIONS {
            assert_eq!(r.state.len(), 2, "{}", r.city);
            assert!(r.state.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn email_strips_punctuation_from_names() {
        let mut rng = RngBank::new(1).for_stream(StreamSlot::Person);
        let email = NameGenerator::email("Mary", "O'Brien", &mut rng);
        assert!(email.starts_with("mary.obrien"), "{email}");
        assert_eq!(email.matches('@').count(), 1);
    }

    #[test]
    fn addresses_have_expected_shape() {
        let mut rng = RngBank::new(8).for_stream(StreamSlot::Person);
        let street = NameGenerator::street_address(&mut rng);
        assert_eq!(street.split_whitespace().count(), 3, "{street}");

        let unit = NameGenerator::secondary_address(&mut rng);
        assert!(unit.starts_with("Apt. ") || unit.starts_with("Suite "), "{unit}");
    }
}
