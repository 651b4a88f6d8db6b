//! Employee table generation and the supervisor rule.

use company_seed_core::{
    config::{EmployeeConfig, SeederConfig},
    employee::{EmployeeGenerator, JobRank, Title},
    rng::{RngBank, StreamSlot},
    seeder::Seeder,
};
use std::collections::HashSet;

#[test]
fn ids_are_exactly_one_through_100() {
    let employees = Seeder::new(SeederConfig::default()).unwrap().generate().employees;
    assert_eq!(employees.len(), 100);
    for (i, e) in employees.iter().enumerate() {
        assert_eq!(e.emp_id, i as u32 + 1);
    }
}

#[test]
fn supervisors_point_backwards_except_the_first() {
    for seed in [0, 5, 77, 1234] {
        let mut rng = RngBank::new(seed).for_stream(StreamSlot::Employee);
        let employees = EmployeeGenerator::generate(&EmployeeConfig::default(), &mut rng);

        for e in &employees {
            if e.emp_id == 1 {
                assert_eq!(e.supervisor_id, 2, "employee 1 must fall back to 2");
            } else {
                assert!(e.supervisor_id >= 1 && e.supervisor_id < e.emp_id,
                    "employee {} has supervisor {} (seed {seed})", e.emp_id, e.supervisor_id);
            }
        }
    }
}

#[test]
fn hierarchy_has_no_cycles() {
    let mut rng = RngBank::new(31).for_stream(StreamSlot::Employee);
    let employees = EmployeeGenerator::generate(&EmployeeConfig::default(), &mut rng);

    // Walking up from any employee other than 1 and 2 must reach the 1 <-> 2 pair.
    for start in &employees {
        let mut current = start.emp_id;
        let mut seen = HashSet::new();
        while current > 2 {
            assert!(seen.insert(current), "cycle through {current}");
            current = employees[current as usize - 1].supervisor_id;
        }
    }
}

#[test]
fn ranks_and_titles_cover_their_sets() {
    let mut rng = RngBank::new(2).for_stream(StreamSlot::Employee);
    let employees = EmployeeGenerator::generate(&EmployeeConfig { count: 400 }, &mut rng);

    let ranks: HashSet<JobRank> = employees.iter().map(|e| e.job_rank).collect();
    let titles: HashSet<Title> = employees.iter().map(|e| e.title).collect();
    assert_eq!(ranks.len(), JobRank::ALL.len());
    assert_eq!(titles.len(), Title::ALL.len());
}

#[test]
fn single_employee_still_generates() {
    let mut rng = RngBank::new(0).for_stream(StreamSlot::Employee);
    let employees = EmployeeGenerator::generate(&EmployeeConfig { count: 1 }, &mut rng);
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].supervisor_id, 2);
}
