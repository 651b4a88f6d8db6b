//! seed-runner: populate the company database's Person and Employee tables.
//!
//! Usage:
//!   seed-runner --db company.db --seed 0
//!   seed-runner --config seed.json --json
//!   seed-runner --seed 7 --dry-run

use anyhow::{Context, Result};
use company_seed_core::{
    config::SeederConfig,
    event::SeedEvent,
    seeder::{SeedReport, Seeder},
    store::CompanyStore,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = build_config(&args)?;
    let dry_run = has_flag(&args, "--dry-run");
    let json = has_flag(&args, "--json");

    let seeder = Seeder::new(config).context("invalid seeder configuration")?;

    if dry_run {
        let dataset = seeder.generate();
        println!("{}", serde_json::to_string_pretty(&dataset)?);
        return Ok(());
    }

    let db = seeder.config().database.path.clone();
    let mut store =
        CompanyStore::open(&db).with_context(|| format!("cannot open database {db}"))?;

    let report = seeder
        .run(&mut store, &mut |event: &SeedEvent| {
            if !json {
                print_progress(event)
            }
        })
        .with_context(|| format!("seeding {db} failed"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

/// Defaults, then --config file, then environment, then --db / --seed.
fn build_config(args: &[String]) -> Result<SeederConfig> {
    let config = SeederConfig::resolve(
        arg_value(args, "--config"),
        |key| env::var(key).ok(),
        arg_value(args, "--db"),
        arg_value(args, "--seed"),
    )?;
    log::debug!("effective config: {config:?}");
    Ok(config)
}

fn print_progress(event: &SeedEvent) {
    match event {
        SeedEvent::RunStarted { .. } => {}
        SeedEvent::PeopleInserted { count } => println!("→ {count} Person rows inserted"),
        SeedEvent::EmployeesInserted { count } => println!("→ {count} Employee rows inserted"),
        SeedEvent::Committed { .. } => println!("✓  All data committed.\n"),
    }
}

fn print_summary(report: &SeedReport) {
    println!("  run_id:    {}", report.run_id);
    println!("  seed:      {}", report.seed);
    if !report.dangling_supervisors.is_empty() {
        println!("  dangling supervisors: {:?}", report.dangling_supervisors);
    }
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
