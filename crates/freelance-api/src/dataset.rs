//! Synthetic dataset generation
//!
//! The provider serves statistics over a synthetic in-memory dataset that is
//! generated once at startup. Earnings are driven by experience level,
//! hourly rate and jobs completed plus noise, so the scatter and regression
//! endpoints show a real (if manufactured) relationship. Seeding the RNG via
//! configuration makes the whole dataset reproducible.

use freelance_core::config::DatasetConfig;
use freelance_core::types::{
    CLIENT_REGIONS, EXPERIENCE_LEVELS, IncomeRecord, JOB_CATEGORIES, PAYMENT_METHODS, PLATFORMS,
    PROJECT_TYPES,
};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Synthesize the configured number of income records
#[must_use]
pub fn synthesize(config: &DatasetConfig) -> Vec<IncomeRecord> {
    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    (0..config.size)
        .map(|index| synthesize_record(index, &mut rng))
        .collect()
}

fn synthesize_record(index: usize, rng: &mut SmallRng) -> IncomeRecord {
    let experience_level = pick_experience_level(rng);
    let hourly_rate = round2(match experience_level {
        "Expert" => rng.gen_range(35.0..120.0),
        "Intermediate" => rng.gen_range(15.0..45.0),
        _ => rng.gen_range(5.0..25.0),
    });
    let jobs_completed = f64::from(rng.gen_range(1..=250_i32));

    // Earnings follow rate * volume with multiplicative noise so the
    // jobs-vs-earnings regression has signal to find.
    let hours_per_job = rng.gen_range(0.8..2.2);
    let earnings_usd = round2(hourly_rate * jobs_completed * hours_per_job);

    IncomeRecord {
        freelancer_id: Some(format!("FL-{:05}", index + 1)),
        job_category: Some(pick(rng, &JOB_CATEGORIES)),
        platform: Some(pick(rng, &PLATFORMS)),
        experience_level: Some(experience_level.to_string()),
        client_region: Some(pick(rng, &CLIENT_REGIONS)),
        payment_method: Some(pick(rng, &PAYMENT_METHODS)),
        jobs_completed: Some(jobs_completed),
        earnings_usd: Some(earnings_usd),
        hourly_rate: Some(hourly_rate),
        job_success_rate: Some(round2(rng.gen_range(50.0..100.0))),
        client_rating: Some(round2(rng.gen_range(2.5..5.0))),
        job_duration_days: Some(f64::from(rng.gen_range(1..=90_i32))),
        project_type: Some(pick(rng, &PROJECT_TYPES)),
        rehire_rate: Some(round2(rng.gen_range(0.0..100.0))),
        marketing_spend: Some(round2(rng.gen_range(0.0..500.0))),
    }
}

fn pick(rng: &mut SmallRng, options: &[&str]) -> String {
    options
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_string()
}

fn pick_experience_level(rng: &mut SmallRng) -> &'static str {
    let roll: f64 = rng.gen_range(0.0..1.0);
    if roll < 0.30 {
        EXPERIENCE_LEVELS[0]
    } else if roll < 0.75 {
        EXPERIENCE_LEVELS[1]
    } else {
        EXPERIENCE_LEVELS[2]
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
