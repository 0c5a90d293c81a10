//! Mock record generators

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use umh_core::{
    format_grouped, AccountRecord, AccountStatus, ContentRecord, Plan, PublishStatus, Quality,
    GENRES,
};

/// Content records generated at startup
pub const DEFAULT_CONTENT_COUNT: usize = 125;
/// Account records generated at startup
pub const DEFAULT_ACCOUNT_COUNT: usize = 145;

const FIRST_CONTENT_ID: usize = 1000;
const FIRST_ACCOUNT_ID: usize = 5000;

/// Upper bound for how long ago a mock account last logged in (~11.5 days)
const MAX_LOGIN_AGE_MS: i64 = 1_000_000_000;

fn pick_genre<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GENRES.choose(rng).copied().unwrap_or("Drama")
}

/// Generate `count` content records with ids `MOV-1000` upward
pub fn generate_content<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ContentRecord> {
    let records: Vec<ContentRecord> = (0..count)
        .map(|i| ContentRecord {
            id: format!("MOV-{}", FIRST_CONTENT_ID + i),
            title: format!("Cinematic Masterpiece {}", i + 1),
            description: format!(
                "A gripping story of {} proportions that will leave you on the edge of your seat.",
                pick_genre(rng)
            ),
            director: format!("Director {}", i + 1),
            genre: pick_genre(rng).to_string(),
            year: rng.gen_range(2020..=2024),
            quality: if rng.gen_bool(0.7) {
                Quality::FourK
            } else {
                Quality::Hd
            },
            rating: format!("{:.1}", rng.gen_range(3.0..5.0)),
            views: format_grouped(rng.gen_range(0..50_000)),
            status: if rng.gen_bool(0.9) {
                PublishStatus::Published
            } else {
                PublishStatus::Draft
            },
        })
        .collect();

    tracing::debug!(count = records.len(), "Generated mock content catalog");
    records
}

/// Generate `count` accounts with ids `USR-5000` upward, last logins relative to now
pub fn generate_accounts<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<AccountRecord> {
    generate_accounts_at(count, rng, Utc::now())
}

/// Generate accounts whose last logins fall within ~11.5 days before `now`
pub fn generate_accounts_at<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<AccountRecord> {
    let records: Vec<AccountRecord> = (0..count)
        .map(|i| AccountRecord {
            id: format!("USR-{}", FIRST_ACCOUNT_ID + i),
            name: format!("User {}", i + 1),
            email: format!("user{}@example.com", i + 1),
            plan: Plan::all().choose(rng).copied().unwrap_or_default(),
            status: if rng.gen_bool(0.05) {
                AccountStatus::Suspended
            } else {
                AccountStatus::Active
            },
            last_login: now - Duration::milliseconds(rng.gen_range(0..MAX_LOGIN_AGE_MS)),
        })
        .collect();

    tracing::debug!(count = records.len(), "Generated mock accounts");
    records
}
