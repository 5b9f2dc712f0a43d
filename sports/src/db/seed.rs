//! Demo data for a fresh sportevents table.

use chrono::{DateTime, Duration, Utc};
use entain_store::StoreResult;
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::SqlitePool;

const EVENT_COUNT: i64 = 100;

const TEAM_PLACES: &[&str] = &[
    "Brisbane", "Adelaide", "Hobart", "Perth", "Darwin", "Geelong", "Newcastle", "Canberra",
];
const TEAM_MASCOTS: &[&str] = &[
    "Lions", "Falcons", "Sharks", "Rovers", "Titans", "Comets", "Wolves", "Storm",
];
const CITIES: &[&str] = &[
    "Melbourne", "Sydney", "Auckland", "Gold Coast", "Townsville", "Wellington", "Cairns",
];

fn team(rng: &mut impl Rng) -> String {
    let place = TEAM_PLACES.choose(rng).copied().unwrap_or("Brisbane");
    let mascot = TEAM_MASCOTS.choose(rng).copied().unwrap_or("Lions");
    format!("{place} {mascot}")
}

fn generate(now: DateTime<Utc>) -> Vec<(i64, String, String, DateTime<Utc>)> {
    let mut rng = rand::thread_rng();
    let window_start = now - Duration::days(1);
    let window_secs = Duration::days(3).num_seconds();

    (1..=EVENT_COUNT)
        .map(|id| {
            let name = format!("{} vs {}", team(&mut rng), team(&mut rng));
            let location = CITIES.choose(&mut rng).copied().unwrap_or("Melbourne");
            let start = window_start + Duration::seconds(rng.gen_range(0..window_secs));
            (id, name, location.to_string(), start)
        })
        .collect()
}

/// Insert demo events. Existing ids are left untouched.
pub(crate) async fn seed_events(pool: &SqlitePool) -> StoreResult<()> {
    let events = generate(Utc::now());

    for (id, name, location, start) in &events {
        sqlx::query(
            "INSERT OR IGNORE INTO sportevents (id, name, location, advertised_start_time) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(location)
        .bind(start)
        .execute(pool)
        .await?;
    }

    tracing::info!(count = events.len(), "seeded sports events");
    Ok(())
}
