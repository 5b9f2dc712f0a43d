//! Demo data for a fresh races table.

use chrono::{DateTime, Duration, Utc};
use entain_store::StoreResult;
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::SqlitePool;

const RACE_COUNT: i64 = 100;

const NAME_PREFIXES: &[&str] = &[
    "Golden", "Silver", "Thunder", "Northern", "Royal", "Coastal", "Autumn", "Midnight",
    "Highland", "Desert",
];
const NAME_SUFFIXES: &[&str] = &["Stakes", "Cup", "Handicap", "Plate", "Derby", "Classic"];

struct SeedRace {
    id: i64,
    meeting_id: i64,
    name: String,
    number: i64,
    visible: bool,
    advertised_start_time: DateTime<Utc>,
}

fn generate(now: DateTime<Utc>) -> Vec<SeedRace> {
    let mut rng = rand::thread_rng();
    let window_start = now - Duration::days(1);
    let window_secs = Duration::days(3).num_seconds();

    (1..=RACE_COUNT)
        .map(|id| {
            let prefix = NAME_PREFIXES.choose(&mut rng).copied().unwrap_or("Golden");
            let suffix = NAME_SUFFIXES.choose(&mut rng).copied().unwrap_or("Cup");
            SeedRace {
                id,
                meeting_id: rng.gen_range(1..=10),
                name: format!("{prefix} {suffix}"),
                number: rng.gen_range(1..=12),
                visible: rng.gen_bool(0.5),
                advertised_start_time: window_start
                    + Duration::seconds(rng.gen_range(0..window_secs)),
            }
        })
        .collect()
}

/// Insert demo races. Existing ids are left untouched.
pub(crate) async fn seed_races(pool: &SqlitePool) -> StoreResult<()> {
    let races = generate(Utc::now());

    for race in &races {
        sqlx::query(
            "INSERT OR IGNORE INTO races \
             (id, meeting_id, name, number, visible, advertised_start_time) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(race.id)
        .bind(race.meeting_id)
        .bind(&race.name)
        .bind(race.number)
        .bind(race.visible)
        .bind(race.advertised_start_time)
        .execute(pool)
        .await?;
    }

    tracing::info!(count = races.len(), "seeded races");
    Ok(())
}
