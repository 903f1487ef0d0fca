//! Integration tests for the events vertical slice

mod test_helpers;

use chrono::TimeZone;
use magiclist_core::types::*;
use test_helpers::*;

async fn create_event(
    pool: &sqlx::SqlitePool,
    band_id: &BandId,
    kind: EventKind,
    name: &str,
    year: i32,
    month: u32,
    day: u32,
) -> Event {
    magiclist_storage::events::create(
        pool,
        CreateEvent {
            band_id: band_id.clone(),
            kind,
            name: name.to_string(),
            starts_at: chrono::Utc.with_ymd_and_hms(year, month, day, 20, 0, 0).unwrap(),
            location: None,
        },
    )
    .await
    .expect("Failed to create event")
}

#[tokio::test]
async fn test_events_listed_chronologically() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let band_id = create_test_band(pool, "Band").await;
    create_event(pool, &band_id, EventKind::Show, "Late Show", 2026, 3, 20).await;
    create_event(pool, &band_id, EventKind::Rehearsal, "First Rehearsal", 2026, 1, 5).await;
    create_event(pool, &band_id, EventKind::Meeting, "Planning", 2026, 2, 10).await;

    let events = magiclist_storage::events::list_by_band(pool, &band_id)
        .await
        .unwrap();

    let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["First Rehearsal", "Planning", "Late Show"]);
    assert_eq!(events[0].kind, EventKind::Rehearsal);
}

#[tokio::test]
async fn test_count_by_month_buckets() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let band_id = create_test_band(pool, "Band").await;
    create_event(pool, &band_id, EventKind::Show, "Show A", 2026, 1, 10).await;
    create_event(pool, &band_id, EventKind::Show, "Show B", 2026, 1, 24).await;
    create_event(pool, &band_id, EventKind::Rehearsal, "Rehearsal", 2026, 3, 2).await;

    let buckets = magiclist_storage::events::count_by_month(pool, &band_id)
        .await
        .unwrap();

    assert_eq!(
        buckets,
        vec![
            MonthBucket {
                month: "2026-01".to_string(),
                count: 2
            },
            MonthBucket {
                month: "2026-03".to_string(),
                count: 1
            },
        ]
    );
}

#[tokio::test]
async fn test_delete_event() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let band_id = create_test_band(pool, "Band").await;
    let event = create_event(pool, &band_id, EventKind::Show, "Show", 2026, 5, 1).await;

    magiclist_storage::events::delete(pool, &event.id).await.unwrap();

    let events = magiclist_storage::events::list_by_band(pool, &band_id)
        .await
        .unwrap();
    assert!(events.is_empty());
}
