//! Integration tests for the bands vertical slice

mod test_helpers;

use magiclist_core::MagicError;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_list_bands() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id_a = create_test_band(pool, "Alpha").await;
    let id_b = create_test_band(pool, "Beta").await;

    let bands = magiclist_storage::bands::list(pool).await.unwrap();
    assert_eq!(bands.len(), 2);
    assert!(bands.iter().any(|b| b.id == id_a));
    assert!(bands.iter().any(|b| b.id == id_b));
}

#[tokio::test]
async fn test_members_are_scoped_and_alphabetical() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let band1 = create_test_band(pool, "Band 1").await;
    let band2 = create_test_band(pool, "Band 2").await;

    magiclist_storage::bands::add_member(pool, &band1, "Zoe", Some("drums"))
        .await
        .unwrap();
    magiclist_storage::bands::add_member(pool, &band1, "Ana", Some("vocals"))
        .await
        .unwrap();
    magiclist_storage::bands::add_member(pool, &band2, "Max", None)
        .await
        .unwrap();

    let members = magiclist_storage::bands::list_members(pool, &band1)
        .await
        .unwrap();

    let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Zoe"]);
    assert_eq!(members[0].instrument, Some("vocals".to_string()));
}

#[tokio::test]
async fn test_delete_band_cascades() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let band_id = create_test_band(pool, "Band").await;
    magiclist_storage::bands::add_member(pool, &band_id, "Ana", None)
        .await
        .unwrap();
    let (block_id, song_ids) = create_block_with_songs(pool, &band_id, "Set", &["One"]).await;

    magiclist_storage::bands::delete(pool, &band_id).await.unwrap();

    assert!(magiclist_storage::bands::get_by_id(pool, &band_id)
        .await
        .unwrap()
        .is_none());
    assert!(magiclist_storage::blocks::get_by_id(pool, &block_id)
        .await
        .unwrap()
        .is_none());
    assert!(magiclist_storage::songs::get_by_id(pool, &song_ids[0])
        .await
        .unwrap()
        .is_none());
    assert!(magiclist_storage::bands::list_members(pool, &band_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_delete_missing_band_fails() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = magiclist_storage::bands::delete(pool, &magiclist_core::BandId::new("missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, MagicError::NotFound { .. }));
}
