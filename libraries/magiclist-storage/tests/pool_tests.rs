//! Tests for pool construction and its error surface

use magiclist_storage::StorageError;

#[tokio::test]
async fn test_invalid_database_url_is_a_connection_error() {
    let err = magiclist_storage::create_pool("postgres://nope")
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Connection(_)));
}

#[tokio::test]
async fn test_pool_setup_errors_convert_for_domain_callers() {
    let err = magiclist_storage::create_pool("postgres://nope")
        .await
        .unwrap_err();

    let bridged = magiclist_core::MagicError::from(err);
    assert!(matches!(bridged, magiclist_core::MagicError::Storage(_)));
}
