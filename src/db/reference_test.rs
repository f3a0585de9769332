//! Tests for ReferenceStore.

use tempfile::TempDir;

use crate::db::{Backend, ReferenceStore, initialize};

async fn setup_backend() -> (TempDir, Backend) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let backend = Backend::Sqlite {
        filename: dir.path().join("catalog.db"),
    };
    initialize(&backend).await.expect("Bootstrap should succeed");
    (dir, backend)
}

#[tokio::test(flavor = "multi_thread")]
async fn departments_are_seeded_in_id_order() {
    let (_dir, backend) = setup_backend().await;
    let store = ReferenceStore::new(&backend);

    let departments = store
        .list_departments()
        .await
        .expect("List should succeed");

    assert_eq!(departments.len(), 5);
    let ids: Vec<i64> = departments.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(departments[0].name, "Mathematics");
    assert_eq!(departments[0].code, "MATH");
    assert_eq!(departments[4].code, "ENG");
}

#[tokio::test(flavor = "multi_thread")]
async fn course_types_are_seeded_in_id_order() {
    let (_dir, backend) = setup_backend().await;
    let store = ReferenceStore::new(&backend);

    let course_types = store
        .list_course_types()
        .await
        .expect("List should succeed");

    assert_eq!(course_types.len(), 5);
    assert_eq!(course_types[0].type_name, "Online");
    assert_eq!(course_types[4].type_name, "Seminar");
    assert!(
        course_types.iter().all(|t| t.description.is_some()),
        "Seeded course types carry descriptions"
    );
}
