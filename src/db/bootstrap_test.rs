//! Tests for first-run schema creation and seeding.

use tempfile::TempDir;

use crate::db::{Backend, CourseStore, NewCourse, initialize};

async fn setup_backend() -> (TempDir, Backend) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let backend = Backend::Sqlite {
        filename: dir.path().join("catalog.db"),
    };
    initialize(&backend).await.expect("Bootstrap should succeed");
    (dir, backend)
}

#[tokio::test(flavor = "multi_thread")]
async fn initialize_creates_all_tables() {
    let (_dir, backend) = setup_backend().await;

    let mut conn = backend.connect().await.expect("Connect should succeed");
    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(&mut conn)
            .await
            .expect("Query should succeed");

    for table in ["courses", "course_types", "departments"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn initialize_seeds_reference_rows() {
    let (_dir, backend) = setup_backend().await;

    let mut conn = backend.connect().await.expect("Connect should succeed");
    let departments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
        .fetch_one(&mut conn)
        .await
        .expect("Query should succeed");
    let course_types: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM course_types")
        .fetch_one(&mut conn)
        .await
        .expect("Query should succeed");

    assert_eq!(departments, 5);
    assert_eq!(course_types, 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn initialize_starts_with_no_courses() {
    let (_dir, backend) = setup_backend().await;

    let mut conn = backend.connect().await.expect("Connect should succeed");
    let courses: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(&mut conn)
        .await
        .expect("Query should succeed");

    assert_eq!(courses, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn referenced_department_cannot_be_deleted() {
    let (_dir, backend) = setup_backend().await;

    let store = CourseStore::new(&backend);
    store
        .create(&NewCourse {
            name: "Calculus I".to_string(),
            description: None,
            department_id: 1,
            course_type_id: 1,
        })
        .await
        .expect("Create should succeed");

    let mut conn = backend.connect().await.expect("Connect should succeed");
    let result = sqlx::query("DELETE FROM departments WHERE id = 1")
        .execute(&mut conn)
        .await;

    assert!(
        result.is_err(),
        "Deleting a referenced department should violate the FK constraint"
    );
}
