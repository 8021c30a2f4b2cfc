use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use tempfile::TempDir;

/// A small job-market dataset shaped like the practice databases.
pub const FIXTURE_SQL: &str = r#"
CREATE TABLE companies (
    company_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    founded DATE
);

CREATE TABLE job_postings (
    job_id INTEGER PRIMARY KEY,
    company_id INTEGER REFERENCES companies(company_id),
    job_title TEXT NOT NULL,
    salary_year_avg REAL,
    job_work_from_home BOOLEAN,
    job_posted_date DATE,
    scraped_at DATETIME
);

INSERT INTO companies (company_id, name, founded) VALUES
    (1, 'Acme Analytics', '2001-05-17'),
    (2, 'Borealis Data', '2015-09-01'),
    (3, 'Cobalt Labs', NULL);

INSERT INTO job_postings
    (job_id, company_id, job_title, salary_year_avg, job_work_from_home, job_posted_date, scraped_at)
VALUES
    (1, 1, 'Data Scientist', 120000.5, 1, '2024-01-15', '2024-01-16 08:00:00'),
    (2, 1, 'Data Analyst', 85000.0, 0, '2024-02-01', '2024-02-02 09:15:30'),
    (3, 2, 'Data Engineer', 135000.0, 1, '2024-02-20', NULL),
    (4, 3, 'Data Analyst', NULL, 0, '2024-03-05', NULL);
"#;

/// Builds the fixture dataset at `path` through a writable pool, then closes it.
pub async fn create_fixture_db(path: &Path) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create fixture database");

    sqlx::raw_sql(FIXTURE_SQL)
        .execute(&pool)
        .await
        .expect("Failed to load fixture data");

    pool.close().await;
}

/// Fixture dataset in a fresh temp dir, opened read-only the way the server opens it.
///
/// Keep the returned `TempDir` alive for as long as the pool is used.
pub async fn fixture_pool() -> (TempDir, SqlitePool) {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let path = tmp.path().join("data_jobs.db");
    create_fixture_db(&path).await;

    let pool = crate::connect(&path, 2)
        .await
        .expect("Failed to open fixture database");
    (tmp, pool)
}
