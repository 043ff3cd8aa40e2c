//! PostgreSQL fixtures for SmartFit integration tests.
//!
//! One server is shared by every test in a binary, and each [`TestDb`] is
//! a freshly migrated database of its own on it. `SMARTFIT_TEST_PG_URL`
//! points the tests at an existing server. Without it a postgres container
//! is started on first use and lives as long as the test binary.

use sqlx::{Executor, PgPool};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use uuid::Uuid;

use smartfit_db::config::DbConfig;
use smartfit_db::models::{BodyStats, FitnessLevel, QuizData, WorkoutSchedule};
use smartfit_db::pool;
use smartfit_db::queries::profiles;

struct Server {
    root_url: String,
    _container: Option<ContainerAsync<Postgres>>,
}

static SERVER: OnceCell<Server> = OnceCell::const_new();

async fn server() -> &'static Server {
    SERVER
        .get_or_init(|| async {
            if let Ok(root_url) = std::env::var("SMARTFIT_TEST_PG_URL") {
                return Server {
                    root_url,
                    _container: None,
                };
            }

            let container = Postgres::default()
                .with_tag("16-alpine")
                .start()
                .await
                .expect("start postgres container");
            let host = container.get_host().await.expect("container host");
            let port = container
                .get_host_port_ipv4(5432)
                .await
                .expect("container port");

            Server {
                root_url: format!("postgresql://postgres:postgres@{host}:{port}"),
                _container: Some(container),
            }
        })
        .await
}

/// Server-root URL of the shared server, without a database name.
pub async fn root_url() -> &'static str {
    &server().await.root_url
}

/// A temporary database with the SmartFit schema applied.
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    /// Create and migrate a uniquely named database.
    pub async fn create() -> Self {
        let root = root_url().await;
        let name = format!("smartfit_test_{}", Uuid::new_v4().simple());

        let maint = pool::connect_maintenance(&format!("{root}/postgres"))
            .await
            .expect("connect to maintenance database");
        let created = pool::create_database_if_missing(&maint, &name)
            .await
            .unwrap_or_else(|e| panic!("create {name}: {e:#}"));
        maint.close().await;
        assert!(created, "{name} already existed");

        let pool = pool::create_pool(&DbConfig::new(format!("{root}/{name}")))
            .await
            .unwrap_or_else(|e| panic!("connect to {name}: {e:#}"));
        pool::run_migrations(&pool).await.expect("migrations");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool and drop the database.
    pub async fn teardown(self) {
        self.pool.close().await;
        drop_database(&self.name).await;
    }
}

/// Drop database `name` on the shared server, ending stray connections.
pub async fn drop_database(name: &str) {
    let root = root_url().await;
    let maint = pool::connect_maintenance(&format!("{root}/postgres"))
        .await
        .expect("connect to maintenance database");
    let _ = sqlx::query(
        "SELECT pg_terminate_backend(pid) FROM pg_stat_activity \
         WHERE datname = $1 AND pid <> pg_backend_pid()",
    )
    .bind(name)
    .execute(&maint)
    .await;
    let _ = maint
        .execute(format!("DROP DATABASE IF EXISTS {name}").as_str())
        .await;
    maint.close().await;
}

/// Quiz answers for a beginner training three days a week.
pub fn sample_quiz() -> QuizData {
    QuizData {
        fitness_level: FitnessLevel::Beginner,
        fitness_goals: "get stronger".to_string(),
        workout_schedule: WorkoutSchedule {
            days_per_week: "3".to_string(),
            session_length: "45".to_string(),
        },
        equipment: "dumbbells".to_string(),
        limitations: String::new(),
        workout_preference: String::new(),
        body_stats: BodyStats::default(),
    }
}

/// Store [`sample_quiz`] as `user_id`'s profile and return the profile id.
pub async fn seed_profile(pool: &PgPool, user_id: Uuid) -> Uuid {
    profiles::save_fitness_profile(pool, user_id, &sample_quiz())
        .await
        .expect("seed fitness profile")
        .id
}
