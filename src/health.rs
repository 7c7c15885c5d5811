use actix_web::{get, web, HttpResponse, Responder};
use redis::aio::ConnectionManager;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: bool,
    redis: bool,
}

/// Liveness probe. Touches nothing; only proves the process serves requests.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(Liveness { status: "ok" })
}

/// Readiness probe. Pings both stores and reports 503 until each answers.
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Mutex<ConnectionManager>>>,
) -> impl Responder {
    let database = db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
        .is_ok();

    let redis = {
        let mut conn = redis.lock().await;
        redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .is_ok()
    };

    if database && redis {
        HttpResponse::Ok().json(Readiness {
            status: "ready",
            database,
            redis,
        })
    } else {
        tracing::warn!(database, redis, "readiness check failed");
        HttpResponse::ServiceUnavailable().json(Readiness {
            status: "unavailable",
            database,
            redis,
        })
    }
}
