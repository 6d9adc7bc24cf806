/**
 * OURBLOCK MOCK CONDUCTOR - Faux conductor pour développement et tests
 *
 * RÔLE :
 * Simule les endpoints du conductor que le dashboard consomme, pour
 * travailler sans noeud réel.
 *
 * ENDPOINTS :
 * - GET  /health                   -> "OK" (200)
 * - GET  /                         -> infos de service JSON
 * - GET|POST /api/admin/v0/interfaces -> {"peers": 3}
 */

use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;

fn build_router() -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/", get(service_info))
        .route("/api/admin/v0/interfaces", get(interfaces).post(interfaces))
}

// GET /
async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "OurBlock Mock Conductor",
        "status": "running",
        "version": "dev",
    }))
}

// GET|POST /api/admin/v0/interfaces
// Valeur fixe, suffisante pour vérifier la chaîne complète côté dashboard
async fn interfaces() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "peers": 3 }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], 8001));
    println!("[mock-conductor] listening on http://{addr}");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, build_router()).await?;
    Ok(())
}
