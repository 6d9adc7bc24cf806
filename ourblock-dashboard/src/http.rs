/**
 * API HTTP DU DASHBOARD - Surface de lecture du statut
 *
 * RÔLE :
 * Expose la photographie courante du noeud : page web rendue, API JSON,
 * infos de quartier, liveness du dashboard lui-même et assets statiques.
 *
 * FONCTIONNEMENT :
 * - Serveur Axum sur port 8080, routes /, /api/status, /api/neighborhood,
 *   /health, /static
 * - Les handlers sont de purs lecteurs : ils clonent la photographie publiée
 *   par le poller, même périmée, et ne déclenchent jamais de cycle
 * - /health rend toujours OK : c'est la vivacité du dashboard lui-même,
 *   pas celle du noeud surveillé (les orchestrateurs s'en servent)
 */

use crate::config::Config;
use crate::models::{ContainerMap, StatusSnapshot};
use crate::state::Shared;
use crate::templates;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub snapshot: Shared<StatusSnapshot>,
    pub cfg: Config,
}

/// Vue JSON du statut, calculée à la demande depuis la photographie courante
#[derive(Debug, serde::Serialize)]
pub struct StatusView {
    pub neighborhood_id: String,
    pub online: bool,
    pub uptime_seconds: u64,
    pub uptime_formatted: String,
    pub vouches_processed: u64,
    pub storage_used_mb: f64,
    pub peers_connected: u32,
    pub containers: ContainerMap,
    pub last_update: Option<String>,
}

pub fn to_view(neighborhood_id: &str, snap: &StatusSnapshot) -> StatusView {
    StatusView {
        neighborhood_id: neighborhood_id.to_string(),
        online: snap.online,
        uptime_seconds: snap.uptime_seconds,
        uptime_formatted: format_uptime(snap.uptime_seconds),
        vouches_processed: snap.vouches_processed,
        storage_used_mb: round2(snap.storage_used_mb),
        peers_connected: snap.peers_connected,
        containers: snap.containers.clone(),
        last_update: snap.last_update.clone(),
    }
}

/// Formate une durée en jours/heures/minutes. Les unités hautes nulles sont
/// omises, les minutes toujours affichées.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn join_command(neighborhood_id: &str) -> String {
    format!("curl -fsSL https://ourblock.community/install.sh | bash -s -- -n {neighborhood_id}")
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/status", get(api_status))
        .route("/api/neighborhood", get(api_neighborhood))
        .route("/health", get(|| async { "OK" }))
        .nest_service("/static", ServeDir::new("./static"))
        .with_state(app_state)
}

// GET / (page de statut rendue)
async fn index(State(app): State<AppState>) -> Html<String> {
    let snap = app.snapshot.read().clone();
    let view = to_view(&app.cfg.neighborhood_id, &snap);
    Html(templates::render_index(&view, &join_command(&app.cfg.neighborhood_id)))
}

// GET /api/status
async fn api_status(State(app): State<AppState>) -> Json<StatusView> {
    let snap = app.snapshot.read().clone();
    Json(to_view(&app.cfg.neighborhood_id, &snap))
}

// GET /api/neighborhood
async fn api_neighborhood(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "id": app.cfg.neighborhood_id,
        "join_command": join_command(&app.cfg.neighborhood_id),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::new_state;
    use time::OffsetDateTime;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0m");
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(60), "1m");
        assert_eq!(format_uptime(3600), "1h 0m");
        assert_eq!(format_uptime(90061), "1d 1h 1m");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(12.0), 12.0);
    }

    fn test_state() -> AppState {
        AppState {
            snapshot: new_state(StatusSnapshot::initial(OffsetDateTime::now_utc())),
            cfg: Config {
                neighborhood_id: "testhood".into(),
                ..Config::default()
            },
        }
    }

    async fn spawn_server(state: AppState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_api_status_has_all_keys_before_first_cycle() {
        let base = spawn_server(test_state()).await;
        let body: serde_json::Value = reqwest::get(format!("{base}/api/status"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        for key in [
            "neighborhood_id",
            "online",
            "uptime_seconds",
            "uptime_formatted",
            "vouches_processed",
            "storage_used_mb",
            "peers_connected",
            "containers",
            "last_update",
        ] {
            assert!(body.get(key).is_some(), "missing key {key}");
        }

        assert_eq!(body["neighborhood_id"], "testhood");
        assert_eq!(body["online"], false);
        assert_eq!(body["storage_used_mb"], 0.0);
        assert_eq!(body["peers_connected"], 0);
        assert!(body["last_update"].is_null());
    }

    #[tokio::test]
    async fn test_dashboard_liveness_ignores_snapshot() {
        // photographie entièrement dégradée : /health doit quand même répondre OK
        let base = spawn_server(test_state()).await;
        let resp = reqwest::get(format!("{base}/health")).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert_eq!(resp.text().await.unwrap(), "OK");
    }

    #[tokio::test]
    async fn test_api_neighborhood_templates_join_command() {
        let base = spawn_server(test_state()).await;
        let body: serde_json::Value = reqwest::get(format!("{base}/api/neighborhood"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["id"], "testhood");
        assert_eq!(
            body["join_command"],
            "curl -fsSL https://ourblock.community/install.sh | bash -s -- -n testhood"
        );
    }

    #[tokio::test]
    async fn test_index_renders_neighborhood() {
        let base = spawn_server(test_state()).await;
        let resp = reqwest::get(format!("{base}/")).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let page = resp.text().await.unwrap();
        assert!(page.contains("testhood"));
        assert!(page.contains("Offline"));
    }
}
