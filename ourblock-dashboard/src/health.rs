use reqwest::{Client, StatusCode};
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Vérifie que le conductor répond. Deux tentatives dans le cycle :
/// 1) GET {base}/health, seul un 200 compte comme vivant
/// 2) GET {base}, 200 ou 404 acceptés (le service répond, même sans route racine)
/// Toute erreur est repliée dans le booléen, aucun retry supplémentaire.
pub async fn check_health(client: &Client, base_url: &str) -> bool {
    let liveness = format!("{base_url}/health");
    if let Ok(resp) = client.get(&liveness).timeout(PROBE_TIMEOUT).send().await {
        if resp.status() == StatusCode::OK {
            return true;
        }
    }

    // fallback : la racine du service
    match client.get(base_url).timeout(PROBE_TIMEOUT).send().await {
        Ok(resp) => {
            let status = resp.status();
            status == StatusCode::OK || status == StatusCode::NOT_FOUND
        }
        Err(_) => false,
    }
}
