use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Erreurs possibles de la sonde admin du conductor
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    BadStatus(StatusCode),
}

/// Réponse de l'interface admin. Seul le compteur de pairs nous intéresse ;
/// un champ absent est une erreur de désérialisation, donc un échec de sonde.
#[derive(Debug, Deserialize)]
struct InterfacesOut {
    peers: u32,
}

/// Récupère le nombre de pairs connectés via l'interface admin du conductor
/// (POST avec corps JSON vide). Tout échec — timeout, connexion, statut
/// inattendu, corps invalide — remonte en Err : c'est le poller qui décide de
/// conserver la valeur du cycle précédent.
pub async fn fetch_peer_count(client: &Client, base_url: &str) -> Result<u32, StatsError> {
    let url = format!("{base_url}/api/admin/v0/interfaces");
    let resp = client
        .post(&url)
        .json(&serde_json::json!({}))
        .timeout(PROBE_TIMEOUT)
        .send()
        .await?;

    if resp.status() != StatusCode::OK {
        return Err(StatsError::BadStatus(resp.status()));
    }

    let body: InterfacesOut = resp.json().await?;
    Ok(body.peers)
}
