use crate::models::ContainerMap;
use bollard::Docker;

/// Noms logiques -> identifiants des conteneurs de support surveillés
const WATCHED: [(&str, &str); 3] = [
    ("conductor", "ourblock-conductor"),
    ("lair", "ourblock-lair"),
    ("ui", "ourblock-ui"),
];

const STATUS_UNAVAILABLE: &str = "docker unavailable";
const STATUS_NOT_FOUND: &str = "not found";
const STATUS_UNKNOWN: &str = "unknown";

/// Inspecteur des conteneurs de support. La capacité Docker est détectée une
/// seule fois, à la construction : sans daemon joignable on reste en mode
/// dégradé pour toute la vie du processus et chaque appel rend le même état
/// fixe, sans jamais toucher au runtime.
pub enum ContainerInspector {
    Available(Docker),
    Unavailable,
}

impl ContainerInspector {
    pub fn detect() -> Self {
        match Docker::connect_with_local_defaults() {
            Ok(docker) => Self::Available(docker),
            Err(e) => {
                eprintln!("[docker] client init failed, container status disabled: {e}");
                Self::Unavailable
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// État courant des trois conteneurs. Chaque nom est interrogé
    /// indépendamment : une erreur sur l'un n'affecte pas les autres.
    pub async fn inspect_all(&self) -> ContainerMap {
        let mut statuses = ContainerMap::new();
        match self {
            Self::Unavailable => {
                for (name, _) in WATCHED {
                    statuses.insert(name.to_string(), STATUS_UNAVAILABLE.to_string());
                }
            }
            Self::Available(docker) => {
                for (name, container) in WATCHED {
                    statuses.insert(name.to_string(), inspect_one(docker, container).await);
                }
            }
        }
        statuses
    }
}

/// Rend l'état du cycle de vie tel que Docker le rapporte ("running",
/// "exited"...), "not found" si le conteneur n'existe pas, "unknown" sur
/// toute autre erreur du runtime.
async fn inspect_one(docker: &Docker, container: &str) -> String {
    match docker.inspect_container(container, None).await {
        Ok(details) => match details.state.and_then(|s| s.status) {
            Some(status) => status.to_string(),
            None => STATUS_UNKNOWN.to_string(),
        },
        Err(bollard::errors::Error::DockerResponseServerError { status_code: 404, .. }) => {
            STATUS_NOT_FOUND.to_string()
        }
        Err(e) => {
            eprintln!("[docker] inspect {container} failed: {e}");
            STATUS_UNKNOWN.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_degraded_mode_reports_all_names_unavailable() {
        let inspector = ContainerInspector::Unavailable;
        let statuses = inspector.inspect_all().await;

        assert_eq!(statuses.len(), 3);
        for name in ["conductor", "lair", "ui"] {
            assert_eq!(statuses.get(name).map(String::as_str), Some("docker unavailable"));
        }
    }
}
