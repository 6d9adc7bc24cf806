use std::collections::HashMap;
use time::OffsetDateTime;

/// Statuts des conteneurs de support, nom logique -> état
/// ("running", "exited", "not found", "docker unavailable"...)
pub type ContainerMap = HashMap<String, String>;

/// Photographie complète de l'état du noeud, publiée en bloc à la fin de
/// chaque cycle. Jamais mutée champ par champ : le poller en construit une
/// neuve et remplace l'ancienne d'un coup, les lecteurs ne voient donc jamais
/// un mélange de deux cycles.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    /// Résultat du health check du conductor pour ce cycle
    pub online: bool,
    /// Instant de démarrage du processus, figé une fois pour toutes
    pub start_time: OffsetDateTime,
    /// Dérivé à chaque cycle : now - start_time
    pub uptime_seconds: u64,
    /// Occupation disque sous la racine de données
    pub storage_used_mb: f64,
    /// Collant : conservé du cycle précédent si la sonde échoue
    pub peers_connected: u32,
    pub containers: ContainerMap,
    /// Horodatage RFC3339 du cycle qui a produit cette photographie,
    /// None tant qu'aucun cycle n'a abouti
    pub last_update: Option<String>,
    /// Compteur présent dans le schéma mais incrémenté par aucun composant
    pub vouches_processed: u64,
}

impl StatusSnapshot {
    /// Valeurs sûres d'avant le premier cycle : hors-ligne, compteurs à zéro.
    pub fn initial(start_time: OffsetDateTime) -> Self {
        Self {
            online: false,
            start_time,
            uptime_seconds: 0,
            storage_used_mb: 0.0,
            peers_connected: 0,
            containers: ContainerMap::new(),
            last_update: None,
            vouches_processed: 0,
        }
    }
}
