/**
 * POLLER - Boucle d'agrégation du statut du noeud
 *
 * RÔLE :
 * Toutes les 10 secondes, interroge les quatre sondes (health, stockage,
 * conteneurs, pairs), construit une photographie neuve et la publie en bloc
 * dans le cache partagé.
 *
 * FONCTIONNEMENT :
 * - Un seul état stable : la boucle tourne du démarrage à la fin du processus
 * - Les sondes s'exécutent séquentiellement dans le cycle, jamais en parallèle
 * - Chaque sonde est isolée : son échec dégrade son champ vers la valeur
 *   documentée (défaut sûr, ou valeur précédente pour les pairs) et le cycle
 *   continue ; la boucle elle-même ne meurt jamais
 * - Publication par remplacement complet sous le verrou d'écriture : les
 *   lecteurs HTTP voient l'ancienne ou la nouvelle photographie, jamais un
 *   mélange des deux
 */

use crate::conductor;
use crate::config::Config;
use crate::containers::ContainerInspector;
use crate::health;
use crate::models::StatusSnapshot;
use crate::state::Shared;
use crate::storage;
use std::time::Duration;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Intervalle entre deux cycles d'agrégation
const POLL_INTERVAL: Duration = Duration::from_secs(10);

pub struct Poller {
    cfg: Config,
    http: reqwest::Client,
    inspector: ContainerInspector,
    snapshot: Shared<StatusSnapshot>,
}

impl Poller {
    pub fn new(cfg: Config, inspector: ContainerInspector, snapshot: Shared<StatusSnapshot>) -> Self {
        Self {
            cfg,
            http: reqwest::Client::new(),
            inspector,
            snapshot,
        }
    }

    /// Exécute un cycle complet et publie la photographie résultante.
    /// Point d'entrée unitaire : les tests l'appellent directement sans
    /// démarrer la boucle de fond.
    pub async fn run_cycle(&self) {
        let previous = self.snapshot.read().clone();
        let now = OffsetDateTime::now_utc();

        let online = health::check_health(&self.http, &self.cfg.conductor_url).await;

        let uptime_seconds = (now - previous.start_time).whole_seconds().max(0) as u64;

        // le scan est bloquant et non borné : une racine lente retarde le
        // cycle entier, jamais les lecteurs HTTP
        let storage_used_mb = storage::bytes_to_mb(storage::scan_usage(&self.cfg.data_dir));

        let containers = self.inspector.inspect_all().await;

        // seule sonde collante : on conserve la valeur précédente sur échec
        let peers_connected =
            match conductor::fetch_peer_count(&self.http, &self.cfg.conductor_url).await {
                Ok(peers) => peers,
                Err(e) => {
                    eprintln!(
                        "[poller] peer probe failed, keeping {}: {e}",
                        previous.peers_connected
                    );
                    previous.peers_connected
                }
            };

        let next = StatusSnapshot {
            online,
            start_time: previous.start_time,
            uptime_seconds,
            storage_used_mb,
            peers_connected,
            containers,
            last_update: now.format(&Rfc3339).ok(),
            vouches_processed: previous.vouches_processed,
        };

        *self.snapshot.write() = next;
    }

    /// Démarre la boucle de fond. Elle ne s'arrête que sur signal de
    /// shutdown ou à la fin du processus.
    pub fn spawn(self, mut shutdown: watch::Receiver<bool>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(POLL_INTERVAL);
            // un cycle trop long décale le tick suivant, pas de rattrapage en rafale
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = interval.tick() => self.run_cycle().await,
                    _ = shutdown.changed() => {
                        println!("[poller] shutdown signal received");
                        break;
                    }
                }
            }
        })
    }
}
