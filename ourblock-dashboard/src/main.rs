/**
 * OURBLOCK STATUS DASHBOARD - Point d'entrée du daemon de statut
 *
 * RÔLE : Vue toujours disponible de la santé d'un noeud de quartier :
 * conductor en vie ou non, occupation disque, pairs connectés, état des
 * conteneurs de support.
 *
 * ARCHITECTURE : Une boucle de fond (poller) interroge les sondes toutes les
 * 10s et publie une photographie complète dans un cache partagé ; le serveur
 * HTTP ne fait que lire la dernière photographie publiée.
 *
 * UTILITÉ : Point d'observation unique pour l'opérateur d'un noeud, sans
 * accès au conductor lui-même.
 */

mod conductor;
mod config;
mod containers;
mod health;
mod http;
mod models;
mod poller;
mod state;
mod storage;
mod templates;

use crate::config::load_config;
use crate::containers::ContainerInspector;
use crate::http::AppState;
use crate::models::StatusSnapshot;
use crate::poller::Poller;
use crate::state::new_state;

use std::net::SocketAddr;
use time::OffsetDateTime;
use tokio::net::TcpListener;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Charger les variables d'environnement depuis .env (si présent)
    dotenvy::dotenv().ok();

    let cfg = load_config();

    // détection de capacité Docker, une seule fois pour toute la vie du processus
    let inspector = ContainerInspector::detect();

    println!("[statusd] starting OurBlock status dashboard");
    println!("[statusd]   neighborhood: {}", cfg.neighborhood_id);
    println!("[statusd]   conductor url: {}", cfg.conductor_url);
    println!("[statusd]   data dir: {}", cfg.data_dir.display());
    println!("[statusd]   docker available: {}", inspector.is_available());

    // photographie initiale sûre, remplacée à la fin du premier cycle
    let snapshot = new_state(StatusSnapshot::initial(OffsetDateTime::now_utc()));

    // le signal de shutdown vit aussi longtemps que main ; il ne sert qu'aux
    // tests et à un éventuel arrêt propre
    let (_shutdown, shutdown_rx) = watch::channel(false);
    Poller::new(cfg.clone(), inspector, snapshot.clone()).spawn(shutdown_rx);

    let app = http::build_router(AppState { snapshot, cfg });

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    println!("[statusd] listening on http://{addr}");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
