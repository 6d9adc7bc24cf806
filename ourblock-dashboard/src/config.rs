use std::path::PathBuf;

/// Configuration du dashboard, lue depuis l'environnement au démarrage.
/// Aucun état persistant : tout est reconstruit depuis les défauts au restart.
#[derive(Debug, Clone)]
pub struct Config {
    /// Identifiant du quartier affiché et renvoyé par l'API
    pub neighborhood_id: String,
    /// URL de base du conductor surveillé
    pub conductor_url: String,
    /// Racine des données dont on mesure l'occupation disque
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neighborhood_id: "unknown".into(),
            conductor_url: "http://ourblock:8001".into(),
            data_dir: PathBuf::from("/data"),
        }
    }
}

pub fn load_config() -> Config {
    let defaults = Config::default();
    let conductor_url = std::env::var("CONDUCTOR_URL").unwrap_or(defaults.conductor_url);
    Config {
        neighborhood_id: std::env::var("NEIGHBORHOOD_ID").unwrap_or(defaults.neighborhood_id),
        // pas de slash final, les sondes concatènent leurs chemins
        conductor_url: conductor_url.trim_end_matches('/').to_string(),
        data_dir: std::env::var("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.neighborhood_id, "unknown");
        assert_eq!(cfg.conductor_url, "http://ourblock:8001");
        assert_eq!(cfg.data_dir, PathBuf::from("/data"));
    }
}
