use std::path::Path;
use walkdir::WalkDir;

/// Somme la taille de tous les fichiers réguliers sous `root`.
/// Un fichier qui disparaît entre l'énumération et le stat est ignoré ;
/// une erreur d'énumération (racine absente, permission refusée) rend la
/// somme partielle accumulée jusque-là. L'indisponibilité du stockage ne
/// doit jamais interrompre un cycle.
pub fn scan_usage(root: &Path) -> u64 {
    let mut total: u64 = 0;
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                eprintln!("[storage] scan stopped under {}: {e}", root.display());
                return total;
            }
        };
        if entry.file_type().is_file() {
            if let Ok(meta) = entry.metadata() {
                total += meta.len();
            }
        }
    }
    total
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
