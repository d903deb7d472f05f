//! Stockage clé -> chaîne (historique + thème).
//!
//! Le noyau ne connaît que le trait `Magasin`. Les écritures sont
//! “tirer et oublier” : `put` ne renvoie rien, un échec est seulement journalisé.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::erreur::Result;

pub const CLE_HISTORIQUE: &str = "history_list";
pub const CLE_THEME: &str = "selected_theme";

pub trait Magasin {
    fn get(&self, cle: &str, defaut: &str) -> String;
    fn put(&mut self, cle: &str, valeur: &str);
}

/// Magasin en mémoire (tests, repli si le disque est indisponible).
#[derive(Debug, Default, Clone)]
pub struct MagasinMemoire {
    valeurs: HashMap<String, String>,
}

impl MagasinMemoire {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Magasin for MagasinMemoire {
    fn get(&self, cle: &str, defaut: &str) -> String {
        self.valeurs
            .get(cle)
            .cloned()
            .unwrap_or_else(|| defaut.to_string())
    }

    fn put(&mut self, cle: &str, valeur: &str) {
        self.valeurs.insert(cle.to_string(), valeur.to_string());
    }
}

/// Magasin fichier : un objet JSON { "clé": "valeur" }, réécrit à chaque `put`.
#[derive(Debug)]
pub struct MagasinFichier {
    chemin: PathBuf,
    valeurs: BTreeMap<String, String>,
}

impl MagasinFichier {
    /// Ouvre (sans créer) le fichier. Absent ou corrompu => magasin vide.
    pub fn ouvrir(chemin: impl Into<PathBuf>) -> Self {
        let chemin = chemin.into();
        let valeurs: BTreeMap<String, String> = match fs::read_to_string(&chemin) {
            Ok(contenu) => match serde_json::from_str(&contenu) {
                Ok(v) => v,
                Err(e) => {
                    warn!("{}: contenu illisible ({e}), on repart de zéro", chemin.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        info!(chemin = %chemin.display(), cles = valeurs.len(), "magasin ouvert");
        Self { chemin, valeurs }
    }

    /// data_dir/calculatrice-rpn/prefs.json
    pub fn chemin_par_defaut() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("calculatrice-rpn");
        path.push("prefs.json");
        path
    }

    pub fn chemin(&self) -> &Path {
        &self.chemin
    }

    fn ecrire(&self) -> Result<()> {
        if let Some(parent) = self.chemin.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.valeurs)?;
        fs::write(&self.chemin, json)?;
        Ok(())
    }
}

impl Magasin for MagasinFichier {
    fn get(&self, cle: &str, defaut: &str) -> String {
        self.valeurs
            .get(cle)
            .cloned()
            .unwrap_or_else(|| defaut.to_string())
    }

    fn put(&mut self, cle: &str, valeur: &str) {
        self.valeurs.insert(cle.to_string(), valeur.to_string());
        if let Err(e) = self.ecrire() {
            warn!("écriture de {cle} impossible: {e}");
        }
    }
}
