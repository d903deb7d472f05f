//! Configuration chargée depuis un fichier TOML.
//!
//! Ordre de recherche :
//! 1. variable d’environnement `$CALCULATRICE_CONFIG`
//! 2. `<config_dir>/calculatrice-rpn/config.toml`
//! 3. valeurs par défaut (tout est optionnel)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::erreur::{ErreurApp, Result};
use crate::persistance::MagasinFichier;
use crate::theme::THEME_DEFAUT;

pub const VAR_CONFIG: &str = "CALCULATRICE_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub stockage: StockageConfig,
    pub fenetre: FenetreConfig,
    pub calcul: CalculConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StockageConfig {
    /// Fichier du magasin. Défaut : data_dir de la plateforme.
    pub chemin: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FenetreConfig {
    pub largeur: f32,
    pub hauteur: f32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CalculConfig {
    /// Thème si le magasin n’en contient aucun.
    pub theme_initial: String,
}

impl Default for FenetreConfig {
    fn default() -> Self {
        Self {
            largeur: 380.0,
            hauteur: 680.0,
        }
    }
}

impl Default for CalculConfig {
    fn default() -> Self {
        Self {
            theme_initial: THEME_DEFAUT.into(),
        }
    }
}

impl Config {
    pub fn chemin_magasin(&self) -> PathBuf {
        match &self.stockage.chemin {
            Some(p) => PathBuf::from(p),
            None => MagasinFichier::chemin_par_defaut(),
        }
    }

    fn valider(self) -> Result<Self> {
        if self.fenetre.largeur <= 0.0 || self.fenetre.hauteur <= 0.0 {
            return Err(ErreurApp::Config(format!(
                "taille de fenêtre invalide: {}x{}",
                self.fenetre.largeur, self.fenetre.hauteur
            )));
        }
        Ok(self)
    }
}

/// Charge la config. Pas de fichier => valeurs par défaut.
pub fn charger_config() -> Result<Config> {
    match chemin_config() {
        Some(p) if p.exists() => charger_depuis(&p),
        _ => Ok(Config::default()),
    }
}

pub fn charger_depuis(chemin: &Path) -> Result<Config> {
    let contenu = std::fs::read_to_string(chemin)?;
    let config: Config = toml::from_str(&contenu)?;
    config.valider()
}

fn chemin_config() -> Option<PathBuf> {
    if let Ok(p) = std::env::var(VAR_CONFIG) {
        return Some(PathBuf::from(p));
    }
    dirs::config_dir().map(|d| d.join("calculatrice-rpn").join("config.toml"))
}
