use thiserror::Error;

/// Erreurs de la couche ambiante (stockage, configuration).
/// Le pipeline de calcul a sa propre taxonomie : `noyau::ErreurCalcul`.
#[derive(Error, Debug)]
pub enum ErreurApp {
    #[error("erreur E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("erreur JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("erreur TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("erreur de configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ErreurApp>;
