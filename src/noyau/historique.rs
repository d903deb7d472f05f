// src/noyau/historique.rs
//
// Historique des calculs : "expression = résultat", le plus récent en tête,
// borné à CAPACITE_HISTORIQUE entrées.
//
// Persistance : tableau JSON de chaînes (encoder / decoder).

use tracing::warn;

use super::eval::{calculer_affichage, normaliser};
use super::jetons::{format_tokens, tokenize};

pub const CAPACITE_HISTORIQUE: usize = 50;

/// Séparateur entre expression et résultat dans une entrée.
pub const SEPARATEUR: &str = " = ";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Historique {
    entrees: Vec<String>,
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruit un historique (ex: relu depuis le stockage), tronqué au plafond.
    pub fn depuis_entrees(mut entrees: Vec<String>) -> Self {
        entrees.truncate(CAPACITE_HISTORIQUE);
        Self { entrees }
    }

    /// Ajoute en tête ; les plus anciennes au-delà du plafond sont évincées.
    pub fn ajouter(&mut self, entree: String) {
        self.entrees.insert(0, entree);
        self.entrees.truncate(CAPACITE_HISTORIQUE);
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn entrees(&self) -> &[String] {
        &self.entrees
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }
}

/// Construit le texte d’une entrée.
pub fn entree(expression: &str, resultat: &str) -> String {
    format!("{expression}{SEPARATEUR}{resultat}")
}

pub fn encoder(entrees: &[String]) -> String {
    // Vec<String> -> JSON ne peut pas échouer
    serde_json::to_string(entrees).unwrap_or_else(|_| "[]".to_string())
}

/// Décode un tableau JSON de chaînes. Illisible => historique vide.
pub fn decoder(json: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(json) {
        Ok(v) => v,
        Err(e) => {
            warn!("historique illisible, ignoré: {e}");
            Vec::new()
        }
    }
}

/// Démarche d’une entrée : expression normalisée, jetons, résultat recalculé.
///
/// Vue de diagnostic seulement : pas de trace opération par opération.
pub fn etapes_pour(entree: &str) -> Vec<String> {
    let parties: Vec<&str> = entree.split(SEPARATEUR).collect();
    if parties.len() != 2 {
        return vec!["Invalid entry".to_string()];
    }

    let expr = normaliser(parties[0]);
    let mut etapes = vec![
        format!("Original: {expr}"),
        format!("Tokens: {}", format_tokens(&tokenize(&expr))),
    ];

    match calculer_affichage(&expr) {
        Ok(r) => etapes.push(format!("Result: {r}")),
        Err(e) => etapes.push(format!("Error: {e}")),
    }

    etapes
}
