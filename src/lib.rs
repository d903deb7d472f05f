//! Calculatrice RPN — moteur d’édition et d’évaluation.
//!
//! - noyau       : jetons, shunting-yard, pile, format, tampon, historique
//! - session     : racine de composition (état observable + actions)
//! - theme       : table statique des thèmes
//! - persistance : magasin clé -> chaîne
//! - config      : configuration TOML
//! - erreur      : erreurs de la couche ambiante

pub mod config;
pub mod erreur;
pub mod noyau;
pub mod persistance;
pub mod session;
pub mod theme;

pub use session::{Changement, Session, ERREUR_AFFICHEE};
