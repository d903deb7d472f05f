//! Noyau de calcul (sans UI, sans stockage)
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (lexer permissif)
//! - rpn.rs        : shunting-yard (infixe -> postfix)
//! - eval.rs       : machine à pile + pipeline complet
//! - format.rs     : affichage entier / 10 décimales
//! - erreur.rs     : échecs du pipeline
//! - tampon.rs     : texte édité + curseur
//! - historique.rs : journal borné + démarche

pub mod erreur;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod tampon;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{calculer_affichage, eval_expression};
pub use historique::Historique;
pub use tampon::Tampon;
