//! src/app/etat.rs
//!
//! État UI (sans vue, sans logique de calcul).
//!
//! Rôle : envelopper la Session et garder ce qui n’appartient qu’à l’écran
//! (démarche ouverte, panneau d’historique).
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Session`.
//! - La démarche affichée est fermée dès que l’historique change
//!   (l’entrée sélectionnée peut avoir disparu).

use std::cell::Cell;
use std::rc::Rc;

use calculatrice_rpn::{Changement, Session};

/// Marqueur de curseur inséré dans l’affichage de l’expression.
pub const MARQUEUR_CURSEUR: char = '│';

/// Entrée d’historique sélectionnée + ses lignes de démarche.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub entree: String,
    pub lignes: Vec<String>,
}

pub struct AppCalc {
    pub session: Session,
    pub demarche: Option<Demarche>,
    pub historique_ouvert: bool,

    // levé par l’observateur de session, consommé à la frame suivante
    historique_modifie: Rc<Cell<bool>>,
}

impl AppCalc {
    pub fn new(mut session: Session) -> Self {
        let historique_modifie = Rc::new(Cell::new(false));
        let drapeau = Rc::clone(&historique_modifie);
        session.abonner(move |c| {
            if c == Changement::Historique {
                drapeau.set(true);
            }
        });

        Self {
            session,
            demarche: None,
            historique_ouvert: true,
            historique_modifie,
        }
    }

    /// À appeler en début de frame.
    pub fn synchroniser(&mut self) {
        if self.historique_modifie.replace(false) {
            self.demarche = None;
        }
    }

    pub fn afficher_demarche(&mut self, entree: &str) {
        self.demarche = Some(Demarche {
            entree: entree.to_string(),
            lignes: self.session.etapes(entree),
        });
    }

    pub fn fermer_demarche(&mut self) {
        self.demarche = None;
    }

    /// Expression avec le marqueur de curseur à sa position.
    pub fn expression_avec_curseur(&self) -> String {
        let mut out = String::new();
        let curseur = self.session.curseur();
        for (i, c) in self.session.expression().chars().enumerate() {
            if i == curseur {
                out.push(MARQUEUR_CURSEUR);
            }
            out.push(c);
        }
        if curseur >= self.session.expression().chars().count() {
            out.push(MARQUEUR_CURSEUR);
        }
        out
    }
}
