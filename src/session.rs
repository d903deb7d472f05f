//! Session : racine de composition.
//!
//! Détient le tampon (expression + curseur), le résultat affiché,
//! l’historique et le thème actif. Toute mutation passe par ici ; les
//! observateurs sont prévenus de ce qui a changé, de façon synchrone.
//!
//! Contrats :
//! - `calculer()` est l’unique frontière d’erreur : tout échec du pipeline
//!   devient le texte `ERREUR_AFFICHEE`, l’expression et l’historique restent intacts.
//! - Chaque mutation d’historique ou de thème écrit dans le magasin pendant le même appel.

use tracing::{debug, info};

use crate::noyau::historique::{self, etapes_pour, Historique};
use crate::noyau::{calculer_affichage, Tampon};
use crate::persistance::{Magasin, CLE_HISTORIQUE, CLE_THEME};
use crate::theme::{theme_par_id, Theme, THEME_DEFAUT};

/// Texte affiché quand l’évaluation échoue.
pub const ERREUR_AFFICHEE: &str = "Error";

/// Ce qui vient de changer (pour re-rendre seulement la bonne zone).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Changement {
    Expression,
    Curseur,
    Resultat,
    Historique,
    Theme,
}

type Observateur = Box<dyn FnMut(Changement)>;

pub struct Session {
    tampon: Tampon,
    resultat: String,
    historique: Historique,
    theme: &'static Theme,
    magasin: Box<dyn Magasin>,
    observateurs: Vec<Observateur>,
}

impl Session {
    pub fn nouvelle(magasin: Box<dyn Magasin>) -> Self {
        Self::avec_theme_initial(magasin, THEME_DEFAUT)
    }

    /// Relit historique et thème depuis le magasin ; `theme_initial` sert
    /// seulement si le magasin n’a pas encore de thème.
    pub fn avec_theme_initial(magasin: Box<dyn Magasin>, theme_initial: &str) -> Self {
        let entrees = historique::decoder(&magasin.get(CLE_HISTORIQUE, "[]"));
        let theme = theme_par_id(&magasin.get(CLE_THEME, theme_initial));
        info!(
            historique = entrees.len(),
            theme = theme.id,
            "session chargée"
        );

        Self {
            tampon: Tampon::new(),
            resultat: String::new(),
            historique: Historique::depuis_entrees(entrees),
            theme,
            magasin,
            observateurs: Vec::new(),
        }
    }

    /* ------------------------ Observables ------------------------ */

    pub fn expression(&self) -> &str {
        self.tampon.texte()
    }

    pub fn curseur(&self) -> usize {
        self.tampon.curseur()
    }

    /// Vide quand aucun résultat n’est affiché.
    pub fn resultat(&self) -> &str {
        &self.resultat
    }

    pub fn a_un_resultat(&self) -> bool {
        !self.resultat.is_empty()
    }

    /// Le plus récent en tête.
    pub fn historique(&self) -> &[String] {
        self.historique.entrees()
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Démarche (diagnostic) d’une entrée d’historique.
    pub fn etapes(&self, entree: &str) -> Vec<String> {
        etapes_pour(entree)
    }

    pub fn abonner(&mut self, observateur: impl FnMut(Changement) + 'static) {
        self.observateurs.push(Box::new(observateur));
    }

    /* ------------------------ Actions ------------------------ */

    /// Un résultat affiché est d’abord effacé avec l’expression : nouvelle saisie.
    pub fn inserer(&mut self, fragment: &str) {
        self.muter(|s| {
            s.repartir_si_resultat();
            s.tampon.inserer(fragment);
        });
    }

    pub fn effacer_arriere(&mut self) {
        self.muter(|s| {
            if s.tampon.effacer_arriere() {
                s.resultat.clear();
            }
        });
    }

    pub fn tout_effacer(&mut self) {
        self.muter(|s| {
            s.tampon.vider();
            s.resultat.clear();
        });
    }

    pub fn basculer_parenthese(&mut self) {
        self.muter(|s| {
            s.repartir_si_resultat();
            s.tampon.basculer_parenthese();
        });
    }

    pub fn placer_curseur(&mut self, pos: usize) {
        self.muter(|s| s.tampon.placer_curseur(pos));
    }

    pub fn deplacer_curseur(&mut self, delta: isize) {
        self.muter(|s| s.tampon.deplacer_curseur(delta));
    }

    pub fn calculer(&mut self) {
        if self.tampon.est_vide() {
            return;
        }

        let expr = self.tampon.texte().to_string();
        match calculer_affichage(&expr) {
            Ok(r) => {
                debug!(expression = %expr, resultat = %r, "calcul");
                self.historique.ajouter(historique::entree(&expr, &r));
                self.sauver_historique();
                self.muter(|s| {
                    s.resultat = r;
                    s.tampon.aller_a_la_fin();
                });
                self.notifier(Changement::Historique);
            }
            Err(e) => {
                debug!(expression = %expr, erreur = %e, "calcul échoué");
                self.muter(|s| s.resultat = ERREUR_AFFICHEE.to_string());
            }
        }
    }

    pub fn effacer_historique(&mut self) {
        self.historique.vider();
        self.sauver_historique();
        self.notifier(Changement::Historique);
    }

    /// Identifiant inconnu => thème sombre (et c’est lui qui est sauvé).
    pub fn choisir_theme(&mut self, id: &str) {
        let theme = theme_par_id(id);
        info!(demande = id, theme = theme.id, "changement de thème");
        self.theme = theme;
        self.magasin.put(CLE_THEME, theme.id);
        self.notifier(Changement::Theme);
    }

    /* ------------------------ Interne ------------------------ */

    fn repartir_si_resultat(&mut self) {
        if self.a_un_resultat() {
            self.tampon.vider();
            self.resultat.clear();
        }
    }

    fn sauver_historique(&mut self) {
        let json = historique::encoder(self.historique.entrees());
        self.magasin.put(CLE_HISTORIQUE, &json);
    }

    /// Applique `f` puis prévient les observateurs de ce qui a réellement changé.
    fn muter(&mut self, f: impl FnOnce(&mut Self)) {
        let avant = (self.tampon.clone(), self.resultat.clone());
        f(self);

        if self.tampon.texte() != avant.0.texte() {
            self.notifier(Changement::Expression);
        }
        if self.tampon.curseur() != avant.0.curseur() {
            self.notifier(Changement::Curseur);
        }
        if self.resultat != avant.1 {
            self.notifier(Changement::Resultat);
        }
    }

    fn notifier(&mut self, changement: Changement) {
        for obs in &mut self.observateurs {
            obs(changement);
        }
    }
}
