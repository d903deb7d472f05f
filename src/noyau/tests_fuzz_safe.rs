//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le tampon, le pipeline et la session sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariants clés :
//!   * le curseur reste dans [0, longueur]
//!   * aucun panic, quelle que soit la saisie
//!   * le résultat affiché est vide, "Error", ou un nombre lisible

use std::time::{Duration, Instant};

use super::eval::calculer_affichage;
use super::historique::{etapes_pour, CAPACITE_HISTORIQUE};
use super::tampon::Tampon;
use crate::persistance::MagasinMemoire;
use crate::session::{Session, ERREUR_AFFICHEE};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Générateurs ------------------------ */

/// Fragments que le pavé peut produire (et quelques intrus).
const FRAGMENTS: [&str; 26] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "/", "%", "−", "÷",
    "sin(", "cos(", "tan(", "log(", "ln(", "√", ")", "é",
];

fn expression_aleatoire(rng: &mut Rng, max_len: u32) -> String {
    let n = 1 + rng.pick(max_len);
    (0..n)
        .map(|_| FRAGMENTS[rng.pick(FRAGMENTS.len() as u32) as usize])
        .collect()
}

fn resultat_valide(r: &str) -> bool {
    r.is_empty() || r == ERREUR_AFFICHEE || r.parse::<f64>().is_ok()
}

/* ------------------------ Fuzz ------------------------ */

#[test]
fn fuzz_pipeline_sans_panic() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..3000 {
        let expr = expression_aleatoire(&mut rng, 24);
        if let Ok(r) = calculer_affichage(&expr) {
            assert!(r.parse::<f64>().is_ok(), "expr={expr:?} r={r:?}");
            assert!(!r.ends_with(".0"), "expr={expr:?} r={r:?}");
        }
        assert_eq!(etapes_pour(&format!("{expr} = ?")).len(), 3);
        budget(t0, max);
    }
}

#[test]
fn fuzz_deterministe() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..200 {
        let ea = expression_aleatoire(&mut a, 16);
        let eb = expression_aleatoire(&mut b, 16);
        assert_eq!(calculer_affichage(&ea), calculer_affichage(&eb));
    }
}

#[test]
fn fuzz_tampon_curseur_borne() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(7);
    let mut t = Tampon::new();

    for _ in 0..20_000 {
        match rng.pick(6) {
            0 | 1 => t.inserer(FRAGMENTS[rng.pick(FRAGMENTS.len() as u32) as usize]),
            2 => {
                t.effacer_arriere();
            }
            3 => t.basculer_parenthese(),
            4 => t.placer_curseur(rng.pick(40) as usize),
            _ => t.deplacer_curseur(rng.pick(5) as isize - 2),
        }
        assert!(t.curseur() <= t.longueur(), "texte={:?}", t.texte());
        if t.longueur() > 200 {
            t.vider();
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_session_actions() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(2024);
    let mut s = Session::nouvelle(Box::new(MagasinMemoire::new()));

    for _ in 0..5000 {
        match rng.pick(10) {
            0..=4 => s.inserer(FRAGMENTS[rng.pick(FRAGMENTS.len() as u32) as usize]),
            5 => s.effacer_arriere(),
            6 => s.basculer_parenthese(),
            7 => s.placer_curseur(rng.pick(30) as usize),
            8 => s.calculer(),
            _ => {
                if rng.pick(20) == 0 {
                    s.tout_effacer();
                } else {
                    s.deplacer_curseur(-1);
                }
            }
        }

        assert!(s.curseur() <= s.expression().chars().count());
        assert!(resultat_valide(s.resultat()), "résultat={:?}", s.resultat());
        assert!(s.historique().len() <= CAPACITE_HISTORIQUE);
        budget(t0, max);
    }
}
