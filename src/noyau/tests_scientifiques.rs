//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! - identités trigonométriques en degrés
//! - cohérence log / ln / √
//! - règles d’évaluation (précédence, associativité, pourcentage)
//! - stress borné avec budget temps global

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval::calculer_affichage;

fn eval_ok(expr: &str) -> String {
    calculer_affichage(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_vaut(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_echoue(expr: &str, attendu: ErreurCalcul) {
    assert_eq!(calculer_affichage(expr), Err(attendu), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Trig en degrés ------------------------ */

#[test]
fn sci_angles_remarquables() {
    assert_vaut("sin(0)", "0");
    assert_vaut("sin(30)", "0.5");
    assert_vaut("sin(90)", "1");
    assert_vaut("cos(0)", "1");
    assert_vaut("cos(90)", "0");
    assert_vaut("cos(180)", "-1");
    assert_vaut("tan(45)", "1");
}

#[test]
fn sci_periodicite() {
    // sin(x + 360) = sin(x)
    assert_eq!(eval_ok("sin(390)"), eval_ok("sin(30)"));
    // cos(x + 360) = cos(x)
    assert_eq!(eval_ok("cos(420)"), eval_ok("cos(60)"));
    // tan(x + 180) = tan(x)
    assert_eq!(eval_ok("tan(225)"), eval_ok("tan(45)"));
}

#[test]
fn sci_pythagore() {
    // sin² + cos² = 1
    for angle in [0, 17, 30, 45, 89, 123, 271] {
        let expr = format!("sin({angle})*sin({angle})+cos({angle})*cos({angle})");
        assert_vaut(&expr, "1");
    }
}

/* ------------------------ Logarithmes et racines ------------------------ */

#[test]
fn sci_logarithmes() {
    assert_vaut("log(1)", "0");
    assert_vaut("log(100)", "2");
    assert_vaut("log(2)+log(5)", "1");
    assert_vaut("ln(1)", "0");
}

#[test]
fn sci_racines() {
    assert_vaut("√0", "0");
    assert_vaut("√2*√2", "2");
    assert_vaut("√(16)", "4");
    assert_vaut("√(3*3+4*4)", "5");
    assert_vaut("√2", "1.4142135624");
}

#[test]
fn sci_domaines_hors_reels() {
    assert_echoue("√(0-1)", ErreurCalcul::NonFini);
    assert_echoue("ln(0)", ErreurCalcul::NonFini);
    assert_echoue("log(0-10)", ErreurCalcul::NonFini);
}

/* ------------------------ Règles d’évaluation ------------------------ */

#[test]
fn sci_precedence_et_associativite() {
    assert_vaut("2+3*4", "14");
    assert_vaut("2*3+4", "10");
    assert_vaut("10-2-3", "5");
    assert_vaut("100/10/5", "2");
    assert_vaut("2*(3+4)", "14");
    assert_vaut("((2))", "2");
}

#[test]
fn sci_pourcentage_de() {
    // a % b = a*b/100, pas un modulo
    assert_vaut("50%20", "10");
    assert_vaut("20%50", "10");
    assert_vaut("7%3", "0.21");
    // même rang que * et /
    assert_vaut("10+50%20", "20");
}

#[test]
fn sci_resultats_entiers_sans_point() {
    assert_vaut("4/2", "2");
    assert_vaut("0.5*4", "2");
    assert_vaut("1.5+1.5", "3");
    assert_vaut("0.1+0.2", "0.3");
}

#[test]
fn sci_parentheses_permissives() {
    // fermante orpheline ignorée, ouvrante non fermée absorbée
    assert_vaut("2+3)", "5");
    assert_vaut("(2+3", "5");
    assert_vaut("sin(30", "0.5");
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_longue_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = vec!["1"; 5000].join("+");
    assert_vaut(&expr, "5000");
    budget(t0, max);

    let expr = format!("{}1{}", "(".repeat(2000), ")".repeat(2000));
    assert_vaut(&expr, "1");
    budget(t0, max);
}

#[test]
fn sci_stress_fonctions_imbriquees() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // √√√…(1) = 1
    let mut expr = String::from("1");
    for _ in 0..500 {
        expr = format!("√({expr})");
    }
    assert_vaut(&expr, "1");
    budget(t0, max);
}
