//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> tokenize -> RPN -> pile de valeurs -> f64 -> affichage
//!
//! Les fonctions trigonométriques travaillent en DEGRÉS.

use tracing::debug;

use super::erreur::ErreurCalcul;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize, Fonction, Jeton, Operateur};
use super::rpn::to_rpn;

/// Remplace les glyphes d’affichage par les opérateurs canoniques.
pub fn normaliser(expr: &str) -> String {
    expr.chars()
        .map(|c| match c {
            '×' => '*',
            '−' => '-',
            '÷' => '/',
            autre => autre,
        })
        .collect()
}

/// Machine à pile sur une RPN.
///
/// En fin de parcours : le sommet de la pile, ou 0 si elle est vide
/// (expression vide). Des valeurs en dessous du sommet sont ignorées :
/// "2√9" donne 3.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Jeton::Nombre(lex) => {
                let v = lex
                    .parse::<f64>()
                    .map_err(|_| ErreurCalcul::NombreInvalide(lex.clone()))?;
                pile.push(v);
            }

            Jeton::Op(op) => {
                let b = pile.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                let a = pile.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                pile.push(applique_op(*op, a, b)?);
            }

            Jeton::Fonction(func) => {
                let x = pile.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                pile.push(applique_fonction(*func, x));
            }

            // to_rpn ne laisse jamais de parenthèses ; si une RPN forgée à la main
            // en contient, c’est une syntaxe invalide.
            Jeton::ParG | Jeton::ParD => return Err(ErreurCalcul::Syntaxe),
        }
    }

    Ok(pile.last().copied().unwrap_or(0.0))
}

fn applique_op(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    Ok(match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Operateur::Pourcent => a * b / 100.0,
    })
}

fn applique_fonction(func: Fonction, x: f64) -> f64 {
    match func {
        Fonction::Sin => x.to_radians().sin(),
        Fonction::Cos => x.to_radians().cos(),
        Fonction::Tan => x.to_radians().tan(),
        Fonction::Log => x.log10(),
        Fonction::Ln => x.ln(),
        // négatif : NaN, rejeté à l’affichage
        Fonction::Racine => x.sqrt(),
    }
}

/// API publique : évalue une expression (glyphes d’affichage acceptés).
pub fn eval_expression(expr: &str) -> Result<f64, ErreurCalcul> {
    let s = normaliser(expr);

    let jetons = tokenize(&s);
    debug!(jetons = %format_tokens(&jetons), "tokenize");

    let rpn = to_rpn(&jetons);
    debug!(rpn = %format_tokens(&rpn), "shunting-yard");

    let valeur = eval_rpn(&rpn)?;
    debug!(valeur, "pile");
    Ok(valeur)
}

/// Évalue puis formate (texte prêt pour l’affichage et l’historique).
pub fn calculer_affichage(expr: &str) -> Result<String, ErreurCalcul> {
    format_resultat(eval_expression(expr)?)
}
