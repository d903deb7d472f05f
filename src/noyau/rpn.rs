// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> RPN (postfix)
//
// Règles:
// - Nombre : sortie directe
// - Fonction : empilée, sortie après son argument (parenthèse fermante,
//   ou dépilée par un opérateur binaire de précédence <= 3)
// - ')' sans '(' correspondante : ignorée
// - '(' restée ouverte en fin d’entrée : jetée sans effet
//
// Conversion totale : une entrée mal formée donne une RPN mal formée,
// c’est l’évaluateur qui la rejette.

use super::jetons::{Fonction, Jeton};

fn precedence(t: &Jeton) -> u8 {
    match t {
        Jeton::Op(op) => op.precedence(),
        Jeton::Fonction(_) => Fonction::PRECEDENCE,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(tokens: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Jeton::Nombre(_) => out.push(tok),

            Jeton::Fonction(_) | Jeton::ParG => ops.push(tok),

            Jeton::ParD => {
                // dépile jusqu’à '(' (absente : on vide tout, sans erreur)
                while let Some(top) = ops.pop() {
                    if top == Jeton::ParG {
                        break;
                    }
                    out.push(top);
                }

                // fonction au sommet : elle s’applique au groupe qu’on vient de fermer
                if let Some(f @ Jeton::Fonction(_)) = ops.last() {
                    out.push(f.clone());
                    ops.pop();
                }
            }

            Jeton::Op(_) => {
                // associativité à gauche : on dépile à précédence égale
                while let Some(top) = ops.last() {
                    if *top == Jeton::ParG || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }
        }
    }

    while let Some(op) = ops.pop() {
        if op != Jeton::ParG {
            out.push(op);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::to_rpn;
    use crate::noyau::jetons::{format_tokens, tokenize};

    fn rpn(s: &str) -> String {
        format_tokens(&to_rpn(&tokenize(s)))
    }

    #[test]
    fn precedence_mul_avant_add() {
        assert_eq!(rpn("2+3*4"), "2 3 4 * +");
    }

    #[test]
    fn associativite_gauche() {
        assert_eq!(rpn("10-2-3"), "10 2 - 3 -");
        assert_eq!(rpn("8/4/2"), "8 4 / 2 /");
    }

    #[test]
    fn parentheses() {
        assert_eq!(rpn("(2+3)*4"), "2 3 + 4 *");
    }

    #[test]
    fn fonction_liee_au_groupe() {
        assert_eq!(rpn("sin(30)"), "30 sin");
        assert_eq!(rpn("2*cos(60+0)"), "2 60 0 + cos *");
    }

    #[test]
    fn racine_sans_parentheses() {
        assert_eq!(rpn("√9+7"), "9 √ 7 +");
    }

    #[test]
    fn parenthese_fermante_orpheline_ignoree() {
        assert_eq!(rpn("2+3)"), "2 3 +");
    }

    #[test]
    fn parenthese_ouvrante_non_fermee_absorbee() {
        assert_eq!(rpn("(2+3"), "2 3 +");
        assert_eq!(rpn("((("), "");
    }

    #[test]
    fn pourcent_meme_rang_que_mul() {
        assert_eq!(rpn("50%20+1"), "50 20 % 1 +");
    }
}
