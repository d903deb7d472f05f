// src/noyau/erreur.rs
//
// Taxonomie des échecs du pipeline (jetons -> RPN -> pile).
// Messages en anglais : ils finissent dans la démarche ("Error: ...").
// Le lexer est permissif : aucune erreur lexicale n’existe.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Parenthèse dans une RPN (jamais produite par to_rpn).
    #[error("invalid syntax")]
    Syntaxe,

    /// Opérateur ou fonction sans assez d’opérandes (ex: "5+", "-3").
    #[error("invalid expression")]
    ExpressionInvalide,

    #[error("division by zero")]
    DivisionParZero,

    /// Lexème numérique illisible (ex: "1.2.3", ".").
    #[error("invalid number: {0}")]
    NombreInvalide(String),

    /// NaN ou infini (ex: √ d’un négatif, log(0)).
    #[error("non-finite result")]
    NonFini,
}
