// src/noyau/jetons.rs

use std::fmt;

/// Opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    /// "pourcentage de" : a % b = a*b/100 (pas un modulo)
    Pourcent,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '%' => Some(Self::Pourcent),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Pourcent => '%',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise | Self::Pourcent => 2,
        }
    }
}

/// Fonctions scientifiques unaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Racine,
}

impl Fonction {
    /// Insensible à la casse : "SIN" == "sin".
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom.to_lowercase().as_str() {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "ln" => Some(Self::Ln),
            "√" => Some(Self::Racine),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Racine => "√",
        }
    }

    /// Les fonctions lient plus fort que tout opérateur binaire.
    pub const PRECEDENCE: u8 = 3;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Lexème tel qu’écrit ; la lecture numérique se fait à l’évaluation.
    Nombre(String),
    Op(Operateur),
    Fonction(Fonction),
    ParG,
    ParD,
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(lex) => f.write_str(lex),
            Jeton::Op(op) => write!(f, "{}", op.symbole()),
            Jeton::Fonction(func) => f.write_str(func.nom()),
            Jeton::ParG => f.write_str("("),
            Jeton::ParD => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne en jetons.
///
/// Fonction totale : tout caractère inconnu est ignoré, de même qu’un mot
/// alphabétique qui n’est pas un nom de fonction.
/// - chiffres et '.' : une suite maximale = un Nombre (pas de validation ici,
///   "1.2.3" échouera plus tard à la lecture numérique)
/// - + - * / % ( ) √ : un jeton par caractère
/// - mots alphabétiques : sin, cos, tan, log, ln
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(Jeton::Nombre(chars[start..i].iter().collect()));
            continue;
        }

        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Jeton::Op(op));
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Jeton::ParG);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Jeton::ParD);
                i += 1;
                continue;
            }
            '√' => {
                out.push(Jeton::Fonction(Fonction::Racine));
                i += 1;
                continue;
            }
            _ => {}
        }

        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            if let Some(func) = Fonction::depuis_nom(&mot) {
                out.push(Jeton::Fonction(func));
            }
            continue;
        }

        // symbole inconnu : ignoré
        i += 1;
    }

    out
}

/// Format utilitaire (démarche / logs) : jetons séparés par des espaces.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(Jeton::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Jeton {
        Jeton::Nombre(s.to_string())
    }

    #[test]
    fn nombres_et_operateurs() {
        assert_eq!(
            tokenize("12+7.5"),
            vec![num("12"), Jeton::Op(Operateur::Plus), num("7.5")]
        );
    }

    #[test]
    fn espaces_ignores() {
        assert_eq!(format_tokens(&tokenize("  2 *  3 ")), "2 * 3");
    }

    #[test]
    fn nombre_mal_forme_accepte_lexicalement() {
        assert_eq!(tokenize("1.2.3"), vec![num("1.2.3")]);
        assert_eq!(tokenize("."), vec![num(".")]);
    }

    #[test]
    fn fonctions_et_racine() {
        assert_eq!(
            tokenize("sin(30)"),
            vec![Jeton::Fonction(Fonction::Sin), Jeton::ParG, num("30"), Jeton::ParD]
        );
        assert_eq!(tokenize("√9"), vec![Jeton::Fonction(Fonction::Racine), num("9")]);
        assert_eq!(format_tokens(&tokenize("LN(2)")), "ln ( 2 )");
    }

    #[test]
    fn symboles_inconnus_ignores() {
        assert_eq!(format_tokens(&tokenize("2 # 3 $ abc")), "2 3");
        // glyphes d’affichage non normalisés : ignorés par le lexer
        assert_eq!(format_tokens(&tokenize("2×3")), "2 3");
    }

    #[test]
    fn pourcent() {
        assert_eq!(
            tokenize("50%20"),
            vec![num("50"), Jeton::Op(Operateur::Pourcent), num("20")]
        );
    }

    #[test]
    fn vide() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
