// src/noyau/format.rs
//
// Affichage d’un résultat f64 :
// - entier mathématique => sans point décimal ("2", pas "2.0")
// - sinon => arrondi à 10 décimales, forme décimale la plus courte

use num_traits::ToPrimitive;

use super::erreur::ErreurCalcul;

/// Nombre de décimales conservées à l’affichage.
pub const DECIMALES: i32 = 10;

pub fn format_resultat(x: f64) -> Result<String, ErreurCalcul> {
    if !x.is_finite() {
        return Err(ErreurCalcul::NonFini);
    }

    if x.fract() == 0.0 {
        return Ok(format_entier(x));
    }

    let echelle = 10f64.powi(DECIMALES);
    let arrondi = (x * echelle).round() / echelle;

    if arrondi.fract() == 0.0 {
        return Ok(format_entier(arrondi));
    }
    Ok(format!("{arrondi}"))
}

fn format_entier(x: f64) -> String {
    match x.to_i64() {
        // to_i64 absorbe aussi -0.0 => "0"
        Some(n) => n.to_string(),
        None => format!("{x:.0}"),
    }
}
