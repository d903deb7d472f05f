//! Thèmes : table statique en lecture seule, indexée par identifiant.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub nom: &'static str,
    pub fond: Rgb,
    pub bouton_chiffre: Rgb,
    pub bouton_op: Rgb,
    pub bouton_fonction: Rgb,
    pub texte_principal: Rgb,
    pub texte_secondaire: Rgb,
}

pub const THEME_DEFAUT: &str = "dark";

pub static SOMBRE: Theme = Theme {
    id: "dark",
    nom: "Classic Dark",
    fond: Rgb(0x00, 0x00, 0x00),
    bouton_chiffre: Rgb(0x33, 0x33, 0x33),
    bouton_op: Rgb(0xFF, 0x9F, 0x0A),
    bouton_fonction: Rgb(0xA5, 0xA5, 0xA5),
    texte_principal: Rgb(0xFF, 0xFF, 0xFF),
    texte_secondaire: Rgb(0x88, 0x88, 0x88),
};

pub static CLAIR: Theme = Theme {
    id: "light",
    nom: "Clean Light",
    fond: Rgb(0xF2, 0xF2, 0xF7),
    bouton_chiffre: Rgb(0xFF, 0xFF, 0xFF),
    bouton_op: Rgb(0xFF, 0x9F, 0x0A),
    bouton_fonction: Rgb(0xD1, 0xD1, 0xD6),
    texte_principal: Rgb(0x00, 0x00, 0x00),
    texte_secondaire: Rgb(0x44, 0x44, 0x44),
};

pub static CYBER: Theme = Theme {
    id: "cyber",
    nom: "Cyberpunk",
    fond: Rgb(0x0D, 0x11, 0x17),
    bouton_chiffre: Rgb(0x16, 0x1B, 0x22),
    bouton_op: Rgb(0x00, 0xE5, 0xFF),
    bouton_fonction: Rgb(0x21, 0x26, 0x2D),
    texte_principal: Rgb(0xE6, 0xED, 0xF3),
    texte_secondaire: Rgb(0x8B, 0x94, 0x9E),
};

pub static THEMES: [&Theme; 3] = [&SOMBRE, &CLAIR, &CYBER];

/// Identifiant inconnu => thème sombre.
pub fn theme_par_id(id: &str) -> &'static Theme {
    THEMES
        .iter()
        .copied()
        .find(|t| t.id == id)
        .unwrap_or(&SOMBRE)
}
