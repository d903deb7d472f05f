//! Tampon d’édition : texte de l’expression + curseur.
//!
//! Le curseur compte des caractères (pas des octets) et reste toujours
//! dans [0, longueur] : chaque mutation le re-borne.
//!
//! Aucune évaluation ici : le remplacement d’opérateur et la parenthèse
//! “intelligente” ne regardent que le texte autour du curseur.

/// Opérateurs binaires tels qu’ils peuvent apparaître dans le tampon
/// (forme canonique + glyphes d’affichage).
pub const OPERATEURS_BINAIRES: [char; 8] = ['+', '-', '*', '×', '/', '÷', '−', '%'];

pub fn est_operateur_binaire(c: char) -> bool {
    OPERATEURS_BINAIRES.contains(&c)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tampon {
    texte: String,
    curseur: usize,
}

impl Tampon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn curseur(&self) -> usize {
        self.curseur
    }

    pub fn longueur(&self) -> usize {
        self.texte.chars().count()
    }

    pub fn est_vide(&self) -> bool {
        self.texte.is_empty()
    }

    /// Offset en octets du caractère d’indice `pos` (ou fin du texte).
    fn octet(&self, pos: usize) -> usize {
        self.texte
            .char_indices()
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(self.texte.len())
    }

    fn char_avant_curseur(&self) -> Option<char> {
        if self.curseur == 0 {
            return None;
        }
        self.texte.chars().nth(self.curseur - 1)
    }

    /// Insère un fragment au curseur.
    ///
    /// Un opérateur binaire seul, juste après un autre opérateur binaire,
    /// remplace ce dernier (curseur inchangé) : pas de "5++".
    pub fn inserer(&mut self, fragment: &str) {
        let mut it = fragment.chars();
        let seul = match (it.next(), it.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        if let (Some(nouveau), Some(avant)) = (seul, self.char_avant_curseur()) {
            if est_operateur_binaire(nouveau) && est_operateur_binaire(avant) {
                let debut = self.octet(self.curseur - 1);
                let fin = self.octet(self.curseur);
                self.texte.replace_range(debut..fin, fragment);
                return;
            }
        }

        let pos = self.octet(self.curseur);
        self.texte.insert_str(pos, fragment);
        self.curseur += fragment.chars().count();
    }

    /// Efface le caractère avant le curseur.
    /// Renvoie false (rien fait) si le tampon est vide ou le curseur à 0.
    pub fn effacer_arriere(&mut self) -> bool {
        if self.texte.is_empty() || self.curseur == 0 {
            return false;
        }
        let debut = self.octet(self.curseur - 1);
        let fin = self.octet(self.curseur);
        self.texte.replace_range(debut..fin, "");
        self.curseur -= 1;
        true
    }

    /// Parenthèse que `basculer_parenthese` insérerait.
    ///
    /// ')' seulement si des '(' restent ouvertes avant le curseur ET que le
    /// caractère précédent est un chiffre ou ')'. Sinon '('.
    pub fn parenthese_a_inserer(&self) -> char {
        let (ouvertes, fermees) = self
            .texte
            .chars()
            .take(self.curseur)
            .fold((0usize, 0usize), |(o, f), c| match c {
                '(' => (o + 1, f),
                ')' => (o, f + 1),
                _ => (o, f),
            });

        let ferme_possible = matches!(
            self.char_avant_curseur(),
            Some(c) if c.is_ascii_digit() || c == ')'
        );

        if ouvertes > fermees && ferme_possible {
            ')'
        } else {
            '('
        }
    }

    pub fn basculer_parenthese(&mut self) {
        let p = self.parenthese_a_inserer();
        self.inserer(p.encode_utf8(&mut [0u8; 4]));
    }

    pub fn vider(&mut self) {
        self.texte.clear();
        self.curseur = 0;
    }

    pub fn placer_curseur(&mut self, pos: usize) {
        self.curseur = pos.min(self.longueur());
    }

    /// Déplacement relatif (flèches), borné aux extrémités.
    pub fn deplacer_curseur(&mut self, delta: isize) {
        let pos = self.curseur.saturating_add_signed(delta);
        self.placer_curseur(pos);
    }

    pub fn aller_a_la_fin(&mut self) {
        self.curseur = self.longueur();
    }
}
