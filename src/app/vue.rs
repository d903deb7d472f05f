// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Affichage : expression (avec curseur), résultat, historique + démarche
// - Pavé : chiffres, opérateurs, (), ⌫, C, =, fonctions scientifiques
// - Clavier : Enter calcule, Backspace efface, Escape remet à zéro,
//   flèches déplacent le curseur, le texte tapé est inséré
//
// Chaque bouton appelle UNE action de Session ; aucune règle d’édition ici.

use eframe::egui;

use calculatrice_rpn::theme::{Rgb, THEMES};

use super::etat::AppCalc;

pub fn couleur(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.0, c.1, c.2)
}

/// Rôle visuel d’une touche (choisit la couleur du thème).
#[derive(Clone, Copy, Debug)]
enum Role {
    Chiffre,
    Op,
    Fonction,
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Inserer(&'static str),
    Parenthese,
    Retour,
    ToutEffacer,
    Egal,
}

const PAVE: [[(&str, Touche, Role); 4]; 5] = [
    [
        ("C", Touche::ToutEffacer, Role::Fonction),
        ("( )", Touche::Parenthese, Role::Fonction),
        ("%", Touche::Inserer("%"), Role::Fonction),
        ("÷", Touche::Inserer("/"), Role::Op),
    ],
    [
        ("7", Touche::Inserer("7"), Role::Chiffre),
        ("8", Touche::Inserer("8"), Role::Chiffre),
        ("9", Touche::Inserer("9"), Role::Chiffre),
        ("×", Touche::Inserer("×"), Role::Op),
    ],
    [
        ("4", Touche::Inserer("4"), Role::Chiffre),
        ("5", Touche::Inserer("5"), Role::Chiffre),
        ("6", Touche::Inserer("6"), Role::Chiffre),
        ("−", Touche::Inserer("-"), Role::Op),
    ],
    [
        ("1", Touche::Inserer("1"), Role::Chiffre),
        ("2", Touche::Inserer("2"), Role::Chiffre),
        ("3", Touche::Inserer("3"), Role::Chiffre),
        ("+", Touche::Inserer("+"), Role::Op),
    ],
    [
        ("⌫", Touche::Retour, Role::Chiffre),
        ("0", Touche::Inserer("0"), Role::Chiffre),
        (".", Touche::Inserer("."), Role::Chiffre),
        ("=", Touche::Egal, Role::Op),
    ],
];

const SCIENTIFIQUES: [(&str, &str); 6] = [
    ("sin", "sin("),
    ("cos", "cos("),
    ("tan", "tan("),
    ("log", "log("),
    ("ln", "ln("),
    ("√", "√"),
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_themes(ui);
                ui.add_space(6.0);

                self.ui_affichage(ui);
                ui.add_space(8.0);

                self.ui_scientifique(ui);
                ui.add_space(4.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_historique(ui);
            });
    }

    /// Raccourcis clavier globaux (pas de champ texte : la session garde le texte).
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let (textes, enter, retour, echap, gauche, droite) = ctx.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                textes,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });

        for c in textes.iter().flat_map(|t| t.chars()) {
            if c == '=' {
                self.session.calculer();
            } else {
                self.session.inserer(c.encode_utf8(&mut [0u8; 4]));
            }
        }

        if enter {
            self.session.calculer();
        }
        if retour {
            self.session.effacer_arriere();
        }
        if echap {
            self.session.tout_effacer();
        }
        if gauche {
            self.session.deplacer_curseur(-1);
        }
        if droite {
            self.session.deplacer_curseur(1);
        }
    }

    fn ui_themes(&mut self, ui: &mut egui::Ui) {
        let actif = self.session.theme().id;
        let texte = couleur(self.session.theme().texte_secondaire);

        ui.horizontal(|ui| {
            for theme in THEMES {
                let libelle = egui::RichText::new(theme.nom).color(texte);
                if ui.selectable_label(theme.id == actif, libelle).clicked() {
                    self.session.choisir_theme(theme.id);
                }
            }
        });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let theme = self.session.theme();

        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            ui.label(
                egui::RichText::new(self.expression_avec_curseur())
                    .monospace()
                    .size(26.0)
                    .color(couleur(theme.texte_principal)),
            );
            ui.label(
                egui::RichText::new(self.session.resultat())
                    .monospace()
                    .size(36.0)
                    .strong()
                    .color(couleur(theme.bouton_op)),
            );
        });

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.session.deplacer_curseur(-1);
            }
            if ui.button("▶").clicked() {
                self.session.deplacer_curseur(1);
            }
        });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for (libelle, fragment) in SCIENTIFIQUES {
                if self.bouton(ui, libelle, Role::Fonction, [52.0, 34.0]) {
                    self.session.inserer(fragment);
                }
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (libelle, touche, role) in ligne {
                        if self.bouton(ui, libelle, role, [72.0, 56.0]) {
                            self.appuyer(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Inserer(s) => self.session.inserer(s),
            Touche::Parenthese => self.session.basculer_parenthese(),
            Touche::Retour => self.session.effacer_arriere(),
            Touche::ToutEffacer => self.session.tout_effacer(),
            Touche::Egal => self.session.calculer(),
        }
    }

    fn bouton(&self, ui: &mut egui::Ui, libelle: &str, role: Role, taille: [f32; 2]) -> bool {
        let theme = self.session.theme();
        let fond = match role {
            Role::Chiffre => theme.bouton_chiffre,
            Role::Op => theme.bouton_op,
            Role::Fonction => theme.bouton_fonction,
        };
        let texte = egui::RichText::new(libelle)
            .size(22.0)
            .color(couleur(theme.texte_principal));

        ui.add_sized(taille, egui::Button::new(texte).fill(couleur(fond)))
            .clicked()
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let secondaire = couleur(self.session.theme().texte_secondaire);

        ui.horizontal(|ui| {
            let titre = if self.historique_ouvert {
                "▼ Historique"
            } else {
                "▶ Historique"
            };
            let entete = egui::Label::new(egui::RichText::new(titre).color(secondaire))
                .sense(egui::Sense::click());
            if ui.add(entete).clicked() {
                self.historique_ouvert = !self.historique_ouvert;
            }
            if !self.session.historique().is_empty() && ui.button("Effacer").clicked() {
                self.session.effacer_historique();
            }
        });

        if !self.historique_ouvert {
            return;
        }

        let mut choisie: Option<String> = None;
        egui::ScrollArea::vertical()
            .id_salt("historique")
            .max_height(180.0)
            .show(ui, |ui| {
                for entree in self.session.historique() {
                    let rich = egui::RichText::new(entree).monospace().color(secondaire);
                    if ui
                        .add(egui::Label::new(rich).sense(egui::Sense::click()))
                        .clicked()
                    {
                        choisie = Some(entree.clone());
                    }
                }
            });

        if let Some(entree) = choisie {
            self.afficher_demarche(&entree);
        }

        let mut fermer = false;
        if let Some(d) = &self.demarche {
            egui::Frame::group(ui.style())
                .fill(ui.visuals().extreme_bg_color)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new(&d.entree).strong());
                    for ligne in &d.lignes {
                        ui.monospace(ligne);
                    }
                    fermer = ui.small_button("Fermer").clicked();
                });
        }
        if fermer {
            self.fermer_demarche();
        }
    }
}
