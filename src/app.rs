// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Fournir l’impl eframe::App
//
// La coquille ne calcule rien : elle appelle les actions de la Session
// et relit ses observables à chaque frame.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.synchroniser();
        self.clavier(ctx);

        let fond = vue::couleur(self.session.theme().fond);
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(fond))
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }
}
