// src/main.rs
//
// Calculatrice RPN — point d’entrée natif
// ---------------------------------------
// - journalisation (RUST_LOG, défaut WARN)
// - config TOML (facultative)
// - magasin fichier -> Session -> eframe::run_native

use eframe::egui;
use tracing::warn;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use calculatrice_rpn::config::{charger_config, Config};
use calculatrice_rpn::persistance::MagasinFichier;
use calculatrice_rpn::Session;

mod app;

use app::AppCalc;

/// Titre unique (barre de titre + id d’application).
const TITRE_APP: &str = "Calculatrice RPN";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into()))
        .init();

    let config = charger_config().unwrap_or_else(|e| {
        warn!("configuration ignorée: {e}");
        Config::default()
    });

    let magasin = MagasinFichier::ouvrir(config.chemin_magasin());
    let session = Session::avec_theme_initial(Box::new(magasin), &config.calcul.theme_initial);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([config.fenetre.largeur, config.fenetre.hauteur])
            .with_min_inner_size([320.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(session)))),
    )
}
