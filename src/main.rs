// src/main.rs
//
// Calculatrice simple : point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : CLI (clap) + config TOML + journal, puis eframe::run_native
//                                 (ou --rejouer : sans fenêtre, écran final sur stdout)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod config;
mod noyau;

#[cfg(not(target_arch = "wasm32"))]
mod cli;
#[cfg(not(target_arch = "wasm32"))]
mod journal;

use app::AppCalc;
#[cfg(not(target_arch = "wasm32"))]
use config::Config;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
enum ErreurApp {
    #[error(transparent)]
    Config(#[from] config::ErreurConfig),

    #[error(transparent)]
    Saisie(#[from] noyau::ErreurSaisie),

    #[error("fenêtre: {0}")]
    Fenetre(String),
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Erreur: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), ErreurApp> {
    use clap::Parser;

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(chemin) => Config::charger(chemin)?,
        None => Config::charger_defaut(config::chemin_defaut().as_deref()),
    };

    journal::init_journal(cli.journal.as_deref().unwrap_or(&config.journal));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), ?config, "démarrage");

    if let Some(touches) = &cli.rejouer {
        let rejeu = cli::rejouer(touches)?;
        for avis in &rejeu.avis {
            eprintln!("{avis}");
        }
        println!("{}", rejeu.affichage.historique);
        println!("{}", rejeu.affichage.valeur);
        return Ok(());
    }

    fenetre(&config).map_err(|e| ErreurApp::Fenetre(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn fenetre(config: &Config) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([config.fenetre.largeur, config.fenetre.hauteur])
            .with_min_inner_size([300.0, 440.0]),
        ..Default::default()
    };

    let theme = config.theme;
    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(app::theme_egui(theme));
            Ok(Box::<AppCalc>::default())
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{app, config::Theme, AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (thème par défaut : pas de fichier côté web)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let theme = Theme::default();
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| {
                    cc.egui_ctx.set_theme(app::theme_egui(theme));
                    Ok(Box::<AppCalc>::default())
                }),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
