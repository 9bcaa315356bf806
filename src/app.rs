// src/app.rs
//
// Calculatrice : module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + clavier.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Le clavier est lu ici, une fois par frame, et traduit par clavier.rs :
// la vue ne voit que des boutons. Un bouton cliqué rend le focus (vue.rs),
// donc Enter après un clic souris = "=" une seule fois.

pub mod clavier;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::config::Theme;

/// Thème egui du thème configuré.
pub fn theme_egui(theme: Theme) -> egui::Theme {
    match theme {
        Theme::Sombre => egui::Theme::Dark,
        Theme::Clair => egui::Theme::Light,
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let widget_focus = ctx.memory(|m| m.focused().is_some());
        let evts = ctx.input(|i| clavier::evenements_clavier(&i.events, widget_focus));
        for evt in evts {
            self.envoyer(evt);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
