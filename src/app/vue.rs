// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// Objectifs :
// - Écran : historique (petit) au-dessus de la valeur (grand, monospace), alignés à droite
// - Avis non bloquant sous l’écran (division par zéro), avec “OK”
// - Pavé : C ⌫ % / | 7 8 9 * | 4 5 6 - | 1 2 3 + | 0 . mod =
//
// La vue ne calcule rien : chaque bouton envoie un Evenement à AppCalc::envoyer.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Evenement, Operateur};

/// Taille d’une touche du pavé.
const TOUCHE: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let aff = self.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Historique : hauteur stable même vide
                    let hist = if aff.historique.is_empty() {
                        " ".to_string()
                    } else {
                        aff.historique
                    };
                    ui.label(egui::RichText::new(hist).monospace().weak());
                    ui.label(egui::RichText::new(aff.valeur).monospace().size(32.0).strong());
                });
            });

        if let Some(avis) = self.avis.clone() {
            ui.add_space(6.0);
            let couleur = ui.visuals().error_fg_color;
            ui.horizontal(|ui| {
                ui.colored_label(couleur, avis);
                if ui.small_button("OK").clicked() {
                    self.fermer_avis();
                }
            });
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Remise à zéro (Échap / Suppr)", Evenement::Effacer);
                self.bouton(ui, "⌫", "Efface le dernier caractère", Evenement::Retour);
                self.bouton(ui, "%", "Pourcentage (÷ 100)", Evenement::Pourcent);
                self.bouton_op(ui, Operateur::Divise);
                ui.end_row();

                self.chiffres(ui, [7, 8, 9]);
                self.bouton_op(ui, Operateur::Fois);
                ui.end_row();

                self.chiffres(ui, [4, 5, 6]);
                self.bouton_op(ui, Operateur::Moins);
                ui.end_row();

                self.chiffres(ui, [1, 2, 3]);
                self.bouton_op(ui, Operateur::Plus);
                ui.end_row();

                self.chiffres(ui, [0]);
                self.bouton(ui, ".", "Point décimal", Evenement::Virgule);
                self.bouton(
                    ui,
                    "mod",
                    "Reste de la division",
                    Evenement::Operateur(Operateur::Modulo),
                );
                self.bouton(ui, "=", "Calculer (Entrée)", Evenement::Egal);
                ui.end_row();
            });
    }

    fn chiffres<const N: usize>(&mut self, ui: &mut egui::Ui, ds: [u8; N]) {
        for d in ds {
            let resp = ui.add_sized(TOUCHE, egui::Button::new(d.to_string()));
            self.si_clic(&resp, Evenement::Chiffre(d));
        }
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, op: Operateur) {
        let resp = ui.add_sized(TOUCHE, egui::Button::new(op.symbole().to_string()));
        self.si_clic(&resp, Evenement::Operateur(op));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, evt: Evenement) {
        let resp = ui
            .add_sized(TOUCHE, egui::Button::new(label))
            .on_hover_text(tip);
        self.si_clic(&resp, evt);
    }

    /// Clic -> événement, puis le bouton rend le focus (Enter ne le re-cliquera pas).
    fn si_clic(&mut self, resp: &egui::Response, evt: Evenement) {
        if resp.clicked() {
            resp.surrender_focus();
            self.envoyer(evt);
        }
    }
}
