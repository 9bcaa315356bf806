// src/app/clavier.rs
//
// Adaptateur clavier : événements egui -> événements du noyau.
//
// - Texte tapé ("5", "+", "%", "=", ",") : via Evenement::depuis_symbole
// - Touches nommées : Enter (=), Escape/Delete (C), Backspace (⌫)
//
// Note :
// - Enter sur un widget qui a le focus : egui le transforme déjà en clic, on ne le relit pas
//   (sinon double déclenchement : le bouton + "=")
// - les chiffres ne sont lus QUE dans Event::Text (egui émet aussi Key::Num5 :
//   on l’ignore, sinon un appui = deux chiffres)

use eframe::egui;

use crate::noyau::Evenement;

pub fn depuis_touche(key: egui::Key) -> Option<Evenement> {
    match key {
        egui::Key::Enter => Some(Evenement::Egal),
        egui::Key::Escape | egui::Key::Delete => Some(Evenement::Effacer),
        egui::Key::Backspace => Some(Evenement::Retour),
        _ => None,
    }
}

/// `widget_focus` : un widget (bouton) a le focus clavier.
pub fn depuis_egui(evt: &egui::Event, widget_focus: bool) -> Vec<Evenement> {
    match evt {
        egui::Event::Text(t) => t.chars().filter_map(Evenement::depuis_symbole).collect(),
        egui::Event::Key {
            key: egui::Key::Enter,
            ..
        } if widget_focus => Vec::new(),
        egui::Event::Key {
            key, pressed: true, ..
        } => depuis_touche(*key).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Tous les événements clavier d’une frame, dans l’ordre.
pub fn evenements_clavier(evts: &[egui::Event], widget_focus: bool) -> Vec<Evenement> {
    evts.iter()
        .flat_map(|e| depuis_egui(e, widget_focus))
        .collect()
}
