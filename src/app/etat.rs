//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la machine du noyau + l’avis affiché (division par zéro),
//! et router chaque événement (bouton ou clavier) vers la machine.
//!
//! Contrats :
//! - Aucune logique de calcul ici (tout passe par `Calculatrice::appliquer`).
//! - Un avis reste affiché jusqu’au prochain événement ou jusqu’à “OK”.

use tracing::{trace, warn};

use crate::noyau::{Affichage, Calculatrice, Evenement};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau ---
    pub calc: Calculatrice,

    // --- sorties ---
    pub avis: Option<String>, // message non bloquant (division par zéro)
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::new(),
            avis: None,
        }
    }
}

impl AppCalc {
    /// Un événement (bouton ou touche) -> machine ; une erreur devient un avis.
    pub fn envoyer(&mut self, evt: Evenement) {
        self.avis = None;
        if let Err(e) = self.calc.appliquer(evt) {
            warn!(%e, "avis affiché");
            self.avis = Some(e.to_string());
        }
        trace!(
            operande = self.calc.operande_en_attente(),
            operateur = ?self.calc.operateur_en_attente(),
            virgule = self.calc.virgule_saisie(),
            exact = ?self.calc.resultat(),
            "état"
        );
    }

    pub fn fermer_avis(&mut self) {
        self.avis = None;
    }

    pub fn affichage(&self) -> Affichage {
        self.calc.affichage()
    }
}
