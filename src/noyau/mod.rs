//! Noyau de la calculatrice (sans vue, sans egui)
//!
//! Organisation interne :
//! - nombre.rs     : lecture décimale exacte + arrondi 8 décimales + texte
//! - operateur.rs  : + - * / % (reste) en rationnels exacts
//! - evenement.rs  : événements symboliques (touches) + séquences de rejeu
//! - machine.rs    : machine à états (entrée, opérande en attente, résultat)
//! - erreur.rs     : division par zéro, symbole inconnu

pub mod erreur;
pub mod evenement;
pub mod machine;
pub mod nombre;
pub mod operateur;

#[cfg(test)]
mod tests_machine;


// API publique minimale
pub use erreur::ErreurCalcul;
pub use evenement::Evenement;
// rejeu : CLI native (et tests)
#[cfg(any(test, not(target_arch = "wasm32")))]
pub use erreur::ErreurSaisie;
#[cfg(any(test, not(target_arch = "wasm32")))]
pub use evenement::lire_sequence;
pub use machine::{Affichage, Calculatrice};
pub use operateur::Operateur;
