// src/noyau/evenement.rs
//
// Événements symboliques reçus par la machine (boutons, clavier, rejeu).
// Aucune dépendance à la vue : l’adaptateur (egui, CLI) traduit vers ces valeurs.

#[cfg(any(test, not(target_arch = "wasm32")))]
use super::erreur::ErreurSaisie;
use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    /// Chiffre 0..=9.
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Pourcent,
    Egal,
    Retour,
    Effacer,
}

impl Evenement {
    /// Symbole de touche normalisé -> événement.
    ///
    /// - '0'..'9' chiffre, '.' ou ',' virgule (pavé FR)
    /// - '+' '-' '*' '/' opérateur, '%' pourcentage, '=' égal
    pub fn depuis_symbole(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Evenement::Chiffre(d as u8));
        }
        if let Some(op) = Operateur::depuis_touche(c) {
            return Some(Evenement::Operateur(op));
        }
        match c {
            '.' | ',' => Some(Evenement::Virgule),
            '%' => Some(Evenement::Pourcent),
            '=' => Some(Evenement::Egal),
            _ => None,
        }
    }

    /// Symbole d’une séquence de rejeu : les touches normales + 'C' (effacer),
    /// '<' (retour arrière), 'm' (reste).
    #[cfg(any(test, not(target_arch = "wasm32")))]
    fn depuis_symbole_rejeu(c: char) -> Option<Self> {
        match c {
            'c' | 'C' => Some(Evenement::Effacer),
            '<' => Some(Evenement::Retour),
            'm' | 'M' => Some(Evenement::Operateur(Operateur::Modulo)),
            _ => Self::depuis_symbole(c),
        }
    }
}

/// Lit une séquence de touches ("12.5*4=", "9<<3 m 2 =") ; espaces ignorés.
#[cfg(any(test, not(target_arch = "wasm32")))]
pub fn lire_sequence(s: &str) -> Result<Vec<Evenement>, ErreurSaisie> {
    s.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, symbole)| {
            Evenement::depuis_symbole_rejeu(symbole)
                .ok_or(ErreurSaisie::SymboleInconnu { symbole, position })
        })
        .collect()
}
