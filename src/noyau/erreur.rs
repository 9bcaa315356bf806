// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du calcul (machine à états).
///
/// Quand une de ces erreurs sort de la machine, l’état a DÉJÀ été remis à zéro :
/// l’appelant n’a plus qu’à prévenir l’utilisateur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// `/` (ou reste `%`) avec un diviseur nul.
    #[error("Division par zéro impossible !")]
    DivisionParZero,
}

/// Erreurs de lecture d’une séquence de touches (rejeu, natif).
#[cfg(any(test, not(target_arch = "wasm32")))]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSaisie {
    #[error("symbole inconnu '{symbole}' en position {position}")]
    SymboleInconnu { symbole: char, position: usize },
}
