//! Ligne de commande (natif).

use std::path::PathBuf;

use clap::Parser;

use crate::noyau::{lire_sequence, Affichage, Calculatrice, ErreurSaisie};

#[derive(Parser, Debug)]
#[command(name = "calculatrice_simple")]
#[command(version, about = "Calculatrice simple : boutons + clavier", long_about = None)]
pub struct Cli {
    /// Fichier de configuration TOML (défaut : <config>/calculatrice_simple/config.toml)
    #[arg(short, long, value_name = "FICHIER")]
    pub config: Option<PathBuf>,

    /// Filtre du journal (ex: debug, calculatrice_simple=trace)
    #[arg(long, value_name = "FILTRE")]
    pub journal: Option<String>,

    /// Rejoue une séquence de touches sans fenêtre, puis affiche l’écran.
    ///
    /// Touches : 0-9 . , + - * / % = ; C effacer ; < retour arrière ; m reste.
    #[arg(long, value_name = "TOUCHES")]
    pub rejouer: Option<String>,
}

/// Écran final + avis (divisions par zéro) rencontrés en route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejeu {
    pub affichage: Affichage,
    pub avis: Vec<String>,
}

pub fn rejouer(touches: &str) -> Result<Rejeu, ErreurSaisie> {
    let mut calc = Calculatrice::new();
    let mut avis = Vec::new();

    for evt in lire_sequence(touches)? {
        if let Err(e) = calc.appliquer(evt) {
            avis.push(e.to_string());
        }
    }

    Ok(Rejeu {
        affichage: calc.affichage(),
        avis,
    })
}
