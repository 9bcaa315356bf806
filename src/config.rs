//! Configuration (fichier TOML, optionnel).
//!
//! ```toml
//! journal = "debug"
//! theme = "clair"
//!
//! [fenetre]
//! largeur = 400.0
//! hauteur = 560.0
//! ```
//!
//! Toutes les clés sont optionnelles : une clé absente garde sa valeur par défaut.
//! Côté web, pas de fichier : seul `Theme` (par défaut) est compilé.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use thiserror::Error;
#[cfg(not(target_arch = "wasm32"))]
use tracing::{info, warn};

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("format TOML invalide: {0}")]
    Format(#[from] toml::de::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Sombre,
    Clair,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fenetre {
    pub largeur: f32,
    pub hauteur: f32,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for Fenetre {
    fn default() -> Self {
        Self {
            largeur: 360.0,
            hauteur: 520.0,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filtre du journal (syntaxe `RUST_LOG`).
    pub journal: String,
    pub theme: Theme,
    pub fenetre: Fenetre,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for Config {
    fn default() -> Self {
        Self {
            journal: "info".to_string(),
            theme: Theme::default(),
            fenetre: Fenetre::default(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Config {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        Ok(toml::from_str(texte)?)
    }

    /// Fichier explicite : doit exister et être valide.
    pub fn charger(chemin: &Path) -> Result<Self, ErreurConfig> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        let config = Self::depuis_toml(&texte)?;
        info!(chemin = %chemin.display(), "configuration chargée");
        Ok(config)
    }

    /// Fichier par défaut : absent => valeurs par défaut ; illisible => avertissement + défauts.
    pub fn charger_defaut(chemin: Option<&Path>) -> Self {
        let Some(chemin) = chemin else {
            return Self::default();
        };
        if !chemin.exists() {
            return Self::default();
        }
        match Self::charger(chemin) {
            Ok(config) => config,
            Err(e) => {
                warn!(%e, "configuration ignorée, valeurs par défaut");
                Self::default()
            }
        }
    }
}

/// `<config_dir>/calculatrice_simple/config.toml`
#[cfg(not(target_arch = "wasm32"))]
pub fn chemin_defaut() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("calculatrice_simple").join("config.toml"))
}
