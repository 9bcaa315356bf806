//! src/noyau/machine.rs
//!
//! Machine à états de la calculatrice.
//!
//! Un seul état explicite (`Calculatrice`), possédé par l’appelant, muté par événement.
//! Deux “modes” implicites :
//! - saisie        : on tape l’entrée courante
//! - résultat lu   : un calcul vient de finir (`resultat` présent, `entree` == son texte arrondi)
//!
//! Contrats :
//! - l’entrée ne contient que des chiffres, au plus un '.', et un '-' de tête (résultat négatif)
//! - `virgule` == l’entrée contient un '.'
//! - opérande en attente <=> opérateur en attente (même Option)
//! - `resultat` disparaît dès qu’une nouvelle saisie commence
//! - la valeur exacte ne sert qu’en opérande GAUCHE ; à droite, on lit l’entrée affichée
//! - division par zéro : remise à zéro complète, puis erreur rendue à l’appelant

use num_bigint::BigInt;
use num_rational::BigRational;
use tracing::{debug, warn};

use super::erreur::ErreurCalcul;
use super::evenement::Evenement;
use super::nombre::{lire_decimal, texte_decimal};
use super::operateur::Operateur;

/// Opérande gauche mis de côté par un opérateur.
///
/// `texte` est ce que montre l’historique ; `exact` garde la valeur non arrondie
/// quand l’opérande vient d’un résultat (1/3 reste 1/3, pas 0.33333333).
#[derive(Clone, Debug, PartialEq)]
struct Operande {
    texte: String,
    exact: Option<BigRational>,
}

impl Operande {
    fn valeur(&self) -> Option<BigRational> {
        match &self.exact {
            Some(r) => Some(r.clone()),
            None => lire_decimal(&self.texte),
        }
    }
}

/// Projection lecture seule pour la vue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    /// Entrée courante (ou résultat).
    pub valeur: String,
    /// Opérande en attente + " " + opérateur, ou vide.
    pub historique: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Calculatrice {
    entree: String,
    attente: Option<(Operande, Operateur)>,
    resultat: Option<BigRational>,
    virgule: bool,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            entree: "0".to_string(),
            attente: None,
            resultat: None,
            virgule: false,
        }
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn entree(&self) -> &str {
        &self.entree
    }

    /// Texte de l’opérande en attente ("" si aucun).
    pub fn operande_en_attente(&self) -> &str {
        self.attente.as_ref().map_or("", |(o, _)| o.texte.as_str())
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.attente.as_ref().map(|(_, op)| *op)
    }

    /// Valeur exacte du dernier calcul, tant qu’elle est affichée.
    pub fn resultat(&self) -> Option<&BigRational> {
        self.resultat.as_ref()
    }

    pub fn virgule_saisie(&self) -> bool {
        self.virgule
    }

    pub fn affichage(&self) -> Affichage {
        let historique = match &self.attente {
            Some((o, op)) => format!("{} {op}", o.texte),
            None => String::new(),
        };
        Affichage {
            valeur: self.entree.clone(),
            historique,
        }
    }

    /* ------------------------ Événements ------------------------ */

    /// Point d’entrée unique pour l’adaptateur (boutons, clavier, rejeu).
    pub fn appliquer(&mut self, evt: Evenement) -> Result<(), ErreurCalcul> {
        debug!(?evt, entree = %self.entree, "événement");
        match evt {
            Evenement::Chiffre(d) => self.chiffre(d),
            Evenement::Virgule => self.virgule(),
            Evenement::Operateur(op) => return self.operateur(op),
            Evenement::Pourcent => self.pourcent(),
            Evenement::Egal => return self.egal(),
            Evenement::Retour => self.retour(),
            Evenement::Effacer => self.effacer(),
        }
        Ok(())
    }

    /// Chiffre 0..=9 : remplace "0" ou un résultat affiché, sinon s’ajoute.
    pub fn chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            warn!(d, "chiffre hors 0..=9 ignoré");
            return;
        };

        if self.entree == "0" || self.resultat.is_some() {
            self.entree = c.to_string();
            self.resultat = None;
            self.virgule = false;
        } else {
            self.entree.push(c);
        }
    }

    /// Point décimal : au plus un par entrée.
    pub fn virgule(&mut self) {
        if self.virgule {
            return;
        }

        if self.entree.is_empty() || self.resultat.is_some() {
            self.entree = "0.".to_string();
            self.resultat = None;
        } else {
            self.entree.push('.');
        }
        self.virgule = true;
    }

    /// Opérateur binaire. Enchaîné (`5 + 3 *`) : l’opération en attente est calculée d’abord.
    ///
    /// Si ce calcul enchaîné tombe sur une division par zéro, la machine est remise à zéro,
    /// l’opérateur est quand même posé (sur "0") et l’erreur est rendue.
    pub fn operateur(&mut self, op: Operateur) -> Result<(), ErreurCalcul> {
        let mut issue = Ok(());
        if self.attente.is_some() && !self.entree.is_empty() {
            issue = self.egal();
        }

        // Un résultat (ou un pourcentage) part avec sa valeur exacte.
        let exact = self.resultat.take();
        let texte = std::mem::replace(&mut self.entree, "0".to_string());
        self.attente = Some((Operande { texte, exact }, op));
        self.virgule = false;

        issue
    }

    /// Calcule l’opération en attente.
    ///
    /// L’opérande droit est l’entrée telle qu’affichée : un pourcentage arrondi à "0"
    /// divise bien par zéro. Sans effet si rien n’est en attente ou si un opérande ne se lit pas.
    pub fn egal(&mut self) -> Result<(), ErreurCalcul> {
        let Some((operande, op)) = &self.attente else {
            return Ok(());
        };
        let op = *op;
        let Some(a) = operande.valeur() else {
            return Ok(());
        };
        let Some(b) = lire_decimal(&self.entree) else {
            return Ok(());
        };

        match op.appliquer(&a, &b) {
            Ok(r) => {
                self.attente = None;
                self.deposer_resultat(r);
                Ok(())
            }
            Err(e) => {
                warn!(%e, operande = %texte_decimal(&a), "calcul annulé, remise à zéro");
                self.effacer();
                Err(e)
            }
        }
    }

    /// Pourcentage : entrée / 100. Sans effet sur "0".
    ///
    /// Le résultat compte comme un résultat frais (un opérateur l’emporte en exact).
    pub fn pourcent(&mut self) {
        if self.entree == "0" {
            return;
        }
        let Some(v) = self.valeur_courante() else {
            return;
        };
        self.deposer_resultat(v / BigRational::from_integer(BigInt::from(100)));
    }

    /// Retire le dernier caractère ; jamais vide (ni "-" seul) : retombe sur "0".
    pub fn retour(&mut self) {
        self.entree.pop();
        if self.entree.is_empty() || self.entree == "-" {
            self.entree = "0".to_string();
        }
        self.virgule = self.entree.contains('.');
        // L’entrée éditée n’est plus le résultat.
        self.resultat = None;
    }

    /// Remise à zéro totale.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /* ------------------------ Interne ------------------------ */

    fn valeur_courante(&self) -> Option<BigRational> {
        match &self.resultat {
            Some(r) => Some(r.clone()),
            None => lire_decimal(&self.entree),
        }
    }

    fn deposer_resultat(&mut self, r: BigRational) {
        self.entree = texte_decimal(&r);
        self.virgule = self.entree.contains('.');
        self.resultat = Some(r);
    }
}
