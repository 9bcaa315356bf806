//! Tests scénarios : séquences de touches complètes, comme à l’écran.
//!
//! Chaque test rejoue une séquence (même syntaxe que `--rejouer`) puis vérifie
//! l’affichage. Les divisions par zéro sont collectées au lieu de paniquer.

use super::evenement::lire_sequence;
use super::{Affichage, Calculatrice, ErreurCalcul, Operateur};

fn rejoue(seq: &str) -> (Calculatrice, Vec<ErreurCalcul>) {
    let mut c = Calculatrice::new();
    let mut erreurs = Vec::new();
    for evt in lire_sequence(seq).unwrap_or_else(|e| panic!("seq={seq:?} err={e}")) {
        if let Err(e) = c.appliquer(evt) {
            erreurs.push(e);
        }
    }
    (c, erreurs)
}

fn ecran(seq: &str) -> Affichage {
    let (c, erreurs) = rejoue(seq);
    assert!(erreurs.is_empty(), "seq={seq:?} erreurs={erreurs:?}");
    c.affichage()
}

fn assert_valeur(seq: &str, attendu: &str) {
    assert_eq!(ecran(seq).valeur, attendu, "seq={seq:?}");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn saisie_concatenee() {
    assert_valeur("123", "123");
    assert_valeur("12.05", "12.05");
    assert_valeur(".5", "0.5");
    assert_valeur("007", "7");
}

#[test]
fn virgule_deux_fois_sans_effet() {
    assert_valeur("1..", "1.");
    assert_valeur("1.2.3", "1.23");
}

#[test]
fn retour_sur_un_caractere_donne_zero() {
    assert_valeur("7<", "0");
    assert_valeur("<", "0");
    assert_valeur("75<", "7");
}

#[test]
fn effacer_remet_tout_a_zero() {
    let (c, _) = rejoue("12+3.4c");
    assert_eq!(c, Calculatrice::new());
}

/* ------------------------ Calcul ------------------------ */

#[test]
fn quatre_operations() {
    assert_valeur("2+3=", "5");
    assert_valeur("2-3=", "-1");
    assert_valeur("2.5*4=", "10");
    assert_valeur("7/2=", "3.5");
}

#[test]
fn reste_binaire() {
    assert_valeur("7m3=", "1");
    assert_valeur("5.5m2=", "1.5");
}

#[test]
fn pas_de_bruit_binaire() {
    assert_valeur("0.1+0.2=", "0.3");
    assert_valeur("1.1*3=", "3.3");
}

#[test]
fn arrondi_huit_decimales() {
    assert_valeur("2/3=", "0.66666667");
    assert_valeur("1/3=", "0.33333333");
}

#[test]
fn un_tiers_fois_trois_donne_un() {
    // enchaîné
    assert_valeur("1/3*3=", "1");
    // après "="
    assert_valeur("1/3=*3=", "1");
}

#[test]
fn egal_sans_operateur_sans_effet() {
    let (mut c, _) = rejoue("8");
    let avant = c.clone();
    c.egal().unwrap();
    assert_eq!(c, avant);

    let (mut c, _) = rejoue("4*2=");
    let avant = c.clone();
    c.egal().unwrap();
    assert_eq!(c, avant);
    assert_eq!(c.entree(), "8");
}

#[test]
fn enchainement_calcule_avant_nouvel_operateur() {
    let (c, erreurs) = rejoue("5+3*");
    assert!(erreurs.is_empty());
    assert_eq!(c.operande_en_attente(), "8");
    assert_eq!(c.operateur_en_attente(), Some(Operateur::Fois));
    assert_eq!(c.entree(), "0");
    assert_eq!(c.affichage().historique, "8 *");

    assert_valeur("5+3*2=", "16");
}

#[test]
fn resultat_devient_operande() {
    let (c, _) = rejoue("9-4=+");
    assert_eq!(c.affichage().historique, "5 +");
    assert!(c.resultat().is_none());
}

#[test]
fn chiffre_apres_resultat_repart_de_zero() {
    assert_valeur("2+2=7", "7");
    let (c, _) = rejoue("2+2=7");
    assert!(c.resultat().is_none());
}

/* ------------------------ Pourcentage ------------------------ */

#[test]
fn pourcentage_simple() {
    assert_valeur("50%", "0.5");
    assert_valeur("5%", "0.05");
    assert_valeur("0%", "0");
}

#[test]
fn pourcentage_dans_une_operation() {
    // 200 + (10 / 100)
    assert_valeur("200+10%=", "200.1");
}

#[test]
fn pourcentage_enchaine_comme_un_resultat() {
    let (c, _) = rejoue("50%+");
    assert_eq!(c.affichage().historique, "0.5 +");
    assert_valeur("50%+1=", "1.5");
    // valeur exacte conservée : 1/3 % = 1/300, × 300 = 1
    assert_valeur("1/3=%*300=", "1");
}

#[test]
fn operande_droit_lu_tel_qu_affiche() {
    // 0.123456789 % = 0.00123456789, affiché 0.00123457 : c’est ce nombre-là qui est multiplié
    let (c, _) = rejoue("100*0.123456789%");
    assert_eq!(c.entree(), "0.00123457");
    assert_valeur("100*0.123456789%=", "0.123457");
}

#[test]
fn chiffre_apres_pourcentage_remplace() {
    assert_valeur("50%3", "3");
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn division_par_zero_remet_a_zero() {
    let (c, erreurs) = rejoue("5/0=");
    assert_eq!(erreurs, vec![ErreurCalcul::DivisionParZero]);
    assert_eq!(c, Calculatrice::new());
    assert_eq!(c.entree(), "0");
    assert_eq!(c.operateur_en_attente(), None);
}

#[test]
fn reste_par_zero_remet_a_zero() {
    let (c, erreurs) = rejoue("5m0=");
    assert_eq!(erreurs, vec![ErreurCalcul::DivisionParZero]);
    assert_eq!(c, Calculatrice::new());
}

#[test]
fn division_par_zero_enchainee_pose_quand_meme_l_operateur() {
    let (c, erreurs) = rejoue("5/0+");
    assert_eq!(erreurs, vec![ErreurCalcul::DivisionParZero]);
    assert_eq!(c.affichage().historique, "0 +");
    assert_eq!(c.entree(), "0");
}

#[test]
fn division_par_zero_decimal() {
    let (_, erreurs) = rejoue("1/0.0=");
    assert_eq!(erreurs, vec![ErreurCalcul::DivisionParZero]);
}

#[test]
fn pourcentage_arrondi_a_zero_est_un_diviseur_nul() {
    // 0.0000001 % = 1e-9 : exact non nul, affiché "0"
    let (c, erreurs) = rejoue("5/0.0000001%");
    assert!(erreurs.is_empty());
    assert_eq!(c.entree(), "0");
    assert!(c.resultat().is_some());
    assert_eq!(c.affichage().historique, "5 /");

    let (c, erreurs) = rejoue("5/0.0000001%=");
    assert_eq!(erreurs, vec![ErreurCalcul::DivisionParZero]);
    assert_eq!(c, Calculatrice::new());

    let (_, erreurs) = rejoue("5m0.0000001%=");
    assert_eq!(erreurs, vec![ErreurCalcul::DivisionParZero]);
}

#[test]
fn apres_division_par_zero_on_recalcule() {
    let (c, erreurs) = rejoue("5/0=3+4=");
    assert_eq!(erreurs.len(), 1);
    assert_eq!(c.entree(), "7");
}

/* ------------------------ Négatifs ------------------------ */

#[test]
fn resultat_negatif_reutilise() {
    assert_valeur("3-5=*2=", "-4");
    assert_valeur("3-5=%", "-0.02");
}
