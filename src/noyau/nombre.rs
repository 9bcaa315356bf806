// src/noyau/nombre.rs
//
// Nombres de la calculatrice : rationnels exacts.
// - lecture d’un texte décimal ("12", "-0.5", "3.") sans passer par f64
// - arrondi d’affichage à 8 décimales (demi vers +∞)
// - texte décimal final (zéros de queue retirés, jamais "-0")

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Nombre de décimales gardées à l’affichage.
pub const DECIMALES: usize = 8;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Lit un texte décimal en rationnel exact.
///
/// Accepte un signe optionnel, une partie entière et une partie décimale
/// (l’une des deux peut être vide : "3." ou ".5"). Renvoie `None` sinon
/// ("", "-", "1.2.3", lettres…).
pub fn lire_decimal(s: &str) -> Option<BigRational> {
    let s = s.trim();
    let (neg, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (entier, frac) = corps.split_once('.').unwrap_or((corps, ""));
    if entier.is_empty() && frac.is_empty() {
        return None;
    }
    let tout_chiffres = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
    if !tout_chiffres(entier) || !tout_chiffres(frac) {
        return None;
    }

    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let r = BigRational::new(n, pow10(frac.len()));

    Some(if neg { -r } else { r })
}

/// Arrondi à `DECIMALES` décimales : floor(r·10^8 + 1/2) / 10^8.
///
/// Les demis vont vers +∞ (−2.5e-9 → 0, 2.5e-9 → 1e-8).
pub fn arrondir(r: &BigRational) -> BigRational {
    let echelle = BigRational::from_integer(pow10(DECIMALES));
    let demi = BigRational::new(BigInt::one(), BigInt::from(2));
    (r * &echelle + demi).floor() / echelle
}

/// Texte d’affichage d’une valeur (arrondie à 8 décimales).
pub fn texte_decimal(r: &BigRational) -> String {
    let echelle = pow10(DECIMALES);
    let scaled = (arrondir(r) * BigRational::from_integer(echelle.clone())).to_integer();

    let neg = scaled.is_negative();
    let abs = scaled.abs();
    let entier = &abs / &echelle;
    let reste = &abs % &echelle;

    let mut txt = entier.to_str_radix(10);
    if !reste.is_zero() {
        let mut frac = reste.to_str_radix(10);
        while frac.len() < DECIMALES {
            frac.insert(0, '0');
        }
        txt.push('.');
        txt.push_str(frac.trim_end_matches('0'));
    }

    if neg {
        txt.insert(0, '-');
    }
    txt
}
