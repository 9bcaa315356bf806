// src/noyau/operateur.rs

use std::fmt;

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    /// Reste tronqué (signe du dividende).
    Modulo,
}

impl Operateur {
    #[cfg(test)]
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Modulo,
    ];

    /// Symbole affiché dans l’historique.
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Modulo => '%',
        }
    }

    /// Touche clavier -> opérateur.
    ///
    /// NOTE: '%' au clavier est le pourcentage (événement à part), pas le reste.
    pub fn depuis_touche(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// a op b, exact.
    pub fn appliquer(self, a: &BigRational, b: &BigRational) -> Result<BigRational, ErreurCalcul> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Divise => {
                if b.is_zero() {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                Ok(a / b)
            }
            Operateur::Modulo => {
                if b.is_zero() {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                // a - b·trunc(a/b)
                let q = (a / b).trunc();
                Ok(a - b * q)
            }
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
