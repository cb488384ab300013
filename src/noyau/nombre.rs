// src/noyau/nombre.rs
//
// Résultat numérique étiqueté.
// - Entier : exact, sans débordement (BigInt)
// - Reel   : valeur réelle, gardée exacte sous forme de rationnel
//
// Promotion :
// - Entier (+ - *) Entier => Entier
// - tout opérande Reel    => Reel
// - division              => Reel, toujours (10/2 = Reel(5), affiché "5.0")

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::erreur::ErreurCalcul;
use super::format::{format_nombre, DIGITS_DEFAUT};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nombre {
    Entier(BigInt),
    Reel(BigRational),
}

impl Nombre {
    pub fn entier(n: impl Into<BigInt>) -> Self {
        Nombre::Entier(n.into())
    }

    /// Réel p/q (q != 0, à la charge de l’appelant).
    pub fn reel(p: impl Into<BigInt>, q: impl Into<BigInt>) -> Self {
        Nombre::Reel(BigRational::new(p.into(), q.into()))
    }

    pub fn est_zero(&self) -> bool {
        match self {
            Nombre::Entier(n) => n.is_zero(),
            Nombre::Reel(r) => r.is_zero(),
        }
    }

    /// Valeur exacte, quelle que soit l’étiquette.
    pub fn en_rationnel(&self) -> BigRational {
        match self {
            Nombre::Entier(n) => BigRational::from_integer(n.clone()),
            Nombre::Reel(r) => r.clone(),
        }
    }

    /// Vraie division. Le diviseur est testé avant tout calcul.
    pub fn diviser(self, diviseur: Nombre) -> Result<Nombre, ErreurCalcul> {
        if diviseur.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        Ok(Nombre::Reel(self.en_rationnel() / diviseur.en_rationnel()))
    }
}

impl Add for Nombre {
    type Output = Nombre;

    fn add(self, rhs: Nombre) -> Nombre {
        match (self, rhs) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Nombre::Entier(a + b),
            (a, b) => Nombre::Reel(a.en_rationnel() + b.en_rationnel()),
        }
    }
}

impl Sub for Nombre {
    type Output = Nombre;

    fn sub(self, rhs: Nombre) -> Nombre {
        match (self, rhs) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Nombre::Entier(a - b),
            (a, b) => Nombre::Reel(a.en_rationnel() - b.en_rationnel()),
        }
    }
}

impl Mul for Nombre {
    type Output = Nombre;

    fn mul(self, rhs: Nombre) -> Nombre {
        match (self, rhs) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Nombre::Entier(a * b),
            (a, b) => Nombre::Reel(a.en_rationnel() * b.en_rationnel()),
        }
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_nombre(self, DIGITS_DEFAUT))
    }
}
