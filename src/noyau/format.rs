// src/noyau/format.rs
//
// Affichage des résultats (réponses + historique).
// - Entier              : "14", "-3"
// - Reel de dénominateur 1 : "5.0"
// - Reel quelconque     : décimal tronqué vers zéro à `digits` chiffres,
//                         zéros finaux retirés ("2.5", "0.333…", "-0.5")

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::nombre::Nombre;

/// Précision décimale par défaut.
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : au-delà, la lecture devient coûteuse pour rien.
pub const DIGITS_MAX: usize = 200;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Texte d’un résultat, avec `digits` chiffres après la virgule au plus.
pub fn format_nombre(n: &Nombre, digits: usize) -> String {
    match n {
        Nombre::Entier(i) => i.to_string(),
        Nombre::Reel(r) => format_reel(r, digits.min(DIGITS_MAX)),
    }
}

fn format_reel(r: &BigRational, digits: usize) -> String {
    if r.denom().is_one() {
        return format!("{}.0", r.numer());
    }

    let neg = r.is_negative();
    let abs = r.abs();

    // |r| * 10^digits, tronqué
    let scaled = (abs.numer() * pow10(digits)) / abs.denom();
    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    while frac.ends_with('0') {
        frac.pop();
    }

    // la troncature a tout mangé (ex: 1/3 avec 0 chiffre) : on garde la forme réelle
    if frac.is_empty() {
        frac.push('0');
    }

    let signe = if neg && !(int_part.is_zero() && frac == "0") {
        "-"
    } else {
        ""
    };
    format!("{signe}{int_part}.{frac}")
}
