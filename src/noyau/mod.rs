//! Noyau de calcul
//!
//! Organisation interne :
//! - validation.rs : équilibre des parenthèses (seul critère de validité)
//! - jetons.rs     : tokenisation (politique espaces + caractères refusés)
//! - nombre.rs     : résultat étiqueté Entier / Reel + promotion
//! - eval.rs       : découpe récursive par précédence
//! - format.rs     : affichage des résultats
//! - erreur.rs     : ExpressionInvalide / DivisionParZero / JetonMalforme
//!
//! Le noyau est pur : aucun état, aucune E/S, aucun journal.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, Malformation};
pub use eval::evaluer;
pub use format::format_nombre;
pub use nombre::Nombre;
pub use validation::est_valide;
