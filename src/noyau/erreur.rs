// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - ExpressionInvalide : parenthèses non équilibrées
// - DivisionParZero    : un diviseur vaut exactement 0
// - JetonMalforme      : tout ce qui sort de la grammaire (entrée vide, caractère
//                        inconnu, opérande manquant, etc.)

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("expression invalide (parenthèses non équilibrées)")]
    ExpressionInvalide,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("jeton malformé : {0}")]
    JetonMalforme(Malformation),
}

/// Détail d’un `JetonMalforme`. Les positions sont des index de caractères
/// dans le texte d’origine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformation {
    #[error("entrée vide")]
    Vide,

    #[error("caractère inattendu '{caractere}' (position {position})")]
    CaractereInattendu { caractere: char, position: usize },

    #[error("opérande manquant (position {position})")]
    OperandeManquant { position: usize },

    #[error("opérateur manquant (position {position})")]
    OperateurManquant { position: usize },

    #[error("parenthèses vides (position {position})")]
    ParenthesesVides { position: usize },

    #[error("imbrication trop profonde")]
    ProfondeurExcessive,
}

impl From<Malformation> for ErreurCalcul {
    fn from(m: Malformation) -> Self {
        ErreurCalcul::JetonMalforme(m)
    }
}
