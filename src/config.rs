// src/config.rs
//
// Réglages d’exécution, lus dans l’environnement.
//
//   CALCULATRICE_HISTORIQUE : chemin du fichier JSON lines (":memoire:" => pas de fichier)
//   CALCULATRICE_DIGITS     : chiffres après la virgule dans les réponses (0..=200)
//
// Une valeur illisible retombe sur le défaut (avec un avertissement).

use std::path::PathBuf;

use log::warn;

use crate::noyau::format::{DIGITS_DEFAUT, DIGITS_MAX};

pub const VAR_HISTORIQUE: &str = "CALCULATRICE_HISTORIQUE";
pub const VAR_DIGITS: &str = "CALCULATRICE_DIGITS";

/// Fichier par défaut (répertoire courant).
pub const HISTORIQUE_DEFAUT: &str = "historique.jsonl";

/// Valeur spéciale : historique en mémoire seulement.
pub const MEMOIRE: &str = ":memoire:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stockage {
    Memoire,
    Fichier(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub stockage: Stockage,
    pub digits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stockage: Stockage::Fichier(PathBuf::from(HISTORIQUE_DEFAUT)),
            digits: DIGITS_DEFAUT,
        }
    }
}

impl Config {
    pub fn depuis_env() -> Self {
        Self::depuis(|cle| std::env::var(cle).ok())
    }

    /// Lecture via une source quelconque (l’environnement en prod, une closure en test).
    pub fn depuis(lire: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Config::default();

        if let Some(v) = lire(VAR_HISTORIQUE) {
            let v = v.trim();
            if v == MEMOIRE {
                cfg.stockage = Stockage::Memoire;
            } else if !v.is_empty() {
                cfg.stockage = Stockage::Fichier(PathBuf::from(v));
            }
        }

        if let Some(v) = lire(VAR_DIGITS) {
            match v.trim().parse::<usize>() {
                Ok(d) => cfg.digits = d.min(DIGITS_MAX),
                Err(_) => warn!("{VAR_DIGITS}={v:?} illisible, défaut {DIGITS_DEFAUT}"),
            }
        }

        cfg
    }
}
