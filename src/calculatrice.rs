// src/calculatrice.rs
//
// Orchestration : valider -> évaluer -> enregistrer (succès seulement).
// Le dépôt est injecté et possédé ici ; le noyau n’en sait rien.

use log::{error, info, warn};
use thiserror::Error;

use crate::config::{Config, Stockage};
use crate::historique::{Depot, DepotFichier, DepotMemoire, Entree, ErreurDepot};
use crate::noyau::format::{DIGITS_DEFAUT, DIGITS_MAX};
use crate::noyau::{est_valide, evaluer, format_nombre, ErreurCalcul, Nombre};

#[derive(Debug, Error)]
pub enum ErreurCalculatrice {
    #[error(transparent)]
    Calcul(#[from] ErreurCalcul),

    #[error(transparent)]
    Depot(#[from] ErreurDepot),
}

pub struct Calculatrice<D: Depot> {
    depot: D,
    digits: usize,
}

impl<D: Depot> Calculatrice<D> {
    pub fn new(depot: D) -> Self {
        Self {
            depot,
            digits: DIGITS_DEFAUT,
        }
    }

    /// Précision des réponses (bornée).
    pub fn avec_digits(mut self, digits: usize) -> Self {
        self.digits = digits.min(DIGITS_MAX);
        self
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Évalue et enregistre. Un échec n’est jamais enregistré.
    pub fn calculer(&mut self, expression: &str) -> Result<Nombre, ErreurCalculatrice> {
        let expression = expression.trim();

        if !est_valide(expression) {
            warn!("expression refusée (parenthèses) : {expression:?}");
            return Err(ErreurCalcul::ExpressionInvalide.into());
        }

        let resultat = evaluer(expression).map_err(|e| {
            warn!("expression refusée : {expression:?} : {e}");
            e
        })?;

        let id = self.depot.enregistrer(expression, &resultat)?;
        info!(
            "calcul #{id} : {expression} = {}",
            format_nombre(&resultat, self.digits)
        );

        Ok(resultat)
    }

    pub fn historique(&self) -> Result<Vec<Entree>, ErreurCalculatrice> {
        Ok(self.depot.lister()?)
    }
}

impl Calculatrice<Box<dyn Depot>> {
    /// Construit la calculatrice décrite par la config.
    /// Fichier illisible => on continue en mémoire (l’UI reste utilisable).
    pub fn depuis_config(cfg: &Config) -> Self {
        let depot: Box<dyn Depot> = match &cfg.stockage {
            Stockage::Memoire => {
                info!("historique en mémoire");
                Box::new(DepotMemoire::new())
            }
            Stockage::Fichier(chemin) => match DepotFichier::ouvrir(chemin) {
                Ok(d) => Box::new(d),
                Err(e) => {
                    error!("{e} ; historique en mémoire pour cette session");
                    Box::new(DepotMemoire::new())
                }
            },
        };

        Calculatrice::new(depot).avec_digits(cfg.digits)
    }
}
