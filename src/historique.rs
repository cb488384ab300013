// src/historique.rs
//
// Historique des calculs (collaborateur de persistance).
// - Depot        : contrat enregistrer / lister (ordre d’insertion)
// - DepotMemoire : Vec, pour le web et les tests
// - DepotFichier : une ligne JSON par calcul, ajout seul
//
// Ids : 1, 2, 3… dans l’ordre d’insertion, repris à la réouverture d’un fichier.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noyau::Nombre;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entree {
    pub id: u64,
    pub expression: String,
    pub resultat: Nombre,
}

#[derive(Debug, Error)]
pub enum ErreurDepot {
    #[error("historique : {0}")]
    Io(#[from] io::Error),

    #[error("historique : ligne {ligne} illisible : {source}")]
    Json {
        ligne: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("historique : sérialisation impossible : {0}")]
    Serialisation(#[source] serde_json::Error),
}

/// Stockage des couples (expression, résultat).
pub trait Depot {
    /// Ajoute une entrée et retourne son id.
    fn enregistrer(&mut self, expression: &str, resultat: &Nombre) -> Result<u64, ErreurDepot>;

    /// Toutes les entrées, dans l’ordre d’insertion.
    fn lister(&self) -> Result<Vec<Entree>, ErreurDepot>;
}

/// Dépôt choisi à l’exécution (mémoire ou fichier selon la config).
impl<D: Depot + ?Sized> Depot for Box<D> {
    fn enregistrer(&mut self, expression: &str, resultat: &Nombre) -> Result<u64, ErreurDepot> {
        (**self).enregistrer(expression, resultat)
    }

    fn lister(&self) -> Result<Vec<Entree>, ErreurDepot> {
        (**self).lister()
    }
}

/* ------------------------ Mémoire ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct DepotMemoire {
    entrees: Vec<Entree>,
}

impl DepotMemoire {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Depot for DepotMemoire {
    fn enregistrer(&mut self, expression: &str, resultat: &Nombre) -> Result<u64, ErreurDepot> {
        let id = self.entrees.len() as u64 + 1;
        self.entrees.push(Entree {
            id,
            expression: expression.to_string(),
            resultat: resultat.clone(),
        });
        Ok(id)
    }

    fn lister(&self) -> Result<Vec<Entree>, ErreurDepot> {
        Ok(self.entrees.clone())
    }
}

/* ------------------------ Fichier (JSON lines) ------------------------ */

#[derive(Debug)]
pub struct DepotFichier {
    chemin: PathBuf,
    dernier_id: u64,
}

impl DepotFichier {
    /// Ouvre (ou crée) le fichier et relit les entrées pour reprendre les ids.
    pub fn ouvrir(chemin: impl AsRef<Path>) -> Result<Self, ErreurDepot> {
        let chemin = chemin.as_ref().to_path_buf();

        // crée le fichier s’il manque, sans toucher au contenu existant
        OpenOptions::new().create(true).append(true).open(&chemin)?;

        let entrees = lire_entrees(&chemin)?;
        let dernier_id = entrees.last().map(|e| e.id).unwrap_or(0);

        info!(
            "historique ouvert : {} ({} entrée(s))",
            chemin.display(),
            entrees.len()
        );

        Ok(Self { chemin, dernier_id })
    }
}

impl Depot for DepotFichier {
    fn enregistrer(&mut self, expression: &str, resultat: &Nombre) -> Result<u64, ErreurDepot> {
        let entree = Entree {
            id: self.dernier_id + 1,
            expression: expression.to_string(),
            resultat: resultat.clone(),
        };

        let mut ligne = serde_json::to_string(&entree).map_err(ErreurDepot::Serialisation)?;
        ligne.push('\n');

        let mut f = OpenOptions::new().append(true).open(&self.chemin)?;
        f.write_all(ligne.as_bytes())?;
        f.flush()?;

        self.dernier_id = entree.id;
        debug!("historique : entrée {} ajoutée", entree.id);
        Ok(entree.id)
    }

    fn lister(&self) -> Result<Vec<Entree>, ErreurDepot> {
        lire_entrees(&self.chemin)
    }
}

fn lire_entrees(chemin: &Path) -> Result<Vec<Entree>, ErreurDepot> {
    let lecteur = BufReader::new(File::open(chemin)?);
    let mut out = Vec::new();

    for (i, ligne) in lecteur.lines().enumerate() {
        let ligne = ligne?;
        if ligne.trim().is_empty() {
            continue;
        }
        let entree: Entree = serde_json::from_str(&ligne)
            .map_err(|source| ErreurDepot::Json { ligne: i + 1, source })?;
        out.push(entree);
    }

    Ok(out)
}
