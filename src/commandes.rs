// src/commandes.rs
//
// Routage des messages texte -> commande -> réponse texte.
//
//   /calculate <expr>  (alias /calcul)       => "Résultat : …" ou "Erreur : …"
//   /history           (alias /historique)   => liste numérotée
//   /start, /help      (alias /aide)         => aide
//
// Suffixe "@nom" toléré sur le mot de commande (/history@calc_bot).

use log::debug;

use crate::calculatrice::Calculatrice;
use crate::historique::{Depot, Entree};
use crate::noyau::format_nombre;

pub const AIDE: &str = "Commandes :\n\
/calculate <expression> : calcule (entiers, + - * /, parenthèses)\n\
/history : expressions précédentes\n\
/help : cette aide";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    Calculer(String),
    Historique,
    Aide,
    Inconnue(String),
}

impl Commande {
    pub fn analyser(texte: &str) -> Commande {
        let texte = texte.trim();

        let (mot, reste) = match texte.split_once(char::is_whitespace) {
            Some((m, r)) => (m, r.trim()),
            None => (texte, ""),
        };

        // "/history@calc_bot" => "/history"
        let mot = mot.split('@').next().unwrap_or(mot);

        match mot.to_lowercase().as_str() {
            "/calculate" | "/calcul" => Commande::Calculer(reste.to_string()),
            "/history" | "/historique" => Commande::Historique,
            "/start" | "/help" | "/aide" => Commande::Aide,
            _ => Commande::Inconnue(mot.to_string()),
        }
    }
}

/// Traite un message et produit la réponse.
pub fn repondre<D: Depot>(calc: &mut Calculatrice<D>, texte: &str) -> String {
    let commande = Commande::analyser(texte);
    debug!("commande : {commande:?}");

    match commande {
        Commande::Calculer(expr) => match calc.calculer(&expr) {
            Ok(n) => format!("Résultat : {}", format_nombre(&n, calc.digits())),
            Err(e) => format!("Erreur : {e}"),
        },
        Commande::Historique => match calc.historique() {
            Ok(entrees) => format_historique(&entrees, calc.digits()),
            Err(e) => format!("Erreur : {e}"),
        },
        Commande::Aide => AIDE.to_string(),
        Commande::Inconnue(mot) => format!("Commande inconnue : {mot}. Tapez /help."),
    }
}

pub fn format_historique(entrees: &[Entree], digits: usize) -> String {
    if entrees.is_empty() {
        return "Aucune expression enregistrée.".to_string();
    }

    let mut out = String::from("Expressions précédentes :");
    for e in entrees {
        out.push('\n');
        out.push_str(&format!(
            "{}. {} = {}",
            e.id,
            e.expression,
            format_nombre(&e.resultat, digits)
        ));
    }
    out
}
