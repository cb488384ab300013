//! src/app/etat.rs
//!
//! État UI de la messagerie (sans vue).
//!
//! Rôle : contenir le fil de messages, la saisie, et la calculatrice (avec son
//! dépôt). Chaque envoi passe par `commandes::repondre` ; aucune évaluation ici.
//!
//! Contrats :
//! - Une saisie sans '/' en tête est une expression : "2+3" => "/calculate 2+3".
//! - Effacer le fil ne touche pas à l’historique enregistré.

use crate::calculatrice::Calculatrice;
use crate::commandes::{repondre, AIDE};
use crate::historique::Depot;

/// Garde-fou : au-delà, on oublie les plus vieux messages affichés.
const FIL_MAX: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auteur {
    Utilisateur,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub auteur: Auteur,
    pub texte: String,
}

pub struct AppMessagerie {
    // --- saisie utilisateur ---
    pub entree: String,

    // --- fil de discussion ---
    pub fil: Vec<Message>,

    // --- calcul + historique ---
    pub calc: Calculatrice<Box<dyn Depot>>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à la saisie après un clic sur un bouton.
    pub focus_entree: bool,
    // Demande à vue.rs de défiler jusqu’au dernier message.
    pub defiler_en_bas: bool,
}

impl AppMessagerie {
    pub fn new(calc: Calculatrice<Box<dyn Depot>>) -> Self {
        Self {
            entree: String::new(),
            fil: vec![Message {
                auteur: Auteur::Bot,
                texte: AIDE.to_string(),
            }],
            calc,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            defiler_en_bas: true,
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// Envoie la saisie courante (si non vide) et ajoute la réponse au fil.
    pub fn envoyer(&mut self) {
        let texte = self.entree.trim().to_string();
        self.entree.clear();
        self.focus_entree = true;

        if texte.is_empty() {
            return;
        }

        let commande = if texte.starts_with('/') {
            texte.clone()
        } else {
            format!("/calculate {texte}")
        };

        self.pousser(Auteur::Utilisateur, texte);
        let reponse = repondre(&mut self.calc, &commande);
        self.pousser(Auteur::Bot, reponse);
    }

    /// Raccourci bouton : /history.
    pub fn demander_historique(&mut self) {
        self.entree = "/history".to_string();
        self.envoyer();
    }

    /// Efface le fil affiché (l’historique enregistré reste intact).
    pub fn effacer_fil(&mut self) {
        self.fil.clear();
        self.focus_entree = true;
    }

    fn pousser(&mut self, auteur: Auteur, texte: String) {
        self.fil.push(Message { auteur, texte });
        if self.fil.len() > FIL_MAX {
            let trop = self.fil.len() - FIL_MAX;
            self.fil.drain(..trop);
        }
        self.defiler_en_bas = true;
    }
}
