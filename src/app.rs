// src/app.rs
//
// Messagerie calculatrice — module App (racine)
// ---------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppMessagerie (pour main.rs: use crate::app::AppMessagerie;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// La gestion Enter est faite dans vue.rs (quand le champ a le focus).

pub mod etat;
pub mod vue;

pub use etat::AppMessagerie;

use eframe::egui;

impl eframe::App for AppMessagerie {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = vider la saisie (le fil reste)
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.entree.clear();
            self.focus_entree = true;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
