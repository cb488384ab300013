// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppMessagerie (etat.rs) pour natif + wasm
// - Fil de messages défilant, saisie en bas
// - Clavier : Enter envoie (quand le champ est focus)
// - Tactile : boutons, focus redonné après clic (focus_entree)

use eframe::egui;

use super::etat::{AppMessagerie, Auteur, Message};

/// Place réservée sous le fil (séparateur + ligne de saisie).
const HAUTEUR_SAISIE: f32 = 48.0;

impl AppMessagerie {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice — historique");
        ui.add_space(6.0);

        // Le fil prend la hauteur disponible, moins la ligne de saisie.
        let hauteur_fil = (ui.available_height() - HAUTEUR_SAISIE).max(80.0);
        self.ui_fil(ui, hauteur_fil);

        ui.separator();
        self.ui_saisie(ui);
    }

    fn ui_fil(&mut self, ui: &mut egui::Ui, hauteur: f32) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .max_height(hauteur)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for (i, m) in self.fil.iter().enumerate() {
                    Self::bulle(ui, i, m);
                }

                if self.defiler_en_bas {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                    self.defiler_en_bas = false;
                }
            });
    }

    fn bulle(ui: &mut egui::Ui, i: usize, m: &Message) {
        let (mise_en_page, fond) = match m.auteur {
            Auteur::Utilisateur => (
                egui::Layout::right_to_left(egui::Align::TOP),
                ui.visuals().selection.bg_fill,
            ),
            Auteur::Bot => (
                egui::Layout::left_to_right(egui::Align::TOP),
                ui.visuals().extreme_bg_color,
            ),
        };

        ui.push_id(i, |ui| {
            ui.with_layout(mise_en_page, |ui| {
                egui::Frame::group(ui.style()).fill(fond).show(ui, |ui| {
                    ui.set_max_width(ui.available_width() * 0.8);
                    ui.monospace(&m.texte);
                });
            });
        });
    }

    fn ui_saisie(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let largeur = (ui.available_width() - 3.0 * 90.0).max(120.0);

            // IMPORTANT : id stable + focus contrôlé
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.entree)
                    .desired_width(largeur)
                    .hint_text("Ex: (2+3)*4, /calculate 10/4, /history")
                    .id_salt("entree_messagerie")
                    .code_editor(),
            );

            if self.focus_entree {
                resp.request_focus();
                self.focus_entree = false;
            }

            // Enter : singleline perd le focus à l’appui, d’où lost_focus()
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if resp.lost_focus() && enter {
                self.envoyer();
            }

            if ui
                .add_sized([84.0, 28.0], egui::Button::new("Envoyer"))
                .clicked()
            {
                self.envoyer();
            }

            if ui
                .add_sized([84.0, 28.0], egui::Button::new("/history"))
                .on_hover_text("Expressions précédentes")
                .clicked()
            {
                self.demander_historique();
            }

            if ui
                .add_sized([84.0, 28.0], egui::Button::new("Effacer"))
                .on_hover_text("Efface le fil affiché (pas l’historique)")
                .clicked()
            {
                self.effacer_fil();
            }
        });
    }
}
