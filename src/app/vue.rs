// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : chiffres/opérateurs/point arrivent en texte ; Enter évalue,
//   Backspace efface le dernier symbole (Escape est géré dans app.rs)
// - Tactile : gros boutons, retour visuel au clic (natif egui)
//
// Note :
// - L’écran est en lecture seule : toute saisie passe par des Jetons,
//   jamais par une édition directe de la chaîne affichée.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Jeton;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.gerer_clavier(ui);

        ui.heading("Calculette tactile");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(&self.affiche);
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculette")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Remise à zéro (Échap)", Jeton::Effacer);
                self.bouton(ui, "DEL", "Efface le dernier symbole", Jeton::Supprimer);
                self.bouton(ui, "%", "Pourcentage du dernier nombre", Jeton::Pourcent);
                self.bouton(ui, "/", "Division", Jeton::Operateur('/'));
                ui.end_row();

                self.chiffre(ui, '7');
                self.chiffre(ui, '8');
                self.chiffre(ui, '9');
                self.bouton(ui, "*", "Multiplication", Jeton::Operateur('*'));
                ui.end_row();

                self.chiffre(ui, '4');
                self.chiffre(ui, '5');
                self.chiffre(ui, '6');
                self.bouton(ui, "-", "Soustraction", Jeton::Operateur('-'));
                ui.end_row();

                self.chiffre(ui, '1');
                self.chiffre(ui, '2');
                self.chiffre(ui, '3');
                self.bouton(ui, "+", "Addition", Jeton::Operateur('+'));
                ui.end_row();

                self.chiffre(ui, '0');
                self.bouton(ui, ".", "Point décimal", Jeton::Point);
                self.bouton(ui, "(", "Parenthèse ouvrante", Jeton::ParOuvrante);
                self.bouton(ui, ")", "Parenthèse fermante", Jeton::ParFermante);
                ui.end_row();
            });

        ui.add_space(6.0);

        // "=" pleine largeur (Enter au clavier)
        let eq = ui.add_sized(
            [ui.available_width().min(282.0), 44.0],
            egui::Button::new("="),
        );
        if eq.clicked() {
            self.envoyer(Jeton::Egal);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, jeton: Jeton) {
        let resp = ui
            .add_sized([64.0, 44.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            self.envoyer(jeton);
        }
    }

    fn chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(c.to_string()));
        if resp.clicked() {
            self.envoyer(Jeton::Chiffre(c));
        }
    }

    /* ------------------------ Clavier ------------------------ */

    /// Clavier physique :
    /// - texte (chiffres, ., + - * /, parenthèses, %, =) => Jeton::depuis_char
    /// - Enter => "=" ; Backspace => DEL
    /// egui consomme ces événements : pas d’action navigateur par défaut en web.
    fn gerer_clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for ev in evenements {
            if let egui::Event::Text(texte) = ev {
                for c in texte.chars() {
                    if let Some(jeton) = Jeton::depuis_char(c) {
                        self.envoyer(jeton);
                    }
                }
            }
        }

        // Enter/Backspace sont des touches, pas du texte
        let (entree, retour) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });
        if entree {
            self.envoyer(Jeton::Egal);
        }
        if retour {
            self.envoyer(Jeton::Supprimer);
        }
    }
}
