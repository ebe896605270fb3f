// src/app.rs
//
// Calculatrice: module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (état, vue, historique, convertisseur)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Enter est géré dans vue.rs (quand le champ d’entrée a le focus).
// - Le panneau d’historique doit être montré AVANT le panneau central.

pub mod convertisseur;
pub mod etat;
pub mod historique;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = AC (entrée + résultat)
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.effacer();
        }

        let theme = if self.mode_sombre {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };
        if ctx.theme() != theme {
            ctx.set_theme(theme);
        }

        egui::TopBottomPanel::top("barre").show(ctx, |ui| {
            self.ui_barre(ui);
        });

        self.ui_historique(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
