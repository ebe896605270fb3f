// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (champ d’entrée), Escape efface (app.rs)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Pavé basique (4 colonnes) / scientifique (5 colonnes)
// - Historique en panneau latéral, convertisseur en second onglet

use eframe::egui;

use crate::noyau::MARQUEUR_ERREUR;

use super::convertisseur::Categorie;
use super::etat::{AppCalc, ModePave, Onglet};

const HAUTEUR_TOUCHE: f32 = 44.0;
const ECART: f32 = 6.0;

#[derive(Clone, Copy, Debug)]
enum Touche {
    /// (libellé, texte inséré)
    Insere(&'static str, &'static str),
    EffacerTout,
    Supprimer,
    Egal,
}

use Touche::{EffacerTout, Egal, Insere, Supprimer};

/// (touche, largeur en colonnes)
type Ligne = &'static [(Touche, usize)];

const PAVE_BASIQUE: [Ligne; 5] = [
    &[(EffacerTout, 1), (Supprimer, 2), (Insere("÷", "÷"), 1)],
    &[(Insere("7", "7"), 1), (Insere("8", "8"), 1), (Insere("9", "9"), 1), (Insere("×", "×"), 1)],
    &[(Insere("4", "4"), 1), (Insere("5", "5"), 1), (Insere("6", "6"), 1), (Insere("-", "-"), 1)],
    &[(Insere("1", "1"), 1), (Insere("2", "2"), 1), (Insere("3", "3"), 1), (Insere("+", "+"), 1)],
    &[(Insere("0", "0"), 2), (Insere(".", "."), 1), (Egal, 1)],
];

const PAVE_SCIENTIFIQUE: [Ligne; 6] = [
    &[
        (EffacerTout, 1),
        (Insere("(", "("), 1),
        (Insere(")", ")"), 1),
        (Supprimer, 1),
        (Insere("÷", "÷"), 1),
    ],
    &[
        (Insere("sin", "sin("), 1),
        (Insere("cos", "cos("), 1),
        (Insere("tan", "tan("), 1),
        (Insere("^", "^"), 1),
        (Insere("√", "sqrt("), 1),
    ],
    &[
        (Insere("ln", "ln("), 1),
        (Insere("7", "7"), 1),
        (Insere("8", "8"), 1),
        (Insere("9", "9"), 1),
        (Insere("×", "×"), 1),
    ],
    &[
        (Insere("log", "log("), 1),
        (Insere("4", "4"), 1),
        (Insere("5", "5"), 1),
        (Insere("6", "6"), 1),
        (Insere("-", "-"), 1),
    ],
    &[
        (Insere("π", "π"), 1),
        (Insere("1", "1"), 1),
        (Insere("2", "2"), 1),
        (Insere("3", "3"), 1),
        (Insere("+", "+"), 1),
    ],
    &[
        (Insere("e", "e"), 1),
        (Insere("0", "0"), 2),
        (Insere(".", "."), 1),
        (Egal, 1),
    ],
];

impl AppCalc {
    /// Barre du haut : onglets, historique, thème.
    pub fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.onglet, Onglet::Calculatrice, "Calc");
            ui.selectable_value(&mut self.onglet, Onglet::Convertisseur, "Conv");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme = if self.mode_sombre { "☀" } else { "🌙" };
                if ui.button(theme).on_hover_text("Thème clair / sombre").clicked() {
                    self.basculer_theme();
                }

                if self.onglet == Onglet::Calculatrice
                    && ui.button("Historique").clicked()
                {
                    self.historique_ouvert = !self.historique_ouvert;
                }
            });
        });
    }

    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(ECART, ECART);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.onglet {
                Onglet::Calculatrice => {
                    self.ui_ecran(ui);
                    ui.add_space(8.0);
                    self.ui_bascule_mode(ui);
                    ui.add_space(8.0);
                    self.ui_pave(ui);
                }
                Onglet::Convertisseur => self.ui_convertisseur(ui),
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("0")
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::RIGHT)
                .id_source("entree_edit"),
        );

        if resp.changed() {
            self.entree_modifiee();
        }

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (le champ perd le focus sur Enter) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.evaluer();
        }

        if !self.resultat.is_empty() {
            let texte = egui::RichText::new(format!("= {}", self.resultat))
                .monospace()
                .size(32.0)
                .strong();
            let texte = if self.resultat == MARQUEUR_ERREUR {
                texte.color(ui.visuals().error_fg_color)
            } else {
                texte
            };

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(texte);
            });
        }
    }

    fn ui_bascule_mode(&mut self, ui: &mut egui::Ui) {
        let libelle = match self.mode {
            ModePave::Basique => "Basique",
            ModePave::Scientifique => "Scientifique",
        };
        ui.vertical_centered(|ui| {
            if ui
                .small_button(libelle)
                .on_hover_text("Basculer le pavé")
                .clicked()
            {
                self.basculer_mode();
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let (lignes, colonnes): (&[Ligne], usize) = match self.mode {
            ModePave::Basique => (&PAVE_BASIQUE, 4),
            ModePave::Scientifique => (&PAVE_SCIENTIFIQUE, 5),
        };

        let largeur = (ui.available_width() - ECART * (colonnes as f32 - 1.0)) / colonnes as f32;

        for ligne in lignes {
            ui.horizontal(|ui| {
                for (touche, span) in ligne.iter() {
                    let w = largeur * *span as f32 + ECART * (*span as f32 - 1.0);
                    self.bouton_touche(ui, *touche, w);
                }
            });
        }
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, touche: Touche, largeur: f32) {
        let (libelle, tip) = match touche {
            Insere(l, _) => (l, None),
            EffacerTout => ("AC", Some("Efface l’entrée et le résultat")),
            Supprimer => ("DEL", Some("Efface le dernier symbole")),
            Egal => ("=", None),
        };

        let texte = egui::RichText::new(libelle).size(20.0);
        let mut resp = ui.add_sized([largeur, HAUTEUR_TOUCHE], egui::Button::new(texte));
        if let Some(tip) = tip {
            resp = resp.on_hover_text(tip);
        }
        if !resp.clicked() {
            return;
        }

        match touche {
            Insere(_, txt) => self.appuyer(txt),
            EffacerTout => self.effacer(),
            Supprimer => self.supprimer(),
            Egal => self.evaluer(),
        }
    }

    /// Panneau latéral : historique (plus récent d’abord).
    pub fn ui_historique(&mut self, ctx: &egui::Context) {
        let mut choisi: Option<u64> = None;
        let mut vider = false;
        let mut fermer = false;

        egui::SidePanel::right("panneau_historique")
            .resizable(false)
            .default_width(260.0)
            .show_animated(ctx, self.historique_ouvert, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Historique");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        fermer = ui.button("✖").on_hover_text("Fermer").clicked();
                        if !self.historique.is_empty() {
                            vider = ui.button("🗑").on_hover_text("Vider l’historique").clicked();
                        }
                    });
                });
                ui.separator();

                if self.historique.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.weak("Aucun calcul pour l’instant");
                    });
                    return;
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for e in self.historique.iter() {
                        let texte = format!(
                            "{}  {}\n= {}",
                            e.horodatage.format("%H:%M:%S"),
                            e.expression,
                            e.resultat
                        );
                        let bouton = egui::Button::new(egui::RichText::new(texte).monospace());
                        if ui
                            .add_sized([ui.available_width(), 40.0], bouton)
                            .clicked()
                        {
                            choisi = Some(e.id);
                        }
                    }
                });
            });

        if vider {
            self.vider_historique();
        }
        if let Some(id) = choisi {
            self.selectionner_historique(id);
        }
        if fermer {
            self.historique_ouvert = false;
        }
    }

    fn ui_convertisseur(&mut self, ui: &mut egui::Ui) {
        let conv = &mut self.convertisseur;

        // Catégories
        let mut categorie = conv.categorie;
        ui.horizontal(|ui| {
            for c in Categorie::TOUTES {
                ui.selectable_value(&mut categorie, c, c.libelle());
            }
        });
        if categorie != conv.categorie {
            conv.set_categorie(categorie);
        }

        ui.add_space(12.0);

        ui.label("Montant :");
        ui.add(
            egui::TextEdit::singleline(&mut conv.montant)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Heading),
        );

        ui.add_space(8.0);

        let unites = conv.categorie.unites();
        egui::ComboBox::from_label("De")
            .selected_text(conv.de.libelle())
            .show_ui(ui, |ui| {
                for u in unites {
                    ui.selectable_value(&mut conv.de, *u, u.libelle());
                }
            });
        egui::ComboBox::from_label("Vers")
            .selected_text(conv.vers.libelle())
            .show_ui(ui, |ui| {
                for u in unites {
                    ui.selectable_value(&mut conv.vers, *u, u.libelle());
                }
            });

        ui.add_space(12.0);
        ui.separator();

        let resultat = format!("{} {}", conv.resultat(), conv.vers.symbole());
        ui.label(egui::RichText::new(resultat).monospace().size(32.0).strong());
    }
}
