//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, historique, mode,
//! thème, convertisseur) et offrir les actions du pavé sans logique d’affichage.
//!
//! Contrats :
//! - L'évaluation passe par le noyau (fonction pure), l'état vit ici.
//! - Historique : une entrée si et seulement si l'évaluation réussit.
//! - Erreur : l'entrée est conservée pour correction, rien n'est enregistré.

use chrono::Local;
use tracing::{debug, info};

use crate::config::Config;
use crate::noyau::{evaluer_affichage, format_resultat, MARQUEUR_ERREUR};

use super::convertisseur::{convertir, Categorie, Unite};
use super::historique::Historique;

/// Touches qui prolongent un résultat final au lieu de repartir de zéro.
const OPERATEURS_CONTINUATION: [&str; 5] = ["+", "-", "×", "÷", "^"];

/// Motifs retirés d’un coup par DEL.
const MOTIFS_EFFACABLES: [&str; 8] = ["sqrt(", "sin(", "cos(", "tan(", "log(", "abs(", "ln(", "pi"];

/// Chiffres affichés par le convertisseur.
const DECIMALES_CONVERSION: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Onglet {
    Calculatrice,
    Convertisseur,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModePave {
    Basique,
    Scientifique,
}

#[derive(Clone, Debug)]
pub struct Convertisseur {
    pub categorie: Categorie,
    pub montant: String,
    pub de: Unite,
    pub vers: Unite,
}

impl Default for Convertisseur {
    fn default() -> Self {
        Self {
            categorie: Categorie::Longueur,
            montant: "1".to_string(),
            de: Unite::M,
            vers: Unite::Ft,
        }
    }
}

impl Convertisseur {
    /// Change de catégorie et repart sur la paire d’unités par défaut.
    pub fn set_categorie(&mut self, categorie: Categorie) {
        self.categorie = categorie;
        (self.de, self.vers) = categorie.paire_defaut();
    }

    /// Texte affiché ("---" si le montant n’est pas un nombre).
    pub fn resultat(&self) -> String {
        let Ok(v) = self.montant.trim().parse::<f64>() else {
            return "---".to_string();
        };
        if !v.is_finite() {
            return "---".to_string();
        }

        convertir(v, self.de, self.vers)
            .ok()
            .and_then(|r| format_resultat(r, DECIMALES_CONVERSION).ok())
            .unwrap_or_else(|| "---".to_string())
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sortie ---
    pub resultat: String, // texte formaté ou MARQUEUR_ERREUR, vide sinon
    // true juste après un "=" réussi : la touche suivante décide de repartir ou prolonger
    pub resultat_final: bool,

    pub historique: Historique,
    pub historique_ouvert: bool,

    // --- paramètres ---
    pub decimales: usize,
    pub mode: ModePave,
    pub onglet: Onglet,
    pub mode_sombre: bool,

    pub convertisseur: Convertisseur,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_config(&Config::default(), false)
    }
}

impl AppCalc {
    /// `sombre_systeme` sert quand la configuration ne fixe pas le thème.
    pub fn depuis_config(cfg: &Config, sombre_systeme: bool) -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            resultat_final: false,
            historique: Historique::default(),
            historique_ouvert: false,
            decimales: cfg.decimales,
            mode: if cfg.mode_scientifique {
                ModePave::Scientifique
            } else {
                ModePave::Basique
            },
            onglet: Onglet::Calculatrice,
            mode_sombre: cfg.mode_sombre.unwrap_or(sombre_systeme),
            convertisseur: Convertisseur::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Touche du pavé (chiffre, opérateur, "sin(", "π", ...).
    pub fn appuyer(&mut self, touche: &str) {
        if self.resultat_final {
            // opérateur : on prolonge le résultat ; sinon on repart de zéro
            if OPERATEURS_CONTINUATION.contains(&touche) {
                self.entree = format!("{}{touche}", self.resultat);
            } else {
                self.entree = touche.to_string();
            }
            self.resultat_final = false;
            self.resultat.clear();
        } else {
            self.entree.push_str(touche);
        }
        self.focus_entree = true;
    }

    /// AC : entrée + résultat.
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.resultat.clear();
        self.resultat_final = false;
        self.focus_entree = true;
    }

    /// DEL : tout effacer après un résultat final, sinon retirer le dernier symbole.
    pub fn supprimer(&mut self) {
        if self.resultat_final {
            self.effacer();
            return;
        }

        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        // Retire d’un coup les motifs connus ("sin(", "pi", ...)
        for pat in MOTIFS_EFFACABLES {
            if self.entree.ends_with(pat) {
                self.entree.truncate(self.entree.len() - pat.len());
                self.focus_entree = true;
                return;
            }
        }

        self.entree.pop();
        self.focus_entree = true;
    }

    /// "=" : évalue via le noyau. Entrée vide => rien.
    pub fn evaluer(&mut self) {
        let expression = self.entree.trim().to_string();
        if expression.is_empty() {
            return;
        }

        match evaluer_affichage(&expression, self.decimales) {
            Ok(resultat) => {
                let id = self
                    .historique
                    .ajouter(expression, resultat.clone(), Local::now());
                debug!(id, resultat = %resultat, "ajouté à l'historique");

                self.resultat = resultat;
                self.resultat_final = true;
            }
            Err(_) => {
                // la raison est déjà journalisée par le noyau
                self.resultat = MARQUEUR_ERREUR.to_string();
                self.resultat_final = false;
            }
        }
        self.focus_entree = true;
    }

    /// L’utilisateur a tapé directement dans le champ.
    pub fn entree_modifiee(&mut self) {
        self.resultat_final = false;
    }

    /* ------------------------ Historique ------------------------ */

    /// Reprend le résultat d’une entrée comme nouvelle entrée.
    pub fn selectionner_historique(&mut self, id: u64) {
        let Some(e) = self.historique.get(id) else {
            return;
        };
        self.entree = e.resultat.clone();
        self.resultat.clear();
        self.resultat_final = false;
        self.historique_ouvert = false;
        self.focus_entree = true;
    }

    pub fn vider_historique(&mut self) {
        info!(entrees = self.historique.len(), "historique vidé");
        self.historique.vider();
    }

    /* ------------------------ Modes ------------------------ */

    pub fn basculer_mode(&mut self) {
        self.mode = match self.mode {
            ModePave::Basique => ModePave::Scientifique,
            ModePave::Scientifique => ModePave::Basique,
        };
    }

    pub fn basculer_theme(&mut self) {
        self.mode_sombre = !self.mode_sombre;
    }
}
