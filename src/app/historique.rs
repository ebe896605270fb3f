//! src/app/historique.rs
//!
//! Historique des évaluations RÉUSSIES (jamais d'erreur ici).
//!
//! Contrats :
//! - ordre : plus récent d'abord
//! - borne : HISTORIQUE_MAX entrées, les plus anciennes sont évincées sans bruit
//! - une entrée n'est jamais modifiée après création ; seul `vider()` efface

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Nombre maximal d'entrées conservées.
pub const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub id: u64,
    pub expression: String,
    pub resultat: String,
    pub horodatage: DateTime<Local>,
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
    // ids uniques même après vider()
    prochain_id: u64,
}

impl Historique {
    /// Ajoute une entrée en tête ; évince la plus ancienne au-delà de la borne.
    pub fn ajouter(
        &mut self,
        expression: impl Into<String>,
        resultat: impl Into<String>,
        horodatage: DateTime<Local>,
    ) -> u64 {
        let id = self.prochain_id;
        self.prochain_id += 1;

        self.entrees.push_front(EntreeHistorique {
            id,
            expression: expression.into(),
            resultat: resultat.into(),
            horodatage,
        });
        self.entrees.truncate(HISTORIQUE_MAX);

        id
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn get(&self, id: u64) -> Option<&EntreeHistorique> {
        self.entrees.iter().find(|e| e.id == id)
    }

    /// Plus récent d'abord.
    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
