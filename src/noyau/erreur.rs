// src/noyau/erreur.rs
//
// Erreur unique du noyau.
// L'UI n'affiche qu'un marqueur générique ("Error") ; la raison détaillée
// sert aux journaux (tracing) et aux tests.

use thiserror::Error;

/// Marqueur affiché par l'UI pour toute erreur d'évaluation.
pub const MARQUEUR_ERREUR: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère invalide: '{0}'")]
    CaractereInvalide(char),

    #[error("identifiant inconnu: '{0}'")]
    IdentifiantInconnu(String),

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    #[error("syntaxe: {0}")]
    Syntaxe(&'static str),

    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("{0} : hors domaine")]
    Domaine(&'static str),

    #[error("résultat non fini")]
    NonFini,
}
