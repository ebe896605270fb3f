//! Noyau d'évaluation (f64, sans état)
//!
//! Organisation interne :
//! - erreur.rs   : ErreurEval (une seule sorte d'erreur côté appelant)
//! - jetons.rs   : glyphes -> jetons canoniques, alphabet fermé
//! - rpn.rs      : shunting-yard + grammaire + calcul sur pile
//! - format.rs   : affichage (arrondi décimal exact, zéros retirés)
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurEval, MARQUEUR_ERREUR};
pub use eval::{evaluer, evaluer_affichage};
pub use format::{format_resultat, DECIMALES_DEFAUT, DECIMALES_MAX};
