//! Noyau: évaluation (pipeline réel)
//!
//! tokenize (glyphes + alphabet fermé) -> RPN (grammaire) -> f64 -> fini ? -> affichage
//!
//! Fonction pure : aucun état entre deux appels.

use tracing::debug;

use super::erreur::ErreurEval;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

fn pipeline(s: &str) -> Result<f64, ErreurEval> {
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    // 1+2) Glyphes -> jetons canoniques, alphabet fermé
    let jetons = tokenize(s)?;

    // 3) RPN + grammaire, puis calcul
    let rpn = to_rpn(&jetons)?;
    debug!(rpn = %format_tokens(&rpn), "expression analysée");
    let v = eval_rpn(&rpn)?;

    // 4) Classement
    if !v.is_finite() {
        return Err(ErreurEval::NonFini);
    }
    Ok(v)
}

/// API publique : évalue une expression en nombre fini, ou erreur.
pub fn evaluer(expr_str: &str) -> Result<f64, ErreurEval> {
    let s = expr_str.trim();
    pipeline(s).inspect_err(|e| debug!(expression = s, erreur = %e, "évaluation refusée"))
}

/// API publique : évalue puis formate pour l'écran (au plus `decimales` chiffres).
pub fn evaluer_affichage(expr_str: &str, decimales: usize) -> Result<String, ErreurEval> {
    let v = evaluer(expr_str)?;
    format_resultat(v, decimales)
}
