//! Tests scientifiques (campagne) : propriétés + robustesse + limites contrôlées.
//!
//! - idempotence : relire un résultat affiché redonne la même valeur
//! - cohérence avec l'arithmétique entière (précédence usuelle)
//! - stress borné (profondeur de parenthèses, longueur) sous budget temps

use std::time::{Duration, Instant};

use super::{evaluer, evaluer_affichage, DECIMALES_DEFAUT};

fn affiche(expr: &str) -> String {
    evaluer_affichage(expr, DECIMALES_DEFAUT).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/// Relire le texte affiché doit redonner exactement le même texte.
fn assert_idempotent(expr: &str) {
    let r1 = affiche(expr);
    let r2 = affiche(&r1);
    assert_eq!(r1, r2, "expr={expr:?}");
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence_resultats() {
    for expr in [
        "14",
        "2+3*4",
        "0.1+0.2",
        "1/3",
        "-7/4",
        "sqrt(2)",
        "pi*1000",
        "2^60",
        "e^-5",
        "-0.000001",
    ] {
        assert_idempotent(expr);
    }
}

#[test]
fn sci_idempotence_valeur() {
    // "14" -> 14 -> "14"
    assert_eq!(evaluer("14"), Ok(14.0));
    assert_eq!(affiche("14"), "14");
}

/* ------------------------ Arithmétique entière ------------------------ */

/// Référence : évaluation entière récursive minimale (a op b op c) avec précédence usuelle.
fn reference(a: i64, op1: char, b: i64, op2: char, c: i64) -> i64 {
    let applique = |x: i64, op: char, y: i64| match op {
        '+' => x + y,
        '-' => x - y,
        _ => x * y,
    };
    let prio = |op: char| if op == '*' { 2 } else { 1 };
    if prio(op2) > prio(op1) {
        applique(a, op1, applique(b, op2, c))
    } else {
        applique(applique(a, op1, b), op2, c)
    }
}

#[test]
fn sci_precedence_grille_entiere() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let ops = ['+', '-', '*'];
    for a in [0i64, 1, 7, 12] {
        for b in [2i64, 5, 9] {
            for c in [3i64, 4, 11] {
                for op1 in ops {
                    for op2 in ops {
                        budget(t0, max);
                        let expr = format!("{a}{op1}{b}{op2}{c}");
                        let attendu = reference(a, op1, b, op2, c);
                        assert_eq!(affiche(&expr), attendu.to_string(), "expr={expr:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn sci_parentheses_prioritaires() {
    assert_eq!(affiche("(1+2)*(3+4)"), "21");
    assert_eq!(affiche("((((5))))"), "5");
    assert_eq!(affiche("2*(3-(4*(5-6)))"), "14");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_profondeur_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // Profondeur 2000 : aucun appel récursif dans le parseur.
    let n = 2000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(affiche(&expr), "1");

    let expr = format!("{}1", "-".repeat(n));
    assert_eq!(affiche(&expr), "1");
    budget(t0, max);
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.1"; 1000].join("+");
    budget(t0, max);

    // 1000 * 0.1 avec bruit cumulé, absorbé par l'arrondi à 10 chiffres
    assert_eq!(affiche(&expr), "100");
    budget(t0, max);
}
