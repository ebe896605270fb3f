//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés : jamais de panique, tout succès est fini et se relit à l'identique

use std::time::{Duration, Instant};

use super::{evaluer, evaluer_affichage, ErreurEval, DECIMALES_DEFAUT};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn check_invariant_succes(expr: &str, affiche: &str) {
    let v = evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    assert!(v.is_finite(), "succès non fini: expr={expr:?}");

    // le texte affiché se relit à l'identique
    let relu = evaluer_affichage(affiche, DECIMALES_DEFAUT)
        .unwrap_or_else(|e| panic!("relecture de {affiche:?} (expr={expr:?}) err={e}"));
    assert_eq!(relu, affiche, "expr={expr:?}");
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // inclut 0 (utile pour division par zéro / log(0))
    let a = rng.pick(13);
    if rng.coin() {
        format!("{a}")
    } else {
        format!("{a}.{}", rng.pick(100))
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 | 2 => gen_nombre(rng),
        3 => "pi".to_string(),
        4 => "π".to_string(),
        _ => "e".to_string(),
    }
}

const FONCTIONS: [&str; 8] = ["sin", "cos", "tan", "sqrt", "log", "ln", "abs", "√"];
const OPERATEURS: [&str; 8] = ["+", "-", "*", "/", "^", "×", "÷", "−"];

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(6) {
        0 => gen_atom(rng),
        1 | 2 => {
            let op = OPERATEURS[rng.pick(OPERATEURS.len() as u32) as usize];
            format!(
                "({}{op}{})",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
        3 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        4 => format!("-{}", gen_expr(rng, depth - 1)),
        _ => format!("{}*{}", gen_expr(rng, depth - 1), gen_atom(rng)),
    }
}

/// Bruit : insère / supprime / remplace un caractère au hasard.
fn mutation(rng: &mut Rng, s: &str) -> String {
    const ALPHABET: [char; 16] = [
        '(', ')', '+', '-', '*', '/', '^', '.', '1', 'e', 'x', ' ', '√', '%', 'π', 's',
    ];
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let pos = rng.pick(chars.len() as u32) as usize;
    let c = ALPHABET[rng.pick(ALPHABET.len() as u32) as usize];
    match rng.pick(3) {
        0 => chars.insert(pos, c),
        1 => {
            chars.remove(pos);
        }
        _ => chars[pos] = c,
    }
    chars.into_iter().collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        let r1 = evaluer_affichage(&expr, DECIMALES_DEFAUT);
        let r2 = evaluer_affichage(&expr, DECIMALES_DEFAUT);
        assert_eq!(r1, r2, "non déterministe: expr={expr:?}");

        match r1 {
            Ok(affiche) => {
                check_invariant_succes(&expr, &affiche);
                seen_ok += 1;
            }
            Err(e) => {
                // grammaire valide par construction : seules les erreurs numériques sont attendues
                assert!(
                    matches!(
                        e,
                        ErreurEval::DivisionParZero | ErreurEval::Domaine(_) | ErreurEval::NonFini
                    ),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_entrees_abimees_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let base = gen_expr(&mut rng, 3);
        let mut expr = mutation(&mut rng, &base);
        if rng.coin() {
            expr = mutation(&mut rng, &expr);
        }

        // Succès ou erreur : les deux sont acceptables, la panique non.
        if let Ok(affiche) = evaluer_affichage(&expr, DECIMALES_DEFAUT) {
            check_invariant_succes(&expr, &affiche);
        }
    }
}
