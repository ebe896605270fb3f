// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en vérifiant la grammaire
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Précédence : fonction > moins unaire > ^ (droite) > * / (gauche) > + - (gauche)
// - Moins unaire : '-' quand on attend une valeur => Tok::Neg (préfixe)
//   donc "-2^2" = (-2)^2 et "2^-1" = 2^(-1)
// - '+' unaire : ignoré
// - Pas de multiplication implicite : "2π", "2(3)" => erreur
//
// NOTE:
// - Les fonctions restent sur la pile jusqu'à la parenthèse fermante
//   de leur argument (elles exigent un '(' juste après).
// - Pas de récursion : profondeur bornée par la longueur de l'entrée.

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Caret => 3,
        Tok::Neg => 4,
        Tok::Fonction(_) => 5,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::Neg)
}

/// Dépile vers `out` ce que la précédence/associativité de `tok` exige.
fn depiler_operateurs(ops: &mut Vec<Tok>, out: &mut Vec<Tok>, tok: &Tok) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) {
            break;
        }

        let p_top = precedence(top);
        let p_tok = precedence(tok);

        let doit_pop = if is_right_associative(tok) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        match ops.pop() {
            Some(op) if doit_pop => out.push(op),
            Some(op) => {
                ops.push(op);
                break;
            }
            None => break,
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Sin), LPar, Const(Pi), Slash, Num(2), RPar]
///   rpn:    [Const(Pi), Num(2), Slash, Fonction(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    if tokens.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les suites invalides.
    let mut prev_was_value = false;

    let mut iter = tokens.iter().cloned().peekable();
    while let Some(tok) = iter.next() {
        match tok {
            Tok::Num(_) | Tok::Const(_) => {
                if prev_was_value {
                    return Err(ErreurEval::Syntaxe("deux opérandes consécutifs"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Fonction(_) => {
                if prev_was_value {
                    return Err(ErreurEval::Syntaxe("opérande avant une fonction"));
                }
                if !matches!(iter.peek(), Some(Tok::LPar)) {
                    return Err(ErreurEval::Syntaxe("fonction sans '('"));
                }
                ops.push(tok);
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEval::Syntaxe("opérande avant '('"));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurEval::Syntaxe("sous-expression vide"));
                }

                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurEval::ParenthesesDesequilibrees),
                    }
                }

                // si une fonction attend cet argument, on la sort aussi
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            // signes unaires : '-' devient Neg, '+' ne fait rien
            Tok::Minus | Tok::Neg if !prev_was_value => ops.push(Tok::Neg),
            Tok::Plus if !prev_was_value => {}
            Tok::Neg => return Err(ErreurEval::Syntaxe("moins unaire après une valeur")),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if !prev_was_value {
                    return Err(ErreurEval::Syntaxe("opérateur sans opérande gauche"));
                }
                depiler_operateurs(&mut ops, &mut out, &tok);
                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    if !prev_was_value {
        return Err(ErreurEval::Syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN.
///
/// Toute valeur intermédiaire non finie est refusée tout de suite :
/// "1/(1/0)" est une erreur, pas 0.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        let v = match tok {
            Tok::Num(n) => *n,
            Tok::Const(c) => c.valeur(),

            Tok::Neg => -depile(&mut st)?,

            Tok::Fonction(f) => {
                let x = depile(&mut st)?;
                f.appliquer(x)?
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = depile(&mut st)?;
                let a = depile(&mut st)?;
                match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash if b == 0.0 => return Err(ErreurEval::DivisionParZero),
                    Tok::Slash => a / b,
                    _ => a.powf(b),
                }
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::Syntaxe("parenthèse inattendue en RPN"))
            }
        };

        if !v.is_finite() {
            return Err(ErreurEval::NonFini);
        }
        st.push(v);
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::Syntaxe("expression invalide")),
    }
}

fn depile(st: &mut Vec<f64>) -> Result<f64, ErreurEval> {
    st.pop().ok_or(ErreurEval::Syntaxe("opérande manquant"))
}
