// src/noyau/jetons.rs
//
// Normalisation des glyphes + tokenisation sur un alphabet FERMÉ.
// - glyphes UI : × ÷ − π √ -> opérateurs / constantes / fonctions canoniques
// - mots : suite de lettres ASCII, comparée en entier (insensible à la casse)
// - tout le reste est refusé (aucun chemin vers autre chose que l'arithmétique)

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log, // base 10
    Ln,  // népérien
    Abs,
}

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        let f = match nom {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "sqrt" => Self::Sqrt,
            "log" => Self::Log,
            "ln" => Self::Ln,
            "abs" => Self::Abs,
            _ => return None,
        };
        Some(f)
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Abs => "abs",
        }
    }

    /// Application réelle (radians pour la trig).
    /// Hors domaine réel => erreur, jamais NaN silencieux.
    pub fn appliquer(self, x: f64) -> Result<f64, ErreurEval> {
        match self {
            Self::Sin => Ok(x.sin()),
            Self::Cos => Ok(x.cos()),
            Self::Tan => Ok(x.tan()),
            Self::Sqrt if x < 0.0 => Err(ErreurEval::Domaine("sqrt")),
            Self::Sqrt => Ok(x.sqrt()),
            Self::Log if x <= 0.0 => Err(ErreurEval::Domaine("log")),
            Self::Log => Ok(x.log10()),
            Self::Ln if x <= 0.0 => Err(ErreurEval::Domaine("ln")),
            Self::Ln => Ok(x.ln()),
            Self::Abs => Ok(x.abs()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Const(Constante),
    Fonction(Fonction),

    Plus,
    Minus,
    // moins unaire : jamais produit par tokenize(), seulement par to_rpn()
    Neg,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Glyphe d'opérateur / parenthèse -> jeton canonique.
fn jeton_operateur(c: char) -> Option<Tok> {
    let t = match c {
        '(' => Tok::LPar,
        ')' => Tok::RPar,
        '+' => Tok::Plus,
        '-' | '−' => Tok::Minus,
        '*' | '×' => Tok::Star,
        '/' | '÷' => Tok::Slash,
        '^' => Tok::Caret,
        _ => return None,
    };
    Some(t)
}

/// Mot complet -> constante ou fonction du vocabulaire.
fn jeton_mot(mot: &str) -> Result<Tok, ErreurEval> {
    match mot {
        "pi" => Ok(Tok::Const(Constante::Pi)),
        "e" => Ok(Tok::Const(Constante::E)),
        _ => Fonction::depuis_nom(mot)
            .map(Tok::Fonction)
            .ok_or_else(|| ErreurEval::IdentifiantInconnu(mot.to_string())),
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, .5, 5.)
/// - opérateurs + - * / ^ et leurs glyphes × ÷ −
/// - parenthèses ( )
/// - π / pi, e
/// - sin cos tan sqrt log ln abs (et √ pour sqrt)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // "**" : autre écriture de la puissance
        if c == '*' && chars.get(i + 1) == Some(&'*') {
            out.push(Tok::Caret);
            i += 2;
            continue;
        }

        if let Some(t) = jeton_operateur(c) {
            out.push(t);
            i += 1;
            continue;
        }

        if c == 'π' {
            out.push(Tok::Const(Constante::Pi));
            i += 1;
            continue;
        }
        if c == '√' {
            out.push(Tok::Fonction(Fonction::Sqrt));
            i += 1;
            continue;
        }

        // Mots : [a-zA-Z]+ (normalisés en minuscules)
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            out.push(jeton_mot(&mot.to_lowercase())?);
            continue;
        }

        // Nombre : chiffres avec au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            if txt.matches('.').count() > 1 {
                return Err(ErreurEval::NombreInvalide(txt));
            }
            let n = txt
                .parse::<f64>()
                .map_err(|_| ErreurEval::NombreInvalide(txt.clone()))?;
            out.push(Tok::Num(n));
            continue;
        }

        return Err(ErreurEval::CaractereInvalide(c));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(n) => format!("{n}"),
            Tok::Const(Constante::Pi) => "π".to_string(),
            Tok::Const(Constante::E) => "e".to_string(),
            Tok::Fonction(f) => f.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphes_normalises() {
        let t = tokenize("6×2÷3−1").unwrap();
        assert_eq!(
            t,
            vec![
                Tok::Num(6.0),
                Tok::Star,
                Tok::Num(2.0),
                Tok::Slash,
                Tok::Num(3.0),
                Tok::Minus,
                Tok::Num(1.0),
            ]
        );
    }

    #[test]
    fn constantes_et_fonctions() {
        let t = tokenize("sqrt(π) + e * LN(2)").unwrap();
        assert_eq!(t[0], Tok::Fonction(Fonction::Sqrt));
        assert_eq!(t[2], Tok::Const(Constante::Pi));
        assert_eq!(t[5], Tok::Const(Constante::E));
        assert_eq!(t[7], Tok::Fonction(Fonction::Ln));
    }

    #[test]
    fn nombres_decimaux() {
        assert_eq!(tokenize(".5").unwrap(), vec![Tok::Num(0.5)]);
        assert_eq!(tokenize("5.").unwrap(), vec![Tok::Num(5.0)]);
        assert!(matches!(
            tokenize("1.2.3"),
            Err(ErreurEval::NombreInvalide(_))
        ));
        assert!(matches!(tokenize("."), Err(ErreurEval::NombreInvalide(_))));
    }

    #[test]
    fn mots_entiers_seulement() {
        // "e" isolé est une constante, pas un préfixe
        assert!(matches!(
            tokenize("exp(1)"),
            Err(ErreurEval::IdentifiantInconnu(w)) if w == "exp"
        ));
        assert!(matches!(
            tokenize("2+alert(1)"),
            Err(ErreurEval::IdentifiantInconnu(_))
        ));
    }

    #[test]
    fn caracteres_hors_alphabet() {
        assert_eq!(tokenize("2;3"), Err(ErreurEval::CaractereInvalide(';')));
        assert_eq!(tokenize("x_1"), Err(ErreurEval::IdentifiantInconnu("x".into())));
        assert_eq!(tokenize("2 % 3"), Err(ErreurEval::CaractereInvalide('%')));
    }

    #[test]
    fn double_etoile_puissance() {
        assert_eq!(
            tokenize("2**3").unwrap(),
            vec![Tok::Num(2.0), Tok::Caret, Tok::Num(3.0)]
        );
        assert_eq!(
            tokenize("2***3").unwrap(),
            vec![Tok::Num(2.0), Tok::Caret, Tok::Star, Tok::Num(3.0)]
        );
        assert_eq!(
            tokenize("2* *3").unwrap(),
            vec![Tok::Num(2.0), Tok::Star, Tok::Star, Tok::Num(3.0)]
        );
    }

    #[test]
    fn format_tokens_lisible() {
        let t = tokenize("sin(pi)^2").unwrap();
        assert_eq!(format_tokens(&t), "sin ( π ) ^ 2");
    }
}
