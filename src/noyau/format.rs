// src/noyau/format.rs
//
// Affichage du résultat.
// - f64 -> rationnel EXACT (valeur binaire réelle, sans bruit de Display)
// - arrondi à `decimales` chiffres (demi -> loin de zéro)
// - décimal arrondi -> f64 le plus proche -> écriture la plus courte qui se relit
//   (au-delà de ~1e6, les derniers chiffres binaires ne sont que du bruit)
// - "0.3", "14", "-2.5", jamais de notation exponentielle

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::ErreurEval;

/// Précision d'affichage par défaut (anti 0.30000000000000004).
pub const DECIMALES_DEFAUT: usize = 10;

/// Garde-fou : au-delà, f64 n'a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 15;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = round(r * 10^digits)
fn rational_scaled_arrondi(r: &BigRational, digits: usize) -> BigInt {
    let scale = BigRational::from_integer(pow10(digits));
    (r.clone() * scale).round().to_integer()
}

/// Plus courte écriture décimale qui redonne `v` (Display de f64 : jamais d'exposant).
fn plus_courte(v: f64) -> String {
    format!("{v}")
}

/* ------------------------ API ------------------------ */

/// Formate une valeur finie pour l'affichage (au plus `decimales` chiffres après le point).
pub fn format_resultat(valeur: f64, decimales: usize) -> Result<String, ErreurEval> {
    let digits = decimales.min(DECIMALES_MAX);
    let r = BigRational::from_float(valeur).ok_or(ErreurEval::NonFini)?;

    let scaled = rational_scaled_arrondi(&r, digits);

    // "-0" n'existe pas à l'écran
    if scaled.is_zero() {
        return Ok("0".to_string());
    }

    let arrondi = scaled_to_decimal(scaled, digits);
    let v = arrondi
        .parse::<f64>()
        .map_err(|_| ErreurEval::NombreInvalide(arrondi))?;
    if !v.is_finite() {
        return Err(ErreurEval::NonFini);
    }

    Ok(plus_courte(v))
}
