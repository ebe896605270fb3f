//! src/app/convertisseur.rs
//!
//! Conversion d'unités (longueur, masse, température).
//! - longueur / masse : linéaire via l'unité de base (m, kg)
//! - température : affine via le Celsius

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Longueur,
    Masse,
    Temperature,
}

impl Categorie {
    pub const TOUTES: [Categorie; 3] = [Self::Longueur, Self::Masse, Self::Temperature];

    pub fn libelle(self) -> &'static str {
        match self {
            Self::Longueur => "longueur",
            Self::Masse => "masse",
            Self::Temperature => "température",
        }
    }

    pub fn unites(self) -> &'static [Unite] {
        use Unite::*;
        match self {
            Self::Longueur => &[M, Km, Cm, Mm, In, Ft, Yd, Mi],
            Self::Masse => &[Kg, G, Mg, Lb, Oz],
            Self::Temperature => &[C, F, K],
        }
    }

    /// Paire (de, vers) proposée quand on change de catégorie.
    pub fn paire_defaut(self) -> (Unite, Unite) {
        let u = self.unites();
        (u[0], u[1])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unite {
    // longueur (base : mètre)
    M,
    Km,
    Cm,
    Mm,
    In,
    Ft,
    Yd,
    Mi,

    // masse (base : kilogramme)
    Kg,
    G,
    Mg,
    Lb,
    Oz,

    // température
    C,
    F,
    K,
}

impl Unite {
    pub fn categorie(self) -> Categorie {
        use Unite::*;
        match self {
            M | Km | Cm | Mm | In | Ft | Yd | Mi => Categorie::Longueur,
            Kg | G | Mg | Lb | Oz => Categorie::Masse,
            C | F | K => Categorie::Temperature,
        }
    }

    pub fn symbole(self) -> &'static str {
        use Unite::*;
        match self {
            M => "m",
            Km => "km",
            Cm => "cm",
            Mm => "mm",
            In => "in",
            Ft => "ft",
            Yd => "yd",
            Mi => "mi",
            Kg => "kg",
            G => "g",
            Mg => "mg",
            Lb => "lb",
            Oz => "oz",
            C => "C",
            F => "F",
            K => "K",
        }
    }

    pub fn libelle(self) -> &'static str {
        use Unite::*;
        match self {
            M => "Mètres",
            Km => "Kilomètres",
            Cm => "Centimètres",
            Mm => "Millimètres",
            In => "Pouces",
            Ft => "Pieds",
            Yd => "Yards",
            Mi => "Miles",
            Kg => "Kilogrammes",
            G => "Grammes",
            Mg => "Milligrammes",
            Lb => "Livres",
            Oz => "Onces",
            C => "Celsius",
            F => "Fahrenheit",
            K => "Kelvin",
        }
    }

    /// Facteur vers l'unité de base (None pour la température, qui est affine).
    fn facteur(self) -> Option<f64> {
        use Unite::*;
        let f = match self {
            M => 1.0,
            Km => 1000.0,
            Cm => 0.01,
            Mm => 0.001,
            In => 0.0254,
            Ft => 0.3048,
            Yd => 0.9144,
            Mi => 1609.34,
            Kg => 1.0,
            G => 0.001,
            Mg => 0.000001,
            Lb => 0.453592,
            Oz => 0.0283495,
            C | F | K => return None,
        };
        Some(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurConversion {
    #[error("catégories incompatibles: {0:?} -> {1:?}")]
    CategoriesIncompatibles(Unite, Unite),
}

fn vers_celsius(v: f64, u: Unite) -> f64 {
    match u {
        Unite::F => (v - 32.0) * 5.0 / 9.0,
        Unite::K => v - 273.15,
        _ => v,
    }
}

fn depuis_celsius(c: f64, u: Unite) -> f64 {
    match u {
        Unite::F => c * 9.0 / 5.0 + 32.0,
        Unite::K => c + 273.15,
        _ => c,
    }
}

/// Convertit `valeur` de `de` vers `vers` (même catégorie obligatoire).
pub fn convertir(valeur: f64, de: Unite, vers: Unite) -> Result<f64, ErreurConversion> {
    if de.categorie() != vers.categorie() {
        return Err(ErreurConversion::CategoriesIncompatibles(de, vers));
    }
    if de == vers {
        return Ok(valeur);
    }

    match (de.facteur(), vers.facteur()) {
        (Some(fd), Some(fv)) => Ok(valeur * fd / fv),
        _ => Ok(depuis_celsius(vers_celsius(valeur, de), vers)),
    }
}
