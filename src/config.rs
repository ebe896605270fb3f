//! Configuration optionnelle (config.toml).
//!
//! Emplacement (natif) : `<config_dir>/calculatrice/config.toml`.
//! Fichier absent => défauts. Fichier invalide => avertissement + défauts.
//!
//! ```toml
//! decimales = 10
//! mode_sombre = true
//! mode_scientifique = false
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::{DECIMALES_DEFAUT, DECIMALES_MAX};

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de la configuration: {0}")]
    Lecture(#[from] std::io::Error),

    #[error("configuration invalide: {0}")]
    Format(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Chiffres après le point à l'affichage (borné à DECIMALES_MAX).
    pub decimales: usize,
    /// None => suit le thème du système.
    pub mode_sombre: Option<bool>,
    pub mode_scientifique: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            mode_sombre: None,
            mode_scientifique: false,
        }
    }
}

impl Config {
    pub fn depuis_toml(txt: &str) -> Result<Self, ErreurConfig> {
        let mut cfg: Config = toml::from_str(txt)?;
        cfg.decimales = cfg.decimales.min(DECIMALES_MAX);
        Ok(cfg)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|d| d.join("calculatrice").join("config.toml"))
    }

    /// Charge la configuration (natif). N'échoue jamais : repli sur les défauts.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger() -> Self {
        let Some(chemin) = Self::chemin() else {
            tracing::debug!("pas de dossier de configuration, défauts utilisés");
            return Self::default();
        };

        if !chemin.exists() {
            tracing::debug!(chemin = %chemin.display(), "config.toml absent, défauts utilisés");
            return Self::default();
        }

        let res = std::fs::read_to_string(&chemin)
            .map_err(ErreurConfig::from)
            .and_then(|txt| Self::depuis_toml(&txt));

        match res {
            Ok(cfg) => {
                tracing::info!(chemin = %chemin.display(), "configuration chargée");
                cfg
            }
            Err(e) => {
                tracing::warn!(chemin = %chemin.display(), erreur = %e, "configuration ignorée");
                Self::default()
            }
        }
    }

    /// Web : pas de système de fichiers, défauts.
    #[cfg(target_arch = "wasm32")]
    pub fn charger() -> Self {
        Self::default()
    }
}
