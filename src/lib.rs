//! Calculatrice arithmétique
//!
//! - noyau   : saisie + jetons -> analyse -> évaluation -> réponse
//! - app     : UI egui (natif + web)
//! - journal : interrupteur du journal de diagnostic
//! - web     : liaison JS (wasm32 seulement)

pub mod app;
pub mod journal;
pub mod noyau;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use journal::activer_journal;
pub use noyau::{calculer, Reponse, Requete, Saisie, Status};

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice";
