//! Journal de diagnostic (interrupteur).
//!
//! Purement observationnel : activer ou non le journal ne change aucun résultat.
//! - natif : tracing-subscriber (fmt + EnvFilter, `RUST_LOG` prioritaire)
//! - web   : tracing-wasm (console du navigateur)
//!
//! Appels répétés sans effet : un seul abonné global est installé.

use std::sync::OnceLock;

/// Filtre par défaut quand `RUST_LOG` est absent.
#[cfg(not(target_arch = "wasm32"))]
const FILTRE_DEFAUT: &str = "calculatrice_arith=debug";

static ACTIF: OnceLock<()> = OnceLock::new();

pub fn activer_journal() {
    ACTIF.get_or_init(installer);
}

pub fn journal_actif() -> bool {
    ACTIF.get().is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn installer() {
    use tracing_subscriber::EnvFilter;

    let filtre =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT));

    // try_init : un autre abonné global (tests, binaire hôte) n’est pas une faute.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .try_init()
    {
        tracing::debug!(%e, "journal: abonné global déjà installé");
    }
}

#[cfg(target_arch = "wasm32")]
fn installer() {
    tracing_wasm::set_as_global_default();
}
