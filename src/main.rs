// src/main.rs
//
// Calculatrice : point d’entrée NATIF
// -----------------------------------
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB   (wasm32)              : voir src/web.rs (`demarrer` sur un <canvas>)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

use calculatrice_arith::app::AppCalc;
use calculatrice_arith::{activer_journal, TITRE_APP};

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // `CALC_JOURNAL=1` : trace du noyau sur stderr (filtre via RUST_LOG)
    if std::env::var_os("CALC_JOURNAL").is_some() {
        activer_journal();
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([420.0, 620.0])
            .with_min_inner_size([360.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `web::demarrer` (wasm_bindgen).
}
