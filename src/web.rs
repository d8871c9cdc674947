// src/web.rs
//
// Liaison JS (wasm32 seulement)
// -----------------------------
// Deux façons d’utiliser le module depuis une page :
// - UI complète : `demarrer("the_canvas_id")` lance l’app egui sur un <canvas>
// - Boutons DOM : ExpressionBuilder / ArithmeticRequest / calculate / ArithmeticResponse
//
// Ici, seulement des enveloppes minces : toute la logique vit dans `noyau`.
// Les valeurs passent directement (pas de tas de poignées maison).

#![allow(clippy::inherent_to_string)]

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlCanvasElement};

use crate::app::AppCalc;
use crate::noyau::{calculer, Reponse, Requete, Saisie, Status};
use crate::TITRE_APP;

/// Au chargement du module : paniques lisibles dans la console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn enable_logging() {
    crate::journal::activer_journal();
}

/* ------------------------ UI egui sur <canvas> ------------------------ */

/// Récupère le <canvas id=...> et démarre eframe WebRunner dessus.
#[wasm_bindgen]
pub async fn demarrer(canvas_id: String) -> Result<(), JsValue> {
    let w = window().ok_or_else(|| js_err("window() indisponible"))?;
    let d = w
        .document()
        .ok_or_else(|| js_err("document() indisponible"))?;

    d.set_title(TITRE_APP);

    let el = d
        .get_element_by_id(&canvas_id)
        .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

    let canvas: HtmlCanvasElement = el
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        )
        .await
}

fn js_err(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}

/* ------------------------ Statut ------------------------ */

/// Mêmes ordinaux que `noyau::Status` (SUCCESS=0, FAILED=1).
#[allow(clippy::upper_case_acronyms)]
#[wasm_bindgen(js_name = Status)]
#[derive(Clone, Copy, Debug)]
pub enum StatutJs {
    SUCCESS = 0,
    FAILED = 1,
}

impl From<Status> for StatutJs {
    fn from(s: Status) -> Self {
        match s {
            Status::SUCCESS => StatutJs::SUCCESS,
            Status::FAILED => StatutJs::FAILED,
        }
    }
}

/* ------------------------ Saisie ------------------------ */

#[wasm_bindgen(js_name = ExpressionBuilder)]
#[derive(Default)]
pub struct SaisieJs {
    inner: Saisie,
}

#[wasm_bindgen(js_class = ExpressionBuilder)]
impl SaisieJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, c: char) {
        self.inner.ajouter(c);
    }

    pub fn delete(&mut self) {
        self.inner.effacer_dernier();
    }

    pub fn clear(&mut self) {
        self.inner.vider();
    }

    /// Texte brut (entrée de `calculate`).
    pub fn collect(&self) -> String {
        self.inner.texte().to_string()
    }

    /// Rendu écran (×, ÷, −).
    pub fn to_string(&self) -> String {
        self.inner.affichage()
    }

    pub fn debug(&self) -> String {
        self.inner.debug()
    }
}

/* ------------------------ Requête / réponse ------------------------ */

#[wasm_bindgen(js_name = ArithmeticRequest)]
pub struct RequeteJs {
    inner: Requete,
}

#[wasm_bindgen(js_class = ArithmeticRequest)]
impl RequeteJs {
    #[wasm_bindgen(constructor)]
    pub fn new(expression: String) -> Self {
        Self {
            inner: Requete::new(expression),
        }
    }
}

#[wasm_bindgen(js_name = ArithmeticResponse)]
pub struct ReponseJs {
    inner: Reponse,
}

#[wasm_bindgen(js_class = ArithmeticResponse)]
impl ReponseJs {
    pub fn result(&self) -> f64 {
        self.inner.resultat()
    }

    pub fn message(&self) -> String {
        self.inner.message().to_string()
    }

    pub fn status(&self) -> StatutJs {
        self.inner.status().into()
    }

    pub fn to_string(&self) -> String {
        self.inner.to_string()
    }
}

/// La requête est consommée : côté JS, l’objet n’est plus utilisable après l’appel.
#[wasm_bindgen]
pub fn calculate(request: RequeteJs) -> ReponseJs {
    ReponseJs {
        inner: calculer(request.inner),
    }
}
