//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir l’état de la calculatrice (saisie, résultat, erreur, démarche, format)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de jetons, pas d’analyse).
//! - Une seule Saisie par session UI ; toute édition passe par ses opérations.
//! - Garde-fou : chiffres significatifs bornés (FormatNombre).

use crate::noyau::format::CHIFFRES_DEFAUT;
use crate::noyau::{Demarche, FormatNombre, Saisie};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub saisie: Saisie,

    // --- sorties ---
    pub expression: String,   // dernière expression évaluée (affichage)
    pub resultat: String,     // valeur formatée
    pub erreur: String,       // message d’erreur (si le calcul échoue)
    pub resultat_dispo: bool, // false si échec / rien évalué

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub format: FormatNombre,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            saisie: Saisie::new(),
            expression: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            resultat_dispo: false, // au démarrage : rien à lire
            demarche: Demarche::default(),
            format: FormatNombre::default(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (saisie + résultats + format par défaut).
    pub fn reset_total(&mut self) {
        self.saisie.vider();
        self.clear_resultats();
        self.format = FormatNombre::new(CHIFFRES_DEFAUT);
    }

    /// C : effacer seulement la saisie (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.saisie.vider();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à la saisie).
    pub fn clear_resultats(&mut self) {
        self.expression.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.demarche = Demarche::default();
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : la démarche est conservée (elle montre où l’analyse s’est arrêtée).
    pub fn set_erreur(&mut self, expression: String, msg: impl Into<String>, demarche: Demarche) {
        self.expression = expression;
        self.erreur = msg.into();
        self.resultat.clear();
        self.resultat_dispo = false;
        self.demarche = demarche;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultat(&mut self, expression: String, resultat: String, demarche: Demarche) {
        self.expression = expression;
        self.erreur.clear();
        self.resultat = resultat;
        self.resultat_dispo = true;
        self.demarche = demarche;
    }

    /// Garde-fou : chiffres significatifs bornés par FormatNombre.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.format = FormatNombre::new(chiffres);
    }
}
