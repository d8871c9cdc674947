//! Noyau arithmétique
//!
//! Organisation interne :
//! - saisie.rs   : tampon d’édition (ajout / effacement / vidage)
//! - jetons.rs   : tokenisation (nombres décimaux, opérateurs, parenthèses)
//! - analyse.rs  : montée de précédence -> Expr
//! - expr.rs     : arbre d’expression (f64)
//! - eval.rs     : évaluation post-ordre (division par zéro, dépassement)
//! - erreurs.rs  : taxonomie des échecs
//! - format.rs   : affichage du résultat (chiffres significatifs)
//! - calcul.rs   : pipeline complet + réponse

pub mod analyse;
pub mod calcul;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod saisie;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calcul::{calculer, calculer_avec, demarche, Demarche, Issue, Reponse, Requete, Status};
pub use erreurs::{ErreurCalcul, Etape, Genre};
pub use format::FormatNombre;
pub use saisie::Saisie;
