//! src/noyau/erreurs.rs
//!
//! Taxonomie des échecs du noyau.
//!
//! Contrats :
//! - Toute faute détectée pendant `calculer` devient une `ErreurCalcul` (jamais de panique).
//! - `ErreurCalcul` est `Copy` : aucune référence vers les jetons ni vers l’arbre.
//! - Les positions sont des décalages en octets dans le texte d’entrée.

use std::fmt;

use thiserror::Error;

/// Étape du pipeline où l’échec a été détecté.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etape {
    Jetons,
    Analyse,
    Evaluation,
}

impl fmt::Display for Etape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Etape::Jetons => "jetons",
            Etape::Analyse => "analyse",
            Etape::Evaluation => "évaluation",
        };
        f.write_str(s)
    }
}

/// Genre d’échec, sans contexte (utile pour brancher ou tester).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    CaractereInconnu,
    NombreMalForme,
    FinInattendue,
    OperateurInattendu,
    NombreInattendu,
    GroupeNonApparie,
    TropImbrique,
    DivisionParZero,
    Depassement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("caractère inattendu '{caractere}' (position {position})")]
    CaractereInconnu { caractere: char, position: usize },

    #[error("nombre mal formé (position {position})")]
    NombreMalForme { position: usize },

    #[error("fin d’expression inattendue (position {position})")]
    FinInattendue { position: usize },

    #[error("opérateur inattendu '{operateur}' (position {position})")]
    OperateurInattendu { operateur: char, position: usize },

    #[error("opérande inattendu après une valeur (position {position})")]
    NombreInattendu { position: usize },

    #[error("parenthèse non appariée (position {position})")]
    GroupeNonApparie { position: usize },

    #[error("expression trop imbriquée (position {position})")]
    TropImbrique { position: usize },

    #[error("division par zéro")]
    DivisionParZero,

    #[error("dépassement de capacité")]
    Depassement,
}

impl ErreurCalcul {
    pub fn genre(&self) -> Genre {
        match self {
            ErreurCalcul::CaractereInconnu { .. } => Genre::CaractereInconnu,
            ErreurCalcul::NombreMalForme { .. } => Genre::NombreMalForme,
            ErreurCalcul::FinInattendue { .. } => Genre::FinInattendue,
            ErreurCalcul::OperateurInattendu { .. } => Genre::OperateurInattendu,
            ErreurCalcul::NombreInattendu { .. } => Genre::NombreInattendu,
            ErreurCalcul::GroupeNonApparie { .. } => Genre::GroupeNonApparie,
            ErreurCalcul::TropImbrique { .. } => Genre::TropImbrique,
            ErreurCalcul::DivisionParZero => Genre::DivisionParZero,
            ErreurCalcul::Depassement => Genre::Depassement,
        }
    }

    pub fn etape(&self) -> Etape {
        match self.genre() {
            Genre::CaractereInconnu | Genre::NombreMalForme => Etape::Jetons,
            Genre::DivisionParZero | Genre::Depassement => Etape::Evaluation,
            _ => Etape::Analyse,
        }
    }

    /// Position fautive dans le texte, si l’erreur en porte une.
    pub fn position(&self) -> Option<usize> {
        match *self {
            ErreurCalcul::CaractereInconnu { position, .. }
            | ErreurCalcul::NombreMalForme { position }
            | ErreurCalcul::FinInattendue { position }
            | ErreurCalcul::OperateurInattendu { position, .. }
            | ErreurCalcul::NombreInattendu { position }
            | ErreurCalcul::GroupeNonApparie { position }
            | ErreurCalcul::TropImbrique { position } => Some(position),
            ErreurCalcul::DivisionParZero | ErreurCalcul::Depassement => None,
        }
    }

    /// Message complet pour l’UI : "étape : description".
    pub fn message(&self) -> String {
        format!("{} : {}", self.etape(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etapes_par_genre() {
        let e = ErreurCalcul::CaractereInconnu {
            caractere: 'x',
            position: 3,
        };
        assert_eq!(e.etape(), Etape::Jetons);
        assert_eq!(e.position(), Some(3));

        assert_eq!(
            ErreurCalcul::FinInattendue { position: 0 }.etape(),
            Etape::Analyse
        );
        assert_eq!(ErreurCalcul::DivisionParZero.etape(), Etape::Evaluation);
        assert_eq!(ErreurCalcul::Depassement.position(), None);
    }

    #[test]
    fn message_nomme_etape_et_position() {
        let e = ErreurCalcul::OperateurInattendu {
            operateur: '+',
            position: 2,
        };
        assert_eq!(e.message(), "analyse : opérateur inattendu '+' (position 2)");
        assert_eq!(
            ErreurCalcul::DivisionParZero.message(),
            "évaluation : division par zéro"
        );
    }
}
