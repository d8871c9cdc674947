//! Noyau : façade de calcul (pipeline complet)
//!
//! tokenize -> analyser -> evaluer -> Reponse
//!
//! - La requête est consommée (déplacée) par `calculer` : pas de réutilisation possible.
//! - Arrêt à la première étape en échec, jamais de résultat partiel.
//! - Fonction pure : même texte => même réponse.

use std::fmt;

use super::analyse::analyser;
use super::erreurs::ErreurCalcul;
use super::eval::evaluer;
use super::format::{formater_nombre, FormatNombre};
use super::jetons::{format_tokens, tokenize};

/// Statut binaire exposé aux appelants. Les ordinaux sont stables (0 / 1).
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    SUCCESS = 0,
    FAILED = 1,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::SUCCESS => f.write_str("SUCCESS"),
            Status::FAILED => f.write_str("FAILED"),
        }
    }
}

/// Issue d’une évaluation : détachée des jetons et de l’arbre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Issue {
    Succes(f64),
    Echec(ErreurCalcul),
}

impl Issue {
    pub fn status(&self) -> Status {
        match self {
            Issue::Succes(_) => Status::SUCCESS,
            Issue::Echec(_) => Status::FAILED,
        }
    }
}

#[derive(Debug)]
pub struct Requete {
    expression: String,
}

impl Requete {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reponse {
    issue: Issue,
    message: String,
}

impl Reponse {
    pub fn status(&self) -> Status {
        self.issue.status()
    }

    /// Valeur si SUCCESS ; NaN sinon (vérifier `status()` d’abord).
    pub fn resultat(&self) -> f64 {
        match self.issue {
            Issue::Succes(v) => v,
            Issue::Echec(_) => f64::NAN,
        }
    }

    /// Valeur formatée si SUCCESS ; "étape : description" sinon.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn issue(&self) -> Issue {
        self.issue
    }

    pub fn erreur(&self) -> Option<ErreurCalcul> {
        match self.issue {
            Issue::Succes(_) => None,
            Issue::Echec(e) => Some(e),
        }
    }
}

impl fmt::Display for Reponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.status(), self.message)
    }
}

/// API publique : évalue la requête avec la politique d’affichage par défaut.
pub fn calculer(requete: Requete) -> Reponse {
    calculer_avec(requete, &FormatNombre::default())
}

pub fn calculer_avec(requete: Requete, format: &FormatNombre) -> Reponse {
    tracing::debug!(?requete, "calcul: requête");

    match evaluer_texte(&requete.expression) {
        Ok(v) => {
            let message = formater_nombre(v, format);
            tracing::debug!(resultat = v, %message, "calcul: succès");
            Reponse {
                issue: Issue::Succes(v),
                message,
            }
        }
        Err(e) => {
            let message = e.message();
            tracing::warn!(genre = ?e.genre(), %message, "calcul: échec");
            Reponse {
                issue: Issue::Echec(e),
                message,
            }
        }
    }
}

fn evaluer_texte(texte: &str) -> Result<f64, ErreurCalcul> {
    let jetons = tokenize(texte)?;
    let arbre = analyser(&jetons)?;
    evaluer(&arbre)
}

/// Démarche (panneau d’explication) : jetons + arbre parenthésé.
/// Chaque champ contient soit le rendu, soit le message d’échec de son étape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
}

pub fn demarche(texte: &str) -> Demarche {
    let jetons = match tokenize(texte) {
        Ok(j) => j,
        Err(e) => {
            return Demarche {
                jetons: e.message(),
                arbre: String::new(),
            }
        }
    };

    let arbre = match analyser(&jetons) {
        Ok(a) => a.to_string(),
        Err(e) => e.message(),
    };

    Demarche {
        jetons: format_tokens(&jetons),
        arbre,
    }
}
