//! src/noyau/saisie.rs
//!
//! Tampon de saisie : le texte de l’expression en cours de frappe.
//!
//! Contrats :
//! - Aucune validation ici : tout caractère est accepté, l’évaluation tranchera.
//! - Aucun état caché : le tampon est tout l’état.
//! - Un seul propriétaire (la boucle d’événements UI), pas de verrou.

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Saisie {
    texte: String,
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un caractère (aucun échec possible).
    pub fn ajouter(&mut self, c: char) {
        self.texte.push(c);
        tracing::trace!(caractere = %c, texte = %self.texte, "saisie: ajout");
    }

    /// Retire le dernier caractère ; sans effet sur un tampon vide.
    pub fn effacer_dernier(&mut self) {
        let retire = self.texte.pop();
        tracing::trace!(?retire, texte = %self.texte, "saisie: effacement");
    }

    pub fn vider(&mut self) {
        self.texte.clear();
        tracing::trace!("saisie: vidée");
    }

    /// Évaluation : le texte part dans la requête, le tampon repart vide.
    pub fn prendre(&mut self) -> String {
        tracing::trace!(texte = %self.texte, "saisie: prise pour évaluation");
        std::mem::take(&mut self.texte)
    }

    /// Texte brut, tel quel : c’est l’entrée de `calculer`.
    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn est_vide(&self) -> bool {
        self.texte.is_empty()
    }

    /// Rendu pour l’écran : `*` -> `×`, `/` -> `÷`, `-` -> `−`.
    /// Le texte brut n’est pas touché.
    pub fn affichage(&self) -> String {
        self.texte
            .chars()
            .map(|c| match c {
                '*' => '×',
                '/' => '÷',
                '-' => '−',
                _ => c,
            })
            .collect()
    }

    /// Représentation de diagnostic (journal seulement, jamais relue).
    pub fn debug(&self) -> String {
        format!(
            "Saisie {{ texte: {:?}, caracteres: {} }}",
            self.texte,
            self.texte.chars().count()
        )
    }
}

impl fmt::Display for Saisie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.affichage())
    }
}
