// src/noyau/analyse.rs
//
// Jetons -> Expr (montée de précédence)
//
// Grammaire:
//   expression := terme (("+" | "-") terme)*
//   terme      := unaire (("*" | "/") unaire)*
//   unaire     := "-" unaire | primaire
//   primaire   := Nombre | "(" expression ")"
//
// Règles:
// - Associativité à gauche pour + - * / (on remonte avec prec+1).
// - '+' n’a pas de forme unaire : "5++3" est refusé, "5+-3" vaut 2.
// - Pas de multiplication implicite : "2(3)" et "5 3" sont refusés.
// - Profondeur bornée (parenthèses + moins unaires enchaînés) : la récursion reste bornée.

use num_traits::ToPrimitive;

use super::erreurs::ErreurCalcul;
use super::expr::Expr;
use super::jetons::{Jeton, Operateur, Tok};

/// Garde-fou : imbrication maximale (parenthèses + moins unaires).
pub const PROFONDEUR_MAX: usize = 256;

fn precedence(op: Operateur) -> u8 {
    match op {
        Operateur::Add | Operateur::Sub => 1,
        Operateur::Mul | Operateur::Div => 2,
    }
}

/// Construit l’arbre à partir des jetons.
///
/// Entrée vide => `FinInattendue { position: 0 }`.
pub fn analyser(jetons: &[Jeton]) -> Result<Expr, ErreurCalcul> {
    let mut a = Analyseur {
        jetons,
        i: 0,
        profondeur: 0,
    };

    let e = a.expression(1)?;

    // Seule une ')' peut rester ici : la boucle refuse déjà nombres et '('.
    if let Some(j) = a.courant() {
        return Err(ErreurCalcul::GroupeNonApparie { position: j.pos });
    }

    Ok(e)
}

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    i: usize,
    profondeur: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&'a Jeton> {
        self.jetons.get(self.i)
    }

    /// Position juste après le dernier jeton (0 si aucun).
    fn fin(&self) -> usize {
        match self.jetons.last() {
            Some(Jeton {
                tok: Tok::Num { texte, .. },
                pos,
            }) => pos + texte.len(),
            Some(j) => j.pos + 1,
            None => 0,
        }
    }

    fn entrer(&mut self, pos: usize) -> Result<(), ErreurCalcul> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurCalcul::TropImbrique { position: pos });
        }
        Ok(())
    }

    fn sortir(&mut self) {
        self.profondeur -= 1;
    }

    /// Montée de précédence : consomme les opérateurs de précédence >= `prec_min`.
    fn expression(&mut self, prec_min: u8) -> Result<Expr, ErreurCalcul> {
        let mut gauche = self.unaire()?;

        while let Some(j) = self.courant() {
            match &j.tok {
                Tok::Op { op, .. } => {
                    let p = precedence(*op);
                    if p < prec_min {
                        break;
                    }
                    self.i += 1;
                    let droite = self.expression(p + 1)?;
                    gauche = Expr::binaire(*op, gauche, droite);
                }

                // fin de groupe : c’est l’appelant qui vérifie l’appariement
                Tok::RPar => break,

                // valeur collée à une valeur
                Tok::Num { .. } | Tok::LPar => {
                    return Err(ErreurCalcul::NombreInattendu { position: j.pos });
                }
            }
        }

        Ok(gauche)
    }

    fn unaire(&mut self) -> Result<Expr, ErreurCalcul> {
        let j = match self.courant() {
            Some(j) => j,
            None => {
                return Err(ErreurCalcul::FinInattendue {
                    position: self.fin(),
                })
            }
        };

        match &j.tok {
            // moins que les jetons ont marqué comme candidat à l’unaire
            Tok::Op {
                op: Operateur::Sub,
                unaire_possible: true,
            } => {
                self.i += 1;
                self.entrer(j.pos)?;
                let x = self.unaire()?;
                self.sortir();
                Ok(Expr::neg(x))
            }

            Tok::Op { op, .. } => Err(ErreurCalcul::OperateurInattendu {
                operateur: op.symbole(),
                position: j.pos,
            }),

            Tok::Num { valeur, .. } => {
                self.i += 1;
                // hors de portée f64 => infini ; l’évaluation le signalera (dépassement)
                let v = valeur.to_f64().unwrap_or(f64::INFINITY);
                Ok(Expr::Litteral(v))
            }

            Tok::LPar => {
                self.i += 1;
                self.entrer(j.pos)?;
                let e = self.expression(1)?;
                match self.courant() {
                    Some(Jeton { tok: Tok::RPar, .. }) => self.i += 1,
                    _ => return Err(ErreurCalcul::GroupeNonApparie { position: j.pos }),
                }
                self.sortir();
                Ok(e)
            }

            // "()" ou "(5+)" : le groupe se ferme alors qu’on attend une valeur
            Tok::RPar => Err(ErreurCalcul::FinInattendue { position: j.pos }),
        }
    }
}
