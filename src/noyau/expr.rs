// src/noyau/expr.rs
//
// Arbre d’expression (flottants IEEE double).
// - Litteral : valeur du nombre (déjà convertie depuis le littéral exact)
// - Binaire  : opérateur + deux enfants
// - Neg      : moins unaire
//
// L’arbre est immuable une fois construit et appartient au seul appel `calculer`
// qui l’a produit (Box, pas de partage, pas de cycle).
//
// Une chaîne plate "1+1+...+1" donne un arbre aussi profond qu’elle est longue :
// destruction et affichage passent par une pile explicite, jamais par la récursion.

use std::fmt;
use std::mem;

use super::jetons::Operateur;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Litteral(f64),
    Binaire(Operateur, Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
}

impl Expr {
    pub fn binaire(op: Operateur, a: Expr, b: Expr) -> Expr {
        Expr::Binaire(op, Box::new(a), Box::new(b))
    }

    pub fn neg(x: Expr) -> Expr {
        Expr::Neg(Box::new(x))
    }

    /// Déplace les enfants sur `pile` ; le noeud garde des feuilles à leur place.
    fn detacher_enfants(&mut self, pile: &mut Vec<Expr>) {
        match self {
            Expr::Litteral(_) => {}
            Expr::Neg(x) => pile.push(mem::replace(&mut **x, Expr::Litteral(0.0))),
            Expr::Binaire(_, a, b) => {
                pile.push(mem::replace(&mut **a, Expr::Litteral(0.0)));
                pile.push(mem::replace(&mut **b, Expr::Litteral(0.0)));
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pile = Vec::new();
        self.detacher_enfants(&mut pile);
        while let Some(mut e) = pile.pop() {
            e.detacher_enfants(&mut pile);
        }
    }
}

enum Morceau<'a> {
    Noeud(&'a Expr),
    Symbole(char),
}

/// Affichage entièrement parenthésé : montre la précédence retenue par l’analyse.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pile = vec![Morceau::Noeud(self)];

        while let Some(m) = pile.pop() {
            match m {
                Morceau::Symbole(c) => write!(f, "{c}")?,
                Morceau::Noeud(Expr::Litteral(v)) => write!(f, "{v}")?,
                Morceau::Noeud(Expr::Neg(x)) => {
                    pile.push(Morceau::Noeud(x));
                    pile.push(Morceau::Symbole('-'));
                }
                // ordre inverse : la pile rend "(" a op b ")"
                Morceau::Noeud(Expr::Binaire(op, a, b)) => {
                    pile.push(Morceau::Symbole(')'));
                    pile.push(Morceau::Noeud(b));
                    pile.push(Morceau::Symbole(op.symbole()));
                    pile.push(Morceau::Noeud(a));
                    pile.push(Morceau::Symbole('('));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affichage_parenthese() {
        let e = Expr::binaire(
            Operateur::Add,
            Expr::Litteral(2.0),
            Expr::binaire(Operateur::Mul, Expr::Litteral(3.0), Expr::Litteral(4.5)),
        );
        assert_eq!(e.to_string(), "(2+(3*4.5))");
    }

    #[test]
    fn affichage_neg() {
        let e = Expr::neg(Expr::neg(Expr::Litteral(5.0)));
        assert_eq!(e.to_string(), "--5");
    }

    #[test]
    fn arbre_tres_profond_affiche_et_libere() {
        let n = 1_000_000;
        let mut e = Expr::Litteral(5.0);
        for _ in 0..n {
            e = Expr::neg(e);
        }
        let s = e.to_string();
        assert_eq!(s.len(), n + 1);
        assert!(s.ends_with("-5"));
        drop(e);

        let mut e = Expr::Litteral(1.0);
        for _ in 0..n {
            e = Expr::binaire(Operateur::Add, e, Expr::Litteral(1.0));
        }
        assert!(e.to_string().ends_with("+1)+1)"));
    }
}
