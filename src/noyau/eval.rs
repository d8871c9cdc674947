//! Noyau : évaluation de l’arbre (flottants IEEE double)
//!
//! Parcours post-ordre itératif (pile explicite) : pas de récursion sur la profondeur
//! de l’arbre, même pour de longues chaînes "1+1+1+...".
//!
//! Règles :
//! - `a / b` avec `b == 0` (0.0 ou -0.0) => `DivisionParZero`, tout le calcul échoue.
//! - Toute valeur non finie produite ailleurs => `Depassement`.
//! - Arrêt au premier échec (pas d’agrégation).

use super::erreurs::ErreurCalcul;
use super::expr::Expr;
use super::jetons::Operateur;

enum Tache<'a> {
    Visite(&'a Expr),
    Neg,
    Applique(Operateur),
}

pub fn evaluer(expr: &Expr) -> Result<f64, ErreurCalcul> {
    let mut taches: Vec<Tache<'_>> = Vec::with_capacity(64);
    let mut valeurs: Vec<f64> = Vec::with_capacity(64);

    taches.push(Tache::Visite(expr));

    while let Some(t) = taches.pop() {
        match t {
            Tache::Visite(Expr::Litteral(v)) => valeurs.push(fini(*v)?),

            Tache::Visite(Expr::Neg(x)) => {
                taches.push(Tache::Neg);
                taches.push(Tache::Visite(x));
            }

            // gauche d’abord : elle est empilée en dernier
            Tache::Visite(Expr::Binaire(op, a, b)) => {
                taches.push(Tache::Applique(*op));
                taches.push(Tache::Visite(b));
                taches.push(Tache::Visite(a));
            }

            Tache::Neg => {
                let x = valeurs.pop().ok_or(ErreurCalcul::Depassement)?;
                valeurs.push(-x);
            }

            Tache::Applique(op) => {
                let b = valeurs.pop().ok_or(ErreurCalcul::Depassement)?;
                let a = valeurs.pop().ok_or(ErreurCalcul::Depassement)?;
                valeurs.push(appliquer(op, a, b)?);
            }
        }
    }

    // Un arbre bien formé laisse exactement une valeur.
    match valeurs.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::Depassement),
    }
}

fn appliquer(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    let r = match op {
        Operateur::Add => a + b,
        Operateur::Sub => a - b,
        Operateur::Mul => a * b,
        Operateur::Div => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
    };
    fini(r)
}

fn fini(v: f64) -> Result<f64, ErreurCalcul> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::Depassement)
    }
}
