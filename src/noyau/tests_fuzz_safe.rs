//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - tout échec doit appartenir à la taxonomie et porter un message
//! - invariant clé : FAILED => pas de résultat exploitable (NaN)

use std::time::{Duration, Instant};

use super::calcul::{calculer, Requete, Status};
use super::erreurs::Genre;
use super::saisie::Saisie;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // inclut 0 (utile pour provoquer des divisions par zéro)
    let e = rng.pick(20);
    if rng.coin() {
        format!("{e}.{}", rng.pick(100))
    } else {
        format!("{e}")
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(6) {
        0 => gen_nombre(rng),
        1 => format!("-{}", gen_expr(rng, depth - 1)),
        2 => format!("({})", gen_expr(rng, depth - 1)),
        _ => format!(
            "{}{}{}",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
    }
}

/// Texte “tapé au hasard” : alphabet des boutons + quelques intrus.
fn gen_frappe(rng: &mut Rng, n: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '(', ')', ' ',
        '=', 'x',
    ];
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);
        let r = calculer(Requete::new(expr.clone()));

        match r.status() {
            Status::SUCCESS => {
                assert!(r.resultat().is_finite(), "expr={expr:?}");
                seen_ok += 1;
            }
            Status::FAILED => {
                // expressions bien formées : seule l’évaluation peut échouer
                let e = r.erreur().unwrap_or_else(|| panic!("expr={expr:?}"));
                assert!(
                    matches!(e.genre(), Genre::DivisionParZero | Genre::Depassement),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                assert!(r.resultat().is_nan());
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_frappe_au_hasard_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let n = rng.pick(24) as usize;
        let texte = gen_frappe(&mut rng, n);

        // même texte => même réponse
        let r1 = calculer(Requete::new(texte.clone()));
        let r2 = calculer(Requete::new(texte.clone()));
        assert_eq!(r1.status(), r2.status(), "texte={texte:?}");
        assert_eq!(r1.message(), r2.message(), "texte={texte:?}");
        assert!(!r1.message().is_empty(), "texte={texte:?}");

        if let Some(e) = r1.erreur() {
            if let Some(p) = e.position() {
                assert!(p <= texte.len(), "position hors texte: {texte:?} {e}");
            }
        }
    }
}

#[test]
fn fuzz_safe_saisie_suit_les_evenements() {
    let mut rng = Rng::new(0x5A151E_u64);
    let mut saisie = Saisie::new();
    let mut miroir = String::new();

    for _ in 0..2_000 {
        match rng.pick(10) {
            0 => {
                saisie.effacer_dernier();
                miroir.pop();
            }
            1 if rng.pick(10) == 0 => {
                saisie.vider();
                miroir.clear();
            }
            _ => {
                let c = gen_frappe(&mut rng, 1).chars().next().unwrap_or('0');
                saisie.ajouter(c);
                miroir.push(c);
            }
        }
        assert_eq!(saisie.texte(), miroir);
    }
}

#[test]
fn fuzz_safe_somme_balancee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    let r = calculer(Requete::new(expr));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(r.status(), Status::SUCCESS);
    assert_eq!(r.message(), "400");
}

#[test]
fn fuzz_safe_longue_chaine_plate() {
    let expr = vec!["1"; 3_000].join("+");
    let r = calculer(Requete::new(expr));
    assert_eq!(r.resultat(), 3_000.0);
}
