// src/noyau/format.rs
//
// Affichage d’un résultat f64 pour le message de réponse.
//
// Politique (configurable via FormatNombre) :
// - entier |v| < 1e15      : sans point décimal ("14", "-3") ; -0 => "0"
// - sinon                   : arrondi à N chiffres significatifs (demi => loin de zéro),
//                             zéros finaux supprimés
// - exposant décimal hors [-7, 15) : notation scientifique "1.5e20", "2e-9"
//
// L’arrondi se fait sur la valeur EXACTE du flottant (BigRational::from_float),
// pas sur une représentation texte intermédiaire.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

/// Chiffres significatifs par défaut.
pub const CHIFFRES_DEFAUT: usize = 10;

/// Garde-fou : au-delà, f64 n’a plus rien à dire.
pub const CHIFFRES_MAX: usize = 17;

/// Seuil : au-delà, un entier passe en notation scientifique.
const ENTIER_MAX: f64 = 1e15;

const EXPOSANT_MIN_POSITIONNEL: i64 = -7;
const EXPOSANT_MAX_POSITIONNEL: i64 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatNombre {
    chiffres_significatifs: usize,
}

impl Default for FormatNombre {
    fn default() -> Self {
        Self {
            chiffres_significatifs: CHIFFRES_DEFAUT,
        }
    }
}

impl FormatNombre {
    /// Borne `chiffres` dans 1..=CHIFFRES_MAX.
    pub fn new(chiffres: usize) -> Self {
        Self {
            chiffres_significatifs: chiffres.clamp(1, CHIFFRES_MAX),
        }
    }

    pub fn chiffres_significatifs(&self) -> usize {
        self.chiffres_significatifs
    }
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

fn sans_zeros_finaux(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Rend `v` selon la politique `fmt`.
pub fn formater_nombre(v: f64, fmt: &FormatNombre) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        return format!("{v}");
    }
    if v.fract() == 0.0 && v.abs() < ENTIER_MAX {
        return format!("{}", v as i64);
    }

    let r = match BigRational::from_float(v) {
        Some(r) => r,
        None => return format!("{v}"),
    };

    let n = fmt.chiffres_significatifs() as i64;
    let exp10 = v.abs().log10().floor() as i64;

    // k = décalage décimal : v * 10^k a `n` chiffres avant la virgule
    let k = n - 1 - exp10;
    let mis_a_l_echelle = if k >= 0 {
        r * BigRational::from_integer(pow10(k as usize))
    } else {
        r / BigRational::from_integer(pow10((-k) as usize))
    };
    let scaled = mis_a_l_echelle.round().to_integer();

    // l’arrondi peut ajouter un chiffre (9.99.. -> 10.0) : on recalcule l’exposant réel
    let chiffres = scaled.abs().to_str_radix(10);
    let exposant = chiffres.len() as i64 - 1 - k;

    if (EXPOSANT_MIN_POSITIONNEL..EXPOSANT_MAX_POSITIONNEL).contains(&exposant) {
        if k >= 0 {
            sans_zeros_finaux(scaled_to_decimal(scaled, k as usize))
        } else {
            (scaled * pow10((-k) as usize)).to_string()
        }
    } else {
        let signe = if scaled.is_negative() { "-" } else { "" };
        let mantisse = sans_zeros_finaux(format!("{}.{}", &chiffres[..1], &chiffres[1..]));
        format!("{signe}{mantisse}e{exposant}")
    }
}
