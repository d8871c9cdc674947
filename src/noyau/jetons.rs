// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreurs::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Add => '+',
            Operateur::Sub => '-',
            Operateur::Mul => '*',
            Operateur::Div => '/',
        }
    }

    fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Add),
            '-' => Some(Operateur::Sub),
            '*' => Some(Operateur::Mul),
            '/' => Some(Operateur::Div),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Valeur exacte du littéral + texte d’origine (affichage fidèle : "5." reste "5.")
    Num { valeur: BigRational, texte: String },

    // `unaire_possible` : seulement un marqueur, c’est l’analyse qui tranche.
    Op {
        op: Operateur,
        unaire_possible: bool,
    },

    LPar,
    RPar,
}

/// Un jeton + son décalage (octets) dans le texte d’origine.
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux : 12, 12.5, 5., .5 (un seul '.' par nombre)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés
///
/// Entrée vide => liste vide (l’analyse décidera).
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out: Vec<Jeton> = Vec::new();
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton { tok: Tok::LPar, pos });
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton { tok: Tok::RPar, pos });
            i += 1;
            continue;
        }

        // Opérateurs
        if let Some(op) = Operateur::depuis_char(c) {
            let unaire_possible = op == Operateur::Sub
                && matches!(
                    out.last(),
                    None | Some(Jeton {
                        tok: Tok::Op { .. } | Tok::LPar,
                        ..
                    })
                );
            out.push(Jeton {
                tok: Tok::Op {
                    op,
                    unaire_possible,
                },
                pos,
            });
            i += 1;
            continue;
        }

        // Nombre : suite maximale de chiffres et de '.'
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0;
            while i < chars.len() && (chars[i].1.is_ascii_digit() || chars[i].1 == '.') {
                if chars[i].1 == '.' {
                    points += 1;
                    // le deuxième '.' est la faute
                    if points == 2 {
                        return Err(ErreurCalcul::NombreMalForme {
                            position: chars[i].0,
                        });
                    }
                }
                i += 1;
            }
            let texte: String = chars[start..i].iter().map(|&(_, c)| c).collect();
            // seul cas restant : "." sans chiffre, à `pos`
            let valeur =
                lire_decimal(&texte).ok_or(ErreurCalcul::NombreMalForme { position: pos })?;

            out.push(Jeton {
                tok: Tok::Num { valeur, texte },
                pos,
            });
            continue;
        }

        return Err(ErreurCalcul::CaractereInconnu {
            caractere: c,
            position: pos,
        });
    }

    Ok(out)
}

/// "12.50" -> 1250/100 (exact). None si plus d’un '.' ou aucun chiffre.
fn lire_decimal(texte: &str) -> Option<BigRational> {
    let mut parties = texte.splitn(3, '.');
    let entier = parties.next().unwrap_or("");
    let frac = parties.next().unwrap_or("");
    if parties.next().is_some() || (entier.is_empty() && frac.is_empty()) {
        return None;
    }

    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;

    let mut d = BigInt::one();
    for _ in 0..frac.len() {
        d *= 10u32;
    }
    Some(BigRational::new(n, d))
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
/// Un moins candidat à l’unaire est affiché `~`.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in tokens {
        let s = match &j.tok {
            Tok::Num { texte, .. } => texte.clone(),
            Tok::Op {
                unaire_possible: true,
                ..
            } => "~".to_string(),
            Tok::Op { op, .. } => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
