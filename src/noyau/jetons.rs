// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreur::{ErreurCalcul, Malformation};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(BigInt),

    Plus,
    Moins,
    Fois,
    Divise,

    ParG,
    ParD,
}

/// Jeton + position (index de caractère dans le texte d’origine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

impl Tok {
    pub fn est_additif(&self) -> bool {
        matches!(self, Tok::Plus | Tok::Moins)
    }

    pub fn est_multiplicatif(&self) -> bool {
        matches!(self, Tok::Fois | Tok::Divise)
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12), longueur quelconque
/// - opérateurs binaires + - * /
/// - parenthèses ( )
///
/// Les espaces séparent les jetons et sont ignorés : "1 2" donne deux nombres
/// (refusés plus tard par l’évaluation), jamais "12".
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::ParG),
            ')' => Some(Tok::ParD),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Moins),
            '*' => Some(Tok::Fois),
            '/' => Some(Tok::Divise),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(Jeton { tok, pos: i });
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let int_str: String = chars[start..i].iter().collect();
            // que des chiffres ASCII : le parse ne peut pas échouer
            let n = BigInt::parse_bytes(int_str.as_bytes(), 10).unwrap_or_default();
            out.push(Jeton {
                tok: Tok::Num(n),
                pos: start,
            });
            continue;
        }

        return Err(Malformation::CaractereInattendu {
            caractere: c,
            position: i,
        }
        .into());
    }

    Ok(out)
}
