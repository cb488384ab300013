//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions générées avec leur valeur attendue (calculée à part)
//! - invariant clé : aucune division => résultat Entier

use std::time::{Duration, Instant};

use super::{evaluer, ErreurCalcul, Nombre};

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

/* ------------------------ Génération (texte + valeur attendue) ------------------------ */

/// Expression générée + valeur attendue (Err si une division par zéro doit arriver).
struct Cas {
    texte: String,
    attendu: Result<Nombre, ErreurCalcul>,
    a_division: bool,
}

fn gen_atome(rng: &mut Rng) -> Cas {
    // 0 inclus : les divisions par zéro doivent arriver via "/ expr"
    let n = rng.pick(13);
    let texte = if rng.coin() {
        format!("{n}")
    } else {
        format!("({n})")
    };
    Cas {
        texte,
        attendu: Ok(Nombre::entier(n)),
        a_division: false,
    }
}

fn combine(op: char, a: Cas, b: Cas) -> Cas {
    let espace = if a.texte.len() % 2 == 0 { " " } else { "" };
    let texte = format!("({}{espace}{op}{espace}{})", a.texte, b.texte);
    let a_division = a.a_division || b.a_division || op == '/';

    let attendu = match op {
        // diviseur évalué d'abord : son erreur l'emporte
        '/' => match (a.attendu, b.attendu) {
            (_, Err(e)) => Err(e),
            (Err(e), Ok(_)) => Err(e),
            (Ok(x), Ok(y)) => x.diviser(y),
        },
        _ => match (a.attendu, b.attendu) {
            (Err(e), _) => Err(e),
            (Ok(_), Err(e)) => Err(e),
            (Ok(x), Ok(y)) => Ok(match op {
                '+' => x + y,
                '-' => x - y,
                _ => x * y,
            }),
        },
    };

    Cas {
        texte,
        attendu,
        a_division,
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Cas {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(6) {
        0 => gen_atome(rng),
        k => {
            let op = match k {
                1 | 2 => '+',
                3 => '-',
                4 => '*',
                _ => '/',
            };
            let a = gen_expr(rng, depth - 1);
            let b = gen_expr(rng, depth - 1);
            combine(op, a, b)
        }
    }
}

/* ------------------------ Chaîne plate (sans parenthèses) ------------------------ */

/// "a-b-c-..." : la valeur attendue se calcule par pliage gauche.
fn chaine_soustractions(rng: &mut Rng, n: usize) -> (String, i64) {
    let mut termes = Vec::with_capacity(n);
    for _ in 0..n {
        termes.push(i64::from(rng.pick(50)));
    }
    let texte = termes
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("-");
    let attendu = termes[1..].iter().fold(termes[0], |acc, t| acc - t);
    (texte, attendu)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let cas = gen_expr(&mut rng, 5);
        let obtenu = evaluer(&cas.texte);
        assert_eq!(obtenu, cas.attendu, "expr={:?}", cas.texte);

        match obtenu {
            Ok(n) => {
                if !cas.a_division {
                    assert!(
                        matches!(n, Nombre::Entier(_)),
                        "sans division => Entier: {:?}",
                        cas.texte
                    );
                }
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..50 {
        let a = gen_expr(&mut r1, 4);
        let b = gen_expr(&mut r2, 4);
        assert_eq!(a.texte, b.texte);
        assert_eq!(evaluer(&a.texte), evaluer(&b.texte));
    }
}

#[test]
fn fuzz_safe_soustractions_associativite_gauche() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        budget(t0, max);

        let n = 2 + rng.pick(30) as usize;
        let (texte, attendu) = chaine_soustractions(&mut rng, n);
        assert_eq!(evaluer(&texte), Ok(Nombre::entier(attendu)), "expr={texte:?}");
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // alphabet volontairement sale : tout doit finir en Ok ou en erreur typée
    let alphabet: Vec<char> = "0123456789+-*/() x.".chars().collect();
    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..500 {
        budget(t0, max);

        let len = rng.pick(16) as usize;
        let s: String = (0..len)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // pas de panique, et même réponse deux fois
        assert_eq!(evaluer(&s), evaluer(&s), "s={s:?}");
    }
}
