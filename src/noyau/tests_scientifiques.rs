//! Tests scientifiques (campagne) : propriétés du noyau validation + évaluation.
//!
//! - chiffres seuls => valeur entière, toujours valides
//! - précédence, associativité gauche, vraie division
//! - bornes : entrée vide, opérateur seul, parenthèses seules
//! - idempotence : même entrée => même sortie
//!
//! Budget temps global sur les boucles, tailles bornées.

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::{est_valide, evaluer, ErreurCalcul, Malformation, Nombre};

fn eval_ok(expr: &str) -> Nombre {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_entier(expr: &str, attendu: i64) {
    assert_eq!(eval_ok(expr), Nombre::entier(attendu), "expr={expr:?}");
}

fn assert_reel(expr: &str, p: i64, q: i64) {
    assert_eq!(eval_ok(expr), Nombre::reel(p, q), "expr={expr:?}");
}

fn assert_malforme(expr: &str) {
    match evaluer(expr) {
        Err(ErreurCalcul::JetonMalforme(_)) => {}
        autre => panic!("expr={expr:?} : attendu JetonMalforme, obtenu {autre:?}"),
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Chiffres seuls ------------------------ */

#[test]
fn sci_chiffres_seuls() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    for n in (0u64..2_000).chain([u64::MAX - 1, u64::MAX]) {
        budget(t0, max);
        let s = n.to_string();
        assert!(est_valide(&s), "s={s:?}");
        assert_eq!(eval_ok(&s), Nombre::entier(n), "s={s:?}");
    }
}

#[test]
fn sci_chiffres_seuls_longs_et_zeros_en_tete() {
    assert_entier("007", 7);
    assert_entier("0000", 0);

    let long = "9".repeat(120);
    let attendu = BigInt::parse_bytes(long.as_bytes(), 10).unwrap();
    assert_eq!(eval_ok(&long), Nombre::Entier(attendu));
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn sci_exemples_reference() {
    assert_entier("2+3", 5);
    assert_entier("2+3*4", 14);
    assert_entier("(2+3)*4", 20);
    assert_reel("10/2", 5, 1);
    assert_eq!(evaluer("10/0"), Err(ErreurCalcul::DivisionParZero));
    assert_entier("5-2-1", 2);
}

#[test]
fn sci_associativite_gauche() {
    assert_entier("100-10-1", 89);
    assert_entier("1-1-1-1", -2);
    assert_entier("9-3+2-1", 7);
    assert_reel("20/4/5", 1, 1);
    assert_reel("64/2/2/2", 8, 1);
    assert_reel("1/2/2", 1, 4);
    assert_reel("6/3*2", 4, 1);
}

#[test]
fn sci_melange_entier_reel() {
    // 1/2 + 1/3 = 5/6
    assert_reel("1/2+1/3", 5, 6);
    // la division promeut même si le reste de l'expression est entier
    assert_reel("1+4/2", 3, 1);
    assert_reel("3*(1/3)", 1, 1);
    // aucune division => entier exact
    assert!(matches!(eval_ok("12*12-44+(3*3)"), Nombre::Entier(_)));
}

#[test]
fn sci_grands_entiers_sans_debordement() {
    // (2^64)^2 via multiplication, hors de tout type machine
    let p = "18446744073709551616";
    let expr = format!("{p}*{p}");
    let attendu = BigInt::parse_bytes(p.as_bytes(), 10).unwrap().pow(2u32);
    assert_eq!(eval_ok(&expr), Nombre::Entier(attendu));
}

/* ------------------------ Validité ------------------------ */

#[test]
fn sci_validite_imbrications_generees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // toutes les chaînes équilibrées bien imbriquées de longueur <= 10 sont valides,
    // leur miroir (')' avant '(') ne l'est jamais
    let mut niveau: Vec<String> = vec![String::new()];
    for _ in 0..5 {
        budget(t0, max);
        let mut suivant = Vec::new();
        for s in &niveau {
            suivant.push(format!("({s})"));
            suivant.push(format!("(){s}"));
            suivant.push(format!("{s}()"));
        }
        for s in &suivant {
            assert!(est_valide(s), "s={s:?}");
            let miroir: String = s
                .chars()
                .map(|c| if c == '(' { ')' } else { '(' })
                .collect();
            assert!(!est_valide(&miroir), "miroir={miroir:?}");
        }
        niveau = suivant;
    }
}

#[test]
fn sci_validite_comptes_inegaux() {
    for s in ["(", "((", "(()", "())", "1+(2", "(1+2))", ")1("] {
        assert!(!est_valide(s), "s={s:?}");
        assert_eq!(evaluer(s), Err(ErreurCalcul::ExpressionInvalide), "s={s:?}");
    }
}

/* ------------------------ Bornes ------------------------ */

#[test]
fn sci_bornes_erreurs_definies() {
    assert_eq!(evaluer(""), Err(ErreurCalcul::JetonMalforme(Malformation::Vide)));
    for op in ["+", "-", "*", "/"] {
        assert_malforme(op);
    }
    for s in ["()", "(())", "((()))", "()()"] {
        assert_malforme(s);
    }
    for s in ["2++3", "2**3", "(+)", "1+()", "4/", "/4"] {
        assert_malforme(s);
    }
}

#[test]
fn sci_caracteres_hors_grammaire() {
    for s in ["1.5", "2^3", "x", "3,0", "1e3", "sqrt(4)", "½"] {
        match evaluer(s) {
            Err(ErreurCalcul::JetonMalforme(Malformation::CaractereInattendu { .. })) => {}
            autre => panic!("s={s:?} : obtenu {autre:?}"),
        }
    }
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence() {
    for s in ["2+3*4", "(1+2)+(3+4)", "20/4/5", "7/3", "10/0", "()", ")("] {
        assert_eq!(evaluer(s), evaluer(s), "s={s:?}");
    }
}
