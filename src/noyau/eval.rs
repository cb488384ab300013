//! Noyau — évaluation
//!
//! est_valide -> tokenize -> pli gauche par niveau de précédence
//!
//! Niveau additif d’abord (opérateurs hors parenthèses), sinon multiplicatif.
//! Les opérandes d’un niveau sont pliés de gauche à droite dans une boucle :
//! 5-2-1 = (5-2)-1, 20/4/5 = (20/4)/5.
//!
//! On ne récurse que pour descendre d’un niveau de précédence ou entrer dans
//! une parenthèse : la pile dépend de l’imbrication, jamais de la longueur.
//! L’imbrication est bornée (PROFONDEUR_MAX).

use super::erreur::{ErreurCalcul, Malformation};
use super::jetons::{tokenize, Jeton, Tok};
use super::nombre::Nombre;
use super::validation::est_valide;

/// Parenthèses imbriquées au plus. Au pire 5 cadres de pile par niveau,
/// ce qui tient dans la pile de 1 Mio du build wasm.
pub const PROFONDEUR_MAX: usize = 64;

/// API publique : valide puis évalue une expression.
pub fn evaluer(texte: &str) -> Result<Nombre, ErreurCalcul> {
    if !est_valide(texte) {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    let jetons = tokenize(texte)?;
    if jetons.is_empty() {
        return Err(Malformation::Vide.into());
    }

    // position "après la fin" : sert quand un opérande manque tout à droite
    let fin = texte.chars().count();
    evaluer_tranche(&jetons, fin, 0)
}

/// Évalue `jetons`. `fin` est la position juste après la tranche (pour
/// localiser un opérande manquant à droite). `profondeur` compte les
/// parenthèses traversées.
fn evaluer_tranche(
    jetons: &[Jeton],
    fin: usize,
    profondeur: usize,
) -> Result<Nombre, ErreurCalcul> {
    if profondeur > PROFONDEUR_MAX {
        return Err(Malformation::ProfondeurExcessive.into());
    }

    let (premier, dernier) = match (jetons.first(), jetons.last()) {
        (Some(p), Some(d)) => (p, d),
        _ => return Err(Malformation::OperandeManquant { position: fin }.into()),
    };

    // 1) Cas de base : un nombre seul
    if let [Jeton {
        tok: Tok::Num(n), ..
    }] = jetons
    {
        return Ok(Nombre::Entier(n.clone()));
    }

    // 2) Parenthèses englobantes : seulement si la '(' de tête ferme sur la ')' de queue
    if englobe(jetons) {
        let interieur = &jetons[1..jetons.len() - 1];
        if interieur.is_empty() {
            return Err(Malformation::ParenthesesVides {
                position: premier.pos,
            }
            .into());
        }
        return evaluer_tranche(interieur, dernier.pos, profondeur + 1);
    }

    // 3) Passe additive, puis 4) multiplicative
    let ops = operateurs_niveau_zero(jetons, Tok::est_additif);
    if !ops.is_empty() {
        return plier_somme(jetons, &ops, fin, profondeur);
    }
    let ops = operateurs_niveau_zero(jetons, Tok::est_multiplicatif);
    if !ops.is_empty() {
        return plier_produit(jetons, &ops, fin, profondeur);
    }

    // 5) Ni nombre seul, ni parenthèses englobantes, ni opérateur au niveau 0 :
    //    deux termes juxtaposés ("2(3)", "1 2", "(1)(2)").
    Err(Malformation::OperateurManquant {
        position: premier_terme_juxtapose(jetons),
    }
    .into())
}

/// `a ± b ± c …`, opérandes évalués et pliés de gauche à droite.
fn plier_somme(
    jetons: &[Jeton],
    ops: &[usize],
    fin: usize,
    profondeur: usize,
) -> Result<Nombre, ErreurCalcul> {
    let (t, f) = operande(jetons, ops, 0, fin);
    let mut acc = evaluer_tranche(t, f, profondeur)?;

    for (k, &i) in ops.iter().enumerate() {
        let (t, f) = operande(jetons, ops, k + 1, fin);
        let b = evaluer_tranche(t, f, profondeur)?;
        acc = match jetons[i].tok {
            Tok::Moins => acc - b,
            _ => acc + b,
        };
    }

    Ok(acc)
}

/// `a */ b */ c …`. Les opérandes sont évalués de droite à gauche : chaque
/// diviseur est évalué (et testé à zéro) avant ce qui le précède. Le pli
/// reste à gauche.
fn plier_produit(
    jetons: &[Jeton],
    ops: &[usize],
    fin: usize,
    profondeur: usize,
) -> Result<Nombre, ErreurCalcul> {
    let mut valeurs = Vec::with_capacity(ops.len() + 1);

    for k in (0..=ops.len()).rev() {
        let (t, f) = operande(jetons, ops, k, fin);
        let v = evaluer_tranche(t, f, profondeur)?;
        if k > 0 && jetons[ops[k - 1]].tok == Tok::Divise && v.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        valeurs.push(v);
    }
    valeurs.reverse();

    let mut valeurs = valeurs.into_iter();
    let mut acc = match valeurs.next() {
        Some(v) => v,
        None => return Err(Malformation::OperandeManquant { position: fin }.into()),
    };

    for (&i, b) in ops.iter().zip(valeurs) {
        acc = match jetons[i].tok {
            Tok::Divise => acc.diviser(b)?,
            _ => acc * b,
        };
    }

    Ok(acc)
}

/// Opérande `k` : entre les opérateurs `k-1` et `k`. Sa fin est la position
/// de l’opérateur qui le suit, ou `fin` pour le dernier.
fn operande<'a>(jetons: &'a [Jeton], ops: &[usize], k: usize, fin: usize) -> (&'a [Jeton], usize) {
    let debut = if k == 0 { 0 } else { ops[k - 1] + 1 };
    match ops.get(k) {
        Some(&i) => (&jetons[debut..i], jetons[i].pos),
        None => (&jetons[debut..], fin),
    }
}

/// Vrai si la tranche commence par '(' et que cette parenthèse se referme
/// exactement sur le dernier jeton. "(1+2)+(3+4)" => faux.
fn englobe(jetons: &[Jeton]) -> bool {
    if jetons.len() < 2 {
        return false;
    }
    if jetons[0].tok != Tok::ParG || jetons[jetons.len() - 1].tok != Tok::ParD {
        return false;
    }

    let mut niveau: usize = 0;
    for (i, j) in jetons.iter().enumerate() {
        match j.tok {
            Tok::ParG => niveau += 1,
            Tok::ParD => {
                niveau = niveau.saturating_sub(1);
                if niveau == 0 {
                    return i == jetons.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// Index des opérateurs du groupe `groupe` au niveau 0, dans l’ordre.
fn operateurs_niveau_zero(jetons: &[Jeton], groupe: fn(&Tok) -> bool) -> Vec<usize> {
    let mut niveau: usize = 0;
    let mut out = Vec::new();

    for (i, j) in jetons.iter().enumerate() {
        match j.tok {
            Tok::ParG => niveau += 1,
            Tok::ParD => niveau = niveau.saturating_sub(1),
            ref t if niveau == 0 && groupe(t) => out.push(i),
            _ => {}
        }
    }

    out
}

/// Position du premier terme qui en suit un autre sans opérateur entre eux.
fn premier_terme_juxtapose(jetons: &[Jeton]) -> usize {
    let mut niveau: usize = 0;

    for (i, j) in jetons.iter().enumerate() {
        // un terme (nombre ou '(') qui démarre au niveau 0 après le premier jeton
        let debut_terme = matches!(j.tok, Tok::Num(_) | Tok::ParG);
        if i > 0 && niveau == 0 && debut_terme {
            return j.pos;
        }
        match j.tok {
            Tok::ParG => niveau += 1,
            Tok::ParD => niveau = niveau.saturating_sub(1),
            _ => {}
        }
    }

    jetons.first().map(|j| j.pos).unwrap_or(0)
}
