// src/noyau/validation.rs
//
// Validation structurelle : équilibre des parenthèses, rien d’autre.
// Les lettres ou symboles inconnus passent ici ; c’est jetons.rs qui les refuse.

/// Vrai ssi chaque ')' ferme une '(' ouverte avant elle et qu’il n’en reste
/// aucune ouverte à la fin. Une chaîne sans parenthèses est valide.
pub fn est_valide(texte: &str) -> bool {
    let mut profondeur: usize = 0;

    for c in texte.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                if profondeur == 0 {
                    return false;
                }
                profondeur -= 1;
            }
            _ => {}
        }
    }

    profondeur == 0
}
