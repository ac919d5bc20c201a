// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Précédence : * / au-dessus de + - ; tout associatif à gauche
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, il devient Neg,
//      avec un 0 injecté comme opérande gauche : "-x" => "0 x Neg"
//    - Neg est au-dessus de * / : il ne lie QUE l’opérande qui le suit
//      ("2*-3" => 2*(-3), pas (2*0)-3)
// - Parenthèses déséquilibrées (dans les deux sens) : erreur

use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [LPar, Num(1), Plus, Num(2), RPar, Star, Num(3)]
///   rpn:    [Num(1), Num(2), Plus, Num(3), Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un littéral ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err("parenthèse fermante en trop".into()),
                    }
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Star | Tok::Slash => {
                depiler_selon_precedence(&mut out, &mut ops, &tok);
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                if !prev_was_value {
                    // moins unaire : 0 injecté + Neg, SANS dépiler (rien de
                    // plus prioritaire que Neg ; dépiler ici ferait porter le
                    // moins sur tout le préfixe, cf. "2*-3")
                    out.push(Tok::Num(0.0));
                    ops.push(Tok::Neg);
                } else {
                    depiler_selon_precedence(&mut out, &mut ops, &Tok::Minus);
                    ops.push(Tok::Minus);
                }
                prev_was_value = false;
            }

            Tok::Neg => return Err("jeton interne inattendu".into()),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile vers la sortie tant que l’opérateur du haut doit sortir
/// (associativité gauche : précédence >= celle du jeton entrant).
fn depiler_selon_precedence(out: &mut Vec<Tok>, ops: &mut Vec<Tok>, tok: &Tok) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) {
            break;
        }
        if precedence(top) >= precedence(tok) {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}

/// Évalue une RPN sur une pile de f64.
///
/// Arithmétique IEEE-754 : la division par zéro rend ±inf (ou NaN pour 0/0),
/// ce n’est PAS une erreur ici.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, String> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => st.push(v),

            Tok::Plus | Tok::Minus | Tok::Neg | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or("expression invalide")?;
                let a = st.pop().ok_or("expression invalide")?;

                let v = match tok {
                    Tok::Plus => a + b,
                    // Neg arrive toujours avec son 0 injecté : 0 - b
                    Tok::Minus | Tok::Neg => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    _ => unreachable!(),
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),
        }
    }

    if st.len() != 1 {
        return Err("expression invalide".into());
    }
    Ok(st.pop().unwrap())
}
