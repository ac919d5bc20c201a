// src/noyau/jetons.rs

/// Jetons d’évaluation (grammaire fixe : littéraux, 4 opérateurs, parenthèses).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire. Jamais produit par tokenize : c’est to_rpn qui
    // requalifie un Minus en position de valeur (voir rpn.rs).
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte :
/// - littéraux décimaux (ex: 12, 0.5, 12., .5)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
///
/// Un littéral est le run maximal en [0-9.] ; c’est `parse::<f64>` qui
/// tranche sa validité, donc "1.2.3" ou "." seul sont refusés ici même.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral décimal : run maximal en [0-9.]
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            let v: f64 = lit
                .parse()
                .map_err(|_| format!("nombre invalide: {lit:?}"))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}
