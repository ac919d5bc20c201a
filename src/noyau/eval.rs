//! Noyau — évaluation (pipeline réel)
//!
//! liste blanche -> tokenize -> RPN (shunting-yard) -> pile f64
//!
//! Pas d’interpréteur dynamique : la grammaire est fixe (littéraux,
//! moins unaire, + - * /, parenthèses) et tout passe par le parseur.

use super::jetons::tokenize;
use super::rpn::{eval_rpn, to_rpn};

/// Échec d’évaluation. Les deux variantes se traitent pareil côté UI
/// (affichage "Error"), la distinction sert aux tests et au diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    /// La chaîne sort de la liste blanche [0-9 + - * / ( ) . espaces].
    ExpressionInvalide,
    /// Jeton ou structure invalide au parse/éval (message des étapes internes).
    Syntaxe(String),
}

/// Liste blanche de caractères, vérifiée AVANT tout parse.
/// (Le parseur revérifie derrière ; ceci coupe court aux entrées héritées
/// d’un résultat non fini, ex: "Infinity+3".)
fn est_expression_sure(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_digit()
                || c.is_whitespace()
                || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')
        })
}

/// API publique : évalue une expression arithmétique infixe en f64.
///
/// Arithmétique IEEE-754 : un résultat non fini (±inf, NaN) est un SUCCÈS,
/// seule la forme de l’entrée peut échouer.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    if !est_expression_sure(expr_str) {
        return Err(ErreurEval::ExpressionInvalide);
    }

    let jetons = tokenize(expr_str).map_err(ErreurEval::Syntaxe)?;
    let rpn = to_rpn(&jetons).map_err(ErreurEval::Syntaxe)?;
    eval_rpn(&rpn).map_err(ErreurEval::Syntaxe)
}
