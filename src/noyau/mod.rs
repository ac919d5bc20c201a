//! Noyau calculette
//!
//! Organisation interne :
//! - moteur.rs : machine à saisie (jeton UI -> expression -> affichage)
//! - jetons.rs : tokenisation
//! - rpn.rs    : shunting-yard + évaluation sur pile f64
//! - eval.rs   : pipeline complet (liste blanche -> jetons -> RPN -> valeur)
//! - format.rs : affichage décimal des f64 (Infinity/NaN épelés)

pub mod eval;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{eval_expression, ErreurEval};
pub use moteur::{Jeton, Moteur};
