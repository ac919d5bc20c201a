//! src/noyau/moteur.rs
//!
//! Moteur de saisie : (état, jeton) -> (nouvel état, affichage).
//!
//! Rôle : tenir l’expression en cours + le drapeau `attente_raz`, et
//! appliquer chaque jeton d’entrée (chiffre, opérateur, point, etc.).
//!
//! Contrats :
//! - Aucune vue ici (pas d’egui) : testable sans surface de rendu.
//! - Chaque `saisir` rend la chaîne à afficher (l’expression, ou "0" si vide).
//! - Jamais deux opérateurs binaires consécutifs (le dernier remplace).
//! - Jamais deux points décimaux dans un même segment numérique.

use super::eval::eval_expression;
use super::format::format_nombre;

/// Caractères d’opérateur binaire (collapse + découpe des segments).
const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

/// Vocabulaire d’entrée (boutons et clavier confondus).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    Chiffre(char),
    Point,
    Operateur(char),
    ParOuvrante,
    ParFermante,
    Effacer,
    Supprimer,
    Pourcent,
    Egal,
}

impl Jeton {
    /// Mappe un caractère clavier vers un jeton (None si hors vocabulaire).
    /// Enter/Backspace/Escape ne passent pas ici : ce sont des touches,
    /// pas du texte (voir vue.rs / app.rs).
    pub fn depuis_char(c: char) -> Option<Jeton> {
        match c {
            '0'..='9' => Some(Jeton::Chiffre(c)),
            '.' => Some(Jeton::Point),
            '+' | '-' | '*' | '/' => Some(Jeton::Operateur(c)),
            '(' => Some(Jeton::ParOuvrante),
            ')' => Some(Jeton::ParFermante),
            '=' => Some(Jeton::Egal),
            '%' => Some(Jeton::Pourcent),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    // --- expression en cours de saisie ---
    expression: String,

    // --- vrai juste après "=" : la prochaine saisie numérique repart à zéro ---
    attente_raz: bool,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Chaîne à afficher : l’expression, ou "0" si elle est vide.
    pub fn affichage(&self) -> String {
        if self.expression.is_empty() {
            "0".to_string()
        } else {
            self.expression.clone()
        }
    }

    /// Point d’entrée unique : applique un jeton et rend l’affichage.
    pub fn saisir(&mut self, jeton: Jeton) -> String {
        match jeton {
            Jeton::Effacer => {
                self.expression.clear();
                self.attente_raz = false;
            }

            Jeton::Supprimer => {
                if self.attente_raz {
                    // résultat périmé : on jette tout plutôt que de le rogner
                    self.expression.clear();
                    self.attente_raz = false;
                } else {
                    self.expression.pop();
                }
            }

            Jeton::Pourcent => self.pourcent_dernier_nombre(),

            Jeton::Egal => return self.evaluer(),

            Jeton::Chiffre(c) => {
                if self.attente_raz {
                    self.expression.clear();
                    self.attente_raz = false;
                }
                self.expression.push(c);
            }

            Jeton::Point => {
                if self.attente_raz {
                    self.expression.clear();
                    self.attente_raz = false;
                    self.expression.push('.');
                } else {
                    self.inserer_point();
                }
            }

            Jeton::Operateur(op) => self.inserer_operateur(op),

            Jeton::ParOuvrante => self.expression.push('('),
            Jeton::ParFermante => self.expression.push(')'),
        }

        self.affichage()
    }

    /* ------------------------ Règles de saisie ------------------------ */

    /// Opérateur binaire :
    /// - expression vide : seul '-' passe (nombre négatif en tête)
    /// - opérateur final : remplacé (pas d’accumulation "1++")
    /// - sinon : ajouté
    fn inserer_operateur(&mut self, op: char) {
        if self.expression.is_empty() {
            if op == '-' {
                self.expression.push('-');
            }
            return;
        }

        if self.expression.ends_with(OPERATEURS) {
            self.expression.pop();
        }
        self.expression.push(op);
    }

    /// Point décimal : au plus un par segment (découpe sur + - * /).
    /// Segment vide (début ou juste après un opérateur) => "0." plutôt que ".".
    fn inserer_point(&mut self) {
        let segment = self
            .expression
            .rsplit(OPERATEURS)
            .next()
            .unwrap_or_default();

        if segment.contains('.') {
            return;
        }
        if segment.is_empty() {
            self.expression.push_str("0.");
        } else {
            self.expression.push('.');
        }
    }

    /// Pourcentage du dernier nombre : le suffixe maximal en [0-9.] est
    /// divisé par 100 et réécrit en décimal. Pas de suffixe numérique
    /// exploitable => aucun effet.
    fn pourcent_dernier_nombre(&mut self) {
        let debut = self
            .expression
            .rfind(|c: char| !c.is_ascii_digit() && c != '.')
            .map(|i| i + 1)
            .unwrap_or(0);

        if debut == self.expression.len() {
            return;
        }

        // suffixe en [0-9.] mais non numérique (ex: "." seul) : aucun effet
        let Ok(nombre) = self.expression[debut..].parse::<f64>() else {
            return;
        };

        self.expression.truncate(debut);
        self.expression.push_str(&format_nombre(nombre / 100.0));
    }

    /// "=" : évalue l’expression courante.
    /// - succès : le résultat devient la nouvelle expression (attente_raz)
    /// - échec : expression vidée, affichage "Error" (attente_raz aussi)
    /// - expression vide : aucun effet
    fn evaluer(&mut self) -> String {
        if self.expression.is_empty() {
            return self.affichage();
        }

        match eval_expression(&self.expression) {
            Ok(valeur) => {
                self.expression = format_nombre(valeur);
                self.attente_raz = true;
                self.expression.clone()
            }
            Err(_) => {
                self.expression.clear();
                self.attente_raz = true;
                "Error".to_string()
            }
        }
    }
}
