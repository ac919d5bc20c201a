//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’instance du moteur de saisie et la dernière chaîne
//! affichée. Aucune logique d’expression ici : tout passe par
//! `Moteur::saisir`, la vue ne fait que transmettre des jetons.
//!
//! Contrats :
//! - Le moteur est possédé explicitement (pas de global) : plusieurs
//!   calculettes indépendantes restent possibles.
//! - `affiche` est exactement la dernière valeur rendue par le moteur
//!   (y compris "Error", que le moteur ne conserve pas dans l’expression).

use crate::noyau::{Jeton, Moteur};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,

    // dernière chaîne rendue par le moteur (surface d’affichage unique)
    pub affiche: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        let moteur = Moteur::new();
        let affiche = moteur.affichage(); // "0" au démarrage
        Self { moteur, affiche }
    }
}

impl AppCalc {
    /// Transmet un jeton au moteur et mémorise l’affichage rendu.
    pub fn envoyer(&mut self, jeton: Jeton) {
        self.affiche = self.moteur.saisir(jeton);
    }
}
