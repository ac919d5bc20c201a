// src/noyau/format.rs

/// Formate un f64 pour l’affichage calculette.
///
/// - valeurs finies : `Display` de Rust (plus courte forme qui re-parse),
///   donc "15" pour 15.0, "0.5", "0.30000000000000004"…
/// - -0 est affiché "0"
/// - non finis : "Infinity", "-Infinity", "NaN" (ces chaînes retombent dans
///   l’expression et seront refusées par la liste blanche au "=" suivant)
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        // couvre -0.0
        return "0".to_string();
    }
    format!("{v}")
}
