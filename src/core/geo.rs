//! Längengrad-Arithmetik für die zyklische Weltkarte.

/// Maximale Breite der Web-Mercator-Projektion (Grad).
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Normalisiert einen Längengrad in den Bereich `[-180, 180)`.
pub fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid kann durch Rundung den oberen Rand liefern
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Verschiebt einen Längengrad in den Wrap-Zyklus eines Referenz-Längengrads.
///
/// Das Ergebnis unterscheidet sich von `lon` um ein Vielfaches von 360°
/// und liegt höchstens 180° von `reference` entfernt. Wird für die
/// Popup-Verankerung an der Antimeridian-Grenze benötigt: ein Feature bei
/// -179° darf bei einem Klick auf +179° nicht um die halbe Welt springen.
pub fn wrap_longitude_near(lon: f64, reference: f64) -> f64 {
    reference + wrap_longitude(lon - reference)
}

/// Begrenzt eine Breite auf den darstellbaren Mercator-Bereich.
pub fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
}
