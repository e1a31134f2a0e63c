//! German locale.

use std::sync::LazyLock;

use crate::record::StatusRecord;
use crate::status_map::StatusMap;

/// German message per status code, covering the full canonical table.
pub const MESSAGES: &[(u16, &str)] = &[
    // 2xx Success
    (200, "Die Anfrage war erfolgreich"),
    (201, "Die Anfrage wurde erfüllt und eine neue Ressource wurde erstellt"),
    (202, "Die Anfrage wurde zur Verarbeitung angenommen"),
    (204, "Der Server hat die Anfrage erfolgreich verarbeitet, gibt aber keinen Inhalt zurück"),
    (206, "Der Server liefert aufgrund eines vom Client gesendeten Range-Headers nur einen Teil der Ressource aus"),
    // 3xx Redirection
    (301, "Die angeforderte Ressource wurde dauerhaft verschoben"),
    (302, "Die angeforderte Ressource befindet sich vorübergehend unter einer anderen URI"),
    (304, "Die Ressource wurde seit der letzten Anfrage nicht verändert"),
    (307, "Die Anfrage soll mit einer anderen URI wiederholt werden, zukünftige Anfragen sollen aber weiterhin die ursprüngliche URI verwenden"),
    (308, "Die Anfrage und alle zukünftigen Anfragen sollen mit einer anderen URI wiederholt werden"),
    // 4xx Client Error
    (400, "Der Server kann die Anfrage aufgrund eines Client-Fehlers nicht verarbeiten"),
    (401, "Authentifizierung ist erforderlich und ist fehlgeschlagen oder wurde nicht bereitgestellt"),
    (403, "Der Server verstand die Anfrage, verweigert aber die Autorisierung"),
    (404, "Die angeforderte Ressource konnte nicht gefunden werden"),
    (405, "Die Anfragemethode ist für diese Ressource nicht erlaubt"),
    (406, "Die angeforderte Ressource kann nur Inhalte erzeugen, die laut den Accept-Headern nicht akzeptabel sind"),
    (408, "Der Server hat beim Warten auf die Anfrage eine Zeitüberschreitung festgestellt"),
    (409, "Die Anfrage steht in Konflikt mit dem aktuellen Zustand der Ressource"),
    (410, "Die angeforderte Ressource ist nicht mehr verfügbar"),
    (411, "Die Anfrage hat die Länge ihres Inhalts nicht angegeben, die von der angeforderten Ressource verlangt wird"),
    (412, "Der Server erfüllt eine der Vorbedingungen nicht, die der Anfragende an die Anfrage gestellt hat"),
    (413, "Die Anfrage ist größer, als der Server verarbeiten will oder kann"),
    (414, "Die angegebene URI war zu lang, als dass der Server sie verarbeiten könnte"),
    (415, "Die Anfrage hat einen Medientyp, den der Server oder die Ressource nicht unterstützt"),
    (416, "Der Client hat einen Teil der Datei angefordert, den der Server nicht liefern kann"),
    (417, "Der Server kann die Anforderungen des Expect-Headers nicht erfüllen"),
    (418, "Jeder Versuch, mit einer Teekanne Kaffee zu kochen, soll mit dem Fehlercode 418 I'm a teapot beantwortet werden"),
    (422, "Die Anfrage war wohlgeformt, enthält aber semantische Fehler"),
    (426, "Der Client soll zu einem anderen Protokoll wechseln, etwa TLS/1.0, wie im Upgrade-Header angegeben"),
    (428, "Der Ursprungsserver verlangt, dass die Anfrage bedingt gestellt wird"),
    (429, "Der Benutzer hat zu viele Anfragen in einer bestimmten Zeit gesendet"),
    (431, "Der Server verweigert die Verarbeitung, weil ein einzelnes Header-Feld oder alle Header-Felder zusammen zu groß sind"),
    (451, "Ein Serverbetreiber hat eine rechtliche Aufforderung erhalten, den Zugriff auf eine Ressource oder eine Gruppe von Ressourcen zu verweigern, die die angeforderte Ressource einschließt"),
    // 5xx Server Error
    (500, "Der Server ist auf eine unerwartete Bedingung gestoßen"),
    (501, "Der Server unterstützt die erforderliche Funktionalität nicht"),
    (502, "Der Server erhielt eine ungültige Antwort vom Upstream-Server"),
    (503, "Der Server ist derzeit nicht verfügbar"),
    (504, "Der Server erhielt keine rechtzeitige Antwort vom Upstream"),
    (505, "Der Server unterstützt die in der Anfrage verwendete HTTP-Protokollversion nicht"),
    (511, "Der Client muss sich authentifizieren, um Netzwerkzugang zu erhalten"),
];

static HTTP_STATUS_DE: LazyLock<StatusMap<StatusRecord>> = LazyLock::new(|| {
    crate::http_status()
        .localize(MESSAGES)
        .expect("German locale covers every canonical status code")
});

/// The status collection with German messages.
///
/// ```
/// use http_reply::locales::de;
///
/// let forbidden = &de::http_status()["forbidden"];
/// assert_eq!(forbidden.code(), 403);
/// assert_eq!(forbidden.name(), "FORBIDDEN");
/// assert_eq!(
///     forbidden.message(),
///     "Der Server verstand die Anfrage, verweigert aber die Autorisierung",
/// );
/// ```
#[must_use]
pub fn http_status() -> &'static StatusMap<StatusRecord> {
    &HTTP_STATUS_DE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_the_canonical_code_set() {
        let base = crate::http_status();
        let de = http_status();
        assert_eq!(de.len(), base.len());
        let base_codes: Vec<u16> = base.codes().collect();
        let de_codes: Vec<u16> = de.codes().collect();
        assert_eq!(de_codes, base_codes);
    }

    #[test]
    fn only_messages_differ_from_base() {
        let base = crate::http_status();
        for (code, record) in http_status().iter() {
            let original = base.get(code).unwrap();
            assert_eq!(record.code(), original.code());
            assert_eq!(record.name(), original.name());
            assert!(!record.message().is_empty());
        }
    }

    #[test]
    fn forbidden_is_translated() {
        let forbidden = &http_status()["FORBIDDEN"];
        assert_eq!(
            forbidden.message(),
            "Der Server verstand die Anfrage, verweigert aber die Autorisierung",
        );
        assert_ne!(
            forbidden.message(),
            crate::http_status()["FORBIDDEN"].message(),
        );
    }

    #[test]
    fn aliases_stay_identical_after_localization() {
        let de = http_status();
        assert!(std::ptr::eq(de.get(403).unwrap(), de.get("FORBIDDEN").unwrap()));
        assert!(std::ptr::eq(de.get("FORBIDDEN").unwrap(), de.get("forbidden").unwrap()));
    }
}
