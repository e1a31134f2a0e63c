//! Spanish locale.

use std::sync::LazyLock;

use crate::record::StatusRecord;
use crate::status_map::StatusMap;

/// Spanish message per status code, covering the full canonical table.
pub const MESSAGES: &[(u16, &str)] = &[
    // 2xx Success
    (200, "La solicitud ha sido exitosa"),
    (201, "La solicitud se ha cumplido y ha resultado en la creación de un nuevo recurso"),
    (202, "La solicitud ha sido aceptada para su procesamiento"),
    (204, "El servidor procesó la solicitud exitosamente pero no devuelve contenido"),
    (206, "El servidor está entregando solo una parte del recurso debido a una cabecera Range enviada por el cliente"),
    // 3xx Redirection
    (301, "El recurso solicitado ha sido movido permanentemente"),
    (302, "El recurso solicitado reside temporalmente bajo un URI diferente"),
    (304, "El recurso no ha sido modificado desde la última solicitud"),
    (307, "La solicitud debe repetirse con otro URI, pero las solicitudes futuras deben seguir usando el URI original"),
    (308, "La solicitud y todas las solicitudes futuras deben repetirse usando otro URI"),
    // 4xx Client Error
    (400, "El servidor no puede procesar la solicitud debido a un error del cliente"),
    (401, "Se requiere autenticación y ha fallado o no se ha proporcionado"),
    (403, "El servidor entendió la solicitud pero se niega a autorizarla"),
    (404, "No se pudo encontrar el recurso solicitado"),
    (405, "El método de solicitud no está permitido para este recurso"),
    (406, "El recurso solicitado solo puede generar contenido no aceptable según las cabeceras Accept"),
    (408, "El servidor agotó el tiempo de espera de la solicitud"),
    (409, "La solicitud entra en conflicto con el estado actual del recurso"),
    (410, "El recurso solicitado ya no está disponible"),
    (411, "La solicitud no especificó la longitud de su contenido, requerida por el recurso solicitado"),
    (412, "El servidor no cumple una de las precondiciones que el solicitante impuso a la solicitud"),
    (413, "La solicitud es más grande de lo que el servidor está dispuesto o es capaz de procesar"),
    (414, "El URI proporcionado era demasiado largo para que el servidor lo procese"),
    (415, "La entidad de la solicitud tiene un tipo de medio que el servidor o el recurso no soporta"),
    (416, "El cliente ha solicitado una porción del archivo que el servidor no puede suministrar"),
    (417, "El servidor no puede cumplir los requisitos de la cabecera Expect"),
    (418, "Cualquier intento de preparar café con una tetera debe resultar en el código de error 418 I'm a teapot"),
    (422, "La solicitud estaba bien formada pero contiene errores semánticos"),
    (426, "El cliente debe cambiar a un protocolo diferente como TLS/1.0 indicado en la cabecera Upgrade"),
    (428, "El servidor de origen requiere que la solicitud sea condicional"),
    (429, "El usuario ha enviado demasiadas solicitudes en un período de tiempo determinado"),
    (431, "El servidor no está dispuesto a procesar la solicitud porque una cabecera individual o todas las cabeceras en conjunto son demasiado grandes"),
    (451, "Un operador del servidor ha recibido una demanda legal para denegar el acceso a un recurso o a un conjunto de recursos que incluye el recurso solicitado"),
    // 5xx Server Error
    (500, "El servidor encontró una condición inesperada"),
    (501, "El servidor no soporta la funcionalidad requerida"),
    (502, "El servidor recibió una respuesta inválida del servidor upstream"),
    (503, "El servidor no está disponible actualmente"),
    (504, "El servidor no recibió una respuesta oportuna del upstream"),
    (505, "El servidor no soporta la versión del protocolo HTTP usada en la solicitud"),
    (511, "El cliente necesita autenticarse para obtener acceso a la red"),
];

static HTTP_STATUS_ES: LazyLock<StatusMap<StatusRecord>> = LazyLock::new(|| {
    crate::http_status()
        .localize(MESSAGES)
        .expect("Spanish locale covers every canonical status code")
});

/// The status collection with Spanish messages.
///
/// ```
/// use http_reply::locales::es;
///
/// let not_found = &es::http_status()["notFound"];
/// assert_eq!(not_found.code(), 404);
/// assert_eq!(not_found.message(), "No se pudo encontrar el recurso solicitado");
/// ```
#[must_use]
pub fn http_status() -> &'static StatusMap<StatusRecord> {
    &HTTP_STATUS_ES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_the_canonical_code_set() {
        let base = crate::http_status();
        let es = http_status();
        assert_eq!(es.len(), base.len());
        for (code, record) in es.iter() {
            let original = base.get(code).unwrap();
            assert_eq!(record.code(), original.code());
            assert_eq!(record.name(), original.name());
            assert!(!record.message().is_empty());
        }
    }

    #[test]
    fn forbidden_is_translated() {
        let forbidden = &http_status()["forbidden"];
        assert_eq!(forbidden.code(), 403);
        assert_eq!(forbidden.name(), "FORBIDDEN");
        assert_eq!(
            forbidden.message(),
            "El servidor entendió la solicitud pero se niega a autorizarla",
        );
    }

    #[test]
    fn aliases_stay_identical_after_localization() {
        let es = http_status();
        assert!(std::ptr::eq(es.get(404).unwrap(), es.get("NOT_FOUND").unwrap()));
        assert!(std::ptr::eq(es.get("NOT_FOUND").unwrap(), es.get("notFound").unwrap()));
    }
}
