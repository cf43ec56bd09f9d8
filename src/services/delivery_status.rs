//! Máquina de estados de las entregas
//!
//! El conjunto de etiquetas de estado es abierto: el almacén no lo
//! restringe y los operadores pueden definir etiquetas propias. Solo
//! "Entregue" tiene comportamiento especial: al recibirla se estampa
//! `delivered_at` con el instante actual, evaluado únicamente sobre el
//! valor entrante. Actualizaciones repetidas a "Entregue" re-estampan;
//! cualquier otro valor deja el sello existente intacto.

use chrono::{NaiveDateTime, Utc};

use crate::utils::errors::AppError;

/// Estado inicial de una entrega
pub const STATUS_PENDENTE: &str = "Pendente";
/// Estado terminal a efectos del sello de entrega
pub const STATUS_ENTREGUE: &str = "Entregue";
/// Estado inicial de una ruta
pub const STATUS_PLANEJADA: &str = "Planejada";
/// Estado por defecto de un vehículo
pub const STATUS_DISPONIVEL: &str = "Disponível";

/// Etiquetas conocidas por el sistema. No es un conjunto cerrado.
pub const KNOWN_STATUSES: [&str; 4] = [
    STATUS_PENDENTE,
    STATUS_ENTREGUE,
    STATUS_PLANEJADA,
    STATUS_DISPONIVEL,
];

const MAX_STATUS_LEN: usize = 40;

/// Sello de entrega para un estado entrante: `Some(ahora)` exactamente
/// cuando el valor es "Entregue". Los instantes se guardan sin zona
/// horaria (UTC naive).
pub fn delivered_stamp(new_status: &str) -> Option<NaiveDateTime> {
    if new_status == STATUS_ENTREGUE {
        Some(Utc::now().naive_utc())
    } else {
        None
    }
}

/// Validar una etiqueta de estado: no vacía y dentro del límite de
/// longitud. Cualquier etiqueta que cumpla esto se acepta, conocida o no.
pub fn validate_label(label: &str) -> Result<(), AppError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Status label must not be empty".to_string()));
    }
    if trimmed.len() > MAX_STATUS_LEN {
        return Err(AppError::BadRequest(format!(
            "Status label exceeds {} characters",
            MAX_STATUS_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivered_stamp_on_entregue_is_now() {
        let before = Utc::now().naive_utc();
        let stamp = delivered_stamp(STATUS_ENTREGUE).expect("Entregue must stamp");
        let after = Utc::now().naive_utc();
        assert!(stamp >= before && stamp <= after);
    }

    #[test]
    fn test_no_stamp_for_other_labels() {
        assert!(delivered_stamp(STATUS_PENDENTE).is_none());
        assert!(delivered_stamp(STATUS_PLANEJADA).is_none());
        assert!(delivered_stamp("Em rota").is_none());
        // Sensible a mayúsculas: solo el valor exacto estampa
        assert!(delivered_stamp("entregue").is_none());
    }

    #[test]
    fn test_repeated_entregue_restamps() {
        let first = delivered_stamp(STATUS_ENTREGUE).unwrap();
        let second = delivered_stamp(STATUS_ENTREGUE).unwrap();
        assert!(second >= first);
    }

    #[test]
    fn test_known_labels_are_valid() {
        for label in KNOWN_STATUSES {
            assert!(validate_label(label).is_ok());
        }
    }

    #[test]
    fn test_operator_defined_labels_are_accepted() {
        assert!(validate_label("Aguardando coleta").is_ok());
    }

    #[test]
    fn test_empty_label_is_rejected() {
        assert!(validate_label("").is_err());
        assert!(validate_label("   ").is_err());
    }

    #[test]
    fn test_oversized_label_is_rejected() {
        let label = "x".repeat(MAX_STATUS_LEN + 1);
        assert!(validate_label(&label).is_err());
    }
}
