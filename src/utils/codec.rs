//! Codec de valores para la frontera de transporte
//!
//! Convierte los tipos temporales y de punto fijo del almacén a su forma
//! textual/numérica de transporte, y las entradas de transporte a valores
//! aptos para el almacén. Se aplica de manera uniforme a todas las
//! entidades; no hay casos especiales por tabla.
//!
//! La conversión Decimal → f64 es deliberadamente unidireccional y con
//! pérdida: las coordenadas salen como flotantes y entran como flotantes
//! que se fijan a 6 decimales antes de almacenarse.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::utils::errors::AppError;

/// Precisión de las coordenadas en el almacén
const COORDINATE_SCALE: u32 = 6;

/// Fecha de calendario → `YYYY-MM-DD`
pub fn encode_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Hora del día → `HH:MM:SS`, con `.ffffff` solo si hay fracción
pub fn encode_time(value: NaiveTime) -> String {
    if value.nanosecond() == 0 {
        value.format("%H:%M:%S").to_string()
    } else {
        value.format("%H:%M:%S%.6f").to_string()
    }
}

/// Instante combinado → `YYYY-MM-DDTHH:MM:SS[.ffffff]`, sin zona horaria
pub fn encode_timestamp(value: NaiveDateTime) -> String {
    if value.time().nanosecond() == 0 {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Punto fijo → flotante binario. Con pérdida; aceptada en la salida.
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Entrada de coordenada: flotante de transporte → punto fijo a 6 decimales
pub fn coord_to_decimal(value: f64) -> Result<Decimal, AppError> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(COORDINATE_SCALE))
        .ok_or_else(|| AppError::BadRequest(format!("Invalid coordinate value: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_date_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 8).unwrap();
        assert_eq!(encode_date(date), "2025-07-08");
    }

    #[test]
    fn test_encode_time_without_fraction() {
        let time = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
        assert_eq!(encode_time(time), "08:30:00");
    }

    #[test]
    fn test_encode_time_with_fraction() {
        let time = NaiveTime::from_hms_micro_opt(8, 30, 0, 250_000).unwrap();
        assert_eq!(encode_time(time), "08:30:00.250000");
    }

    #[test]
    fn test_encode_timestamp_without_fraction() {
        let ts = NaiveDate::from_ymd_opt(2025, 7, 8)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        assert_eq!(encode_timestamp(ts), "2025-07-08T14:05:09");
    }

    #[test]
    fn test_encode_timestamp_with_fraction() {
        let ts = NaiveDate::from_ymd_opt(2025, 7, 8)
            .unwrap()
            .and_hms_micro_opt(14, 5, 9, 123_456)
            .unwrap();
        assert_eq!(encode_timestamp(ts), "2025-07-08T14:05:09.123456");
    }

    #[test]
    fn test_coordinate_round_trip_within_tolerance() {
        for value in [-3.73, -38.52, -3.768912, 0.0, 89.999999] {
            let stored = coord_to_decimal(value).unwrap();
            let out = decimal_to_f64(stored);
            assert!(
                (out - value).abs() < 1e-6,
                "coordinate {} round-tripped to {}",
                value,
                out
            );
        }
    }

    #[test]
    fn test_coord_to_decimal_rejects_non_finite() {
        assert!(coord_to_decimal(f64::NAN).is_err());
        assert!(coord_to_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn test_coord_to_decimal_fixes_scale() {
        let stored = coord_to_decimal(-3.7327654321).unwrap();
        assert_eq!(stored.scale(), 6);
    }
}
