/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

use chrono::{DateTime, Utc};

/// "2026-03-15" o "2026-03-15T14:02:26Z" -> "15/03/2026"
pub fn format_fecha(fecha: &str) -> String {
    let date_part = fecha.split('T').next().unwrap_or(fecha);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    fecha.to_string()
}

/// Timestamp del backend -> "15/03/2026 14:02".
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Fecha de hoy en el formato del API ("YYYY-MM-DD").
pub fn hoy() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formato_de_fecha() {
        assert_eq!(format_fecha("2026-03-15"), "15/03/2026");
        assert_eq!(format_fecha("2026-03-15T14:02:26.123Z"), "15/03/2026");
    }

    #[test]
    fn fecha_invalida_queda_igual() {
        assert_eq!(format_fecha("invalida"), "invalida");
    }

    #[test]
    fn formato_de_timestamp() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(dt), "15/03/2026 14:02");
    }
}
