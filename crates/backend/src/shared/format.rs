/// Formatea un número con separadores de miles (puntos)
///
/// # Ejemplos
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Arma un correlativo de documento con relleno de ceros
///
/// "NI" + 45 → "NI-000045"; usado por notas de ingreso y salida.
pub fn format_correlativo(prefijo: &str, numero: i64) -> String {
    format!("{}-{:06}", prefijo, numero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_correlativo() {
        assert_eq!(format_correlativo("NI", 1), "NI-000001");
        assert_eq!(format_correlativo("NS", 45), "NS-000045");
        assert_eq!(format_correlativo("NI", 1234567), "NI-1234567");
    }
}
