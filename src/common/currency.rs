// src/common/currency.rs

/// Formata centavos como dólar (en-US): 123456 -> "$1,234.56".
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let major = (cents / 100).to_string();
    let minor = cents % 100;

    // Separador de milhar a cada 3 dígitos, da direita pra esquerda
    let mut grouped = String::with_capacity(major.len() + major.len() / 3);
    for (i, digit) in major.chars().enumerate() {
        if i > 0 && (major.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{minor:02}")
}
