/// Redondea a centavos; `-0.0` se normaliza a `0.0`
pub fn round_cents(amount: f64) -> f64 {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formatea un número con separadores de miles
pub fn format_number_with_separators(num: f64, decimals: usize) -> String {
    let formatted = format!("{:.decimals$}", num.abs(), decimals = decimals);
    let (integer, decimal) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    for (i, c) in integer.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let integer_formatted: String = result.chars().rev().collect();

    match decimal {
        Some(decimal) => format!("{}.{}", integer_formatted, decimal),
        None => integer_formatted,
    }
}

/// Moneda en el único locale soportado: `$1,234.56`, `-$12.50`
pub fn format_currency(amount: f64) -> String {
    let amount = round_cents(amount);
    let formatted = format_number_with_separators(amount, 2);
    if amount < 0.0 {
        format!("-${}", formatted)
    } else {
        format!("${}", formatted)
    }
}
