//! Форматирование цен

/// Форматирует цену с разделителем тысяч (пробел). Дробная часть
/// показывается только когда она есть: бэкенд отдаёт целые цены.
pub fn format_price(value: f64) -> String {
    let has_fraction = value.fract().abs() > 1e-9;
    let formatted = if has_fraction {
        format!("{:.2}", value)
    } else {
        format!("{:.0}", value)
    };

    // Разделяем целую и дробную части
    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Подпись кнопки цены на карточке
pub fn price_label(value: f64) -> String {
    format!("От {} руб.", format_price(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_integer() {
        assert_eq!(format_price(599.0), "599");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(1250.0), "1 250");
        assert_eq!(format_price(1234567.0), "1 234 567");
    }

    #[test]
    fn test_format_price_fractional() {
        assert_eq!(format_price(1234.5), "1 234.50");
        assert_eq!(format_price(99.99), "99.99");
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(599.0), "От 599 руб.");
        assert_eq!(price_label(1250.0), "От 1 250 руб.");
    }
}
