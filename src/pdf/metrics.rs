//! Anchos de avance de Helvetica (AFM, milésimas de em).
//!
//! Liberation Sans y Arial comparten estas métricas; cualquier fuente de
//! reserva más estrecha sólo deja espacio de sobra.

const FIRST: u32 = 32;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const NBSP: char = '\u{a0}';
const FALLBACK_WIDTH: u16 = 611;

fn char_width(c: char, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    match c {
        NBSP => table[0],
        c if (FIRST..FIRST + 95).contains(&(c as u32)) => table[(c as u32 - FIRST) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Ancho en puntos de `text` a `size` puntos
pub fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c, bold) as u32).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_widths() {
        // "Hello" en Helvetica: 722 + 556 + 222 + 222 + 556
        assert!((text_width("Hello", 10.0, false) - 22.78).abs() < 1e-3);
        assert!((text_width("Total", 12.0, true) - 12.0 * (611 + 611 + 333 + 556 + 278) as f32 / 1000.0).abs() < 1e-3);
    }

    #[test]
    fn bold_is_never_narrower_for_letters() {
        let sample = "Category Justification Total";
        assert!(text_width(sample, 12.0, true) >= text_width(sample, 12.0, false));
    }

    #[test]
    fn nbsp_measures_as_space() {
        assert_eq!(text_width("\u{a0}", 10.0, false), text_width(" ", 10.0, false));
    }

    #[test]
    fn non_ascii_uses_fallback() {
        assert_eq!(text_width("é", 1000.0, false), FALLBACK_WIDTH as f32);
    }
}
