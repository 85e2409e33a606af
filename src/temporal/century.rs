/// Century of a year, negative before the common era (year 0 is 1 BCE).
pub fn century(year: i32) -> i32 {
    if year >= 1 {
        (year - 1) / 100 + 1
    } else {
        -((year.unsigned_abs() / 100) as i32) - 1
    }
}

/// Roman numeral for `n` (1..=3999); empty for 0 or anything larger.
pub fn to_roman(n: u32) -> String {
    const TABLE: [(u32, &str); 13] = [
        (1000, "M"), (900, "CM"), (500, "D"), (400, "CD"),
        (100, "C"), (90, "XC"), (50, "L"), (40, "XL"),
        (10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I"),
    ];
    if n == 0 || n > 3999 {
        return String::new();
    }

    let mut out = String::new();
    let mut rest = n;
    for (value, glyph) in TABLE {
        while rest >= value {
            out.push_str(glyph);
            rest -= value;
        }
    }
    out
}

/// Slider label for a year's century, e.g. 1583 -> "XVI", -44 -> "I a.C.".
pub fn century_label(year: i32) -> String {
    let c = century(year);
    let numeral = to_roman(c.unsigned_abs());
    if c < 0 { format!("{numeral} a.C.") } else { numeral }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn century_boundaries() {
        assert_eq!(century(1), 1);
        assert_eq!(century(100), 1);
        assert_eq!(century(101), 2);
        assert_eq!(century(1500), 15);
        assert_eq!(century(1501), 16);
        assert_eq!(century(2000), 20);
        assert_eq!(century(0), -1);
        assert_eq!(century(-99), -1);
        assert_eq!(century(-100), -2);
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(16), "XVI");
        assert_eq!(to_roman(19), "XIX");
        assert_eq!(to_roman(1994), "MCMXCIV");
        assert_eq!(to_roman(0), "");
    }

    #[test]
    fn labels() {
        assert_eq!(century_label(1583), "XVI");
        assert_eq!(century_label(1810), "XIX");
        assert_eq!(century_label(-44), "I a.C.");
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert_eq!(century(i32::MIN), -21_474_837);
        assert_eq!(century(i32::MAX), 21_474_837);
        assert_eq!(century_label(i32::MIN), " a.C.");
        assert_eq!(century_label(i32::MAX), "");
    }
}
