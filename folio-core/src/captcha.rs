//! Arithmetic CAPTCHA for the contact form.

use rand::Rng;

use crate::i18n;

pub const OPERAND_MIN: i32 = 1;
pub const OPERAND_MAX: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Self; 3] = [Self::Add, Self::Subtract, Self::Multiply];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
        }
    }

    const fn eval(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captcha {
    pub lhs: i32,
    pub rhs: i32,
    pub operator: Operator,
}

impl Captcha {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let lhs = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        let rhs = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        let operator = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];
        Self { lhs, rhs, operator }
    }

    /// Text shown in `#captcha-question`, e.g. `7 × 3`.
    #[must_use]
    pub fn question(&self) -> String {
        format!("{} {} {}", self.lhs, self.operator.symbol(), self.rhs)
    }

    #[must_use]
    pub const fn answer(&self) -> i32 {
        self.operator.eval(self.lhs, self.rhs)
    }

    /// Accepts the same inputs a browser `parseInt` would: leading
    /// whitespace, an optional sign, then digits; trailing text is ignored.
    #[must_use]
    pub fn check(&self, input: &str) -> bool {
        parse_leading_int(input) == Some(self.answer())
    }

    #[must_use]
    pub fn aria_label(&self) -> String {
        i18n::tr("captcha.aria", &[("question", &self.question())])
    }
}

fn parse_leading_int(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i32 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn generated_operands_stay_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let captcha = Captcha::generate(&mut rng);
            assert!((OPERAND_MIN..=OPERAND_MAX).contains(&captcha.lhs));
            assert!((OPERAND_MIN..=OPERAND_MAX).contains(&captcha.rhs));
            if !seen.contains(&captcha.operator) {
                seen.push(captcha.operator);
            }
        }
        assert_eq!(seen.len(), Operator::ALL.len());
    }

    #[test]
    fn same_seed_same_question() {
        let a = Captcha::generate(&mut ChaCha20Rng::seed_from_u64(42));
        let b = Captcha::generate(&mut ChaCha20Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn answers_and_questions() {
        let product = Captcha {
            lhs: 7,
            rhs: 3,
            operator: Operator::Multiply,
        };
        assert_eq!(product.question(), "7 × 3");
        assert_eq!(product.answer(), 21);

        let difference = Captcha {
            lhs: 2,
            rhs: 9,
            operator: Operator::Subtract,
        };
        assert_eq!(difference.answer(), -7);
        assert!(difference.check("-7"));
        assert!(difference.check("  -7 apples"));
        assert!(!difference.check("7"));
        assert!(!difference.check(""));
        assert!(!difference.check("abc"));
    }

    #[test]
    fn aria_label_reads_question() {
        i18n::set_lang("ru");
        let captcha = Captcha {
            lhs: 4,
            rhs: 5,
            operator: Operator::Add,
        };
        assert_eq!(captcha.aria_label(), "Введите результат: 4 + 5");
    }
}
