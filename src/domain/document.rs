//! Document number
//!
//! Checksum validation for Brazilian tax identifiers. An account holder is
//! identified either by a CPF (individuals, 11 digits) or a CNPJ (companies,
//! 14 digits). Both end in two mod-11 check digits.

const CPF_LENGTH: usize = 11;
const CNPJ_LENGTH: usize = 14;

/// Weights for the first CNPJ check digit. The second digit uses `6`
/// followed by these same weights.
const CNPJ_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Kind of tax identifier a document number carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas (individual)
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (company)
    Cnpj,
}

impl DocumentKind {
    /// Detect which checksum-valid identifier `document` is, if any.
    pub fn detect(document: &str) -> Option<Self> {
        if is_valid_cpf(document) {
            Some(Self::Cpf)
        } else if is_valid_cnpj(document) {
            Some(Self::Cnpj)
        } else {
            None
        }
    }
}

/// True when `document` is a checksum-valid CPF or CNPJ.
///
/// Only bare digits are accepted; formatted input such as
/// `"805.026.740-75"` is rejected.
pub fn is_document_number_valid(document: &str) -> bool {
    DocumentKind::detect(document).is_some()
}

/// Validate an 11-digit CPF.
pub fn is_valid_cpf(document: &str) -> bool {
    let Some(digits) = parse_digits(document, CPF_LENGTH) else {
        return false;
    };

    let first = check_digit(&digits[..9], |i| 10 - i as u32);
    if digits[9] != first {
        return false;
    }

    let second = check_digit(&digits[..10], |i| 11 - i as u32);
    digits[10] == second
}

/// Validate a 14-digit CNPJ.
pub fn is_valid_cnpj(document: &str) -> bool {
    let Some(digits) = parse_digits(document, CNPJ_LENGTH) else {
        return false;
    };

    let first = check_digit(&digits[..12], |i| CNPJ_WEIGHTS[i]);
    if digits[12] != first {
        return false;
    }

    let second = check_digit(&digits[..13], |i| {
        if i == 0 {
            6
        } else {
            CNPJ_WEIGHTS[i - 1]
        }
    });
    digits[13] == second
}

/// Split `document` into digits, rejecting wrong lengths, non-digits and
/// sequences made of a single repeated digit.
fn parse_digits(document: &str, length: usize) -> Option<Vec<u32>> {
    if document.len() != length {
        return None;
    }

    let digits = document
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()?;

    if digits.iter().all(|&d| d == digits[0]) {
        return None;
    }

    Some(digits)
}

/// Mod-11 check digit: remainders 0 and 1 yield 0, otherwise `11 - r`.
fn check_digit(digits: &[u32], weight: impl Fn(usize) -> u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * weight(i))
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
