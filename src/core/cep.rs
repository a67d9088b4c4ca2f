/// Length of a normalized CEP
const CEP_LEN: usize = 8;

/// Strip hyphens from a raw CEP string
///
/// CEPs are conventionally written with a hyphen after the fifth digit
/// ("01310-100"); upstream lookups want the bare 8-digit form.
pub fn normalize_cep(raw: &str) -> String {
    raw.replace('-', "")
}

/// Validate a normalized CEP
///
/// # Arguments
/// * `cep` - candidate string, already stripped of hyphens
///
/// # Returns
/// true iff the string is exactly 8 ASCII decimal digits
#[inline]
pub fn is_valid_cep(cep: &str) -> bool {
    cep.len() == CEP_LEN && cep.bytes().all(|b| b.is_ascii_digit())
}
