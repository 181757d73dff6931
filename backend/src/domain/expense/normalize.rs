//! Text normalisation shared by the enumerated expense fields.

/// Title-case `value`: the first letter of every alphabetic run is
/// upper-cased and the remaining letters are lower-cased.
///
/// Any non-alphabetic character ends a run, so `"e-wallet"` becomes
/// `"E-Wallet"`.
///
/// # Examples
/// ```
/// use spendwise_backend::domain::title_case;
///
/// assert_eq!(title_case("fOOD"), "Food");
/// assert_eq!(title_case("online shop"), "Online Shop");
/// ```
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
