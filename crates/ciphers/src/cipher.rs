/// Lift a per-character cipher to whole-text encoding.
///
/// The returned closure encodes each character independently and
/// concatenates the outputs in order. A cipher may expand a character into
/// several (or none): the output length is whatever the policy produces.
pub fn text_cipher<F>(cipher: F) -> impl Fn(&str) -> String
where
    F: Fn(char) -> String,
{
    move |text| text.chars().map(&cipher).collect()
}

/// Encode text with one of three per-character ciphers, chosen by character
/// class: ASCII vowels (either case), other ASCII letters, and everything
/// else.
pub fn classed_cipher<V, C, O>(
    on_vowel: V,
    on_consonant: C,
    on_other: O,
) -> impl Fn(&str) -> String
where
    V: Fn(char) -> String,
    C: Fn(char) -> String,
    O: Fn(char) -> String,
{
    move |text| {
        let mut result = String::with_capacity(text.len());
        for ch in text.chars() {
            let encoded = if is_ascii_vowel(ch) {
                on_vowel(ch)
            } else if ch.is_ascii_alphabetic() {
                on_consonant(ch)
            } else {
                on_other(ch)
            };
            result.push_str(&encoded);
        }
        result
    }
}

fn is_ascii_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
