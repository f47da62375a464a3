//! Agent name normalization

/// Whitespace as the backend's route matcher sees it.
///
/// This is the ECMAScript `\s` class. It differs from [`char::is_whitespace`]:
/// U+FEFF counts, U+0085 does not.
const fn is_route_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Canonical form of an agent name as it appears in a session route.
///
/// Lowercases the name, then collapses every run of whitespace into a single
/// underscore. The backend resolves agents by this exact form, so the output
/// must not change: whitespace at either end is replaced, not trimmed.
#[must_use]
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if is_route_whitespace(c) {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }

    out
}
