use crate::types::{Term, TokenRef};

/// Emits every contiguous window of `window_len` tokens, joined by a single space.
///
/// Returns nothing when the window is longer than the token slice. `window_len` must be at
/// least 1.
pub fn sliding_windows<'a>(
    tokens: &'a [&'a TokenRef],
    window_len: usize,
) -> impl Iterator<Item = Term> + 'a {
    debug_assert!(window_len > 0, "window length must be at least 1");

    tokens.windows(window_len).map(|window| window.join(" "))
}
