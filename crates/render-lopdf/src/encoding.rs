//! Text encoding for the WinAnsi (cp1252) code page the core fonts use.

/// Encodes `text` as WinAnsi bytes. Latin-1 characters map straight
/// through; the cp1252 specials the fonts actually carry (Euro sign, curly
/// quotes, dashes) get their code-page slots; anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{20ac}' => 0x80,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{0020}'..='\u{007e}' => ch as u8,
            '\u{00a0}'..='\u{00ff}' => ch as u8,
            _ => b'?',
        })
        .collect()
}
