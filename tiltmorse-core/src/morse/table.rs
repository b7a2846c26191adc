//! Fixed Morse code table (letters A-Z)

/// Known encodings in alphabet order
pub const SYMBOL_TABLE: [(char, &str); 26] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
];

/// Find the letter encoded by a dot/dash group
pub fn lookup(group: &[u8]) -> Option<char> {
    SYMBOL_TABLE
        .iter()
        .find(|(_, code)| code.as_bytes() == group)
        .map(|&(letter, _)| letter)
}
