// Input Normalizer
// Strips the separators ISBNs are printed with. Only a literal space and a
// hyphen are separators; tabs, newlines and every other character survive.

pub const SEPARATORS: [char; 2] = [' ', '-'];

pub fn normalize(raw: &str) -> String {
    raw.replace(SEPARATORS, "")
}
