// Shape Classifier

/// Classification of a normalized candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Nine ASCII digits followed by a digit or `X`/`x`
    Isbn10,
    /// Thirteen ASCII digits
    Isbn13,
    Unrecognized,
}

pub fn classify(candidate: &str) -> Shape {
    if is_isbn10_shaped(candidate) {
        Shape::Isbn10
    } else if is_isbn13_shaped(candidate) {
        Shape::Isbn13
    } else {
        Shape::Unrecognized
    }
}

fn is_isbn10_shaped(candidate: &str) -> bool {
    // Any non-ASCII char makes the byte length differ or fails the digit test.
    match candidate.as_bytes() {
        [body @ .., check] if body.len() == 9 => {
            body.iter().all(u8::is_ascii_digit)
                && (check.is_ascii_digit() || check.eq_ignore_ascii_case(&b'X'))
        }
        _ => false,
    }
}

fn is_isbn13_shaped(candidate: &str) -> bool {
    candidate.len() == 13 && candidate.bytes().all(|b| b.is_ascii_digit())
}
