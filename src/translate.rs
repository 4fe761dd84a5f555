//! Pure name-to-path-token transforms.

/// Translates a mixed-case identifier into a lowercase path token.
///
/// Uppercase ASCII letters are lowercased and, unless first, preceded by an
/// inserted `-` (`getOne` becomes `get-one`). A `/` is rewritten to `.` so a
/// multi-segment declared value cannot collide with the tree's own `/`-based
/// segment splitting. Everything else passes through unchanged.
///
/// Repeated separators are not normalized; callers that feed
/// already-separator-laden identifiers are responsible for avoiding
/// collisions.
pub fn translate_name(name: &str) -> String {
    let mut token = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        match c {
            'A'..='Z' => {
                if i != 0 {
                    token.push('-');
                }
                token.push(c.to_ascii_lowercase());
            }
            '/' => token.push('.'),
            _ => token.push(c),
        }
    }
    token
}

/// Derives a handler type's group path from its simple name.
///
/// `prefix` is stripped from the front and `suffix` from the end when
/// present, then every uppercase ASCII letter opens a new segment
/// (`UserAccountController` with suffix `Controller` becomes
/// `/user/account`). The result always carries the leading `/` the route
/// tree's insertion contract requires.
pub fn translate_path(name: &str, prefix: &str, suffix: &str) -> String {
    let name = name.strip_prefix(prefix).unwrap_or(name);
    let name = name.strip_suffix(suffix).unwrap_or(name);

    let mut path = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            path.push('/');
            path.push(c.to_ascii_lowercase());
        } else {
            path.push(c);
        }
    }
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    path
}
