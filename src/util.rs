// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.


/// Remove the last extension of a file name, if any (`a.b.cl` -> `a.b`).
///
/// A leading dot does not start an extension.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i > 0 && !name[i + 1..].is_empty() && !name[i..].contains('/') => &name[..i],
        _ => name,
    }
}

/// Turn an arbitrary string into something usable as a RAPID identifier
/// by replacing all other characters with underscores.
pub fn sanitize_ident(name: &str) -> String {
    name.trim().chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect()
}

/// Whether `name` can stand on its own as a RAPID identifier, i.e. it
/// starts with a letter and contains only letters, digits and underscores.
pub fn is_ident(name: &str) -> bool {
    name.starts_with(|ch: char| ch.is_ascii_alphabetic())
        && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
