//! Naming - Filename to Identifier Derivation
//!
//! Pure string functions. Nothing here touches the filesystem, so every
//! naming edge case can be tested directly.

pub const SVG_EXTENSION: &str = ".svg";

/// Derive the registry identifier for `filename`.
///
/// Strips the `.svg` extension and `prefix`, then converts the kebab-case
/// remainder to camelCase. Returns `None` when no segment is left.
///
/// `icon-trending-up.svg` with prefix `icon-` gives `trendingUp`.
pub fn derive_identifier(filename: &str, prefix: &str) -> Option<String> {
    let stem = filename.strip_suffix(SVG_EXTENSION).unwrap_or(filename);
    let stem = stem.strip_prefix(prefix).unwrap_or(stem);
    kebab_to_camel(stem)
}

/// Convert `kebab-case` to `camelCase`.
///
/// Empty segments (leading, trailing or doubled hyphens) are dropped. The
/// first segment is kept verbatim and each later segment has its first
/// character upper-cased, so digits pass through: `arrow-2x` -> `arrow2x`.
pub fn kebab_to_camel(name: &str) -> Option<String> {
    let mut segments = name.split('-').filter(|s| !s.is_empty());
    let mut out = String::from(segments.next()?);

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    Some(out)
}

/// `logoWithName` -> `LOGO_WITH_NAME`
pub fn screaming_snake(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for (i, c) in identifier.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(c.to_uppercase());
    }
    out
}

/// Lower-case slug used as the logo filename prefix: `Pulsar` -> `pulsar`.
pub fn brand_slug(brand: &str) -> String {
    let slug: String = brand
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    slug.trim_matches('-').to_string()
}

/// Constant name for a brand logo, e.g. `PULSAR_LOGO_WITH_NAME_SVG`.
pub fn logo_constant_name(brand: &str, variant_key: &str) -> String {
    let brand = brand_slug(brand).replace('-', "_").to_uppercase();
    format!("{}_{}_SVG", brand, screaming_snake(variant_key))
}

/// Whether `name` can be written as a bare object key in TypeScript.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape `&`, `"`, `<` and `>` for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
