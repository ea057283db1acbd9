//! Code Generation - Registry to Source Text
//!
//! Output depends only on the registry contents. No timestamps, no
//! environment data: the same directory always renders the same bytes.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::assets::{LogoVariant, OutputFormat, Resolution};
use crate::hashing::canonical_json_pretty;
use crate::naming::{brand_slug, is_js_identifier};
use crate::registry::GeneratedRegistry;

const SECTION_RULE: &str = "// ============================================\n";

pub fn render(registry: &GeneratedRegistry, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Typescript => Ok(render_typescript(registry)),
        OutputFormat::Rust => Ok(render_rust(registry)),
        OutputFormat::Json => render_json(registry),
    }
}

fn brand_upper(registry: &GeneratedRegistry) -> String {
    brand_slug(registry.brand()).replace('-', "_").to_uppercase()
}

fn section(out: &mut String, title: &str) {
    out.push_str(SECTION_RULE);
    out.push_str(&format!("// {}\n", title));
    out.push_str(SECTION_RULE);
    out.push('\n');
}

// --- TypeScript ---

/// Single-quoted TypeScript string literal.
fn ts_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Text placed inside a template literal.
fn ts_template_text(value: &str) -> String {
    value.replace('\\', "\\\\").replace('`', "\\`").replace("${", "\\${")
}

fn ts_key(key: &str) -> String {
    if is_js_identifier(key) { key.to_string() } else { ts_string(key) }
}

pub fn render_typescript(registry: &GeneratedRegistry) -> String {
    let brand = registry.brand();
    let logos_const = format!("{}_LOGOS", brand_upper(registry));
    let svg_dir = ts_template_text(registry.svg_dir());
    let mut out = String::new();

    out.push_str("/**\n");
    out.push_str(&format!(" * {} Art Kit\n", brand));
    out.push_str(&format!(" * Brand assets, logos, and icons for the {} ecosystem\n", brand));
    out.push_str(" *\n");
    out.push_str(" * AUTO-GENERATED FILE - DO NOT EDIT MANUALLY\n");
    out.push_str(" * This file is generated at build time by artkit-gen\n");
    out.push_str(" *\n");
    out.push_str(" * To add/remove icons:\n");
    out.push_str(&format!(" * 1. Add/remove SVG files in {}/\n", registry.svg_dir()));
    out.push_str(" * 2. Run: artkit-gen\n");
    if let Ok(url) = registry.logo_svg_url(LogoVariant::Logo) {
        out.push_str(" *\n");
        out.push_str(" * Usage in Markdown:\n");
        out.push_str(&format!(" *   ![{} Logo]({})\n", brand, url));
    }
    out.push_str(" */\n\n");

    out.push_str(&format!("const GITHUB_RAW_BASE = {};\n\n", ts_string(registry.base_url())));

    section(&mut out, "Brand Logos");
    for logo in registry.logos() {
        out.push_str(&format!(
            "export const {} = `${{GITHUB_RAW_BASE}}/{}/{}`;\n",
            logo.constant_name,
            svg_dir,
            ts_template_text(&logo.filename)
        ));
    }

    out.push_str("\n// Logo variations by resolution\n");
    out.push_str(&format!("export const {} = {{\n", logos_const));
    out.push_str("  svg: {\n");
    for logo in registry.logos() {
        out.push_str(&format!("    {}: {},\n", logo.variant.key(), logo.constant_name));
    }
    out.push_str("  },\n");
    out.push_str("  png: {\n");
    for resolution in Resolution::ALL {
        out.push_str(&format!("    {}: {{\n", ts_string(resolution.label())));
        for logo in registry.logos() {
            out.push_str(&format!(
                "      {}: `${{GITHUB_RAW_BASE}}/{}/{}`,\n",
                logo.variant.key(),
                resolution.label(),
                ts_template_text(&logo.png_filename(resolution))
            ));
        }
        out.push_str("    },\n");
    }
    out.push_str("  },\n");
    out.push_str("};\n\n");

    section(&mut out, &format!("Icon Set ({} icons)", registry.icon_count()));
    out.push_str("export const ICONS = {\n");
    for icon in registry.icons() {
        out.push_str(&format!(
            "  {}: `${{GITHUB_RAW_BASE}}/{}/{}`,\n",
            ts_key(&icon.identifier),
            svg_dir,
            ts_template_text(&icon.filename)
        ));
    }
    out.push_str("} as const;\n\n");

    section(&mut out, "Helper Functions");
    out.push_str(&TS_HELPERS
        .replace("__LOGOS__", &logos_const)
        .replace("__BRAND__", &ts_string(brand)));
    out.push('\n');

    section(&mut out, "Type Exports");
    out.push_str("export type IconName = keyof typeof ICONS;\n");
    let variants: Vec<_> = LogoVariant::ALL.iter().map(|v| ts_string(v.key())).collect();
    out.push_str(&format!("export type LogoVariant = {};\n", variants.join(" | ")));
    let resolutions: Vec<_> = Resolution::ALL.iter().map(|r| ts_string(r.label())).collect();
    out.push_str(&format!("export type LogoResolution = {};\n", resolutions.join(" | ")));

    out
}

const TS_HELPERS: &str = r#"function escapeAttr(value: string): string {
  return value
    .replace(/&/g, '&amp;')
    .replace(/"/g, '&quot;')
    .replace(/</g, '&lt;')
    .replace(/>/g, '&gt;');
}

function imageTag(url: string, alt: string, width?: number): string {
  const widthAttr = width ? ` width="${width}"` : '';
  return `<img src="${escapeAttr(url)}" alt="${escapeAttr(alt)}"${widthAttr} />`;
}

/**
 * Generate markdown image tag for an icon
 * @param iconName - Name of the icon (from ICONS keys)
 * @param altText - Alt text for the image
 * @param width - Optional width
 * @throws Error when the icon is not in ICONS
 */
export function markdownIcon(
  iconName: keyof typeof ICONS,
  altText?: string,
  width?: number
): string {
  const url: string | undefined = (ICONS as Record<string, string>)[iconName];
  if (url === undefined) {
    throw new Error(`Unknown icon: ${iconName}`);
  }
  return imageTag(url, altText || iconName, width);
}

/**
 * Generate markdown image tag for a brand logo
 * @param variant - Logo variant ('icon' | 'logo' | 'logoWithName')
 * @param altText - Alt text for the image
 * @param width - Optional width
 * @throws Error when the variant was not found in the SVG directory
 */
export function markdownLogo(
  variant: LogoVariant = 'logo',
  altText: string = __BRAND__,
  width?: number
): string {
  const url = (__LOGOS__.svg as Partial<Record<LogoVariant, string>>)[variant];
  if (url === undefined) {
    throw new Error(`Logo variant not present: ${variant}`);
  }
  return imageTag(url, altText, width);
}

/**
 * Get all icon names
 */
export function getIconNames(): Array<keyof typeof ICONS> {
  return Object.keys(ICONS) as Array<keyof typeof ICONS>;
}

/**
 * Get icon URL by name
 */
export function getIconUrl(iconName: keyof typeof ICONS): string {
  return ICONS[iconName];
}
"#;

// --- Rust ---

pub fn render_rust(registry: &GeneratedRegistry) -> String {
    let logo_count = registry.logo_count();
    let icon_count = registry.icon_count();
    let mut out = String::new();

    out.push_str(&format!("//! {} Art Kit\n", registry.brand()));
    out.push_str("//!\n");
    out.push_str("//! AUTO-GENERATED FILE - DO NOT EDIT MANUALLY\n");
    out.push_str(&format!(
        "//! Generated by artkit-gen from `{}/`. Add or remove SVG files there and re-run it.\n\n",
        registry.svg_dir()
    ));

    out.push_str(&format!("pub const BASE_URL: &str = {:?};\n\n", registry.base_url()));

    section(&mut out, "Brand Logos");
    for logo in registry.logos() {
        out.push_str(&format!("pub const {}: &str = {:?};\n", logo.constant_name, logo.url));
    }
    out.push('\n');

    let variants: Vec<_> = LogoVariant::ALL.iter().map(|v| format!("{:?}", v.key())).collect();
    out.push_str(&format!("pub const LOGO_VARIANTS: [&str; {}] = [{}];\n", variants.len(), variants.join(", ")));
    let resolutions: Vec<_> = Resolution::ALL.iter().map(|r| format!("{:?}", r.label())).collect();
    out.push_str(&format!(
        "pub const LOGO_RESOLUTIONS: [&str; {}] = [{}];\n\n",
        resolutions.len(),
        resolutions.join(", ")
    ));

    out.push_str(&format!("pub const LOGOS_SVG: [(&str, &str); {}] = [\n", logo_count));
    for logo in registry.logos() {
        out.push_str(&format!("    ({:?}, {}),\n", logo.variant.key(), logo.constant_name));
    }
    out.push_str("];\n\n");

    out.push_str(&format!(
        "pub const LOGOS_PNG: [(&str, [(&str, &str); {}]); {}] = [\n",
        logo_count,
        Resolution::ALL.len()
    ));
    for resolution in Resolution::ALL {
        out.push_str(&format!("    ({:?}, [\n", resolution.label()));
        for logo in registry.logos() {
            let url = format!("{}/{}/{}", registry.base_url(), resolution.label(), logo.png_filename(resolution));
            out.push_str(&format!("        ({:?}, {:?}),\n", logo.variant.key(), url));
        }
        out.push_str("    ]),\n");
    }
    out.push_str("];\n\n");

    section(&mut out, &format!("Icon Set ({} icons)", icon_count));
    out.push_str("/// Sorted by name.\n");
    out.push_str(&format!("pub const ICONS: [(&str, &str); {}] = [\n", icon_count));
    for icon in registry.icons() {
        out.push_str(&format!("    ({:?}, {:?}),\n", icon.identifier, icon.url));
    }
    out.push_str("];\n\n");

    let names: Vec<_> = registry.icon_names().iter().map(|n| format!("{:?}", n)).collect();
    out.push_str(&format!("pub const ICON_NAMES: [&str; {}] = [\n", icon_count));
    for name in names {
        out.push_str(&format!("    {},\n", name));
    }
    out.push_str("];\n\n");

    section(&mut out, "Helper Functions");
    out.push_str(&RUST_HELPERS.replace("__BRAND__", &format!("{:?}", registry.brand())));

    out
}

const RUST_HELPERS: &str = r#"pub fn icon_url(name: &str) -> Option<&'static str> {
    ICONS
        .binary_search_by(|(key, _)| (*key).cmp(name))
        .ok()
        .map(|index| ICONS[index].1)
}

pub fn logo_svg_url(variant: &str) -> Option<&'static str> {
    LOGOS_SVG.iter().find(|(key, _)| *key == variant).map(|(_, url)| *url)
}

/// `<img>` tag for an icon. Alt text falls back to the icon name.
pub fn markdown_icon(name: &str, alt: Option<&str>, width: Option<u32>) -> Option<String> {
    let url = icon_url(name)?;
    let alt = alt.filter(|a| !a.is_empty()).unwrap_or(name);
    Some(image_tag(url, alt, width))
}

/// `<img>` tag for a brand logo. Defaults to the `logo` variant.
pub fn markdown_logo(variant: Option<&str>, alt: Option<&str>, width: Option<u32>) -> Option<String> {
    let url = logo_svg_url(variant.unwrap_or("logo"))?;
    Some(image_tag(url, alt.unwrap_or(__BRAND__), width))
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn image_tag(url: &str, alt: &str, width: Option<u32>) -> String {
    let width_attr = match width {
        Some(w) if w > 0 => format!(" width=\"{}\"", w),
        _ => String::new(),
    };
    format!("<img src=\"{}\" alt=\"{}\"{} />", escape_attr(url), escape_attr(alt), width_attr)
}
"#;

// --- JSON ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    base_url: &'a str,
    brand: &'a str,
    logos: LogoManifest<'a>,
    icons: BTreeMap<&'a str, &'a str>,
}

#[derive(Serialize)]
struct LogoManifest<'a> {
    svg: BTreeMap<&'a str, &'a str>,
    png: BTreeMap<&'static str, BTreeMap<&'a str, String>>,
}

pub fn render_json(registry: &GeneratedRegistry) -> Result<String, serde_json::Error> {
    let svg = registry.logos().map(|l| (l.variant.key(), l.url.as_str())).collect();

    let png = Resolution::ALL
        .into_iter()
        .map(|resolution| {
            let urls = registry
                .logos()
                .map(|l| {
                    let url = format!("{}/{}/{}", registry.base_url(), resolution.label(), l.png_filename(resolution));
                    (l.variant.key(), url)
                })
                .collect();
            (resolution.label(), urls)
        })
        .collect();

    let manifest = Manifest {
        base_url: registry.base_url(),
        brand: registry.brand(),
        logos: LogoManifest { svg, png },
        icons: registry.icons().map(|i| (i.identifier.as_str(), i.url.as_str())).collect(),
    };

    canonical_json_pretty(&manifest)
}
