//! Contract Invariant Tests
//!
//! These tests verify the generator's guarantees against fixture directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use artkit_core::{
    codegen, GenerationPipeline, GeneratorConfig, LogoVariant, LookupError, OutputFormat,
    PipelineError, Resolution, ValidationPolicy,
};
use tempfile::{tempdir, TempDir};

const BASE: &str = "https://cdn.example.test/art-kit";

fn create_asset_root(files: &[&str]) -> TempDir {
    let root = tempdir().unwrap();
    let svg = root.path().join("SVG");
    fs::create_dir_all(&svg).unwrap();
    for name in files {
        fs::write(svg.join(name), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
    }
    root
}

fn test_config() -> GeneratorConfig {
    GeneratorConfig {
        base_url: BASE.to_string(),
        ..GeneratorConfig::default()
    }
}

fn standard_files() -> Vec<&'static str> {
    vec![
        "pulsar-icon.svg",
        "pulsar-logo.svg",
        "pulsar-logo-name.svg",
        "icon-search.svg",
        "icon-trending-up.svg",
        "icon-git-branch.svg",
        "icon-api.svg",
    ]
}

#[test]
fn invariant_regeneration_is_byte_identical() {
    let root = create_asset_root(&standard_files());

    for format in [OutputFormat::Typescript, OutputFormat::Rust, OutputFormat::Json] {
        let config = GeneratorConfig { format, ..test_config() };
        let pipeline = GenerationPipeline::new(root.path(), config);

        let first = pipeline.generate().unwrap();
        let bytes1 = fs::read(pipeline.output_path()).unwrap();
        let second = pipeline.generate().unwrap();
        let bytes2 = fs::read(pipeline.output_path()).unwrap();

        assert_eq!(bytes1, bytes2);
        assert_eq!(first.content_hash, second.content_hash);
        assert!(first.changed);
        assert!(!second.changed);
    }
}

#[test]
fn invariant_icon_identifier_and_url() {
    let root = create_asset_root(&standard_files());
    let pipeline = GenerationPipeline::new(root.path(), test_config());
    let (registry, _) = pipeline.build_registry().unwrap();

    assert_eq!(
        registry.icon_url("trendingUp").unwrap(),
        format!("{}/SVG/icon-trending-up.svg", BASE)
    );
    assert!(registry.icon_url("gitBranch").unwrap().ends_with("/icon-git-branch.svg"));
    assert_eq!(registry.icon_count(), 4);
}

#[test]
fn invariant_logos_recognised_by_exact_name() {
    let mut files = standard_files();
    files.extend(["pulsar-logo-dark.svg", "pulsar-.svg", "pulsar-icon-old.svg"]);
    let root = create_asset_root(&files);
    let pipeline = GenerationPipeline::new(root.path(), test_config());

    let (registry, validation) = pipeline.build_registry().unwrap();
    assert_eq!(registry.logo_count(), 3);
    assert_eq!(validation.violations.len(), 3);

    let ts = codegen::render_typescript(&registry);
    assert_eq!(ts.matches("export const PULSAR_ICON_SVG = ").count(), 1);
    assert_eq!(ts.matches("export const PULSAR_LOGO_SVG = ").count(), 1);
    assert_eq!(ts.matches("export const PULSAR_LOGO_WITH_NAME_SVG = ").count(), 1);
    assert!(!ts.contains("logo-dark"));
    assert!(!ts.contains("icon-old"));
}

#[test]
fn invariant_resolution_suffix_rule() {
    let root = create_asset_root(&standard_files());
    let pipeline = GenerationPipeline::new(root.path(), test_config());
    let (registry, _) = pipeline.build_registry().unwrap();

    for variant in LogoVariant::ALL {
        let stem = format!("pulsar-{}", variant.file_stem());
        for resolution in Resolution::ALL {
            let url = registry.logo_png_url(variant, resolution).unwrap();
            let expected = match resolution {
                Resolution::One | Resolution::Width200 => format!("{}.png", stem),
                _ => format!("{}@{}.png", stem, resolution.label()),
            };
            assert_eq!(url, format!("{}/{}/{}", BASE, resolution.label(), expected));
        }
    }
}

#[test]
fn invariant_markdown_icon() {
    let root = create_asset_root(&standard_files());
    let pipeline = GenerationPipeline::new(root.path(), test_config());
    let (registry, _) = pipeline.build_registry().unwrap();

    let url = registry.icon_url("search").unwrap().to_string();
    let tag = registry.markdown_icon("search", None, None).unwrap();
    assert!(tag.contains(&format!(r#"src="{}""#, url)));
    assert!(tag.contains(r#"alt="search""#));
    assert!(!tag.contains("width"));

    let tag = registry.markdown_icon("search", None, Some(24)).unwrap();
    assert!(tag.contains(r#"width="24""#));

    assert_eq!(
        registry.markdown_icon("nonexistent", None, None),
        Err(LookupError::UnknownIcon("nonexistent".to_string()))
    );
}

#[test]
fn invariant_markdown_logo_defaults() {
    let root = create_asset_root(&standard_files());
    let pipeline = GenerationPipeline::new(root.path(), test_config());
    let (registry, _) = pipeline.build_registry().unwrap();

    let tag = registry.markdown_logo(None, None, None).unwrap();
    assert_eq!(
        tag,
        format!(r#"<img src="{}/SVG/pulsar-logo.svg" alt="Pulsar" />"#, BASE)
    );
}

#[test]
fn invariant_icons_strictly_ascending() {
    let root = create_asset_root(&[
        "icon-zoom-in.svg",
        "icon-arrow-2x.svg",
        "icon-bell.svg",
        "icon-3d-cube.svg",
        "icon-arrow.svg",
    ]);
    let pipeline = GenerationPipeline::new(root.path(), test_config());
    let (registry, _) = pipeline.build_registry().unwrap();

    let names = registry.icon_names();
    assert!(names.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(names, ["3dCube", "arrow", "arrow2x", "bell", "zoomIn"]);
}

#[test]
fn invariant_collision_is_fatal() {
    let root = create_asset_root(&["icon-foo-bar.svg", "icon-foo--bar.svg", "icon-search.svg"]);
    let pipeline = GenerationPipeline::new(root.path(), test_config());

    let err = pipeline.generate().unwrap_err();
    assert!(matches!(err, PipelineError::ValidationFailed(_)));
    assert!(err.to_string().contains("fooBar"));
    assert!(!pipeline.output_path().exists());
}

#[test]
fn invariant_strict_policy_blocks_unknown_variant() {
    let root = create_asset_root(&["pulsar-logo.svg", "pulsar-logo-dark.svg"]);

    let lenient = GenerationPipeline::new(root.path(), test_config());
    assert!(lenient.generate().is_ok());
    fs::remove_file(lenient.output_path()).unwrap();

    let config = GeneratorConfig { policy: ValidationPolicy::Strict, ..test_config() };
    let strict = GenerationPipeline::new(root.path(), config);
    assert!(matches!(strict.generate(), Err(PipelineError::ValidationFailed(_))));
    assert!(!strict.output_path().exists());
}

#[test]
fn invariant_output_fully_overwritten() {
    let root = create_asset_root(&standard_files());
    let pipeline = GenerationPipeline::new(root.path(), test_config());
    fs::write(pipeline.output_path(), "// stale content that must disappear\n").unwrap();

    pipeline.generate().unwrap();
    let content = fs::read_to_string(pipeline.output_path()).unwrap();
    assert!(!content.contains("stale content"));
    assert!(content.starts_with("/**\n * Pulsar Art Kit\n"));
}

#[test]
fn invariant_check_detects_stale_output() {
    let root = create_asset_root(&standard_files());
    let pipeline = GenerationPipeline::new(root.path(), test_config());

    let report = pipeline.check().unwrap();
    assert!(report.changed);
    assert!(!report.written);
    assert!(!pipeline.output_path().exists());

    pipeline.generate().unwrap();
    assert!(!pipeline.check().unwrap().changed);

    fs::write(root.path().join("SVG/icon-new.svg"), "<svg/>").unwrap();
    assert!(pipeline.check().unwrap().changed);
}

#[test]
fn invariant_base_url_is_configuration() {
    let root = create_asset_root(&["icon-search.svg"]);
    let config = GeneratorConfig {
        base_url: "http://localhost:8080/kit/".to_string(),
        ..GeneratorConfig::default()
    };
    let pipeline = GenerationPipeline::new(root.path(), config);
    let (registry, _) = pipeline.build_registry().unwrap();

    assert_eq!(registry.icon_url("search").unwrap(), "http://localhost:8080/kit/SVG/icon-search.svg");
}

// --- CLI ---

fn artkit_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_artkit-gen"));
    cmd.arg("--root").arg(root);
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn invariant_cli_success_and_check() {
    let root = create_asset_root(&standard_files());

    let output = artkit_cmd(root.path()).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(root.path().join("index.ts").exists());

    let output = artkit_cmd(root.path()).arg("--check").output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    fs::write(root.path().join("SVG/icon-extra.svg"), "<svg/>").unwrap();
    let output = artkit_cmd(root.path()).arg("--check").output().unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn invariant_cli_missing_directory_fails() {
    let root = tempdir().unwrap();
    let output = artkit_cmd(root.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read asset directory"));
    assert!(!root.path().join("index.ts").exists());
}

#[test]
fn invariant_cli_collision_exit_code() {
    let root = create_asset_root(&["icon-foo-bar.svg", "icon-fooBar.svg"]);
    let output = artkit_cmd(root.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn invariant_cli_json_report() {
    let root = create_asset_root(&standard_files());
    let output = artkit_cmd(root.path())
        .args(["--format", "rust", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["iconCount"], 4);
    assert_eq!(report["logoCount"], 3);
    assert_eq!(report["format"], "rust");
    assert!(root.path().join("index.rs").exists());
}
