//! End-to-end pipeline tests: a temp source tree in, generated wrappers,
//! manifest and audit listing out.

use clijgen::commands::generate::{run, MANIFEST_FILE, WRAPPED_CLASSES_FILE};
use clijgen::config::GeneratorConfig;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_source(root: &Path, name: &str, content: &str) {
    let dir = root.join("net/haesleinhuepf/clij2/plugins");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write_source(
        root,
        "AbsoluteDifference.java",
        indoc! {r#"
            package net.haesleinhuepf.clij2.plugins;

            @Plugin(type = CLIJMacroPlugin.class, name = "CLIJ2_absoluteDifference")
            public class AbsoluteDifference {
                public static boolean absoluteDifference(CLIJ2 clij2, ClearCLBuffer src1, ClearCLBuffer src2, ClearCLBuffer dst) {
                    return true;
                }
            }
        "#},
    );

    // Two overloads: the one with more scalars must win.
    write_source(
        root,
        "Blur.java",
        indoc! {r#"
            package net.haesleinhuepf.clij2.plugins;

            @Plugin(type = CLIJMacroPlugin.class, name = "CLIJ2_blur2D")
            public class Blur {
                public static boolean blur(CLIJ2 clij2, ClearCLBuffer src, ClearCLBuffer dst, Float sigmaX) {
                    return true;
                }

                public static boolean blur(CLIJ2 clij2, ClearCLBuffer src, ClearCLBuffer dst, Float sigmaX, Float sigmaY) {
                    return true;
                }
            }
        "#},
    );

    write_source(
        root,
        "OldOp.java",
        indoc! {r#"
            package net.haesleinhuepf.clij2.plugins;

            @Deprecated
            public class OldOp {
                public static boolean oldOp(CLIJ2 clij2, ClearCLBuffer src, ClearCLBuffer dst) {
                    return true;
                }
            }
        "#},
    );

    write_source(
        root,
        "Transform.java",
        indoc! {r#"
            package net.haesleinhuepf.clij2.plugins;

            public class Transform {
                public static boolean transform(CLIJ2 clij2, ClearCLBuffer src, AffineTransform3D matrix, ClearCLBuffer dst) {
                    return true;
                }
            }
        "#},
    );

    dir
}

fn config_for(source: &Path, output: &Path) -> GeneratorConfig {
    GeneratorConfig {
        source_root: source.to_path_buf(),
        output_dir: output.to_path_buf(),
        ..GeneratorConfig::default()
    }
}

#[test]
fn generates_wrappers_manifest_and_audit_listing() {
    let source = sample_tree();
    let output = TempDir::new().unwrap();
    let summary = run(&config_for(source.path(), output.path())).unwrap();

    assert_eq!(summary.classes_scanned, 4);
    // AbsoluteDifference + both blur overloads; deprecated and unsupported excluded.
    assert_eq!(summary.methods_retained, 3);
    assert_eq!(summary.overloads_dropped, 1);

    assert!(output.path().join("Clij2AbsoluteDifference.java").exists());
    assert!(output.path().join("Clij2Blur2d.java").exists());
    // 2 wrappers + manifest + audit listing
    assert_eq!(summary.files_written, 4);

    let manifest = fs::read_to_string(output.path().join(MANIFEST_FILE)).unwrap();
    assert_eq!(
        manifest,
        "registerNodeType(\"clij2:absolute-difference\", Clij2AbsoluteDifference.class, UIUtils.getIconURLFromResources(\"apps/clij.png\"));\n\
         registerNodeType(\"clij2:blur-2d\", Clij2Blur2d.class, UIUtils.getIconURLFromResources(\"apps/clij.png\"));\n"
    );

    let audit = fs::read_to_string(output.path().join(WRAPPED_CLASSES_FILE)).unwrap();
    let lines: Vec<&str> = audit.lines().collect();
    assert_eq!(
        lines,
        vec![
            "net.haesleinhuepf.clij2.plugins.AbsoluteDifference",
            "net.haesleinhuepf.clij2.plugins.Blur",
            "net.haesleinhuepf.clij2.plugins.Blur",
        ]
    );
}

#[test]
fn overload_with_more_scalars_becomes_canonical() {
    let source = sample_tree();
    let output = TempDir::new().unwrap();
    run(&config_for(source.path(), output.path())).unwrap();

    let blur = fs::read_to_string(output.path().join("Clij2Blur2d.java")).unwrap();
    assert!(blur.contains("Blur.blur(clij2, src, dst, sigmaX, sigmaY);"));
    assert!(blur.contains("private Float sigmaX;"));
    assert!(blur.contains("private Float sigmaY;"));
    assert!(blur.contains("@JIPipeParameter(\"sigma-y\")"));
}

#[test]
fn multi_input_operation_uses_iterating_base_class() {
    let source = sample_tree();
    let output = TempDir::new().unwrap();
    run(&config_for(source.path(), output.path())).unwrap();

    let wrapper = fs::read_to_string(output.path().join("Clij2AbsoluteDifference.java")).unwrap();
    assert!(wrapper.contains("extends JIPipeIteratingAlgorithm"));
    assert!(wrapper.contains("slotName = \"src1\""));
    assert!(wrapper.contains("slotName = \"src2\""));
    assert!(wrapper.contains("ClearCLBuffer dst = clij2.create(src1);"));
    assert!(wrapper.contains(
        "AbsoluteDifference.absoluteDifference(clij2, src1, src2, dst);"
    ));
}

#[test]
fn descriptions_feed_generated_documentation() {
    let source = sample_tree();
    let output = TempDir::new().unwrap();
    let descriptions = source.path().join("descriptions.json");
    fs::write(
        &descriptions,
        r#"{"net.haesleinhuepf.clij2.plugins.AbsoluteDifference": "Computes |a - b|."}"#,
    )
    .unwrap();

    let mut config = config_for(source.path(), output.path());
    config.descriptions_file = Some(descriptions);
    run(&config).unwrap();

    let wrapper = fs::read_to_string(output.path().join("Clij2AbsoluteDifference.java")).unwrap();
    assert!(wrapper.contains("description = \"Computes |a - b|.\""));

    // Classes without an entry get an empty description.
    let blur = fs::read_to_string(output.path().join("Clij2Blur2d.java")).unwrap();
    assert!(blur.contains("description = \"\""));
}

#[test]
fn missing_description_map_is_not_fatal() {
    let source = sample_tree();
    let output = TempDir::new().unwrap();
    let mut config = config_for(source.path(), output.path());
    config.descriptions_file = Some(source.path().join("does-not-exist.json"));
    assert!(run(&config).is_ok());
}

#[test]
fn malformed_source_file_aborts_the_run() {
    let source = sample_tree();
    write_source(source.path(), "Broken.java", "public class {{{");
    let output = TempDir::new().unwrap();
    assert!(run(&config_for(source.path(), output.path())).is_err());
}

#[test]
fn two_runs_produce_byte_identical_output() {
    let source = sample_tree();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    run(&config_for(source.path(), first.path())).unwrap();
    run(&config_for(source.path(), second.path())).unwrap();

    let mut names: Vec<String> = fs::read_dir(first.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert!(!names.is_empty());
    for name in names {
        let a = fs::read(first.path().join(&name)).unwrap();
        let b = fs::read(second.path().join(&name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
}

#[test]
fn colliding_class_ids_get_suffixed_identifiers() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_source(
        root,
        "MyOpA.java",
        indoc! {r#"
            package net.haesleinhuepf.clij2.plugins;

            @Plugin(type = CLIJMacroPlugin.class, name = "CLIJ2_myOp")
            public class MyOpA {
                public static boolean myOp(CLIJ2 clij2, ClearCLBuffer src, ClearCLBuffer dst) {
                    return true;
                }
            }
        "#},
    );
    write_source(
        root,
        "MyOpB.java",
        indoc! {r#"
            package net.haesleinhuepf.clij2.plugins;

            @Plugin(type = CLIJMacroPlugin.class, name = "CLIJ2_my_op")
            public class MyOpB {
                public static boolean myOp(CLIJ2 clij2, ClearCLBuffer src, ClearCLBuffer dst) {
                    return true;
                }
            }
        "#},
    );

    let output = TempDir::new().unwrap();
    run(&config_for(root, output.path())).unwrap();

    let manifest = fs::read_to_string(output.path().join(MANIFEST_FILE)).unwrap();
    assert!(manifest.contains("\"clij2:my-op\""));
    assert!(manifest.contains("\"clij2:my-op-1\""));
    assert!(output.path().join("Clij2MyOp.java").exists());
    assert!(output.path().join("Clij2MyOp1.java").exists());
}
