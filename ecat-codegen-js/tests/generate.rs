//! Driver tests against a real directory.

use std::{fs, str::FromStr};

use ecat_codegen::pipeline::{CompilationContext, Pipeline};
use ecat_codegen_js::{Generator, ModuleStatus};
use ecat_manifest::ModuleConfig;
use tempfile::TempDir;

fn modules(entries: &[(&str, &str)]) -> String {
    let sub_modules: Vec<String> = entries
        .iter()
        .map(|(module, mtype)| {
            format!(
                r#"{{ "module": "{module}", "mtype": "{mtype}", "module_routes": [
                    {{ "name": "Index", "path": "index", "component": "views/Index" }}
                ] }}"#
            )
        })
        .collect();

    format!(
        r#"{{ "module_path": "/system/", "module_name": "sys", "sub_modules": [{}] }}"#,
        sub_modules.join(",")
    )
}

fn check(config_json: &str) -> eyre::Result<CompilationContext> {
    let config = ModuleConfig::from_str(config_json).expect("valid config");
    let variant = config.variant();
    Pipeline::new().run(config, variant)
}

#[test]
fn test_every_module_gets_its_files() {
    let temp = TempDir::new().unwrap();
    let ctx = check(&modules(&[("a", "a"), ("b", "b"), ("c", "c")])).unwrap();

    let result = Generator::from_context(&ctx).generate(temp.path());

    assert!(!result.has_failures());
    assert_eq!(result.modules.len(), 3);
    for module in ["a", "b", "c"] {
        let dir = temp.path().join(module);
        assert!(dir.join(".config.js").is_file());
        assert!(dir.join(".index.js").is_file());
        assert!(dir.join("utils").join("request.js").is_file());
    }
}

#[test]
fn test_duplicate_mtype_writes_nothing() {
    let temp = TempDir::new().unwrap();

    let err = check(&modules(&[("a", "shared"), ("b", "b"), ("c", "shared")])).unwrap_err();

    assert!(err.to_string().contains("'shared'"));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_blocked_module_does_not_stop_others() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b"), "not a directory").unwrap();
    let ctx = check(&modules(&[("a", "a"), ("b", "b"), ("c", "c")])).unwrap();

    let result = Generator::from_context(&ctx).generate(temp.path());

    let statuses: Vec<(&str, bool)> = result
        .modules
        .iter()
        .map(|m| (m.module.as_str(), m.is_failed()))
        .collect();
    assert_eq!(statuses, [("a", false), ("b", true), ("c", false)]);

    assert!(temp.path().join("a").join(".config.js").is_file());
    assert!(temp.path().join("c").join(".config.js").is_file());
    assert!(temp.path().join("b").is_file());
}

#[test]
fn test_failed_module_leaves_no_partial_output() {
    let temp = TempDir::new().unwrap();
    let b = temp.path().join("b");
    fs::create_dir(&b).unwrap();
    fs::write(b.join("utils"), "not a directory").unwrap();
    let ctx = check(&modules(&[("a", "a"), ("b", "b"), ("c", "c")])).unwrap();

    let result = Generator::from_context(&ctx).generate(temp.path());

    let failed: Vec<&str> = result.failed().map(|m| m.module.as_str()).collect();
    assert_eq!(failed, ["b"]);
    assert!(!b.join(".config.js").exists());
    assert!(!b.join(".index.js").exists());
    assert!(temp.path().join("a").join(".index.js").is_file());
    assert!(temp.path().join("c").join(".index.js").is_file());
}

#[test]
fn test_regeneration_failure_keeps_previous_output() {
    let temp = TempDir::new().unwrap();
    let ctx = check(&modules(&[("a", "a")])).unwrap();
    let generator = Generator::from_context(&ctx);
    let dir = temp.path().join("a");

    generator.generate(temp.path());
    fs::write(dir.join(".config.js"), "// previous").unwrap();
    fs::remove_file(dir.join("utils").join("request.js")).unwrap();
    fs::create_dir(dir.join("utils").join("request.js")).unwrap();

    let result = generator.generate(temp.path());

    assert!(result.has_failures());
    assert_eq!(
        fs::read_to_string(dir.join(".config.js")).unwrap(),
        "// previous"
    );
}

#[test]
fn test_duplicate_route_name_fails_only_that_module() {
    let temp = TempDir::new().unwrap();
    let ctx = check(
        r#"{
            "module_path": "/system/",
            "module_name": "sys",
            "sub_modules": [
                { "module": "bad", "mtype": "bad", "module_routes": [
                    { "name": "Page", "path": "a", "component": "a/Index" },
                    { "name": "Page", "path": "b", "component": "b/Index" }
                ] },
                { "module": "good", "mtype": "good", "module_routes": [
                    { "name": "Page", "path": "a", "component": "a/Index" }
                ] }
            ]
        }"#,
    )
    .unwrap();

    let result = Generator::from_context(&ctx).generate(temp.path());

    let failed: Vec<&str> = result.failed().map(|m| m.module.as_str()).collect();
    assert_eq!(failed, ["bad"]);
    match &result.modules[0].status {
        ModuleStatus::Failed(err) => assert!(err.to_string().contains("Page")),
        other => panic!("unexpected status: {other:?}"),
    }
    assert!(!temp.path().join("bad").exists());
    assert!(temp.path().join("good").join(".config.js").is_file());
}

#[test]
fn test_regeneration_overwrites_but_keeps_api_js() {
    let temp = TempDir::new().unwrap();
    let config = r#"{
        "module_path": "/system/",
        "module_name": "sys",
        "variant": "flat",
        "sub_modules": [
            { "module": "demo", "mtype": "demo", "module_routes": [
                { "name": "List", "path": "list", "component": "list/Index", "entry": true }
            ] }
        ]
    }"#;
    let ctx = check(config).unwrap();
    let generator = Generator::from_context(&ctx);

    generator.generate(temp.path());
    let dir = temp.path().join("demo");
    fs::write(dir.join("api.js"), "// mine").unwrap();
    fs::write(dir.join(".config.js"), "// stale").unwrap();

    let result = generator.generate(temp.path());

    assert!(!result.has_failures());
    assert_eq!(fs::read_to_string(dir.join("api.js")).unwrap(), "// mine");
    assert!(
        fs::read_to_string(dir.join(".config.js"))
            .unwrap()
            .contains("export const routes")
    );
}

#[test]
fn test_preview_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let ctx = check(&modules(&[("a", "a")])).unwrap();

    let result = Generator::from_context(&ctx).preview(temp.path());

    match &result.modules[0].status {
        ModuleStatus::Preview(files) => assert_eq!(files.len(), 3),
        other => panic!("unexpected status: {other:?}"),
    }
    assert!(!temp.path().join("a").exists());
}
