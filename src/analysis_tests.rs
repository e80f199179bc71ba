//! Traversal, per-file analysis and directory scan tests.

use super::*;
use crate::methods::profile_for;
use crate::rules::build_rules;
use std::collections::BTreeMap;
use std::fs;

fn analyzer() -> Analyzer {
    Analyzer::from_settings(&Settings::default()).unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

// ─── visit_calls ─────────────────────────────────────────────────────

#[test]
fn test_visit_calls_pre_order() {
    let source = "f(g(1), h());\nk();";
    let mut parser = new_parser(&tree_sitter_typescript::LANGUAGE_TSX.into()).unwrap();
    let tree = parser.parse(source, None).unwrap();
    let mut seen = Vec::new();
    visit_calls(tree.root_node(), &mut |call| {
        let callee = call.child_by_field_name("function").unwrap();
        seen.push(node_text(callee, source).to_string());
    });
    assert_eq!(seen, vec!["f", "g", "h", "k"]);
}

#[test]
fn test_visit_calls_nested_in_functions() {
    let source = "const a = () => { return [1].map(x => inner(x)); };";
    let mut parser = new_parser(&tree_sitter_typescript::LANGUAGE_TSX.into()).unwrap();
    let tree = parser.parse(source, None).unwrap();
    let mut count = 0;
    visit_calls(tree.root_node(), &mut |_| count += 1);
    assert_eq!(count, 2);
}

#[test]
fn test_visit_calls_stays_inside_subtree() {
    let source = "f(g());\nk();";
    let mut parser = new_parser(&tree_sitter_typescript::LANGUAGE_TSX.into()).unwrap();
    let tree = parser.parse(source, None).unwrap();
    let first = tree.root_node().named_child(0).unwrap();
    let mut seen = Vec::new();
    visit_calls(first, &mut |call| seen.push(node_text(call, source).to_string()));
    assert_eq!(seen, vec!["f(g())", "g()"]);

    let leaf = first.named_child(0).unwrap().child_by_field_name("function").unwrap();
    let mut count = 0;
    visit_calls(leaf, &mut |_| count += 1);
    assert_eq!(count, 0);
}

/// Worker threads of the parallel walk run with 2 MiB stacks.
fn on_worker_sized_stack<T: Send + 'static>(job: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(job)
        .unwrap()
        .join()
        .unwrap()
}

#[test]
fn test_deep_concatenation_on_worker_stack() {
    let findings = on_worker_sized_stack(|| {
        let source = format!("var s = {}'a';\n_.map(xs, f);\n", "'a' + ".repeat(5000));
        let mut parser = new_parser(&tree_sitter_typescript::LANGUAGE_TSX.into()).unwrap();
        analyzer().analyze_source(&mut parser, &source)
    });
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 2);
    assert_eq!(findings[0].message, "Use value returned from _.map");
}

#[test]
fn test_long_chain_on_worker_stack() {
    let findings = on_worker_sized_stack(|| {
        let source = format!("_(xs){}.value();\n", ".map(f)".repeat(2000));
        let mut parser = new_parser(&tree_sitter_typescript::LANGUAGE_TSX.into()).unwrap();
        analyzer().analyze_source(&mut parser, &source)
    });
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "Use value returned from _.map");
}

#[test]
fn test_parsers_for_path() {
    let mut parsers = Parsers::new().unwrap();
    // Angle-bracket assertions only parse with the plain TypeScript grammar.
    let source = "const n = <number>value;";
    let ts = parsers.for_path(Path::new("a.ts")).parse(source, None).unwrap();
    assert!(!ts.root_node().has_error());
    let tsx = parsers.for_path(Path::new("a.tsx")).parse(source, None).unwrap();
    assert!(tsx.root_node().has_error());
}

#[test]
fn test_parse_extensions() {
    assert_eq!(parse_extensions(" js, .TS ,,jsx"), vec!["js", "ts", "jsx"]);
    assert_eq!(parse_extensions(DEFAULT_EXTENSIONS).len(), 6);
}

// ─── Analyzer ────────────────────────────────────────────────────────

#[test]
fn test_rule_names() {
    let analyzer = Analyzer::new(
        ResolutionContext::new(profile_for(Version::V4), "_", true),
        build_rules(&BTreeMap::new()).unwrap(),
    );
    assert_eq!(
        analyzer.rule_names(),
        vec!["chaining", "collection-method-value", "identity-shorthand"]
    );
    assert_eq!(analyzer.context().version(), Version::V4);
}

#[test]
fn test_from_settings_unsupported_version() {
    let settings = Settings {
        version: 5,
        ..Settings::default()
    };
    assert!(matches!(
        Analyzer::from_settings(&settings),
        Err(LintError::UnsupportedVersion { version: 5 })
    ));
}

#[test]
fn test_resolved_calls_records() {
    let mut parsers = Parsers::new().unwrap();
    let source = "const ys = _(xs).map(f).value();\nfoo.map(xs, f);\n";
    let records = analyzer().resolved_calls(parsers.for_path(Path::new("a.js")), source);
    let methods: Vec<_> = records.iter().map(|r| r.method).collect();
    assert_eq!(methods, vec!["value", "map"]);

    let map = &records[1];
    assert_eq!(map.style, CallStyle::WrapperChain);
    assert_eq!(map.iteratee.as_deref(), Some("f"));
    assert_eq!(map.chain_depth, Some(0));
    assert_eq!(map.next_method, Some("value"));
    assert_eq!((map.line, map.column), (1, 12));
}

#[test]
fn test_call_record_json_shape() {
    let mut parsers = Parsers::new().unwrap();
    let records = analyzer().resolved_calls(parsers.for_path(Path::new("a.js")), "_.each(xs, f);");
    let json = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(json["method"], "forEach");
    assert_eq!(json["rawMethod"], "each");
    assert_eq!(json["version"], 4);
    assert_eq!(json["style"], "direct");
    assert_eq!(json["parentUsesValue"], false);
    assert!(json.get("chainDepth").is_none());
}

#[test]
fn test_analyze_file_reports_findings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "a.js", "const a = 1;\n_.map(xs, f);\n");
    let mut parsers = Parsers::new().unwrap();
    let report = analyzer().analyze_file(&mut parsers, &path).unwrap();
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].line, 2);
    assert!(report.path.ends_with("a.js"));
}

#[test]
fn test_analyze_file_lossy_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.js");
    let mut bytes = b"// \xFF\xFE\n".to_vec();
    bytes.extend_from_slice(b"_.map(xs, f);\n");
    fs::write(&path, bytes).unwrap();
    let mut parsers = Parsers::new().unwrap();
    let report = analyzer().analyze_file(&mut parsers, &path).unwrap();
    assert_eq!(report.findings.len(), 1);
}

#[test]
fn test_analyze_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let mut parsers = Parsers::new().unwrap();
    let err = analyzer()
        .analyze_file(&mut parsers, &dir.path().join("missing.js"))
        .unwrap_err();
    assert!(matches!(err, LintError::Io(_)));
}

#[test]
fn test_unparsable_source_does_not_abort() {
    let mut parsers = Parsers::new().unwrap();
    let findings = analyzer().analyze_source(
        parsers.for_path(Path::new("a.js")),
        "function ( {{{ \n_.map(xs, f);\n",
    );
    // Error recovery may or may not keep the call; the pass must simply finish.
    assert!(findings.len() <= 1);
}

// ─── analyze_dir ─────────────────────────────────────────────────────

#[test]
fn test_analyze_dir_scans_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.js", "_.map(xs, f);\n");
    write(dir.path(), "sub/b.ts", "const r = _.forEach(xs, f);\n");
    write(dir.path(), "clean.jsx", "const ys = _.map(xs, f);\n");
    write(dir.path(), "notes.md", "_.map(xs, f);\n");

    let report = analyzer().analyze_dir(&ScanOptions::new(dir.path())).unwrap();
    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.files_failed, 0);
    assert_eq!(report.reports.len(), 2);
    assert_eq!(report.finding_count(), 2);
    assert!(report.reports[0].path.ends_with("a.js"));
    assert!(report.reports[1].path.ends_with("b.ts"));
}

#[test]
fn test_analyze_dir_exclude_and_extensions() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/a.js", "_.map(xs, f);\n");
    write(dir.path(), "vendor/b.js", "_.map(xs, f);\n");
    write(dir.path(), "c.ts", "_.map(xs, f);\n");

    let mut options = ScanOptions::new(dir.path());
    options.exclude = Some(Regex::new("vendor").unwrap());
    options.extensions = parse_extensions("js");
    let report = analyzer().analyze_dir(&options).unwrap();
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.reports.len(), 1);
    assert!(report.reports[0].path.ends_with("a.js"));
}

#[test]
fn test_analyze_dir_respects_gitignore() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    write(dir.path(), ".gitignore", "dist/\n");
    write(dir.path(), "dist/bundle.js", "_.map(xs, f);\n");
    write(dir.path(), "a.js", "const ys = _.map(xs, f);\n");

    let report = analyzer().analyze_dir(&ScanOptions::new(dir.path())).unwrap();
    assert_eq!(report.files_scanned, 1);
    assert!(report.reports.is_empty());

    let mut options = ScanOptions::new(dir.path());
    options.no_ignore = true;
    let report = analyzer().analyze_dir(&options).unwrap();
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.reports.len(), 1);
}

#[test]
fn test_analyze_dir_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = analyzer()
        .analyze_dir(&ScanOptions::new(dir.path().join("nope")))
        .unwrap_err();
    assert!(matches!(err, LintError::DirNotFound(_)));
}

#[test]
fn test_scan_report_serializes_camel_case() {
    let report = ScanReport {
        files_scanned: 2,
        files_failed: 1,
        reports: Vec::new(),
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["filesScanned"], 2);
    assert_eq!(json["filesFailed"], 1);
}
