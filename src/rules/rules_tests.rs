//! Rule configuration and end-to-end finding tests.

use super::*;
use crate::analysis::{new_parser, Analyzer};
use crate::settings::Settings;

fn settings(version: u8) -> Settings {
    Settings {
        version,
        ..Settings::default()
    }
}

fn lint(settings: &Settings, source: &str) -> Vec<Finding> {
    let analyzer = Analyzer::from_settings(settings).unwrap();
    let mut parser = new_parser(&tree_sitter_typescript::LANGUAGE_TSX.into()).unwrap();
    analyzer.analyze_source(&mut parser, source)
}

fn messages(settings: &Settings, source: &str) -> Vec<String> {
    lint(settings, source).into_iter().map(|f| f.message).collect()
}

fn config(pairs: &[(&str, RuleSetting)]) -> BTreeMap<String, RuleSetting> {
    pairs
        .iter()
        .map(|(name, setting)| (name.to_string(), setting.clone()))
        .collect()
}

fn names(rules: &[Box<dyn Rule>]) -> Vec<&'static str> {
    rules.iter().map(|rule| rule.name()).collect()
}

// ─── build_rules ─────────────────────────────────────────────────────

#[test]
fn test_build_rules_defaults_enable_everything() {
    let rules = build_rules(&BTreeMap::new()).unwrap();
    assert_eq!(names(&rules), RULE_NAMES.to_vec());
}

#[test]
fn test_build_rules_toggle_off() {
    let rules = build_rules(&config(&[
        ("chaining", RuleSetting::Toggle(false)),
        ("identity-shorthand", RuleSetting::Toggle(false)),
    ]))
    .unwrap();
    assert_eq!(names(&rules), vec!["collection-method-value"]);
}

#[test]
fn test_build_rules_unknown_name() {
    let err = build_rules(&config(&[("no-such-rule", RuleSetting::Toggle(true))])).err().unwrap();
    assert!(matches!(err, LintError::UnknownRule { ref name } if name == "no-such-rule"));
}

#[test]
fn test_build_rules_invalid_options() {
    let err = build_rules(&config(&[("chaining", RuleSetting::Mode("sometimes".into()))]))
        .err()
        .unwrap();
    assert!(matches!(err, LintError::InvalidRuleOption { ref rule, .. } if rule == "chaining"));

    let err = build_rules(&config(&[("identity-shorthand", RuleSetting::Mode("maybe".into()))]))
        .err()
        .unwrap();
    assert!(err.to_string().contains("always, never"));
}

#[test]
fn test_shorthand_mode_from_setting() {
    assert_eq!(ShorthandMode::from_setting(None).unwrap(), Some(ShorthandMode::Always));
    assert_eq!(
        ShorthandMode::from_setting(Some(&RuleSetting::Mode("never".into()))).unwrap(),
        Some(ShorthandMode::Never)
    );
    assert_eq!(ShorthandMode::from_setting(Some(&RuleSetting::Toggle(false))).unwrap(), None);
}

#[test]
fn test_rule_setting_from_str() {
    assert_eq!("true".parse::<RuleSetting>().unwrap(), RuleSetting::Toggle(true));
    assert_eq!("off".parse::<RuleSetting>().unwrap(), RuleSetting::Toggle(false));
    assert_eq!(
        "never".parse::<RuleSetting>().unwrap(),
        RuleSetting::Mode("never".to_string())
    );
}

#[test]
fn test_finding_display() {
    let finding = Finding {
        rule: "chaining",
        message: "Do not use implicit chaining".to_string(),
        line: 3,
        column: 7,
    };
    assert_eq!(finding.to_string(), "3:7: [chaining] Do not use implicit chaining");
}

// ─── collection-method-value ─────────────────────────────────────────

#[test]
fn test_discarded_collection_result() {
    let findings = lint(&settings(4), "  _.map(xs, f);");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "collection-method-value");
    assert_eq!(findings[0].message, "Use value returned from _.map");
    assert_eq!((findings[0].line, findings[0].column), (1, 3));
}

#[test]
fn test_collection_message_uses_canonical_name() {
    assert_eq!(
        messages(&settings(3), "_.collect(xs, f);"),
        vec!["Use value returned from _.map"]
    );
}

#[test]
fn test_used_collection_result_is_fine() {
    assert!(lint(&settings(4), "const ys = _.map(xs, f);").is_empty());
    assert!(lint(&settings(4), "const ys = _(xs).map(f).value();").is_empty());
}

#[test]
fn test_discarded_chain_reports_collection_method() {
    assert_eq!(
        messages(&settings(4), "_(xs).map(f).value();"),
        vec!["Use value returned from _.map"]
    );
}

#[test]
fn test_side_effect_iteration_value_used() {
    assert!(lint(&settings(4), "_.forEach(xs, f);").is_empty());
    assert_eq!(
        messages(&settings(4), "const r = _.forEach(xs, f);"),
        vec!["Do not use value returned from _.forEach"]
    );
    assert_eq!(
        messages(&settings(4), "const r = _.each(xs, f);"),
        vec!["Do not use value returned from _.each"]
    );
}

#[test]
fn test_side_effect_iteration_followed_by_commit() {
    assert!(lint(&settings(4), "_(xs).forEach(f).commit();").is_empty());
}

#[test]
fn test_remove_is_not_a_collection_method() {
    assert!(lint(&settings(4), "_.remove(xs, f);").is_empty());
}

#[test]
fn test_custom_pragma_in_message() {
    let settings = Settings {
        pragma: "lodash".to_string(),
        ..Settings::default()
    };
    assert_eq!(
        messages(&settings, "lodash.filter(xs, f);"),
        vec!["Use value returned from lodash.filter"]
    );
    assert!(lint(&settings, "_.filter(xs, f);").is_empty());
}

// ─── identity-shorthand ──────────────────────────────────────────────

const PREFER_OMITTING: &str = "Prefer omitting the iteratee over a function that returns its argument";

#[test]
fn test_identity_arrow_reported() {
    let findings = lint(&settings(4), "const ys = _.map(xs, x => x);");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "identity-shorthand");
    assert_eq!(findings[0].message, PREFER_OMITTING);
    assert_eq!(findings[0].column, 22);
}

#[test]
fn test_identity_function_forms() {
    let sources = [
        "const ys = _.filter(xs, function (x) { return x; });",
        "const ys = _.filter(xs, (x) => { return x; });",
        "const ys = _.filter(xs, (x: number) => x);",
        "const ys = _.filter(xs, (x) => (x));",
        "const ys = _.filter(xs, _.identity);",
    ];
    for source in sources {
        assert_eq!(messages(&settings(4), source), vec![PREFER_OMITTING], "source: {}", source);
    }
}

#[test]
fn test_non_identity_functions_ignored() {
    let sources = [
        "const ys = _.map(xs, x => x.id);",
        "const ys = _.map(xs, (x, i) => i);",
        "const ys = _.map(xs, function (x) { log(x); return x; });",
        "const ys = _.map(xs, identity);",
        "const ys = _.map(xs, 'id');",
    ];
    for source in sources {
        assert!(lint(&settings(4), source).is_empty(), "source: {}", source);
    }
}

#[test]
fn test_identity_on_non_shorthand_method_ignored() {
    assert!(lint(&settings(4), "const s = _.reduce(xs, x => x);").is_empty());
}

#[test]
fn test_identity_in_chain() {
    let findings = lint(&settings(4), "const ys = _(xs).map(x => x).value();");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].column, 22);
}

#[test]
fn test_shorthand_never_mode() {
    let mut never = settings(4);
    never
        .rules
        .insert("identity-shorthand".to_string(), RuleSetting::Mode("never".to_string()));

    let findings = lint(&never, "const ys = _.map(xs);");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "Do not use the identity shorthand syntax");
    assert_eq!(findings[0].column, 14);

    assert!(lint(&never, "const ys = _.map(xs, x => x);").is_empty());
    assert!(lint(&settings(4), "const ys = _.map(xs);").is_empty());
}

// ─── chaining ────────────────────────────────────────────────────────

fn no_chaining() -> Settings {
    Settings {
        chaining_allowed: false,
        ..Settings::default()
    }
}

#[test]
fn test_implicit_chain_reported_once() {
    let findings = lint(&no_chaining(), "const ys = _(xs).map(f).filter(g).value();");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "chaining");
    assert_eq!(findings[0].message, "Do not use implicit chaining");
    assert_eq!(findings[0].column, 12);
}

#[test]
fn test_explicit_chain_reported_once() {
    let findings = lint(&no_chaining(), "const ys = _.chain(xs).map(f).value();");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "Do not use explicit chaining");
    assert_eq!(findings[0].column, 12);
}

#[test]
fn test_chaining_allowed_by_default() {
    assert!(lint(&settings(4), "const ys = _(xs).map(f).filter(g).value();").is_empty());
    assert!(lint(&settings(4), "const ys = _.chain(xs).map(f).value();").is_empty());
}

#[test]
fn test_chaining_rule_disabled() {
    let mut settings = no_chaining();
    settings.rules.insert("chaining".to_string(), RuleSetting::Toggle(false));
    assert!(lint(&settings, "const ys = _(xs).map(f).value();").is_empty());
}

#[test]
fn test_direct_calls_are_not_chains() {
    assert!(lint(&no_chaining(), "const ys = _.map(xs, f);").is_empty());
}

#[test]
fn test_wrap_with_unknown_first_link_reported() {
    let findings = lint(&no_chaining(), "_(xs).mixinFn().map(f);");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "Do not use implicit chaining");
    assert_eq!(findings[0].column, 1);
}

#[test]
fn test_bare_wrap_reported() {
    let findings = lint(&no_chaining(), "const w = _(xs);");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "chaining");
    assert_eq!(findings[0].message, "Do not use implicit chaining");
    assert_eq!(findings[0].column, 11);
}

#[test]
fn test_wrap_then_chain_method_reported_once() {
    let findings = lint(&no_chaining(), "const ys = _(xs).chain().map(f).value();");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "Do not use implicit chaining");
    assert_eq!(findings[0].column, 12);
}
