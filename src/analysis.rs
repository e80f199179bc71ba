//! Host side of the engine: parsing, call traversal and directory scans.
//!
//! Every `call_expression` of a tree is visited exactly once, depth-first and
//! in source order, and handed to the engine; resolved calls go to every
//! active rule.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use ignore::WalkBuilder;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, warn};
use tree_sitter::{Language, Node, Parser, Tree};

use crate::engine::{CallStyle, ResolutionContext, ResolvedCall};
use crate::engine::syntax::node_text;
use crate::error::LintError;
use crate::methods::Version;
use crate::rules::{Finding, Rule, RuleContext};
use crate::settings::Settings;
use crate::{clean_path, read_file_lossy};

/// Extensions scanned when none are given.
pub const DEFAULT_EXTENSIONS: &str = "js,jsx,mjs,cjs,ts,tsx";

// ─── Grammar selection ───────────────────────────────────────────────

pub fn new_parser(language: &Language) -> Result<Parser, LintError> {
    let mut parser = Parser::new();
    parser.set_language(language)?;
    Ok(parser)
}

/// One parser per grammar, owned by a single worker thread.
pub struct Parsers {
    tsx: Parser,
    typescript: Parser,
}

impl Parsers {
    pub fn new() -> Result<Self, LintError> {
        Ok(Self {
            tsx: new_parser(&tree_sitter_typescript::LANGUAGE_TSX.into())?,
            typescript: new_parser(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())?,
        })
    }

    /// Plain TypeScript for `.ts`; TSX, a superset of JavaScript with JSX,
    /// for everything else.
    pub fn for_path(&mut self, path: &Path) -> &mut Parser {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ts" | "mts" | "cts") => &mut self.typescript,
            _ => &mut self.tsx,
        }
    }
}

// ─── Traversal ───────────────────────────────────────────────────────

/// Visit every call expression under `node`, pre-order.
///
/// Iterative: stack use does not grow with tree depth.
pub fn visit_calls<'a>(node: Node<'a>, visit: &mut impl FnMut(Node<'a>)) {
    let mut cursor = node.walk();
    let mut depth = 0usize;
    loop {
        let current = cursor.node();
        if current.kind() == "call_expression" {
            visit(current);
        }
        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }
        loop {
            if depth == 0 {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            cursor.goto_parent();
            depth -= 1;
        }
    }
}

// ─── Reports ─────────────────────────────────────────────────────────

/// Serializable view of a [`ResolvedCall`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub line: usize,
    pub column: usize,
    pub method: &'static str,
    pub raw_method: String,
    pub version: Version,
    pub style: CallStyle,
    pub iteratee: Option<String>,
    pub parent_uses_value: bool,
    pub is_chain_breaker: bool,
    pub wrapper_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_method: Option<&'static str>,
}

impl CallRecord {
    pub fn from_resolved(call: &ResolvedCall<'_>, source: &str) -> Self {
        let start = call.node.start_position();
        Self {
            line: start.row + 1,
            column: start.column + 1,
            method: call.method,
            raw_method: call.raw_method.to_string(),
            version: call.version,
            style: call.style,
            iteratee: call.iteratee.map(|node| node_text(node, source).to_string()),
            parent_uses_value: call.parent_uses_value,
            is_chain_breaker: call.is_chain_breaker,
            wrapper_only: call.wrapper_only,
            chain_depth: call.chain.map(|chain| chain.depth),
            next_method: call.next_method,
        }
    }
}

/// Findings for one file.
#[derive(Serialize, Debug, Clone)]
pub struct FileReport {
    pub path: String,
    pub findings: Vec<Finding>,
}

/// Outcome of a directory scan.
#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub files_scanned: usize,
    pub files_failed: usize,
    /// Files with at least one finding, sorted by path.
    pub reports: Vec<FileReport>,
}

impl ScanReport {
    pub fn finding_count(&self) -> usize {
        self.reports.iter().map(|r| r.findings.len()).sum()
    }
}

/// What to scan. Built from CLI arguments.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub dir: PathBuf,
    pub extensions: Vec<String>,
    pub exclude: Option<Regex>,
    pub hidden: bool,
    pub no_ignore: bool,
    /// 0 = auto
    pub threads: usize,
}

impl ScanOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extensions: parse_extensions(DEFAULT_EXTENSIONS),
            exclude: None,
            hidden: false,
            no_ignore: false,
            threads: 0,
        }
    }
}

/// Split a comma-separated extension list.
pub fn parse_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

// ─── Analyzer ────────────────────────────────────────────────────────

/// A resolution context plus the rules to run, fixed for one pass.
pub struct Analyzer {
    context: ResolutionContext,
    rules: Vec<Box<dyn Rule>>,
}

impl Analyzer {
    pub fn new(context: ResolutionContext, rules: Vec<Box<dyn Rule>>) -> Self {
        Self { context, rules }
    }

    /// Validates the settings; an unsupported version fails here.
    pub fn from_settings(settings: &Settings) -> Result<Self, LintError> {
        Ok(Self::new(settings.resolution_context()?, settings.rules()?))
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule over every resolved call and chain wrap of `tree`.
    pub fn analyze_tree(&self, tree: &Tree, source: &str) -> Vec<Finding> {
        let rule_ctx = RuleContext {
            resolution: &self.context,
            source,
        };
        let mut findings = Vec::new();
        visit_calls(tree.root_node(), &mut |call| {
            if self.context.is_chain_wrap(call, source) {
                for rule in &self.rules {
                    rule.check_wrap(call, &rule_ctx, &mut findings);
                }
            } else if let Some(resolved) = self.context.resolve_call(call, source) {
                for rule in &self.rules {
                    rule.check(&resolved, &rule_ctx, &mut findings);
                }
            }
        });
        findings
    }

    /// Parse and analyze a source string. Unparsable input yields no findings.
    pub fn analyze_source(&self, parser: &mut Parser, source: &str) -> Vec<Finding> {
        match parser.parse(source, None) {
            Some(tree) => self.analyze_tree(&tree, source),
            None => {
                warn!("Parser returned no tree");
                Vec::new()
            }
        }
    }

    /// Every resolved call of a source, in visit order.
    pub fn resolved_calls(&self, parser: &mut Parser, source: &str) -> Vec<CallRecord> {
        let Some(tree) = parser.parse(source, None) else {
            return Vec::new();
        };
        let mut records = Vec::new();
        visit_calls(tree.root_node(), &mut |call| {
            if let Some(resolved) = self.context.resolve_call(call, source) {
                records.push(CallRecord::from_resolved(&resolved, source));
            }
        });
        records
    }

    pub fn analyze_file(&self, parsers: &mut Parsers, path: &Path) -> Result<FileReport, LintError> {
        let (source, lossy) = read_file_lossy(path)?;
        if lossy {
            warn!(path = %path.display(), "File contains invalid UTF-8, analyzing lossy conversion");
        }
        let findings = self.analyze_source(parsers.for_path(path), &source);
        debug!(path = %path.display(), findings = findings.len(), "analyzed file");
        Ok(FileReport {
            path: clean_path(&path.to_string_lossy()),
            findings,
        })
    }

    /// Analyze every matching file under `options.dir` in parallel.
    ///
    /// Files that cannot be read are logged and counted, never fatal.
    pub fn analyze_dir(&self, options: &ScanOptions) -> Result<ScanReport, LintError> {
        if !options.dir.is_dir() {
            return Err(LintError::DirNotFound(options.dir.display().to_string()));
        }
        // Surface grammar problems once, before spawning workers.
        Parsers::new()?;

        let start = Instant::now();
        let mut walker = WalkBuilder::new(&options.dir);
        walker.hidden(!options.hidden);
        walker.git_ignore(!options.no_ignore);
        walker.git_global(!options.no_ignore);
        walker.git_exclude(!options.no_ignore);
        if options.threads > 0 {
            walker.threads(options.threads);
        }

        let scanned = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);
        let reports: Mutex<Vec<FileReport>> = Mutex::new(Vec::new());

        walker.build_parallel().run(|| {
            let mut parsers = match Parsers::new() {
                Ok(p) => p,
                Err(e) => {
                    warn!(error = %e, "Worker could not load grammars");
                    return Box::new(|_| ignore::WalkState::Quit);
                }
            };
            let scanned = &scanned;
            let failed = &failed;
            let reports = &reports;
            Box::new(move |entry| {
                let entry = match entry {
                    Ok(e) => e,
                    Err(_) => return ignore::WalkState::Continue,
                };
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    return ignore::WalkState::Continue;
                }
                let path = entry.path();
                if !self.matches(options, path) {
                    return ignore::WalkState::Continue;
                }
                scanned.fetch_add(1, Ordering::Relaxed);
                match self.analyze_file(&mut parsers, path) {
                    Ok(report) if !report.findings.is_empty() => {
                        reports
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .push(report);
                    }
                    Ok(_) => {}
                    Err(e) => {
                        failed.fetch_add(1, Ordering::Relaxed);
                        warn!(path = %path.display(), error = %e, "Failed to analyze file");
                    }
                }
                ignore::WalkState::Continue
            })
        });

        let mut reports = reports.into_inner().unwrap_or_else(PoisonError::into_inner);
        reports.sort_by(|a, b| a.path.cmp(&b.path));
        let report = ScanReport {
            files_scanned: scanned.into_inner(),
            files_failed: failed.into_inner(),
            reports,
        };
        info!(
            files = report.files_scanned,
            failed = report.files_failed,
            findings = report.finding_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Scan complete"
        );
        Ok(report)
    }

    fn matches(&self, options: &ScanOptions, path: &Path) -> bool {
        let ext_match = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| options.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)));
        if !ext_match {
            return false;
        }
        match &options.exclude {
            Some(re) => !re.is_match(&path.to_string_lossy()),
            None => true,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
