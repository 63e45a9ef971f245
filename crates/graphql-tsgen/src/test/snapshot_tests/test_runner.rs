use crate::codegen::transform_document;
use crate::codegen::CodegenConfig;
use crate::document;
use crate::render;
use crate::schema::Schema;
use crate::test::snapshot_tests::snapshot_test_case::SnapshotExpectation;
use crate::test::snapshot_tests::snapshot_test_case::SnapshotTestCase;
use crate::test::snapshot_tests::utils;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Result of a single snapshot test
#[derive(Debug)]
pub struct SnapshotTestResult {
    pub error_message: Option<String>,
    pub file_path: PathBuf,
    pub passed: bool,
    pub test_name: String,
}

/// Collection of snapshot test results
#[derive(Debug, Default)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}

impl SnapshotTestResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failure_report(&self) -> String {
        let failures = self.results.iter().filter(|r| !r.passed).collect::<Vec<_>>();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| {
                let test_name = &r.test_name;
                let file_path = r.file_path.display();
                let msg = r.error_message.as_deref().unwrap_or("error");
                format!("❌ {test_name}\n   File: {file_path}\n   {msg}")
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} snapshot tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let all_passed = self.all_passed();
        let emoji = if all_passed { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");
        let total = self.results.len();
        let failed = self.results.iter().filter(|r| !r.passed).count();
        let passed = total - failed;

        format!(
            "{banner}\n{emoji} CODEGEN SNAPSHOT SUMMARY\n{banner}\n\
            Total tests: {total}\nPassed: {passed}\nFailed: {failed}\n{banner}"
        )
    }
}

/// Runs every fixture under `fixtures_dir` in parallel.
pub fn run_snapshot_tests(fixtures_dir: &Path) -> SnapshotTestResults {
    let test_cases = SnapshotTestCase::discover_all(fixtures_dir);
    let results = test_cases.par_iter()
        .map(run_test_case)
        .collect::<Vec<_>>();

    SnapshotTestResults { results }
}

fn run_test_case(test_case: &SnapshotTestCase) -> SnapshotTestResult {
    let outcome = generate(test_case);

    let (passed, error_message, file_path) = match (&test_case.expectation, outcome) {
        (SnapshotExpectation::Output(expected_path), Ok(actual)) => {
            match fs::read_to_string(expected_path) {
                Ok(expected) if utils::normalize_newlines(&expected) == actual =>
                    (true, None, expected_path.clone()),
                Ok(expected) => (false, Some(format!(
                    "Expected output:\n{}\nGot:\n{actual}",
                    utils::normalize_newlines(&expected),
                )), expected_path.clone()),
                Err(err) => (false, Some(format!(
                    "Failed to read expected output: {err}",
                )), expected_path.clone()),
            }
        },

        (SnapshotExpectation::Output(expected_path), Err(err)) => (false, Some(format!(
            "Expected: Successful generation\nGot: {err}",
        )), expected_path.clone()),

        (SnapshotExpectation::ErrorContaining(patterns), Ok(actual)) => (false, Some(format!(
            "Expected: An error containing {patterns:?}\nGot output:\n{actual}",
        )), test_case.operation_path.clone()),

        (SnapshotExpectation::ErrorContaining(patterns), Err(err)) => {
            let unmatched = patterns.iter()
                .filter(|pattern| !err.contains(pattern.as_str()))
                .map(|pattern| format!("  ✗ {pattern}"))
                .collect::<Vec<_>>();
            if unmatched.is_empty() {
                (true, None, test_case.operation_path.clone())
            } else {
                (false, Some(format!(
                    "Not all expected error patterns matched:\n{}\n\nActual error:\n{err}",
                    unmatched.join("\n"),
                )), test_case.operation_path.clone())
            }
        },
    };

    SnapshotTestResult {
        error_message,
        file_path,
        passed,
        test_name: test_case.name.to_owned(),
    }
}

/// Loads, transforms, and renders one fixture. Errors are stringified so
/// that every stage's failure can be matched the same way.
fn generate(test_case: &SnapshotTestCase) -> Result<String, String> {
    let schema = Schema::load_file(&test_case.schema_path)
        .map_err(|err| err.to_string())?;
    let operation = document::load_document_file(&test_case.operation_path)
        .map_err(|err| err.to_string())?;
    let config = match &test_case.config_path {
        Some(config_path) => {
            let json = fs::read_to_string(config_path).map_err(|err| err.to_string())?;
            serde_json::from_str::<CodegenConfig>(&json).map_err(|err| err.to_string())?
        },
        None => CodegenConfig::default(),
    };

    let declarations = transform_document(&schema, &operation, &config)
        .map_err(|err| err.to_string())?;
    Ok(render::render_file("operation.graphql", &declarations))
}
