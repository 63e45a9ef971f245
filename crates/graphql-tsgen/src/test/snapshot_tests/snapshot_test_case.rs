use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// What a snapshot test case expects the transform to produce.
#[derive(Debug, Clone)]
pub enum SnapshotExpectation {
    /// Exact rendered output, read from `expected.ts`.
    Output(PathBuf),
    /// Substrings that must each appear in the error message, read from
    /// `expected_error.txt`.
    ErrorContaining(Vec<String>),
}

/// One fixture directory.
#[derive(Debug, Clone)]
pub struct SnapshotTestCase {
    pub config_path: Option<PathBuf>,
    pub expectation: SnapshotExpectation,
    pub name: String,
    pub operation_path: PathBuf,
    pub schema_path: PathBuf,
}

impl SnapshotTestCase {
    /// Discovers every test case directory directly under `fixtures_dir`,
    /// sorted by name.
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(fixtures_dir) else {
            return Vec::new();
        };

        let mut cases = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_dir() {
                    return None;
                }

                let case = Self::from_dir(&path);
                if case.is_none() {
                    eprintln!("ERROR: Incomplete snapshot fixture: {}", path.display());
                    eprintln!("       Each fixture needs a schema, an operation.graphql, and");
                    eprintln!("       either expected.ts or expected_error.txt.");
                }
                case
            })
            .collect::<Vec<_>>();
        cases.sort_by(|a, b| a.name.cmp(&b.name));
        cases
    }

    fn from_dir(dir: &Path) -> Option<Self> {
        let name = dir.file_name()?.to_str()?.to_string();

        let schema_path = ["schema.graphql", "schema.json"]
            .iter()
            .map(|file_name| dir.join(file_name))
            .find(|path| path.is_file())?;

        let operation_path = dir.join("operation.graphql");
        if !operation_path.is_file() {
            return None;
        }

        let config_path = Some(dir.join("config.json")).filter(|path| path.is_file());

        let expected_output_path = dir.join("expected.ts");
        let expected_error_path = dir.join("expected_error.txt");
        let expectation = if expected_output_path.is_file() {
            SnapshotExpectation::Output(expected_output_path)
        } else {
            let patterns = fs::read_to_string(expected_error_path).ok()?
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            SnapshotExpectation::ErrorContaining(patterns)
        };

        Some(Self {
            config_path,
            expectation,
            name,
            operation_path,
            schema_path,
        })
    }
}
