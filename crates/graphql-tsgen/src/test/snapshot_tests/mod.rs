//! Fixture-driven snapshot tests covering schema loading, transformation,
//! and TypeScript rendering together.
//!
//! Each directory under `fixtures/` is one test case:
//!
//! * `schema.graphql` (or `schema.json` for an introspection result)
//! * `operation.graphql`
//! * `config.json` (optional) with the codegen options to use
//! * `expected.ts` with the exact rendered output, or `expected_error.txt`
//!   whose non-empty lines must each appear in the error message

mod snapshot_test_case;
mod test_runner;
mod utils;

#[cfg(test)]
mod tests {
    use crate::test::snapshot_tests::test_runner;
    use crate::test::snapshot_tests::utils;

    #[test]
    fn verify_codegen_snapshot_tests() {
        let results = test_runner::run_snapshot_tests(utils::get_fixtures_dir());

        if !results.all_passed() {
            eprintln!("{}", results.failure_report());
            eprintln!("\n{}", results.summary());
        } else {
            println!("{}", results.summary());
        }

        assert!(!results.results.is_empty(), "no snapshot fixtures were found");
        assert!(
            results.all_passed(),
            "Codegen snapshot tests failed:\n{}",
            results.failure_report()
        );
    }
}
