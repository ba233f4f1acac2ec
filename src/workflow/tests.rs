//! Unit tests for the workflow host.

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::{GithubActionsHost, WorkflowHost, escape_data, publish_quota};
use crate::error::GateError;
use crate::gate::QuotaSnapshot;

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("temporary directory should be created")
}

fn utf8_path(dir: &TempDir, file_name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join(file_name))
        .expect("temporary path should be UTF-8")
}

fn read(path: &Utf8PathBuf) -> String {
    std::fs::read_to_string(path).expect("file command output should be readable")
}

#[rstest]
#[case::plain("quota low", "quota low")]
#[case::percent("10% left", "10%25 left")]
#[case::newline("first\nsecond", "first%0Asecond")]
#[case::carriage_return("first\r\nsecond", "first%0D%0Asecond")]
fn escapes_workflow_command_data(#[case] message: &str, #[case] expected: &str) {
    assert_eq!(escape_data(message), expected);
}

#[rstest]
fn publishes_quota_to_runner_files(temp_dir: TempDir) {
    let output_file = utf8_path(&temp_dir, "output");
    let env_file = utf8_path(&temp_dir, "env");
    let host = GithubActionsHost::new(Some(output_file.clone()), Some(env_file.clone()));

    publish_quota(&host, &QuotaSnapshot::new(5000, 2600, 1_696_896_000, 2400))
        .expect("quota should be published");

    assert_eq!(read(&output_file), "remaining_abs=2600\nremaining_rel=0.52\n");
    assert_eq!(read(&env_file), "GITHUB_REMAINING_API_QUOTA=2600\n");
}

#[rstest]
fn appends_to_existing_output_file(temp_dir: TempDir) {
    let output_file = utf8_path(&temp_dir, "output");
    std::fs::write(&output_file, "previous=1\n").expect("seed file should be written");
    let host = GithubActionsHost::new(Some(output_file.clone()), None);

    host.set_output("remaining_abs", "7")
        .expect("output should be appended");

    assert_eq!(read(&output_file), "previous=1\nremaining_abs=7\n");
}

#[rstest]
fn skips_files_outside_a_runner() {
    let host = GithubActionsHost::new(None, None);

    assert_eq!(host.set_output("remaining_abs", "7"), Ok(()));
    assert_eq!(host.export_variable("GITHUB_REMAINING_API_QUOTA", "7"), Ok(()));
}

#[rstest]
fn reports_unwritable_output_file(temp_dir: TempDir) {
    let missing_dir = utf8_path(&temp_dir, "missing").join("output");
    let host = GithubActionsHost::new(Some(missing_dir), None);

    let result = host.set_output("remaining_abs", "7");

    assert!(
        matches!(result, Err(GateError::Io { .. })),
        "expected Io error, got {result:?}"
    );
}

#[rstest]
fn reads_runner_files_from_environment(temp_dir: TempDir) {
    let output_file = utf8_path(&temp_dir, "output");
    let _guard = env_lock::lock_env([
        ("GITHUB_OUTPUT", Some(output_file.as_str())),
        ("GITHUB_ENV", None),
    ]);

    let host = GithubActionsHost::from_env();
    host.set_output("remaining_abs", "1")
        .expect("output should be appended");
    host.export_variable("GITHUB_REMAINING_API_QUOTA", "1")
        .expect("missing env file should be skipped");

    assert_eq!(read(&output_file), "remaining_abs=1\n");
}
