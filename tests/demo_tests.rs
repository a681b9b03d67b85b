use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn setup_test_env() -> (TempDir, std::sync::MutexGuard<'static, ()>) {
    let guard = test_env::lock_test_env();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());
    (temp_dir, guard)
}

fn get_pipeview_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pipeview").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd
}

#[test]
fn test_demo_renders_sample_pipeline() {
    let (temp_dir, _guard) = setup_test_env();

    get_pipeview_cmd(&temp_dir)
        .args(["demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proxy: WeatherForecastAPI (v12)"))
        .stdout(predicate::str::contains("Successfully uploaded version 12"))
        .stdout(predicate::str::contains("┃   uat"))
        // uat is still pending, so the pipeline is not done
        .stdout(predicate::str::contains("Deployment In Progress"))
        .stdout(predicate::str::contains("Successfully Deployed").not());
}

#[test]
fn test_demo_json_outcome() {
    let (temp_dir, _guard) = setup_test_env();

    let output = get_pipeview_cmd(&temp_dir)
        .args(["demo", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["outcome"]["all_envs_succeeded"], false);
    assert_eq!(value["outcome"]["overall_success"], false);
    let rows = value["cards"][3]["detail"]["value"].as_array().unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["dev", "test", "uat"]);
}

#[test]
fn test_demo_custom_title() {
    let (temp_dir, _guard) = setup_test_env();

    get_pipeview_cmd(&temp_dir)
        .args(["demo", "--title", "Nightly Release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nightly Release"));
}
