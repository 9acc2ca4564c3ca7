//! Integration tests for the workshop-check binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const NOTEBOOKS: &[&str] = &[
    "Workshop_agent_v1_basic.ipynb",
    "Workshop_agent_v2_enhanced.ipynb",
    "Workshop_agent_v3_complete.ipynb",
    "Workshop_agent_v4_loops.ipynb",
    "Workshop_agent_simple_v1_learner_version.ipynb",
];

const VALID_ENV: &str = "\
GOOGLE_API_KEY=AIzaSyD4x9-kq2Lw7Example
GOOGLE_CSE_ID=017576662512468239146:omuauf
MISTRAL_API_KEY=mk-3f9a2b7c1d8e4f60
";

const KEYS: &[&str] = &["GOOGLE_API_KEY", "GOOGLE_CSE_ID", "MISTRAL_API_KEY"];

fn setup_project(env: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in NOTEBOOKS {
        fs::write(temp.path().join(name), "{}").unwrap();
    }
    if let Some(content) = env {
        fs::write(temp.path().join(".env"), content).unwrap();
    }
    temp
}

/// Write a shell script that answers like a Python interpreter.
///
/// `--version` prints `version`; `import X` fails for every module in `missing`.
#[cfg(unix)]
fn fake_python(dir: &Path, version: &str, missing: &[&str]) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let cases: String = missing
        .iter()
        .map(|m| format!("  \"import {}\") exit 1 ;;\n", m))
        .collect();
    let script = format!(
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo \"Python {}\"; exit 0; fi\ncase \"$2\" in\n{}esac\nexit 0\n",
        version, cases
    );
    let path = dir.join("python");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn workshop_check(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("workshop-check"));
    cmd.current_dir(project)
        .env_remove("WORKSHOP_PYTHON")
        .env_remove("VIRTUAL_ENV")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    for key in KEYS {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("workshop-check"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("LangGraph notebook workshop"))
        .stdout(predicate::str::contains("--env-file"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("workshop-check"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("workshop-check"));
    cmd.arg("--fix");
    cmd.assert().failure();
    Ok(())
}

#[cfg(unix)]
#[test]
fn missing_env_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    let bin = TempDir::new()?;
    let python = fake_python(bin.path(), "3.11.4", &[]);

    workshop_check(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(".env file not found"))
        .stdout(predicate::str::contains("Copy .env.example to .env"))
        .stdout(predicate::str::contains("Environment: Configure .env file"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn everything_ready_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(VALID_ENV));
    let bin = TempDir::new()?;
    let python = fake_python(bin.path(), "3.12.1", &[]);

    workshop_check(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("Python version: 3.12.1"))
        .stdout(predicate::str::contains("AIza...mple"))
        .stdout(predicate::str::contains("All checks passed!"))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("AIzaSyD4x9-kq2Lw7Example").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn placeholder_key_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(
        "GOOGLE_API_KEY=your_key_here\nGOOGLE_CSE_ID=017576662512468239146:omuauf\nMISTRAL_API_KEY=mk-3f9a2b7c1d8e4f60\n",
    ));
    let bin = TempDir::new()?;
    let python = fake_python(bin.path(), "3.12.1", &[]);

    workshop_check(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("(GOOGLE_API_KEY) - Not configured"))
        .stdout(predicate::str::contains("https://aistudio.google.com/"))
        .stdout(predicate::str::contains("Some issues found"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn environment_value_overrides_placeholder() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(
        "GOOGLE_API_KEY=your_key_here\nGOOGLE_CSE_ID=017576662512468239146:omuauf\nMISTRAL_API_KEY=mk-3f9a2b7c1d8e4f60\n",
    ));
    let bin = TempDir::new()?;
    let python = fake_python(bin.path(), "3.12.1", &[]);

    workshop_check(temp.path())
        .env("GOOGLE_API_KEY", "AIzaSyD4x9-kq2Lw7Example")
        .arg("--python")
        .arg(&python)
        .assert()
        .success();
    Ok(())
}

#[cfg(unix)]
#[test]
fn old_interpreter_and_missing_package_fail() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(VALID_ENV));
    let bin = TempDir::new()?;
    let python = fake_python(bin.path(), "3.9.18", &["langgraph"]);

    workshop_check(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Python 3.10+ required. Current: 3.9"))
        .stdout(predicate::str::contains("NOT INSTALLED"))
        .stdout(predicate::str::contains("Missing 1 package(s)"))
        .stdout(predicate::str::contains("4. Checking Workshop Notebooks..."));
    Ok(())
}

#[cfg(unix)]
#[test]
fn python_from_environment_variable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(VALID_ENV));
    let bin = TempDir::new()?;
    let python = fake_python(bin.path(), "3.10.0", &[]);

    workshop_check(temp.path())
        .env("WORKSHOP_PYTHON", &python)
        .assert()
        .success()
        .stdout(predicate::str::contains("Python version: 3.10.0"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn project_flag_and_custom_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    fs::write(temp.path().join("workshop.env"), VALID_ENV)?;
    let elsewhere = TempDir::new()?;
    let python = fake_python(elsewhere.path(), "3.11.4", &[]);

    workshop_check(elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .arg("--env-file")
        .arg("workshop.env")
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("workshop.env file exists"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn unreadable_env_file_is_reported_once() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    fs::write(temp.path().join(".env"), [0x4b, 0x3d, 0xff, 0xfe])?;
    let bin = TempDir::new()?;
    let python = fake_python(bin.path(), "3.11.4", &[]);

    workshop_check(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Cannot load .env file"))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn unavailable_interpreter_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(VALID_ENV));

    workshop_check(temp.path())
        .arg("--python")
        .arg("/nonexistent/bin/python3")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not determine version"));
    Ok(())
}
