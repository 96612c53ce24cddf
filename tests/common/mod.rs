use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper struct to run lectern commands with an isolated config directory
pub struct LecternTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl LecternTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let binary_path = if cfg!(debug_assertions) {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/lectern")
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/release/lectern")
        };

        let binary_path = if std::path::Path::new(binary_path).exists() {
            binary_path.to_string()
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/lectern").to_string()
        };

        LecternTest {
            temp_dir,
            binary_path,
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .env("LECTERN_CONFIG_DIR", self.temp_dir.path())
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to execute lectern command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {args:?} unexpectedly succeeded"
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
