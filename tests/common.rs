#![allow(dead_code)]
use assert_cmd::Command;
use tempfile::TempDir;

pub const EXPECTED_OUTPUT: &str = "Thread has started\nThread has finished\nDone!\n";

pub struct WorkloadTestConfig {
    path: TempDir,
}

impl Default for WorkloadTestConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkloadTestConfig {
    pub fn new() -> Self {
        WorkloadTestConfig {
            path: TempDir::new().unwrap(),
        }
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.path.path().join(".workload.toml"), contents).unwrap();
    }

    pub fn run(&self) -> Command {
        let mut cmd = Command::cargo_bin("workload").unwrap();
        cmd.current_dir(&self.path);
        cmd
    }

    pub fn run_with_load(&self, load: i64) -> Command {
        let mut cmd = self.run();
        cmd.args(["--load", &load.to_string()]);
        cmd
    }

    // Run from a fresh subdirectory so the config lookup has to walk upwards
    pub fn run_from_subdir(&self, name: &str) -> Command {
        let dir = self.path.path().join(name);
        std::fs::create_dir_all(&dir).unwrap();

        let mut cmd = Command::cargo_bin("workload").unwrap();
        cmd.current_dir(dir);
        cmd
    }
}
