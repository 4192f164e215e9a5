#![allow(dead_code)]

pub mod cli {
    use assert_cmd::Command;
    use std::fs;
    use std::path::PathBuf;
    use std::process::ExitStatus;
    use tempfile::TempDir;

    /// Isolated HOME plus a working directory for running `astro`.
    pub struct AstroWorkspace {
        _temp: TempDir,
        pub home: PathBuf,
        pub root: PathBuf,
    }

    impl AstroWorkspace {
        pub fn new() -> Self {
            let temp = tempfile::tempdir().expect("tempdir");
            let home = temp.path().join("home");
            let root = temp.path().join("project");
            fs::create_dir_all(&home).expect("create home");
            fs::create_dir_all(&root).expect("create project");
            Self {
                _temp: temp,
                home,
                root,
            }
        }

        pub fn home_config(&self) -> PathBuf {
            self.home.join(".astro").join("config.yaml")
        }

        /// Turn `root` into a project with an empty config file.
        pub fn init_project(&self) {
            let dir = self.root.join(".astro");
            fs::create_dir_all(&dir).expect("create project marker");
            fs::write(dir.join("config.yaml"), "").expect("write project config");
        }
    }

    pub struct RunOutput {
        pub status: ExitStatus,
        pub stdout: String,
        pub stderr: String,
    }

    pub fn run_astro<I, S>(workspace: &AstroWorkspace, args: I, label: &str) -> RunOutput
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let output = Command::cargo_bin("astro")
            .expect("astro binary")
            .args(args)
            .current_dir(&workspace.root)
            .env("HOME", &workspace.home)
            .env_remove("RUST_LOG")
            .env_remove("ASTRO_LOG_FILE")
            .output()
            .unwrap_or_else(|e| panic!("{label}: failed to run astro: {e}"));

        RunOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
