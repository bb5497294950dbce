//! Build-task trigger boundary.
//!
//! After a new entry lands in the resource file, the generated accessors are
//! stale until the build task reruns. The trigger is fire-and-forget: the
//! extraction flow never waits on it and never learns whether it succeeded.

use std::{
    path::Path,
    process::{Command, Stdio},
};

/// One-way build-task trigger.
pub trait BuildRunner {
    /// Kick off `task` under `project_root`. Must not block and must not
    /// surface failures; there is no result channel.
    fn trigger_task(&self, project_root: &Path, task: &str);
}

/// Runs Gradle tasks through the project's wrapper script.
pub struct GradleRunner;

impl BuildRunner for GradleRunner {
    fn trigger_task(&self, project_root: &Path, task: &str) {
        let wrapper = if cfg!(windows) {
            "gradlew.bat"
        } else {
            "./gradlew"
        };

        // Detached spawn; the child is intentionally not awaited.
        let _ = Command::new(wrapper)
            .arg(task)
            .current_dir(project_root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }
}

/// No-op runner for dry runs and tests.
pub struct NoopBuildRunner;

impl BuildRunner for NoopBuildRunner {
    fn trigger_task(&self, _project_root: &Path, _task: &str) {}
}
