use crate::config::ProjectConfig;
use crate::domain::Version;

/// Everything derived from the target version for one release run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDescriptor {
    pub version: Version,
    /// Tag name, `v<version>`
    pub tag: String,
    /// Artifact file name, `<program>-<version>.zip`
    pub artifact_name: String,
    /// Artifact location relative to the repository root
    pub artifact_path: String,
    /// Public download link for the uploaded artifact
    pub download_url: String,
}

impl ReleaseDescriptor {
    pub fn new(version: Version, project: &ProjectConfig, artifact_dir: &str) -> Self {
        let tag = format!("v{}", version);
        let artifact_name = format!("{}-{}.zip", project.program_name, version);
        let artifact_path = if artifact_dir.is_empty() {
            artifact_name.clone()
        } else {
            format!("{}/{}", artifact_dir.trim_end_matches('/'), artifact_name)
        };
        let download_url = format!(
            "https://github.com/{}/{}/releases/download/{}/{}",
            project.owner, project.repository, tag, artifact_name
        );

        ReleaseDescriptor {
            version,
            tag,
            artifact_name,
            artifact_path,
            download_url,
        }
    }
}
