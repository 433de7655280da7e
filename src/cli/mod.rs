//! Command line surface of the `release` binary.

pub mod orchestration;

use std::path::PathBuf;

const VERSION_HELP: &str = "\
next_minor      - Bump the minor version number
next_major      - Bump the major version number and set minor to zero
<major>.<minor> - where major and minor are integers
If omitted it defaults to next_minor";

#[derive(clap::Parser, Debug)]
#[command(
    name = "release",
    about = "Bump the version, build, and publish a tagged release to Github"
)]
pub struct Args {
    #[arg(
        long = "commit",
        overrides_with = "no_commit",
        help = "Commit changes and push them to Github (default)"
    )]
    commit: bool,

    #[arg(
        long = "no-commit",
        overrides_with = "commit",
        help = "Do not commit, tag or push changes"
    )]
    no_commit: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Answer yes to every confirmation prompt")]
    pub yes: bool,

    #[arg(value_name = "VERSION", default_value = "next_minor", help = VERSION_HELP)]
    pub version: String,
}

impl Args {
    /// Whether the release should be committed and published.
    pub fn commit(&self) -> bool {
        !self.no_commit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["release"]).unwrap();
        assert!(args.commit());
        assert_eq!(args.version, "next_minor");
        assert!(args.config.is_none());
        assert!(!args.yes);
    }

    #[test]
    fn test_no_commit() {
        let args = Args::try_parse_from(["release", "--no-commit", "2.0"]).unwrap();
        assert!(!args.commit());
        assert_eq!(args.version, "2.0");
    }

    #[test]
    fn test_last_commit_flag_wins() {
        let args = Args::try_parse_from(["release", "--no-commit", "--commit"]).unwrap();
        assert!(args.commit());

        let args = Args::try_parse_from(["release", "--commit", "--no-commit"]).unwrap();
        assert!(!args.commit());
    }

    #[test]
    fn test_version_token_is_free_form() {
        // Validation happens in VersionDirective::parse, not in clap.
        let args = Args::try_parse_from(["release", "bogus"]).unwrap();
        assert_eq!(args.version, "bogus");
    }

    #[test]
    fn test_config_and_yes() {
        let args =
            Args::try_parse_from(["release", "-y", "--config", "ci/release.toml", "next_major"])
                .unwrap();
        assert!(args.yes);
        assert_eq!(args.config, Some(PathBuf::from("ci/release.toml")));
        assert_eq!(args.version, "next_major");
    }
}
