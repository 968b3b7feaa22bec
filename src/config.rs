use std::path::{Path, PathBuf};

/// Default input, relative to the working directory
pub const DEFAULT_INPUT: &str = "input/itcont.txt";
/// Default zip report, relative to the working directory
pub const DEFAULT_ZIP_OUTPUT: &str = "output/medianvals_by_zip.txt";
/// Default date report, relative to the working directory
pub const DEFAULT_DATE_OUTPUT: &str = "output/medianvals_by_date.txt";

/// Where a run reads its records and writes its two reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Pipe-delimited contribution records
    pub input: PathBuf,
    /// Report by recipient and zip code, streamed
    pub zip_output: PathBuf,
    /// Report by recipient and transaction date, written at the end
    pub date_output: PathBuf,
}

impl Paths {
    /// Fills in the defaults for any missing or empty path
    ///
    /// Defaults resolve against `cwd`. Given paths are used as they are.
    pub fn resolve(
        input: Option<PathBuf>,
        zip_output: Option<PathBuf>,
        date_output: Option<PathBuf>,
        cwd: &Path,
    ) -> Self {
        let pick = |given: Option<PathBuf>, default: &str| {
            given
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| cwd.join(default))
        };

        Self {
            input: pick(input, DEFAULT_INPUT),
            zip_output: pick(zip_output, DEFAULT_ZIP_OUTPUT),
            date_output: pick(date_output, DEFAULT_DATE_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_defaults() {
        let paths = Paths::resolve(None, None, None, Path::new("/work"));
        assert_eq!(paths.input, Path::new("/work/input/itcont.txt"));
        assert_eq!(paths.zip_output, Path::new("/work/output/medianvals_by_zip.txt"));
        assert_eq!(paths.date_output, Path::new("/work/output/medianvals_by_date.txt"));
    }

    #[test]
    fn given_paths_win() {
        let paths = Paths::resolve(
            Some("in.txt".into()),
            Some("/tmp/zip.txt".into()),
            None,
            Path::new("/work"),
        );
        assert_eq!(paths.input, Path::new("in.txt"));
        assert_eq!(paths.zip_output, Path::new("/tmp/zip.txt"));
        assert_eq!(paths.date_output, Path::new("/work/output/medianvals_by_date.txt"));
    }

    #[test]
    fn empty_path_falls_back() {
        let paths = Paths::resolve(Some(PathBuf::new()), None, None, Path::new("/work"));
        assert_eq!(paths.input, Path::new("/work/input/itcont.txt"));
    }
}
