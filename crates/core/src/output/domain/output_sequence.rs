use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::shared::constants::{OUTPUT_EXTENSION, SEQUENCE_DIGITS};

/// Numbered output file names derived from the user's output path.
///
/// `out.png` and `out` both yield `out00000000.png`, `out00000001.png`, ...
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputSequence {
    prefix: OsString,
}

impl OutputSequence {
    pub fn from_output_path(path: &Path) -> Self {
        let has_output_extension = path
            .extension()
            .is_some_and(|ext| ext == OUTPUT_EXTENSION);
        let prefix = if has_output_extension {
            path.with_extension("")
        } else {
            path.to_path_buf()
        };
        Self {
            prefix: prefix.into_os_string(),
        }
    }

    pub fn path_for(&self, number: u64) -> PathBuf {
        let mut name = self.prefix.clone();
        name.push(format!(
            "{number:0width$}.{OUTPUT_EXTENSION}",
            width = SEQUENCE_DIGITS
        ));
        PathBuf::from(name)
    }
}
