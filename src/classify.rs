//! Coarse file type classification by extension
//!
//! Matching is case-sensitive and only looks at the text from the last `.`
//! of the base name onwards. A name without a dot is `OTHER`.

use std::fmt;

/// Extensions whose contents are never read into the bundle
pub const BINARY_EXTENSIONS: &[&str] = &[".exe", ".dll", ".bin"];

/// Coarse type of a discovered file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    C,
    CHeader,
    Cpp,
    Python,
    JavaScript,
    Java,
    CMake,
    Binary,
    Other,
}

impl FileType {
    /// Label written into the STAT, NAMES and PROJECT-TYPE sections
    pub fn label(self) -> &'static str {
        match self {
            FileType::C => "C",
            FileType::CHeader => "C HEADER",
            FileType::Cpp => "C++",
            FileType::Python => "PYTHON",
            FileType::JavaScript => "JAVASCRIPT",
            FileType::Java => "JAVA",
            FileType::CMake => "CMAKE",
            FileType::Binary => "BINARY",
            FileType::Other => "OTHER",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Return the suffix starting at the last `.`, if any
fn suffix(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}

/// Classify a file by its base name
///
/// `CMakeLists.txt` is compared against the extracted suffix, so it can never
/// match and such files are reported as `OTHER`.
pub fn classify(name: &str) -> FileType {
    let Some(ext) = suffix(name) else {
        return FileType::Other;
    };

    match ext {
        ".c" => FileType::C,
        ".h" => FileType::CHeader,
        ".cpp" => FileType::Cpp,
        ".py" => FileType::Python,
        ".js" => FileType::JavaScript,
        ".java" => FileType::Java,
        ".cmake" | "CMakeLists.txt" => FileType::CMake,
        _ if is_binary_suffix(ext) => FileType::Binary,
        _ => FileType::Other,
    }
}

/// Check whether a file is treated as binary purely from its name
pub fn is_binary_by_extension(name: &str) -> bool {
    suffix(name).is_some_and(is_binary_suffix)
}

fn is_binary_suffix(ext: &str) -> bool {
    BINARY_EXTENSIONS.contains(&ext)
}
