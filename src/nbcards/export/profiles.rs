//! Fixed notebook metadata for the supported kernels.
//!
//! The table is the only place kernels are known. Partitioning walks it in
//! order, so exports always come out Python first, then R.

use crate::model::{PYTHON_KERNEL, R_KERNEL};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotebookMetadata {
    pub kernelspec: KernelSpec,
    pub language_info: LanguageInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KernelSpec {
    pub display_name: &'static str,
    pub language: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub codemirror_mode: CodeMirrorMode,
    pub file_extension: &'static str,
    pub mimetype: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbconvert_exporter: Option<&'static str>,
    pub pygments_lexer: &'static str,
    pub version: &'static str,
}

/// `codemirror_mode` is a bare mode name for some kernels and an object for
/// others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CodeMirrorMode {
    Name(&'static str),
    Versioned { name: &'static str, version: u32 },
}

/// Binds a kernel identifier to its notebook metadata and output file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelProfile {
    pub kernel: &'static str,
    pub file_stem: &'static str,
    pub metadata: NotebookMetadata,
}

pub static PYTHON3: KernelProfile = KernelProfile {
    kernel: PYTHON_KERNEL,
    file_stem: "python3",
    metadata: NotebookMetadata {
        kernelspec: KernelSpec {
            display_name: "Python 3",
            language: "python",
            name: "python3",
        },
        language_info: LanguageInfo {
            codemirror_mode: CodeMirrorMode::Versioned {
                name: "ipython",
                version: 3,
            },
            file_extension: ".py",
            mimetype: "text/x-python",
            name: "python",
            nbconvert_exporter: Some("python"),
            pygments_lexer: "ipython3",
            version: "3.6.4",
        },
    },
};

pub static IR: KernelProfile = KernelProfile {
    kernel: R_KERNEL,
    file_stem: "r",
    metadata: NotebookMetadata {
        kernelspec: KernelSpec {
            display_name: "R",
            language: "R",
            name: "ir",
        },
        language_info: LanguageInfo {
            codemirror_mode: CodeMirrorMode::Name("r"),
            file_extension: ".r",
            mimetype: "text/x-r-source",
            name: "R",
            nbconvert_exporter: None,
            pygments_lexer: "r",
            version: "3.5.0",
        },
    },
};

/// Every exportable kernel, in output order.
pub static PROFILES: [&KernelProfile; 2] = [&PYTHON3, &IR];

/// Exact-match lookup; unknown kernels have no profile.
pub fn profile_for(kernel: &str) -> Option<&'static KernelProfile> {
    PROFILES.iter().copied().find(|p| p.kernel == kernel)
}
