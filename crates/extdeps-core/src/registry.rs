//! The table of external sources

use std::collections::HashSet;

use crate::{Error, Result, SourceDescriptor};

/// Name of the directory, under the invocation directory, that receives the
/// checkouts.
pub const EXTERNAL_DIR_NAME: &str = "external";

/// Repositories fetched for the downstream build, in processing order.
pub const BUILTIN_SOURCES: &[SourceDescriptor] = &[
    SourceDescriptor::from_static("https://github.com/ocornut/imgui.git", "imgui", Some("docking")),
    SourceDescriptor::from_static("https://github.com/CedricGuillemet/ImGuizmo.git", "imguizmo", None),
    SourceDescriptor::from_static("https://github.com/libsdl-org/SDL.git", "SDL", None),
    SourceDescriptor::from_static("https://github.com/nlohmann/json.git", "JSON", None),
    SourceDescriptor::from_static("https://github.com/g-truc/glm.git", "glm", None),
    SourceDescriptor::from_static("https://github.com/tinyobjloader/tinyobjloader.git", "tinyobj", None),
    SourceDescriptor::from_static("https://github.com/nothings/stb.git", "stb", None),
    SourceDescriptor::from_static("https://github.com/cginternals/glbinding.git", "glbinding", None),
    SourceDescriptor::from_static("https://github.com/freetype/freetype.git", "FreeType", None),
];

/// Ordered, validated collection of descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    sources: Vec<SourceDescriptor>,
}

impl Registry {
    /// Build a registry, validating every descriptor and rejecting two
    /// descriptors that share a directory.
    pub fn new(sources: Vec<SourceDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for source in &sources {
            source.validate()?;
            if !seen.insert(source.local_directory_name()) {
                return Err(Error::InvalidDescriptor {
                    directory: source.local_directory_name().to_string(),
                    reason: "directory is used by more than one source".to_string(),
                });
            }
        }
        Ok(Self { sources })
    }

    /// The built-in table.
    pub fn builtin() -> Result<Self> {
        Self::new(BUILTIN_SOURCES.to_vec())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceDescriptor> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a SourceDescriptor;
    type IntoIter = std::slice::Iter<'a, SourceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
