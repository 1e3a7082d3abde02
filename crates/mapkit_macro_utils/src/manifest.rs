use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for another crate as seen from the
/// caller's Cargo.toml.
///
/// This helper is intended for proc-macro code generation where the emitted
/// path must be valid from the invoking crate.
///
/// # Example
///
/// ```rust
/// # use mapkit_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("mapkit_mapper"));
/// ```
///
/// Reading the manifest is not cheap, so callers should resolve a path once
/// per macro invocation and pass it around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If a dependency is renamed (`alias = { package = "crate_name" }`),
///    return `::alias`.
/// 3. If the requested crate name begins with `mapkit_` and the target crate
///    depends on the umbrella crate `mapkit`, return `::mapkit::short_name`
///    (e.g. `mapkit_mapper` -> `::mapkit::mapper`).
/// 4. Repeat step 1-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// When a crate needs to reference itself, library code uses `crate::...`,
/// while doctests and other external code use `::crate_name`.
/// Adding `extern crate self as mapkit_mapper;` in the crate root makes both
/// spellings valid.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const UMBRELLA_NAME: &str = "mapkit";
const CRATE_PREFIX: &str = "mapkit_";

impl Manifest {
    // Try get `Cargo.toml` path.
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    // Try get `Cargo.toml` modified time.
    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Self::parse_manifest(manifest)
            .unwrap_or_else(|| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_manifest(text: Box<str>) -> Option<Document<Box<str>>> {
        Document::parse(text).ok()
    }

    // Attempt to parse the provided path as a syntax tree node.
    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    // A dependency entry renamed through `package = "..."`.
    fn find_renamed(deps: &Table, name: &str) -> Option<String> {
        deps.iter().find_map(|(key, item)| {
            let package = item.get("package")?.as_str()?;
            (package == name).then(|| key.replace('-', "_"))
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        if let Some(alias) = Self::find_renamed(deps, name) {
            return Some(Self::parse_str(&format!("::{alias}")));
        }

        if let Some(module) = name.strip_prefix(CRATE_PREFIX)
            && deps.contains_key(UMBRELLA_NAME)
        {
            let mut path = Self::parse_str::<syn::Path>(&format!("::{UMBRELLA_NAME}"));
            path.segments.push(Self::parse_str(module));
            return Some(path);
        }

        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for section in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(section)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Obtain the [Manifest] of the caller's Cargo.toml.
    ///
    /// This function reads and caches the caller's `Cargo.toml`, keyed by
    /// path and invalidated when the file's modified time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use std::time::SystemTime;

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        let prefix = if path.leading_colon.is_some() { "::" } else { "" };
        format!("{prefix}{}", segments.join("::"))
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Manifest::parse_manifest(text.into()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nmapkit_mapper = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("mapkit_mapper")), "::mapkit_mapper");
    }

    #[test]
    fn umbrella_dependency() {
        let m = manifest("[dependencies]\nmapkit = { path = \"../..\" }\n");
        assert_eq!(path_string(&m.get_crate_path("mapkit_mapper")), "::mapkit::mapper");
    }

    #[test]
    fn renamed_dependency() {
        let m = manifest("[dependencies]\nmapper = { package = \"mapkit_mapper\" }\n");
        assert_eq!(path_string(&m.get_crate_path("mapkit_mapper")), "::mapper");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nmapkit = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("mapkit_mapper")), "::mapkit::mapper");

        let empty = manifest("[package]\nname = \"demo\"\n");
        assert_eq!(path_string(&empty.get_crate_path("mapkit_mapper")), "::mapkit_mapper");
    }
}
