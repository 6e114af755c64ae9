use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Identity of a discoverable font file. Equality is by value; handles are
/// the key of the raster-system cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontHandle {
    pub name: String,
    pub file_path: PathBuf,
}

/// The one rasterizable format the scan accepts, matched case-insensitively.
const FONT_EXTENSION: &str = "ttf";

/// Family picked as the default when the scan finds it.
const PREFERRED_FAMILY: &str = "consola";

fn system_font_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        PathBuf::from(r"C:\Windows\Fonts")
    }
    #[cfg(target_os = "macos")]
    {
        PathBuf::from("/Library/Fonts")
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        PathBuf::from("/usr/share/fonts")
    }
}

/// Scans `dir` (top level only) for font files.
///
/// An unreadable directory is not an error: it yields an empty set, meaning
/// "no fonts available". Results are sorted by name so that "first match"
/// lookups are deterministic regardless of directory iteration order.
pub fn enumerate_fonts_in(dir: &Path) -> Vec<FontHandle> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("font directory {} is not readable: {err}", dir.display());
            return Vec::new();
        }
    };

    let mut fonts: Vec<FontHandle> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(FONT_EXTENSION))
        })
        .filter_map(|path| {
            let name = path.file_stem()?.to_str()?.to_string();
            Some(FontHandle {
                name,
                file_path: path,
            })
        })
        .collect();

    fonts.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("found {} font(s) in {}", fonts.len(), dir.display());
    fonts
}

/// All fonts discoverable in the platform font directory.
///
/// Scanned once per process and memoized; the font directory is treated as
/// immutable after startup.
pub fn enumerate_fonts() -> &'static [FontHandle] {
    static FONTS: OnceLock<Vec<FontHandle>> = OnceLock::new();
    FONTS.get_or_init(|| enumerate_fonts_in(&system_font_dir()))
}

/// First handle whose name matches the preferred family, case-insensitively.
pub fn find_preferred<'a>(fonts: &'a [FontHandle]) -> Option<&'a FontHandle> {
    fonts
        .iter()
        .find(|handle| handle.name.eq_ignore_ascii_case(PREFERRED_FAMILY))
}

/// The process-wide default font, absent when the preferred family was not
/// enumerated. Callers treat absence as "use the implicit fallback".
pub fn default_font() -> Option<&'static FontHandle> {
    find_preferred(enumerate_fonts())
}
