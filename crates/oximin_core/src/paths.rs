use log::trace;
use path_clean::clean;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::{
    env,
    path::{Component, Path, PathBuf},
};

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return clean(path);
    }
    match env::current_dir() {
        Ok(cwd) => clean(cwd.join(path)),
        Err(_) => clean(path),
    }
}

/// Path of `to` relative to the directory `from`.
///
/// Relative inputs are resolved against the current directory first. An empty
/// path means both point at the same directory; when the two share no root at
/// all, `to` is returned in absolute form.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from = absolutize(from);
    let to = absolutize(to);

    let common = from.components().zip(to.components()).take_while(|(a, b)| a == b).count();
    if common == 0 {
        trace!("No common root between {} and {}", from.display(), to.display());
        return to;
    }

    let mut result = PathBuf::new();
    for _ in from.components().skip(common) {
        result.push("..");
    }
    for component in to.components().skip(common) {
        result.push(component);
    }
    result
}

/// Joins the path's segments with `/`, percent-encoding each segment.
pub fn uri_path(path: &Path) -> String {
    let mut absolute = false;
    let mut segments: Vec<String> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::CurDir => {}
            Component::RootDir => absolute = true,
            Component::ParentDir => segments.push("..".to_string()),
            Component::Normal(segment) => segments
                .push(utf8_percent_encode(&segment.to_string_lossy(), URI_COMPONENT).to_string()),
        }
    }

    let joined = segments.join("/");
    if absolute { format!("/{}", joined) } else { joined }
}

/// The name a source file goes by inside a source map stored in `map_dir`.
pub fn source_map_key(map_dir: &Path, file: &Path) -> String {
    let file_dir = file.parent().unwrap_or_else(|| Path::new(""));
    let relative = relative_path(map_dir, file_dir);

    let key = match file.file_name() {
        Some(base) => uri_path(&relative.join(base)),
        None => uri_path(file),
    };
    trace!("Source map key for {} is '{}'", file.display(), key);
    key
}
