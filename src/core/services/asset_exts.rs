/// Asset extensions the app bundles on top of the bundler defaults.
pub const EXTRA_ASSET_EXTS: &[&str] = &["db", "mp3", "ttf", "otf", "obj", "png", "jpg", "mtl"];

/// Append each of `extra` to `defaults` unless already present.
///
/// Order is preserved: defaults first, then new extensions in the order
/// given. A leading `.` on an extra extension is ignored.
pub fn extend_asset_exts(defaults: Vec<String>, extra: &[&str]) -> Vec<String> {
    let mut exts = defaults;
    for ext in extra {
        let ext = ext.trim_start_matches('.');
        if !ext.is_empty() && !exts.iter().any(|e| e == ext) {
            exts.push(ext.to_string());
        }
    }
    exts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(exts: &[&str]) -> Vec<String> {
        exts.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn appends_after_defaults() {
        let exts = extend_asset_exts(owned(&["bmp", "gif"]), &["db", "mp3"]);

        assert_eq!(exts, owned(&["bmp", "gif", "db", "mp3"]));
    }

    #[test]
    fn skips_extensions_already_present() {
        let exts = extend_asset_exts(owned(&["png", "jpg"]), EXTRA_ASSET_EXTS);

        assert_eq!(
            exts,
            owned(&["png", "jpg", "db", "mp3", "ttf", "otf", "obj", "mtl"])
        );
    }

    #[test]
    fn empty_defaults_yield_extras() {
        let exts = extend_asset_exts(Vec::new(), EXTRA_ASSET_EXTS);

        assert_eq!(exts, owned(EXTRA_ASSET_EXTS));
    }

    #[test]
    fn leading_dot_is_ignored() {
        let exts = extend_asset_exts(owned(&["db"]), &[".db", ".glb"]);

        assert_eq!(exts, owned(&["db", "glb"]));
    }
}
