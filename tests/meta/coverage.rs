//! Checks that the unit test tree mirrors the source tree file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Entry points and module declarations carry no logic of their own
    fn is_organisational(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn relative_entries(dir: &Path, base: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_| io::Error::other("entry outside of base directory"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                out.insert(relative);
                relative_entries(&path, base, out)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                out.insert(relative);
            }
        }
        Ok(())
    }

    fn tree(dir: &str) -> BTreeSet<String> {
        let mut entries = BTreeSet::new();
        let base = Path::new(dir);
        if let Err(error) = relative_entries(base, base, &mut entries) {
            assert!(!base.exists(), "Failed to scan {dir}: {error}");
        }
        entries
    }

    // Tests every source file has a unit test file at the mirrored path
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = tree(SRC_DIR);
        let unit = tree(UNIT_DIR);

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_organisational(path) && !unit.contains(*path))
            .map(|path| format!("  - {SRC_DIR}/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives the source file it covers
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = tree(SRC_DIR);
        let unit = tree(UNIT_DIR);

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no {SRC_DIR}/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every test file except harness and module files defines a test
    #[test]
    fn test_all_test_files_contain_tests() {
        let mut empty = Vec::new();
        for relative in tree(TESTS_DIR) {
            let path = Path::new(TESTS_DIR).join(&relative);
            if path.is_dir() || relative == "main.rs" || relative.ends_with("mod.rs") {
                continue;
            }
            let content = fs::read_to_string(&path).unwrap_or_default();
            if !content.contains("#[test]") {
                empty.push(format!("  - {}", path.display()));
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
