//! Checks that the unit test tree mirrors the `src` module tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    /// Modules declared with `mod name;` or `pub mod name;` in a file
    fn declared_modules(path: &Path) -> io::Result<BTreeSet<String>> {
        Ok(fs::read_to_string(path)?
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                line.strip_prefix("pub mod ")
                    .or_else(|| line.strip_prefix("mod "))?
                    .strip_suffix(';')
                    .map(str::to_owned)
            })
            .collect())
    }

    /// Stems of the `.rs` files in a directory, excluding module roots
    fn module_files(dir: &Path) -> io::Result<BTreeSet<String>> {
        let mut stems = BTreeSet::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if stem != "mod" {
                    stems.insert(stem.to_owned());
                }
            }
        }
        Ok(stems)
    }

    fn rust_files(dir: &Path, found: &mut Vec<std::path::PathBuf>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                found.push(path);
            }
        }
        Ok(())
    }

    // Tests that every source area has a unit test area and vice versa
    // Verified by adding an area to lib.rs only
    #[test]
    fn test_areas_match() -> io::Result<()> {
        let src_areas = declared_modules(Path::new("src/lib.rs"))?;
        let unit_areas = declared_modules(Path::new("tests/unit/main.rs"))?;
        assert!(!src_areas.is_empty());
        assert_eq!(src_areas, unit_areas, "tests/unit/main.rs is out of step with src/lib.rs");
        Ok(())
    }

    // Tests that declarations and files agree in both trees for each area
    // Verified by adding a source file without declaring it
    #[test]
    fn test_area_modules_match() -> io::Result<()> {
        for area in declared_modules(Path::new("src/lib.rs"))? {
            let src_dir = Path::new("src").join(&area);
            let unit_dir = Path::new("tests/unit").join(&area);

            let src_files = module_files(&src_dir)?;
            assert_eq!(
                declared_modules(&src_dir.join("mod.rs"))?,
                src_files,
                "src/{area}/mod.rs does not declare exactly the files in src/{area}"
            );
            assert_eq!(
                module_files(&unit_dir)?,
                src_files,
                "tests/unit/{area} does not hold one test file per source file"
            );
            assert_eq!(
                declared_modules(&unit_dir.join("mod.rs"))?,
                src_files,
                "tests/unit/{area}/mod.rs does not declare every test file"
            );
        }
        Ok(())
    }

    // Tests the shape of every unit test file
    // Verified by dropping the comment above one test
    #[test]
    fn test_unit_files_are_documented() -> io::Result<()> {
        let mut files = Vec::new();
        rust_files(Path::new("tests/unit"), &mut files)?;

        let mut problems = Vec::new();
        for path in files {
            let name = path.file_name().and_then(|name| name.to_str());
            if matches!(name, Some("main.rs" | "mod.rs")) {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            let lines: Vec<&str> = content.lines().map(str::trim).collect();

            if !lines.first().is_some_and(|line| line.starts_with("//!")) {
                problems.push(format!("  - {}: missing `//!` header", path.display()));
            }
            if !content.contains("#[cfg(test)]") {
                problems.push(format!("  - {}: missing `#[cfg(test)]` module", path.display()));
            }
            let tests = lines.iter().filter(|line| **line == "#[test]").count();
            if tests == 0 {
                problems.push(format!("  - {}: no tests", path.display()));
            }
            let undocumented = lines
                .windows(2)
                .filter(|pair| matches!(pair, [above, "#[test]"] if !above.starts_with("//")))
                .count();
            if undocumented > 0 {
                problems.push(format!(
                    "  - {}: {undocumented} tests without a comment",
                    path.display()
                ));
            }
        }

        assert!(problems.is_empty(), "Unit test files:\n{}", problems.join("\n"));
        Ok(())
    }

    // Tests that each integration test target holds tests
    // Verified by adding an empty file under tests/
    #[test]
    fn test_integration_targets_contain_tests() -> io::Result<()> {
        for stem in module_files(Path::new("tests"))? {
            let content = fs::read_to_string(Path::new("tests").join(format!("{stem}.rs")))?;
            assert!(content.contains("#[test]"), "tests/{stem}.rs has no tests");
        }
        Ok(())
    }
}
