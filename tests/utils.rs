use log::debug;
use pkgseed::cli::SkipConfirm::All;
use pkgseed::cli::{run_with_provider, Args};
use pkgseed::prompt::ScriptedPrompter;
use pkgseed::rule_set::RuleSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = relative_files(dir1);
    let files2 = relative_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);
    println!();

    let only_in_actual: Vec<_> = files1.difference(&files2).collect();
    let only_in_expected: Vec<_> = files2.difference(&files1).collect();

    if !only_in_actual.is_empty() {
        println!("Files only in ACTUAL output:");
        for file in &only_in_actual {
            println!("  + {:?}", file);
        }
        println!();
    }

    if !only_in_expected.is_empty() {
        println!("Files only in EXPECTED output:");
        for file in &only_in_expected {
            println!("  - {:?}", file);
        }
        println!();
    }

    let mut has_content_diff = false;
    for file in files1.intersection(&files2) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap();
        let expected = fs::read_to_string(dir2.join(file)).unwrap();
        if actual != expected {
            if !has_content_diff {
                println!("Files with different content:");
                has_content_diff = true;
            }
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{actual}");
            println!("  --- Expected content:\n{expected}");
        }
    }

    if !has_content_diff && only_in_actual.is_empty() && only_in_expected.is_empty() {
        println!("No differences found (this shouldn't happen if test failed!)");
    }
    println!("=== End of Comparison ===\n");
}

fn relative_files(dir: &Path) -> std::collections::HashSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Arguments for a non-interactive run into `output_dir` that never installs.
pub fn quiet_args(output_dir: &Path, answers: &str, rule_set: RuleSet) -> Args {
    Args {
        output_dir: output_dir.to_path_buf(),
        verbose: 2,
        answers: Some(answers.to_string()),
        skip_confirms: vec![All],
        non_interactive: true,
        dry_run: false,
        skip_install: true,
        rule_set: Some(rule_set),
        config: None,
    }
}

/// Generates a package from `answers`, compares the output to the expected directory,
/// prints any differences, and asserts that the directories are identical.
///
/// # Arguments
/// * `expected_dir` - Path to the directory with expected output.
/// * `answers` - Predefined answers as a JSON object.
/// * `rule_set` - Rule set to generate with.
pub fn run_and_assert(expected_dir: &str, answers: &str, rule_set: RuleSet) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let args = quiet_args(tmp_dir.path(), answers, rule_set);
    run_with_provider(args, &ScriptedPrompter::new()).unwrap();

    let result = dir_diff::is_different(tmp_dir.path(), expected_dir);
    match result {
        Ok(different) => {
            if different {
                print_dir_diff(tmp_dir.path(), expected_dir.as_ref());
                panic!("Directories differ. See above for details.");
            }
        }
        Err(e) => {
            debug!("Error comparing directories: {e}");
        }
    }
    assert!(!dir_diff::is_different(tmp_dir.path(), expected_dir).unwrap());
}
