use proptest::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vclr_core::{
    BatchOptions, CancelFlag, FileStatus, ProfileRegistry, ReviewEvent, ReviewMode,
    ScriptedInput, SourceFile, VclrArgs, find_comments, find_files, process, process_files,
};

fn strip(registry: &ProfileRegistry, lang: &str, input: &str) -> String {
    let profile = registry.get(lang).unwrap();
    let out = process(
        Path::new("input"),
        input.as_bytes(),
        Some(profile),
        ReviewMode::Automatic,
    );
    out.edited.unwrap_or_else(|| input.to_string())
}

#[test]
fn comment_markers_inside_strings_survive_in_every_language() {
    let registry = ProfileRegistry::builtin().unwrap();
    let mut checked = 0;
    for profile in registry.profiles() {
        let Some(string) = profile.strings.first() else {
            continue;
        };
        let markers = profile
            .line_comments
            .iter()
            .copied()
            .chain(profile.block_comments.iter().map(|b| b.open));
        for marker in markers {
            let input = format!("x {}{} inside{}\n", string.open, marker, string.close);
            assert!(
                find_comments(&input, profile).is_empty(),
                "{}: comment found in {:?}",
                profile.name,
                input
            );
            assert_eq!(strip(&registry, profile.name, &input), input);
            checked += 1;
        }
    }
    assert!(checked > 50);
}

#[test]
fn nested_and_flat_block_comments() {
    let registry = ProfileRegistry::builtin().unwrap();
    assert_eq!(
        strip(&registry, "haskell", "a {- x {- y -} z -} b\n"),
        "a  b\n"
    );
    assert_eq!(strip(&registry, "c", "a /* x /* y */ z */ b\n"), "a  z */ b\n");
}

#[test]
fn unterminated_comment_runs_to_end_of_input() {
    let registry = ProfileRegistry::builtin().unwrap();
    assert_eq!(strip(&registry, "c", "int a;\n/* open\nint b;\n"), "int a;\n");
    assert_eq!(strip(&registry, "lua", "x = 1\n--[[ never closed\n"), "x = 1\n");
}

#[test]
fn manual_review_only_removes_confirmed_comments() {
    let registry = ProfileRegistry::builtin().unwrap();
    let mut input = ScriptedInput::new([
        ReviewEvent::Confirm,
        ReviewEvent::Next,
        ReviewEvent::Confirm,
    ]);
    let out = process(
        Path::new("a.js"),
        b"// one\n// two\nlet x = 1; // three\n",
        Some(registry.get("javascript").unwrap()),
        ReviewMode::Manual(&mut input),
    );
    assert_eq!(out.edited.as_deref(), Some("// two\nlet x = 1;\n"));
    assert_eq!((out.result.removed, out.result.skipped), (2, 1));
}

#[test]
fn discover_and_clean_a_tree() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("src/main.rs"),
        "// entry\nfn main() {\n    let s = \"// keep\"; // drop\n}\n",
    )
    .unwrap();
    fs::write(dir.path().join("build.sh"), "#!/bin/sh\n# setup\necho \"#1\"\n").unwrap();
    fs::write(dir.path().join("README"), "no language here\n").unwrap();

    let registry = ProfileRegistry::builtin().unwrap();
    let args = VclrArgs {
        paths: vec![dir.path().to_path_buf()],
        ..VclrArgs::default()
    };
    let files = find_files(&args, &registry).unwrap();
    assert_eq!(files.len(), 2);

    let report = process_files(
        &files,
        &registry,
        BatchOptions {
            parallel: true,
            backup: true,
        },
        None,
        &CancelFlag::new(),
        &|_| {},
    )
    .unwrap();
    assert!(report.completed().is_ok());
    assert_eq!(report.stats.files_changed(), 2);
    assert_eq!(report.stats.comments_removed(), 3);
    assert!(report
        .results
        .iter()
        .all(|r| matches!(r.status, FileStatus::Cleaned)));

    assert_eq!(
        fs::read_to_string(dir.path().join("src/main.rs")).unwrap(),
        "fn main() {\n    let s = \"// keep\";\n}\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("build.sh")).unwrap(),
        "#!/bin/sh\necho \"#1\"\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("build.sh.bak")).unwrap(),
        "#!/bin/sh\n# setup\necho \"#1\"\n"
    );
}

#[test]
fn explicitly_named_unknown_file_is_reported_as_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.unknown");
    fs::write(&path, "# not touched\n").unwrap();
    let registry = ProfileRegistry::builtin().unwrap();
    let files = vec![SourceFile {
        path: path.clone(),
        language: None,
    }];
    let report = process_files(
        &files,
        &registry,
        BatchOptions::default(),
        None,
        &CancelFlag::new(),
        &|_| {},
    )
    .unwrap();
    assert!(matches!(report.results[0].status, FileStatus::Skipped(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# not touched\n");
}

fn python_line() -> impl Strategy<Value = String> {
    let indent = prop_oneof![Just(""), Just("    ")];
    let code = prop_oneof![
        Just(""),
        Just("x = 1"),
        Just("y = '#'"),
        Just("s = \"# not a comment\""),
        Just("doc = \"\"\"# kept\"\"\""),
        Just("pass"),
    ];
    let comment = prop_oneof![Just(""), Just("# c"), Just("#"), Just("# it's 'quoted'")];
    let gap = prop_oneof![Just(""), Just(" "), Just("  ")];
    (indent, code, gap, comment)
        .prop_map(|(indent, code, gap, comment)| format!("{}{}{}{}", indent, code, gap, comment))
}

proptest! {
    #[test]
    fn stripping_twice_changes_nothing(
        lines in proptest::collection::vec(python_line(), 0..12),
        trailing_newline in any::<bool>(),
    ) {
        let registry = ProfileRegistry::builtin().unwrap();
        let mut input = lines.join("\n");
        if trailing_newline {
            input.push('\n');
        }
        let once = strip(&registry, "python", &input);
        prop_assert!(find_comments(&once, registry.get("python").unwrap()).is_empty());
        let twice = strip(&registry, "python", &once);
        prop_assert_eq!(once, twice);
    }
}
