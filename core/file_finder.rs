use crate::stripper::ProfileRegistry;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ignore::WalkBuilder;
use ignore::overrides::{Override, OverrideBuilder};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Interpreter names recognised on a `#!` line, mapped to a language.
const SHEBANG_LANGUAGES: &[(&str, &str)] = &[
    ("python", "python"),
    ("node", "javascript"),
    ("ruby", "ruby"),
    ("perl", "perl"),
    ("bash", "shell"),
    ("zsh", "shell"),
    ("fish", "fish"),
    ("sh", "shell"),
    ("php", "php"),
    ("lua", "lua"),
];

const SNIFF_LEN: u64 = 256;
const XML_SNIFF_LEN: usize = 100;

#[derive(Debug, Parser, Clone)]
#[clap(
    about = "Strip comments from source code (main arguments)",
    long_about = "These are the main arguments for comment stripping."
)]
pub struct VclrArgs {
    #[clap(help = "Files or directories to process", default_value = ".")]
    pub paths: Vec<PathBuf>,

    #[clap(short, long, help = "Review every comment before it is removed")]
    pub manual: bool,

    #[clap(short, long, help = "Write <file>.bak before changing a file")]
    pub backup: bool,

    #[clap(
        short,
        long,
        value_name = "FILE",
        help = "File with ignore patterns, one per line"
    )]
    pub ignore: Option<PathBuf>,

    #[clap(short, long, help = "Process files in parallel (ignored with --manual)")]
    pub parallel: bool,

    #[clap(short, long, help = "Only print errors")]
    pub quiet: bool,

    #[clap(long, help = "Log debug details to stderr")]
    pub verbose: bool,

    #[clap( long, value_name = "LANG", help = "Restrict to specific languages [multiple allowed]", action = clap::ArgAction::Append )]
    pub lang: Vec<String>,
    #[clap(long, help = "Skip the confirmation prompt")]
    pub no_confirm: bool,
    #[clap( long, value_name = "PATTERN", help = "Glob pattern for files to include [multiple allowed]", action = clap::ArgAction::Append )]
    pub include: Vec<String>,
    #[clap( long, value_name = "PATTERN", help = "Glob pattern for files/directories to exclude [multiple allowed]", action = clap::ArgAction::Append )]
    pub exclude: Vec<String>,
}

impl Default for VclrArgs {
    fn default() -> Self {
        VclrArgs {
            paths: vec![PathBuf::from(".")],
            manual: false,
            backup: false,
            ignore: None,
            parallel: false,
            quiet: false,
            verbose: false,
            lang: Vec::new(),
            no_confirm: false,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "vclr",
    version,
    about = "Strip comments from source code",
    long_about = "Removes comments from source files in many languages without touching string literals.\nRun with --manual to approve each comment before it goes.",
    args_conflicts_with_subcommands = true,
    propagate_version = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub main_opts: VclrArgs,
}

/// A file handed to the processor, with the language it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub language: Option<String>,
}

/// Resolves a file's language from its name, extension, `#!` line or an XML
/// prologue, in that order.
pub fn detect_language(path: &Path, registry: &ProfileRegistry) -> Option<&'static str> {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if let Some(profile) = registry.for_filename(name) {
            return Some(profile.name);
        }
    }
    if let Some(profile) = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(|e| registry.for_extension(e))
    {
        return Some(profile.name);
    }
    sniff_language(path)
}

fn sniff_language(path: &Path) -> Option<&'static str> {
    let mut head = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)
        .ok()?
        .take(SNIFF_LEN)
        .read_to_end(&mut head)
        .ok()?;
    language_from_head(&head)
}

fn language_from_head(head: &[u8]) -> Option<&'static str> {
    if head.starts_with(b"#!") {
        let first_line = head.split(|&b| b == b'\n').next().unwrap_or_default();
        let shebang = String::from_utf8_lossy(first_line).to_lowercase();
        return SHEBANG_LANGUAGES
            .iter()
            .find(|(interpreter, _)| {
                shebang
                    .split(['/', ' '])
                    .any(|word| word.starts_with(interpreter))
            })
            .map(|&(_, lang)| lang);
    }
    let prologue = String::from_utf8_lossy(&head[..head.len().min(XML_SNIFF_LEN)]);
    if prologue.contains("<?xml") || prologue.contains("<!DOCTYPE") {
        return Some("xml");
    }
    None
}

/// Reads an ignore file: one glob per line, blank lines and `#` lines skipped.
pub fn load_ignore_patterns(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Ignore file: {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn build_overrides(root: &Path, args: &VclrArgs, ignored: &[String]) -> Result<Override> {
    let mut o = OverrideBuilder::new(root);
    for p in args.exclude.iter().chain(ignored) {
        let q = format!("!{}", p);
        o.add(&q).with_context(|| format!("Exclude: {}", p))?;
    }
    for p in &args.include {
        o.add(p).with_context(|| format!("Include: {}", p))?;
    }
    o.build().context("Overrides")
}

fn selected_languages(args: &VclrArgs, registry: &ProfileRegistry) -> Result<HashSet<String>> {
    let mut selected = HashSet::new();
    for lang in &args.lang {
        if registry.get(lang).is_ok() {
            selected.insert(lang.clone());
        } else {
            tracing::warn!(language = %lang, "unsupported language requested, skipping");
        }
    }
    if selected.is_empty() && !args.lang.is_empty() {
        anyhow::bail!("No valid languages specified: {:?}", args.lang);
    }
    Ok(selected)
}

/// Collects the files to process.
///
/// Directories are walked with gitignore rules, hidden entries skipped and
/// only files of a supported language kept. Files named explicitly are always
/// returned so an unsupported one is reported rather than silently dropped.
pub fn find_files(args: &VclrArgs, registry: &ProfileRegistry) -> Result<Vec<SourceFile>> {
    let ignored = match &args.ignore {
        Some(path) => load_ignore_patterns(path)?,
        None => Vec::new(),
    };
    let selected = selected_languages(args, registry)?;
    let wanted = |lang: Option<&str>| {
        selected.is_empty() || lang.is_some_and(|l| selected.contains(l))
    };

    let mut files = Vec::new();
    let mut seen = HashSet::new();
    for root in &args.paths {
        if !root.exists() {
            anyhow::bail!("Path not found: {}", root.display());
        }
        if root.is_file() {
            let language = detect_language(root, registry);
            if wanted(language) && seen.insert(root.clone()) {
                files.push(SourceFile {
                    path: root.clone(),
                    language: language.map(str::to_string),
                });
            }
            continue;
        }

        let mut w = WalkBuilder::new(root);
        w.standard_filters(true);
        w.hidden(true);
        w.overrides(build_overrides(root, args, &ignored)?);
        for entry in w.build() {
            match entry {
                Ok(e) => {
                    if !e.file_type().is_some_and(|ft| ft.is_file()) {
                        continue;
                    }
                    let Some(language) = detect_language(e.path(), registry) else {
                        continue;
                    };
                    if wanted(Some(language)) && seen.insert(e.path().to_path_buf()) {
                        files.push(SourceFile {
                            path: e.into_path(),
                            language: Some(language.to_string()),
                        });
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                }
            }
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry() -> ProfileRegistry {
        ProfileRegistry::builtin().unwrap()
    }

    fn args_for(paths: Vec<PathBuf>) -> VclrArgs {
        VclrArgs {
            paths,
            ..VclrArgs::default()
        }
    }

    #[test]
    fn shebang_and_xml_sniffing() {
        assert_eq!(language_from_head(b"#!/usr/bin/env python3\nx"), Some("python"));
        assert_eq!(language_from_head(b"#!/bin/bash\n"), Some("shell"));
        assert_eq!(language_from_head(b"#!/bin/sh\n"), Some("shell"));
        assert_eq!(language_from_head(b"#!/usr/bin/env node\n"), Some("javascript"));
        assert_eq!(language_from_head(b"<?xml version=\"1.0\"?>"), Some("xml"));
        assert_eq!(language_from_head(b"plain text"), None);
    }

    #[test]
    fn detects_by_name_then_extension() {
        let registry = registry();
        assert_eq!(detect_language(Path::new("x/Makefile"), &registry), Some("makefile"));
        assert_eq!(detect_language(Path::new("x/main.GO"), &registry), Some("go"));
    }

    #[test]
    fn walks_supported_files_and_skips_hidden() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "# c\n").unwrap();
        fs::write(dir.path().join("b.txt"), "text\n").unwrap();
        fs::create_dir(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join(".hidden/c.py"), "# c\n").unwrap();
        fs::write(dir.path().join("script"), "#!/usr/bin/env ruby\nputs 1\n").unwrap();

        let files = find_files(&args_for(vec![dir.path().to_path_buf()]), &registry()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| {
                (
                    f.path.file_name().unwrap().to_string_lossy().into_owned(),
                    f.language.clone(),
                )
            })
            .collect();
        assert_eq!(
            names,
            vec![
                ("a.py".to_string(), Some("python".to_string())),
                ("script".to_string(), Some("ruby".to_string())),
            ]
        );
    }

    #[test]
    fn ignore_file_excludes_matches() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("vendor/lib.js"), "// c\n").unwrap();
        fs::write(dir.path().join("app.js"), "// c\n").unwrap();
        fs::write(dir.path().join("gen.min.js"), "// c\n").unwrap();
        let ignore_file = dir.path().join("patterns");
        fs::write(&ignore_file, "# comment\n\nvendor/\n*.min.js\n").unwrap();

        let args = VclrArgs {
            ignore: Some(ignore_file),
            ..args_for(vec![dir.path().to_path_buf()])
        };
        let files = find_files(&args, &registry()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("app.js"));
    }

    #[test]
    fn explicit_unsupported_file_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.xyz");
        fs::write(&path, "hello\n").unwrap();
        let files = find_files(&args_for(vec![path.clone()]), &registry()).unwrap();
        assert_eq!(
            files,
            vec![SourceFile {
                path,
                language: None
            }]
        );
    }

    #[test]
    fn lang_filter_restricts_results() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "# c\n").unwrap();
        fs::write(dir.path().join("b.rs"), "// c\n").unwrap();
        let args = VclrArgs {
            lang: vec!["rust".to_string()],
            ..args_for(vec![dir.path().to_path_buf()])
        };
        let files = find_files(&args, &registry()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].language.as_deref(), Some("rust"));

        let bogus = VclrArgs {
            lang: vec!["klingon".to_string()],
            ..args_for(vec![dir.path().to_path_buf()])
        };
        assert!(find_files(&bogus, &registry()).is_err());
    }

    #[test]
    fn missing_path_is_an_error() {
        let args = args_for(vec![PathBuf::from("/definitely/not/here")]);
        assert!(find_files(&args, &registry()).is_err());
    }
}
