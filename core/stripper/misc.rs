use super::profile::{BlockComment, LanguageProfile, StringDelimiter};

const DOUBLE_QUOTE: &[StringDelimiter] = &[StringDelimiter::raw("\"", "\"")];
const QUOTES: &[StringDelimiter] = &[
    StringDelimiter::quoted("\""),
    StringDelimiter::quoted("'"),
];

pub(crate) const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "ada",
        extensions: &["ada", "adb", "ads"],
        line_comments: &["--"],
        strings: DOUBLE_QUOTE,
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "vhdl",
        extensions: &["vhd", "vhdl"],
        line_comments: &["--"],
        strings: DOUBLE_QUOTE,
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "cabal",
        extensions: &["cabal"],
        line_comments: &["--"],
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "visualbasic",
        extensions: &["vb", "vbs", "bas"],
        line_comments: &["'"],
        strings: DOUBLE_QUOTE,
        ..LanguageProfile::EMPTY
    },
    // A `"` opens a comment in Vim script; only single-quoted strings are
    // recognised.
    LanguageProfile {
        name: "vim",
        extensions: &["vim"],
        filenames: &[".vimrc"],
        line_comments: &["\""],
        strings: &[StringDelimiter::raw("'", "'")],
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "pascal",
        extensions: &["pas", "pp", "dpr", "lpr"],
        line_comments: &["//"],
        block_comments: &[BlockComment::new("(*", "*)"), BlockComment::new("{", "}")],
        strings: &[StringDelimiter::raw("'", "'")],
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "assembly",
        extensions: &["asm", "nasm"],
        line_comments: &[";"],
        strings: QUOTES,
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "gas",
        extensions: &["s"],
        line_comments: &[";", "#"],
        block_comments: &[BlockComment::new("/*", "*/")],
        strings: QUOTES,
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "batch",
        extensions: &["bat", "cmd"],
        line_comments: &["@REM", "@Rem", "@rem", "REM", "Rem", "rem", "::"],
        strings: &[StringDelimiter::raw("\"", "\"")],
        word_start_comments: true,
        word_end_comments: true,
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "matlab",
        extensions: &["matlab"],
        line_comments: &["%"],
        block_comments: &[BlockComment::new("%{", "%}")],
        strings: &[StringDelimiter::raw("\"", "\"")],
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "latex",
        extensions: &["tex", "sty", "cls", "bib"],
        line_comments: &["%"],
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "fortran",
        extensions: &["f90", "f95", "f03", "f08"],
        line_comments: &["!"],
        strings: &[StringDelimiter::raw("\"", "\""), StringDelimiter::raw("'", "'")],
        ..LanguageProfile::EMPTY
    },
];
