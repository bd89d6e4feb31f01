use super::profile::{BlockComment, Heredoc, LanguageProfile, StringDelimiter};

const HASH: &[&str] = &["#"];
const QUOTES: &[StringDelimiter] = &[
    StringDelimiter::quoted("\""),
    StringDelimiter::quoted("'"),
];
const TRIPLE_QUOTES: &[StringDelimiter] = &[
    StringDelimiter::quoted("\"\"\"").multiline(),
    StringDelimiter::quoted("'''").multiline(),
    StringDelimiter::quoted("\""),
    StringDelimiter::quoted("'"),
];
const SHELL_QUOTES: &[StringDelimiter] = &[
    StringDelimiter::quoted("\"").multiline(),
    StringDelimiter::raw("'", "'").multiline(),
];

const HASH_STYLE: LanguageProfile = LanguageProfile {
    line_comments: HASH,
    strings: QUOTES,
    ..LanguageProfile::EMPTY
};

pub(crate) const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "python",
        extensions: &["py", "pyw", "pyi"],
        strings: TRIPLE_QUOTES,
        shebang: true,
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "shell",
        extensions: &["sh", "bash", "zsh", "ksh"],
        filenames: &[".bashrc", ".zshrc", ".profile"],
        strings: SHELL_QUOTES,
        shebang: true,
        word_start_comments: true,
        heredoc: Some(Heredoc::new("<<").spaced()),
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "fish",
        extensions: &["fish"],
        strings: SHELL_QUOTES,
        shebang: true,
        word_start_comments: true,
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "ruby",
        extensions: &["rb", "rake", "gemspec"],
        filenames: &["Rakefile", "Gemfile"],
        block_comments: &[BlockComment::new("=begin", "=end")],
        strings: &[
            StringDelimiter::quoted("\"").multiline(),
            StringDelimiter::quoted("'").multiline(),
        ],
        shebang: true,
        heredoc: Some(Heredoc::new("<<")),
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "crystal",
        extensions: &["cr"],
        strings: &[StringDelimiter::quoted("\"").multiline()],
        shebang: true,
        heredoc: Some(Heredoc::new("<<")),
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "perl",
        extensions: &["pl", "pm", "t"],
        block_comments: &[BlockComment::new("=pod", "=cut")],
        strings: &[
            StringDelimiter::quoted("\"").multiline(),
            StringDelimiter::quoted("'").multiline(),
        ],
        shebang: true,
        word_start_comments: true,
        heredoc: Some(Heredoc::new("<<")),
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "powershell",
        extensions: &["ps1", "psm1", "psd1"],
        block_comments: &[BlockComment::new("<#", "#>")],
        strings: &[
            StringDelimiter::raw("@\"", "\"@").multiline(),
            StringDelimiter::raw("@'", "'@").multiline(),
            StringDelimiter::quoted("\"").multiline(),
            StringDelimiter::raw("'", "'").multiline(),
        ],
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "r",
        extensions: &["r"],
        strings: &[
            StringDelimiter::quoted("\"").multiline(),
            StringDelimiter::quoted("'").multiline(),
        ],
        shebang: true,
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "tcl",
        extensions: &["tcl"],
        strings: &[StringDelimiter::quoted("\"")],
        shebang: true,
        word_start_comments: true,
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "elixir",
        extensions: &["ex", "exs"],
        strings: &[
            StringDelimiter::quoted("\"\"\"").multiline(),
            StringDelimiter::quoted("'''").multiline(),
            StringDelimiter::quoted("\"").multiline(),
            StringDelimiter::quoted("'"),
        ],
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "nim",
        extensions: &["nim", "nims"],
        block_comments: &[BlockComment::new("#[", "]#")],
        nestable: true,
        strings: &[
            StringDelimiter::raw("\"\"\"", "\"\"\"").multiline(),
            StringDelimiter::quoted("\""),
        ],
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "julia",
        extensions: &["jl"],
        block_comments: &[BlockComment::new("#=", "=#")],
        nestable: true,
        strings: &[
            StringDelimiter::quoted("\"\"\"").multiline(),
            StringDelimiter::quoted("\""),
        ],
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "coffeescript",
        extensions: &["coffee"],
        block_comments: &[BlockComment::new("###", "###")],
        strings: TRIPLE_QUOTES,
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "lua",
        extensions: &["lua"],
        line_comments: &["--"],
        block_comments: &[BlockComment::new("--[[", "]]")],
        strings: &[
            StringDelimiter::raw("[[", "]]").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        shebang: true,
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "makefile",
        extensions: &["mk", "mak"],
        filenames: &["Makefile", "makefile", "GNUmakefile"],
        strings: &[],
        ..HASH_STYLE
    },
    LanguageProfile {
        name: "dockerfile",
        extensions: &["dockerfile"],
        filenames: &["Dockerfile", "Containerfile"],
        strings: &[],
        word_start_comments: true,
        ..HASH_STYLE
    },
];
