use super::profile::{BlockComment, Heredoc, LanguageProfile, StringDelimiter};

const C_BLOCK: &[BlockComment] = &[BlockComment::new("/*", "*/")];
const C_LINE: &[&str] = &["//"];
const C_STRINGS: &[StringDelimiter] = &[
    StringDelimiter::quoted("\""),
    StringDelimiter::quoted("'"),
];

const C_STYLE: LanguageProfile = LanguageProfile {
    line_comments: C_LINE,
    block_comments: C_BLOCK,
    strings: C_STRINGS,
    ..LanguageProfile::EMPTY
};

pub(crate) const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "c",
        extensions: &["c", "h"],
        ..C_STYLE
    },
    LanguageProfile {
        name: "cpp",
        extensions: &["cpp", "cc", "cxx", "c++", "hpp", "hxx", "hh", "ino"],
        strings: &[
            StringDelimiter::raw("R\"(", ")\"").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "objective-c",
        extensions: &["m", "mm"],
        strings: &[
            StringDelimiter::quoted("@\""),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "csharp",
        extensions: &["cs"],
        strings: &[
            StringDelimiter::raw("\"\"\"", "\"\"\"").multiline(),
            StringDelimiter::raw("@\"", "\"").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "java",
        extensions: &["java"],
        strings: &[
            StringDelimiter::quoted("\"\"\"").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "javascript",
        extensions: &["js", "jsx", "mjs", "cjs"],
        strings: &[
            StringDelimiter::quoted("`").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        shebang: true,
        ..C_STYLE
    },
    LanguageProfile {
        name: "typescript",
        extensions: &["ts", "tsx", "mts", "cts"],
        strings: &[
            StringDelimiter::quoted("`").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        shebang: true,
        ..C_STYLE
    },
    LanguageProfile {
        name: "go",
        extensions: &["go"],
        strings: &[
            StringDelimiter::raw("`", "`").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        ..C_STYLE
    },
    // Lifetimes make a bare `'` useless as a delimiter; the two char-literal
    // forms that contain a double quote are listed so they cannot open a string.
    LanguageProfile {
        name: "rust",
        extensions: &["rs"],
        nestable: true,
        strings: &[
            StringDelimiter::raw("r##\"", "\"##").multiline(),
            StringDelimiter::raw("r#\"", "\"#").multiline(),
            StringDelimiter::raw("r\"", "\"").multiline(),
            StringDelimiter::quoted("\"").multiline(),
            StringDelimiter::raw("'\\\"", "'"),
            StringDelimiter::raw("'\"", "'"),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "swift",
        extensions: &["swift"],
        nestable: true,
        strings: &[
            StringDelimiter::quoted("\"\"\"").multiline(),
            StringDelimiter::quoted("\""),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "kotlin",
        extensions: &["kt", "kts"],
        nestable: true,
        strings: &[
            StringDelimiter::raw("\"\"\"", "\"\"\"").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "scala",
        extensions: &["scala", "sc"],
        nestable: true,
        strings: &[
            StringDelimiter::raw("\"\"\"", "\"\"\"").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "groovy",
        extensions: &["groovy", "gradle"],
        strings: &[
            StringDelimiter::quoted("\"\"\"").multiline(),
            StringDelimiter::quoted("'''").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        shebang: true,
        ..C_STYLE
    },
    LanguageProfile {
        name: "dart",
        extensions: &["dart"],
        nestable: true,
        strings: &[
            StringDelimiter::quoted("\"\"\"").multiline(),
            StringDelimiter::quoted("'''").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::quoted("'"),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "d",
        extensions: &["d"],
        block_comments: &[BlockComment::new("/*", "*/"), BlockComment::new("/+", "+/")],
        strings: &[
            StringDelimiter::raw("`", "`").multiline(),
            StringDelimiter::quoted("\"").multiline(),
            StringDelimiter::quoted("'"),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "zig",
        extensions: &["zig"],
        block_comments: &[],
        ..C_STYLE
    },
    LanguageProfile {
        name: "solidity",
        extensions: &["sol"],
        ..C_STYLE
    },
    LanguageProfile {
        name: "protobuf",
        extensions: &["proto"],
        ..C_STYLE
    },
    LanguageProfile {
        name: "php",
        extensions: &["php", "phtml"],
        line_comments: &["//", "#"],
        strings: &[
            StringDelimiter::quoted("\"").multiline(),
            StringDelimiter::quoted("'").multiline(),
        ],
        shebang: true,
        heredoc: Some(Heredoc::new("<<<")),
        ..C_STYLE
    },
    LanguageProfile {
        name: "css",
        extensions: &["css"],
        line_comments: &[],
        ..C_STYLE
    },
    LanguageProfile {
        name: "scss",
        extensions: &["scss", "sass", "less"],
        ..C_STYLE
    },
    LanguageProfile {
        name: "sql",
        extensions: &["sql"],
        line_comments: &["--"],
        strings: &[
            StringDelimiter::raw("'", "'").multiline(),
            StringDelimiter::raw("\"", "\"").multiline(),
        ],
        ..C_STYLE
    },
    LanguageProfile {
        name: "jsonc",
        extensions: &["jsonc", "json5"],
        strings: &[StringDelimiter::quoted("\"")],
        ..C_STYLE
    },
    LanguageProfile {
        name: "hcl",
        extensions: &["tf", "tfvars", "hcl"],
        line_comments: &["//", "#"],
        strings: &[StringDelimiter::quoted("\"")],
        ..C_STYLE
    },
];
