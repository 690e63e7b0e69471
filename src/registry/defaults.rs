//! Built-in executors and extension aliases.

/// Extensions whose suffix differs from the language key they run under.
/// Anything not listed here is used as the key directly.
pub(super) const EXTENSION_ALIASES: &[(&str, &str)] = &[
    ("cjs",    "javascript"),
    ("mjs",    "javascript"),
    ("js",     "javascript"),
    ("m",      "objective-c"),
    ("py",     "python"),
    ("pl",     "perl"),
    ("p6",     "perl6"),
    ("rb",     "ruby"),
    ("ps1",    "powershell"),
    ("sh",     "shellscript"),
    ("fs",     "fsharp"),
    ("cs",     "csharp"),
    ("vbs",    "vbscript"),
    ("coffee", "coffeescript"),
    ("jl",     "julia"),
    ("cr",     "crystal"),
    ("ml",     "ocaml"),
    ("clj",    "clojure"),
    ("hx",     "haxe"),
    ("rs",     "rust"),
    ("rkt",    "racket"),
    ("scm",    "scheme"),
    ("pas",    "pascal"),
    ("hs",     "haskell"),
    ("erl",    "erlang"),
];

const GFORTRAN: &str =
    "cd ${directory} && gfortran ${fileName} -o ${fileNameWithoutExt} && ${directory}${fileNameWithoutExt}";

pub(super) const EXECUTORS: &[(&str, &str)] = &[
    ("javascript",   "node"),
    ("java",         "cd ${directory} && javac ${fileName} && java ${fileNameWithoutExt}"),
    ("c",            "cd ${directory} && gcc ${fileName} -o ${fileNameWithoutExt} && ${directory}${fileNameWithoutExt}"),
    ("zig",          "zig run"),
    ("cpp",          "cd ${directory} && g++ ${fileName} -o ${fileNameWithoutExt} && ${directory}${fileNameWithoutExt}"),
    ("objective-c",  "cd ${directory} && gcc -framework Cocoa ${fileName} -o ${fileNameWithoutExt} && ${directory}${fileNameWithoutExt}"),
    ("php",          "php"),
    ("python",       "python -u"),
    ("perl",         "perl"),
    ("perl6",        "perl6"),
    ("ruby",         "ruby"),
    ("go",           "go run"),
    ("lua",          "lua"),
    ("groovy",       "groovy"),
    ("powershell",   "powershell -ExecutionPolicy ByPass -File"),
    ("bat",          "cmd /c"),
    ("shellscript",  "bash"),
    ("fsharp",       "fsi"),
    ("csharp",       "scriptcs"),
    ("vbscript",     "cscript //Nologo"),
    ("typescript",   "ts-node"),
    ("coffeescript", "coffee"),
    ("scala",        "scala"),
    ("swift",        "swift"),
    ("julia",        "julia"),
    ("crystal",      "crystal"),
    ("ocaml",        "ocaml"),
    ("r",            "Rscript"),
    ("applescript",  "osascript"),
    ("clojure",      "lein exec"),
    ("haxe",         "haxe --cwd ${directoryWithoutTrailingSlash} --run ${fileNameWithoutExt}"),
    ("rust",         "cd ${directory} && rustc ${fileName} && ${directory}${fileNameWithoutExt}"),
    ("racket",       "racket"),
    ("scheme",       "csi -script"),
    ("ahk",          "autohotkey"),
    ("autoit",       "autoit3"),
    ("dart",         "dart"),
    ("pascal",       "cd ${directory} && fpc ${fileName} && ${directory}${fileNameWithoutExt}"),
    ("d",            "cd ${directory} && dmd ${fileName} && ${directory}${fileNameWithoutExt}"),
    ("haskell",      "runghc"),
    ("nim",          "nim compile --verbosity:0 --hints:off --run"),
    ("lisp",         "sbcl --script"),
    ("kit",          "kitc --run"),
    ("v",            "v run"),
    ("sass",         "sass --style expanded"),
    ("scss",         "scss --style expanded"),
    ("less",         "cd ${directory} && lessc ${fileName} ${fileNameWithoutExt}.css"),
    ("FortranFreeForm",    GFORTRAN),
    ("fortran-modern",     GFORTRAN),
    ("fortran_fixed-form", GFORTRAN),
    ("fortran",            GFORTRAN),
    ("sml",          "cd ${directory} && sml ${fileName}"),
    ("mojo",         "mojo run"),
    ("erlang",       "escript"),
    ("spwn",         "spwn build"),
    ("pkl",          "cd ${directory} && pkl eval -f yaml ${fileName} -o ${fileNameWithoutExt}.yaml"),
    ("gleam",        "gleam run -m ${fileNameWithoutExt}"),
];
