// args.rs - Command line arguments definition

use argh::FromArgs;

/// Default suffix appended to a source name to build its temporary name
pub const DEFAULT_SUFFIX: &str = "_swtmp";

/// Usage text printed by `sw` for `--help` and for an empty invocation
pub const USAGE: &str = "\
sw - swap filenames
Usage: sw [FILENAMES A] [FILENAMES B]
Examples:
    sw file1 file2
        will swap file1 and file2
    sw file1 file2 file3 file4
        will swap file1 and file3
        then swap file2 and file4
Exceptions are --help and --version arguments.
Every other argument is a filename, even if it starts with a dash.
See swx for dry runs, verification and a custom temporary suffix.
";

/// Usage text printed by `swx`
pub const EXTENDED_USAGE: &str = "\
swx - swap filenames, with options
Usage: swx [OPTIONS] [--] [FILENAMES A] [FILENAMES B]
Options:
    --suffix <S>      temporary name suffix (default: _swtmp)
    -n, --dry-run     print the rename plan and change nothing
    --format <F>      dry-run plan format: text, json (default: text)
    --verify          check file contents with SHA-256 after swapping
    -v, --verbose     report every rename on standard error
    --help            show this text
    --version         show the version
Use -- to pass filenames that start with a dash.
Exit codes are the same as for sw.
";

#[derive(FromArgs, Debug)]
/// swx - swap filenames, with options
pub struct Args {
    /// suffix appended to a source name to form its temporary name (default: _swtmp)
    #[argh(option, default = "String::from(DEFAULT_SUFFIX)")]
    pub suffix: String,

    /// print the rename plan without touching any file
    #[argh(switch, short = 'n')]
    pub dry_run: bool,

    /// dry-run plan format: text, json (default: text)
    #[argh(option, default = "String::from(\"text\")")]
    pub format: String,

    /// compare SHA-256 digests of every file before and after the swap
    #[argh(switch)]
    pub verify: bool,

    /// report each rename on standard error
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// filenames: the first half is swapped with the second half
    #[argh(positional)]
    pub filenames: Vec<String>,
}
