//! Binary that emits command-line options markdown to stdout.
//!
//! Used by the docs build process to refresh the command-line reference
//! before the site is built.

fn main() {
    print!("{}", papertable_cli::render_options_markdown());
}
