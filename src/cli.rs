// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Unlike tools with several modes, site-scout does exactly one thing
// (crawl a site), so there are no subcommands - just one struct whose
// fields are the arguments.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: For arguments the user may leave out
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
//
// clap also handles bad input for us: an unparseable --depth or --workers
// value becomes a usage error and the program exits before any network
// activity happens.
#[derive(Parser, Debug)]
#[command(
    name = "site-scout",
    version = "0.1.0",
    about = "Map every reachable path on a website",
    long_about = "site-scout crawls a website breadth-first from a seed URL, staying on the \
                  same domain (subdomains included), and reports every discovered path with \
                  its HTTP status code."
)]
pub struct Cli {
    /// Target URL to crawl (e.g., https://example.com)
    ///
    /// This is a positional argument (required, no flag needed).
    /// If the scheme is missing, https:// is assumed.
    pub url: String,

    /// Maximum crawl depth (default: 3)
    ///
    /// Number of link-hops from the seed URL, inclusive.
    /// Depth 0 = just the seed page
    /// Depth 1 = seed page + all pages it links to
    /// etc.
    #[arg(short = 'd', long, default_value_t = 3)]
    pub depth: usize,

    /// Number of concurrent workers (default: 10)
    ///
    /// How many fetches may be in flight at the same time.
    #[arg(short = 'w', long, default_value_t = 10)]
    pub workers: usize,

    /// Output file to save results
    ///
    /// If given, one "<status>\t<path>" line per discovered record is
    /// written here, sorted by path.
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Output results in JSON format instead of a table
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no Subcommand enum here?
//    - clap supports subcommands (like `git commit` vs `git push`)
//    - site-scout has a single mode, so a flat struct is simpler
//
// 2. What does default_value_t do?
//    - Supplies a default when the flag is omitted
//    - The _t suffix means "typed": the default is a usize, not a string
//
// 3. Why Option<String> for output?
//    - None = the user didn't ask for a file, print to the console only
//    - Some(path) = also write the results to this file
// -----------------------------------------------------------------------------
