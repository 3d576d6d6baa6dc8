pub mod brightness;
pub mod output;
pub mod power;

use std::ffi::OsString;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(
    name = "zigbee-light",
    version,
    about = "Convert openHAB item state to and from zigbee light JSON events"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the openHAB REST API
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    pub url: String,

    /// Verbose output (show HTTP requests/responses)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Light power state
    #[command(subcommand)]
    Power(power::PowerCommand),

    /// Light brightness level
    #[command(subcommand)]
    Brightness(brightness::BrightnessCommand),
}

/// Rewrite Go-style single-dash flags (`-url X`, `-url=X`) into their
/// double-dash form. Only the flags ahead of the subcommand are touched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.by_ref().take(1).collect();
    let mut expect_value = false;

    for arg in args.by_ref() {
        if expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            break;
        };

        if text == "-url" || text == "--url" {
            expect_value = true;
            normalized.push("--url".into());
        } else if let Some(value) = text.strip_prefix("-url=") {
            normalized.push(format!("--url={}", value).into());
        } else if text == "-verbose" {
            normalized.push("--verbose".into());
        } else if text == "--" || !text.starts_with('-') {
            normalized.push(arg);
            break;
        } else {
            normalized.push(arg);
        }
    }

    normalized.extend(args);
    normalized
}

/// Join the trailing arguments of an `in` command back into one payload.
pub(crate) fn join_payload(parts: &[String]) -> String {
    parts.join(" ")
}
