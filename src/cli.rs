use std::path::PathBuf;

use clap::Parser;

/// adbmux - run one adb command on every attached Android device
#[derive(Parser, Debug)]
#[command(name = "adbmux")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  adbmux \"shell getprop ro.product.model\"\n  adbmux -w \"adb install app.apk\"")]
pub struct Cli {
    /// Command to run on each device (a leading `adb` is optional)
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Keep running and re-run the command when devices connect or change state
    #[arg(short, long)]
    pub watch: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Device sampling period in watch mode
    #[arg(long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Per-command timeout, 0 disables it
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to the adb binary
    #[arg(long, value_name = "PATH")]
    pub adb: Option<PathBuf>,
}
