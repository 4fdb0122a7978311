use clap::Args;

use chrono::Local;
use moodlog_core::{demo_entries, Config, ReportingZone};

use super::{resolve_now, resolve_zone};

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Stamp the newest entry at this RFC 3339 instant
    #[arg(long)]
    pub now: Option<String>,
    /// UTC offset in minutes for the display dates
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,
}

pub fn run(args: DemoArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let now = resolve_now(args.now.as_deref())?;

    let entries = match resolve_zone(args.utc_offset, config)? {
        ReportingZone::Fixed(offset) => demo_entries(now, &offset),
        ReportingZone::Local => demo_entries(now, &Local),
    };
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
