//! `xcmeta doctor` command

use anyhow::Result;

use xcmeta::ops::{doctor, format_report};
use xcmeta::util::process::SystemRunner;
use xcmeta::GlobalContext;

pub fn execute(ctx: &GlobalContext) -> Result<()> {
    let report = doctor(ctx.config(), &SystemRunner);

    print!("{}", format_report(&report, ctx.is_verbose()));

    // Exit with error code if required checks failed
    if !report.all_required_passed() {
        std::process::exit(1);
    }

    Ok(())
}
