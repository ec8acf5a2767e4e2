// The application picks the creator type from its launch plan, then lets the
// client code work with each one through the base trait.

use std::io::{self, Write};

use factory_method::{app, logging, LaunchPlan, Result};

fn main() -> Result<()> {
    let plan = LaunchPlan::embedded()?;
    logging::init(plan.level()?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&plan, &mut out)?;
    out.flush()?;
    Ok(())
}
