// The application: picks creators from the launch plan and hands each one to
// the client code.

use std::io::Write;

use tracing::{debug, info};

use crate::client::client_code;
use crate::config::LaunchPlan;
use crate::error::{AppError, Result};

pub fn run<W: Write + ?Sized>(plan: &LaunchPlan, out: &mut W) -> Result<()> {
    if plan.launches.is_empty() {
        return Err(AppError::EmptyPlan);
    }

    for (index, kind) in plan.launches.iter().enumerate() {
        if index > 0 {
            out.write_all(plan.separator.as_bytes())?;
        }

        debug!(creator = kind.label(), index, "launching");
        writeln!(out, "App: Launched with the {}.", kind.label())?;
        let creator = kind.build();
        client_code(creator.as_ref(), &mut *out)?;
    }

    info!(launches = plan.launches.len(), "demo finished");
    Ok(())
}
