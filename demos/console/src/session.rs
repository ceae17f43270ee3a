//! Executes parsed commands against a `Registry` and renders the results.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use hm_core::{Professional, Specialty};
use hm_registry::{Registry, RegistryError};

use crate::command::{self, Command, HELP};

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Feed every line of `input` to the registry until `quit` or end of input.
///
/// Command failures are reported on `out` and never stop the loop; only I/O
/// errors on `input`/`out` are returned.
pub fn run<R: BufRead, W: Write>(registry: &mut Registry, input: R, out: &mut W) -> Result<()> {
    for (n, line) in input.lines().enumerate() {
        let line = line?;
        match command::parse(&line) {
            Ok(Some(cmd)) => {
                debug!(line = n + 1, ?cmd, "executing");
                if execute(registry, cmd, out)? == Flow::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }
    Ok(())
}

pub fn execute<W: Write>(registry: &mut Registry, cmd: Command, out: &mut W) -> Result<Flow> {
    match cmd {
        Command::AddLocality { name, has_hospital } => {
            match registry.add_locality(name.as_str(), has_hospital) {
                Ok(id) => writeln!(out, "Locality {name} registered with ID: {}", id.get())?,
                Err(e) => report(out, &e)?,
            }
        }

        Command::AddRoad { from, to } => match registry.add_road(from, to) {
            Ok(is_new) => {
                let name = |id| registry.locality(id).map_or("?", |l| l.name.as_str());
                if is_new {
                    writeln!(out, "Road registered from {} to {}!", name(from), name(to))?;
                } else {
                    writeln!(out, "Road from {} to {} was already registered.", name(from), name(to))?;
                }
            }
            Err(e) => report(out, &e)?,
        },

        Command::NearestHospital { start } => match registry.nearest_hospital(start) {
            Ok(route) => {
                let name = registry.locality(route.hospital).map_or("?", |l| l.name.as_str());
                let path: Vec<String> = route.path.iter().map(|id| id.get().to_string()).collect();
                writeln!(out, ">>> HOSPITAL FOUND <<<")?;
                writeln!(out, "Locality: {name} (ID: {})", route.hospital.get())?;
                writeln!(out, "Hops: {}  Path: {}", route.hops, path.join(" -> "))?;
            }
            Err(RegistryError::Graph(hm_graph::GraphError::NoHospitalReachable { .. })) => {
                writeln!(out, "No hospital reachable from this locality.")?;
            }
            Err(e) => report(out, &e)?,
        },

        Command::RegisterProfessional { name, specialty, license, position } => {
            match registry.register_professional(name, specialty, license, position) {
                Ok(p) => writeln!(out, "Professional {} registered successfully!", p.name)?,
                Err(e) => report(out, &e)?,
            }
        }

        Command::ListByName => {
            writeln!(out, "--- PROFESSIONALS BY NAME ---")?;
            for p in registry.list_by_name() {
                write_block(out, p, false)?;
            }
        }

        Command::ListBySpecialty => {
            writeln!(out, "--- PROFESSIONALS BY SPECIALTY ---")?;
            for p in registry.list_by_specialty() {
                write_block(out, p, true)?;
            }
        }

        Command::Nearby { center, radius } => {
            let radius = radius.unwrap_or(registry.config().nearby_radius);
            let report = registry.nearby_within(center, radius);
            writeln!(out, "Searching professionals within {radius} units of {center}...")?;
            for m in &report.matches {
                writeln!(
                    out,
                    "- {} [{}] Distance: {:.2} units",
                    m.professional.name, m.professional.specialty, m.distance
                )?;
            }
            writeln!(out, "Total: {} professionals found.", report.count)?;
        }

        Command::Specialties => {
            for (i, sp) in Specialty::ALL.iter().enumerate() {
                writeln!(out, "{}. {sp}", i + 1)?;
            }
        }

        Command::Help => writeln!(out, "{HELP}")?,

        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn report<W: Write>(out: &mut W, e: &RegistryError) -> Result<()> {
    writeln!(out, "Error: {e}")?;
    Ok(())
}

fn write_block<W: Write>(out: &mut W, p: &Professional, specialty_first: bool) -> Result<()> {
    if specialty_first {
        writeln!(out, "| Specialty: {}", p.specialty)?;
        writeln!(out, "| Name: {}", p.name)?;
    } else {
        writeln!(out, "| Name: {}", p.name)?;
        writeln!(out, "| Specialty: {}", p.specialty)?;
    }
    writeln!(out, "| CRM: {}", p.license.get())?;
    writeln!(out, "| Coordinates: {}", p.position)?;
    writeln!(out)?;
    Ok(())
}
