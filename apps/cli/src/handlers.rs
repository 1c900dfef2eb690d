//! Command implementations. Output goes to the writer handed in, never to stdout directly.

use crate::args::Command;
use anyhow::{Context, Result, bail};
use cpv::RegistryFactory;
use cpv::domain::{CodeEntry, Level, Version};
use std::io::Write;
use tracing::debug;

pub(crate) fn run(command: &Command, factory: &RegistryFactory, json: bool, out: &mut impl Write) -> Result<()> {
    debug!(?command, "Running command");
    match command {
        Command::Lookup { code, edition } => lookup(factory, code, edition.edition, json, out),
        Command::List { level, edition } => list(factory, level.map(Level::from), *edition, json, out),
        Command::Count => count(factory, json, out),
        Command::Mapping { code, edition } => mapping(factory, code, edition.edition, json, out),
        Command::Locales => locales(factory, json, out),
    }
}

fn lookup(factory: &RegistryFactory, code: &str, version: Version, json: bool, out: &mut impl Write) -> Result<()> {
    let Some(entry) = factory.codes().lookup(code, version).context("Cannot load the CPV dataset")? else {
        bail!("No code {code} in edition {version}");
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &entry)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{} (v{})  {}", entry.code(), entry.version(), entry.name())?;
    writeln!(out, "  local name:  {}", entry.local_name())?;
    writeln!(out, "  type:        {}", entry.code_type())?;
    writeln!(out, "  level:       {} (short code {})", entry.level(), entry.short_code())?;
    writeln!(out, "  parent:      {}", entry.parent_code().unwrap_or("-"))?;
    Ok(())
}

fn list(
    factory: &RegistryFactory,
    level: Option<Level>,
    version: Option<Version>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let entries: Vec<CodeEntry> = factory
        .codes()
        .iterate()
        .context("Cannot load the CPV dataset")?
        .filter(|entry| level.is_none_or(|level| entry.level() == level))
        .filter(|entry| version.is_none_or(|version| entry.version() == version))
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(out, "{}  v{}  {:<11}  {}", entry.code(), entry.version(), entry.level(), entry.local_name())?;
    }
    Ok(())
}

fn count(factory: &RegistryFactory, json: bool, out: &mut impl Write) -> Result<()> {
    let count = factory.codes().count().context("Cannot load the CPV dataset")?;
    if json {
        writeln!(out, "{}", serde_json::json!({ "count": count }))?;
    } else {
        writeln!(out, "{count}")?;
    }
    Ok(())
}

fn mapping(factory: &RegistryFactory, code: &str, version: Version, json: bool, out: &mut impl Write) -> Result<()> {
    let Some(target) = factory.mappings().get_mapping(code, version).context("Cannot load the CPV mappings")? else {
        bail!("No mapping for {code} in edition {version}");
    };

    if json {
        writeln!(out, "{}", serde_json::to_string(&target)?)?;
    } else {
        writeln!(out, "{target}")?;
    }
    Ok(())
}

fn locales(factory: &RegistryFactory, json: bool, out: &mut impl Write) -> Result<()> {
    let codes = factory.codes();
    let locales = codes.translator().as_locale_aware().map(|aware| aware.available_locales()).unwrap_or_default();

    if json {
        writeln!(out, "{}", serde_json::to_string(&locales)?)?;
    } else {
        for locale in &locales {
            writeln!(out, "{locale}")?;
        }
    }
    Ok(())
}
