//! Constant overrides and composition files.

use std::collections::BTreeMap;
use std::path::Path;

use pc_chem::Composition;
use pc_core::ConstantContext;

use crate::error::{CliError, CliResult};

fn read(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Parse a `NAME=VALUE` override.
pub fn parse_override(text: &str) -> CliResult<(String, f64)> {
    let invalid = || CliError::InvalidOverride {
        text: text.to_string(),
    };
    let (name, value) = text.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    let value: f64 = value.trim().parse().map_err(|_| invalid())?;
    Ok((name.to_string(), value))
}

/// Flat `NAME: value` map, in YAML or JSON.
pub fn overrides_from_str(content: &str, json: bool) -> CliResult<BTreeMap<String, f64>> {
    let map = if json {
        serde_json::from_str(content)?
    } else {
        serde_yaml::from_str(content)?
    };
    Ok(map)
}

pub fn load_overrides(path: &Path) -> CliResult<BTreeMap<String, f64>> {
    let content = read(path)?;
    overrides_from_str(&content, is_json(path))
}

/// Defaults, then the overrides file, then `--set` flags; later values win.
pub fn build_context(file: Option<&Path>, sets: &[String]) -> CliResult<ConstantContext> {
    let mut ctx = ConstantContext::default();
    if let Some(path) = file {
        let overrides = load_overrides(path)?;
        tracing::debug!(path = %path.display(), count = overrides.len(), "constant overrides loaded");
        ctx.update(overrides);
    }
    let sets = sets
        .iter()
        .map(|s| parse_override(s))
        .collect::<CliResult<Vec<_>>>()?;
    ctx.update(sets);
    Ok(ctx)
}

/// Composition from an ordered `name: amount` mapping. JSON objects are accepted
/// as YAML flow mappings, which keeps their entry order.
pub fn composition_from_str(content: &str, origin: &Path) -> CliResult<Composition> {
    let mapping: serde_yaml::Mapping = serde_yaml::from_str(content)?;
    let mut entries = Vec::with_capacity(mapping.len());
    for (key, value) in &mapping {
        let name = match key {
            serde_yaml::Value::String(s) => s.clone(),
            other => serde_yaml::to_string(other)?.trim().to_string(),
        };
        let amount = value.as_f64().ok_or_else(|| CliError::NotANumber {
            path: origin.to_path_buf(),
            name: name.clone(),
        })?;
        entries.push((name, amount));
    }
    Ok(Composition::normalize(entries)?)
}

pub fn load_composition(path: &Path) -> CliResult<Composition> {
    let content = read(path)?;
    composition_from_str(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_syntax() {
        assert_eq!(parse_override("MW_AIR=29").unwrap(), ("MW_AIR".into(), 29.0));
        assert_eq!(parse_override(" R = 8.314 ").unwrap(), ("R".into(), 8.314));
        assert!(matches!(
            parse_override("MW_AIR"),
            Err(CliError::InvalidOverride { .. })
        ));
        assert!(parse_override("=1").is_err());
        assert!(parse_override("R=abc").is_err());
    }

    #[test]
    fn overrides_in_both_formats() {
        let yaml = overrides_from_str("MW_AIR: 29.0\nCUSTOM: 1.5\n", false).unwrap();
        assert_eq!(yaml["MW_AIR"], 29.0);
        assert_eq!(yaml["CUSTOM"], 1.5);
        let json = overrides_from_str(r#"{"T_STANDARD": 288.15}"#, true).unwrap();
        assert_eq!(json["T_STANDARD"], 288.15);
        assert!(overrides_from_str("MW_AIR: heavy", false).is_err());
    }

    #[test]
    fn sets_apply_after_defaults() {
        let ctx = build_context(None, &["MW_AIR=29".into(), "MW_AIR=30".into()]).unwrap();
        assert_eq!(ctx.mw_air, 30.0);
        assert_eq!(ctx.r, ConstantContext::default().r);
    }

    #[test]
    fn composition_keeps_file_order() {
        let text = "methane: 71.432\nethane: 11.732\nfractions: 0.889\npropane: 7.595\n";
        let comp = composition_from_str(text, Path::new("gas.yaml")).unwrap();
        let names: Vec<_> = comp.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["methane", "ethane", "fractions", "propane"]);
        assert!(comp.fraction().is_some());
    }

    #[test]
    fn composition_rejects_non_numbers() {
        let err = composition_from_str("methane: lots\n", Path::new("gas.yaml")).unwrap_err();
        assert!(matches!(err, CliError::NotANumber { name, .. } if name == "methane"));
    }
}
