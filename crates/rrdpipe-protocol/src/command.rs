//! Assembly of `create` and `update` command lines
//!
//! Commands are rendered as single newline-terminated lines ready to be
//! written to the tool's stdin. All validation happens here or in the type
//! constructors, before any I/O is attempted.

use crate::archive::ArchiveSpec;
use crate::datastore::DatastoreSpec;
use crate::error::{ProtocolError, Result};
use crate::timestamp::Timestamp;
use crate::value::DatastoreValue;

/// Render a `create` command line
///
/// Shape: `create <filename> DS:... [DS:...]* RRA:... [RRA:...]*\n`
///
/// # Errors
///
/// - `InvalidDatastoreSpec` if `datastores` is empty
/// - `InvalidArchiveSpec` if `archives` is empty
pub fn create_command(
    filename: &str,
    datastores: &[DatastoreSpec],
    archives: &[ArchiveSpec],
) -> Result<String> {
    if datastores.is_empty() {
        return Err(ProtocolError::InvalidDatastoreSpec(
            "create requires at least one datastore".to_string(),
        ));
    }
    if archives.is_empty() {
        return Err(ProtocolError::InvalidArchiveSpec(
            "create requires at least one archive".to_string(),
        ));
    }

    let mut line = format!("create {}", filename);
    for ds in datastores {
        line.push(' ');
        line.push_str(&ds.to_string());
    }
    for rra in archives {
        line.push(' ');
        line.push_str(&rra.to_string());
    }
    line.push('\n');

    Ok(line)
}

/// Render an `update` command line
///
/// Shape: `update <filename> -t <n1>:<n2>:... <ts>:<v1>:<v2>:...\n`
///
/// Names and values stay in the same order and count by construction: both
/// token lists are drawn from the same `values` slice.
///
/// # Errors
///
/// - `InvalidDatastoreSpec` if `values` is empty
pub fn update_command(
    filename: &str,
    values: &[DatastoreValue],
    timestamp: &Timestamp,
) -> Result<String> {
    if values.is_empty() {
        return Err(ProtocolError::InvalidDatastoreSpec(
            "update requires at least one value".to_string(),
        ));
    }

    let names = values
        .iter()
        .map(|v| v.name().to_string())
        .collect::<Vec<_>>()
        .join(":");
    let rendered = values
        .iter()
        .map(|v| v.value().to_string())
        .collect::<Vec<_>>()
        .join(":");

    Ok(format!(
        "update {} -t {} {}:{}\n",
        filename, names, timestamp, rendered
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ConsolidationFn;

    #[test]
    fn test_create_temperature_example() {
        let datastores = vec![DatastoreSpec::gauge("temp", 600, -273, 5000).unwrap()];
        let archives = vec![
            ArchiveSpec::new(ConsolidationFn::Average, 0.5, 1, 1200).unwrap(),
            ArchiveSpec::new(ConsolidationFn::Min, 0.5, 12, 2400).unwrap(),
            ArchiveSpec::new(ConsolidationFn::Max, 0.5, 12, 2400).unwrap(),
            ArchiveSpec::new(ConsolidationFn::Average, 0.5, 12, 2400).unwrap(),
        ];

        let line = create_command("temperature.rrd", &datastores, &archives).unwrap();
        assert_eq!(
            line,
            "create temperature.rrd DS:temp:GAUGE:600:-273:5000 \
             RRA:AVERAGE:0.50:1:1200 RRA:MIN:0.50:12:2400 \
             RRA:MAX:0.50:12:2400 RRA:AVERAGE:0.50:12:2400\n"
        );
    }

    #[test]
    fn test_create_requires_datastores_and_archives() {
        let archives = vec![ArchiveSpec::new(ConsolidationFn::Last, 0.5, 1, 10).unwrap()];
        let err = create_command("x.rrd", &[], &archives).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidDatastoreSpec(_)));

        let datastores = vec![DatastoreSpec::gauge("a", 600, 0, 1).unwrap()];
        let err = create_command("x.rrd", &datastores, &[]).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidArchiveSpec(_)));
    }

    #[test]
    fn test_update_now_example() {
        let values = vec![DatastoreValue::new("temp", 50).unwrap()];
        let line = update_command("temperature.rrd", &values, &Timestamp::Now).unwrap();
        assert_eq!(line, "update temperature.rrd -t temp N:50\n");
    }

    #[test]
    fn test_update_multiple_values_keep_order() {
        let values = vec![
            DatastoreValue::new("in", 1200).unwrap(),
            DatastoreValue::new("out", 0.25).unwrap(),
            DatastoreValue::new("drops", "U").unwrap(),
        ];
        let ts = Timestamp::Literal("920804400".to_string());
        let line = update_command("net.rrd", &values, &ts).unwrap();
        assert_eq!(line, "update net.rrd -t in:out:drops 920804400:1200:0.25:U\n");
    }

    #[test]
    fn test_update_requires_values() {
        let err = update_command("x.rrd", &[], &Timestamp::Now).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidDatastoreSpec(_)));
    }
}
