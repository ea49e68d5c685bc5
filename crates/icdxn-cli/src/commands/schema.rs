use anyhow::bail;
use icdxn_core::Selector;
use icdxn_core::entities::{Association, Disease, DiseaseTests, ExportRow, LabTest};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPE_NAMES: [&str; 6] = [
    "disease",
    "lab_test",
    "association",
    "disease_tests",
    "export_row",
    "selector",
];

fn schema_for_type(type_name: &str) -> Option<schemars::Schema> {
    Some(match type_name {
        "disease" => schema_for!(Disease),
        "lab_test" => schema_for!(LabTest),
        "association" => schema_for!(Association),
        "disease_tests" => schema_for!(DiseaseTests),
        "export_row" => schema_for!(ExportRow),
        "selector" => schema_for!(Selector),
        _ => return None,
    })
}

/// Handle `icdxn schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema_for_type(&args.type_name) else {
        bail!(
            "unknown type '{}' (expected one of: {})",
            args.type_name,
            TYPE_NAMES.join(", ")
        );
    };
    output(&schema, flags.format)
}
