//! Show the CSV column mapping.

use otr_ingest::schema::{SessionSchema, BAT_SPEED_SCHEMA, EXIT_VELOCITY_SCHEMA};
use otr_ingest::SCHEMA_VERSION;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let value = serde_json::json!({
            "schema_version": SCHEMA_VERSION,
            "sessions": [BAT_SPEED_SCHEMA, EXIT_VELOCITY_SCHEMA],
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Column schema v{SCHEMA_VERSION}");
    println!("Headers match by name, ignoring case and surrounding spaces.");
    for schema in [&BAT_SPEED_SCHEMA, &EXIT_VELOCITY_SCHEMA] {
        print_schema(schema);
    }
    Ok(())
}

fn print_schema(schema: &SessionSchema) {
    println!();
    println!("{} export:", schema.kind.title());
    for column in schema.columns {
        let names = column
            .headers
            .iter()
            .map(|h| format!("\"{h}\""))
            .collect::<Vec<_>>()
            .join(" | ");
        let required = if column.required { " (required)" } else { "" };
        println!("  {:<16} <- {names}{required}", column.field.as_str());
    }
}
