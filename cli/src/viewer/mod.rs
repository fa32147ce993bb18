// Turn uploaded JSON / CSV / YAML / XML / TOML text into a column/row table

pub mod error;
pub mod xml;

pub use error::ViewerError;

use crate::config::Limits;

use csv::ReaderBuilder;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::path::Path;
use toml::Value as TomlValue;

pub type Row = Map<String, JsonValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataFormat {
    Json,
    Csv,
    Yaml,
    Xml,
    Toml,
}

impl DataFormat {
    /// Pick a format from the file extension, case-insensitively
    pub fn from_file_name(name: &str) -> Result<Self, ViewerError> {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(DataFormat::Json),
            Some("csv") => Ok(DataFormat::Csv),
            Some("yaml" | "yml") => Ok(DataFormat::Yaml),
            Some("xml") => Ok(DataFormat::Xml),
            Some("toml") => Ok(DataFormat::Toml),
            _ => Err(ViewerError::UnsupportedFormat(name.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    pub format: DataFormat,
    /// Keys of the first row, in document order
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl DataTable {
    fn from_rows(format: DataFormat, rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Self {
            format,
            columns,
            rows,
        }
    }

    /// Text shown in a table cell
    pub fn cell(&self, row: usize, column: &str) -> String {
        match self.rows.get(row).and_then(|r| r.get(column)) {
            None | Some(JsonValue::Null) => String::new(),
            Some(JsonValue::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Parse file contents according to the file name's extension
pub fn load_table(file_name: &str, content: &str) -> Result<DataTable, ViewerError> {
    let format = DataFormat::from_file_name(file_name)?;
    let table = parse_table(format, content)?;
    tracing::debug!(
        file_name,
        ?format,
        rows = table.rows.len(),
        columns = table.columns.len(),
        "loaded table"
    );
    Ok(table)
}

/// `load_table` for untrusted uploads: checks the size limit before parsing
pub fn load_table_within(
    file_name: &str,
    content: &str,
    limits: &Limits,
) -> Result<DataTable, ViewerError> {
    limits.check(content)?;
    load_table(file_name, content)
}

pub fn parse_table(format: DataFormat, content: &str) -> Result<DataTable, ViewerError> {
    let rows = match format {
        DataFormat::Json => {
            let value: JsonValue = serde_json::from_str(content)?;
            rows_from_value(value)
        }
        DataFormat::Csv => rows_from_csv(content)?,
        DataFormat::Yaml => {
            let value: JsonValue = serde_yaml::from_str(content)?;
            rows_from_value(value)
        }
        DataFormat::Xml => {
            let document = xml::parse_document(content)?;
            xml_rows(&document).into_iter().map(into_row).collect()
        }
        DataFormat::Toml => {
            let document: toml::Table = toml::from_str(content)?;
            let document = toml_to_json(&TomlValue::Table(document));
            match first_array(&document) {
                Some(array) => rows_from_value(array.clone()),
                None => rows_from_value(document),
            }
        }
    };

    Ok(DataTable::from_rows(format, rows))
}

// A top-level array gives one row per element; anything else is one row
fn rows_from_value(value: JsonValue) -> Vec<Row> {
    match value {
        JsonValue::Array(items) => items.into_iter().map(into_row).collect(),
        other => vec![into_row(other)],
    }
}

fn into_row(value: JsonValue) -> Row {
    match value {
        JsonValue::Object(map) => map,
        other => {
            let mut row = Map::new();
            row.insert("value".to_string(), other);
            row
        }
    }
}

// Header row names the fields; short records are padded, extra fields dropped
fn rows_from_csv(content: &str) -> Result<Vec<Row>, ViewerError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if header.is_empty() {
        return Err(ViewerError::MissingHeader);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = header
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let field = record.get(i).unwrap_or_default();
                (name.clone(), JsonValue::String(field.to_string()))
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Rows of an XML document: the first array met depth-first, else the
/// innermost element along the first-child chain as a single row.
fn xml_rows(value: &JsonValue) -> Vec<JsonValue> {
    match value {
        JsonValue::Array(items) => items.clone(),
        JsonValue::Object(map) => {
            for child in map.values() {
                match child {
                    JsonValue::Array(items) => return items.clone(),
                    JsonValue::Object(_) => {
                        let nested = xml_rows(child);
                        if !nested.is_empty() {
                            return nested;
                        }
                    }
                    _ => {}
                }
            }
            vec![value.clone()]
        }
        _ => Vec::new(),
    }
}

/// Depth-first search for the first array, in document order
fn first_array(value: &JsonValue) -> Option<&JsonValue> {
    match value {
        JsonValue::Array(_) => Some(value),
        JsonValue::Object(map) => map.values().find_map(first_array),
        _ => None,
    }
}

pub fn toml_to_json(value: &TomlValue) -> JsonValue {
    match value {
        TomlValue::String(s) => JsonValue::String(s.clone()),
        TomlValue::Integer(i) => JsonValue::Number((*i).into()),
        TomlValue::Float(f) => {
            // NaN and inf have no JSON form
            serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null)
        }
        TomlValue::Boolean(b) => JsonValue::Bool(*b),
        TomlValue::Datetime(dt) => JsonValue::String(dt.to_string()),
        TomlValue::Array(arr) => JsonValue::Array(arr.iter().map(toml_to_json).collect()),
        TomlValue::Table(table) => JsonValue::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DataFormat::from_file_name("a.JSON").unwrap(), DataFormat::Json);
        assert_eq!(DataFormat::from_file_name("dir/b.csv").unwrap(), DataFormat::Csv);
        assert_eq!(DataFormat::from_file_name("c.yml").unwrap(), DataFormat::Yaml);
        assert_eq!(DataFormat::from_file_name("c.YAML").unwrap(), DataFormat::Yaml);
        assert_eq!(DataFormat::from_file_name("d.xml").unwrap(), DataFormat::Xml);
        assert!(matches!(
            DataFormat::from_file_name("e.txt"),
            Err(ViewerError::UnsupportedFormat(_))
        ));
        assert!(DataFormat::from_file_name("noext").is_err());
    }

    #[test]
    fn test_json_array_keeps_column_order() {
        let table = load_table(
            "people.json",
            r#"[{"name": "Ada", "born": 1815}, {"name": "Alan", "born": 1912}]"#,
        )
        .unwrap();
        assert_eq!(table.columns, vec!["name", "born"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, "name"), "Alan");
        assert_eq!(table.cell(1, "born"), "1912");
        assert_eq!(table.cell(5, "name"), "");
    }

    #[test]
    fn test_json_single_object_is_one_row() {
        let table = load_table("one.json", r#"{"a": null, "b": [1, 2]}"#).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.cell(0, "a"), "");
        assert_eq!(table.cell(0, "b"), "[1,2]");
    }

    #[test]
    fn test_json_scalars_are_wrapped() {
        let table = load_table("nums.json", "[1, 2, 3]").unwrap();
        assert_eq!(table.columns, vec!["value"]);
        assert_eq!(table.cell(2, "value"), "3");
    }

    #[test]
    fn test_csv_uses_header_row() {
        let table = load_table("t.csv", "id,label\n1,\"a, b\"\n2\n3,c,extra\n").unwrap();
        assert_eq!(table.columns, vec!["id", "label"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.cell(0, "label"), "a, b");
        assert_eq!(table.cell(1, "label"), "");
        assert_eq!(table.rows[2].get("label"), Some(&json!("c")));
        assert_eq!(table.rows[2].len(), 2);
    }

    #[test]
    fn test_csv_quoted_fields_and_crlf() {
        let table = load_table(
            "q.csv",
            "name,quote\r\n\"Smith, J\",\"said \"\"hi\"\"\"\r\n\"two\nlines\",x\r\n",
        )
        .unwrap();
        assert_eq!(table.columns, vec!["name", "quote"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(0, "name"), "Smith, J");
        assert_eq!(table.cell(0, "quote"), "said \"hi\"");
        assert_eq!(table.cell(1, "name"), "two\nlines");
    }

    #[test]
    fn test_csv_skips_blank_lines() {
        let table = load_table("b.csv", "a,b\n\n,x\n").unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.cell(0, "a"), "");
        assert_eq!(table.cell(0, "b"), "x");
    }

    #[test]
    fn test_csv_without_header() {
        assert!(matches!(
            load_table("empty.csv", "\n"),
            Err(ViewerError::MissingHeader)
        ));
    }

    #[test]
    fn test_yaml_sequence_becomes_rows() {
        let table = load_table(
            "people.yml",
            "- name: Ada\n  born: 1815\n- name: Alan\n  born: 1912\n",
        )
        .unwrap();
        assert_eq!(table.format, DataFormat::Yaml);
        assert_eq!(table.columns, vec!["name", "born"]);
        assert_eq!(table.cell(1, "born"), "1912");
    }

    #[test]
    fn test_yaml_mapping_is_one_row() {
        let table = load_table("one.yaml", "host: localhost\nport: 8080\n").unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.columns, vec!["host", "port"]);
    }

    #[test]
    fn test_xml_first_nested_array_becomes_rows() {
        let table = load_table(
            "books.xml",
            "<library><name>City</name><shelf><book><title>Dune</title></book>\
             <book><title>Emma</title></book></shelf></library>",
        )
        .unwrap();
        assert_eq!(table.format, DataFormat::Xml);
        assert_eq!(table.columns, vec!["title"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, "title"), "Emma");
    }

    #[test]
    fn test_xml_without_repeats_is_one_row() {
        let table = load_table("c.xml", "<config><host>h</host><port>80</port></config>").unwrap();
        assert_eq!(table.columns, vec!["host", "port"]);
        assert_eq!(table.cell(0, "port"), "80");
    }

    #[test]
    fn test_toml_first_array_becomes_rows() {
        let table = load_table(
            "tools.toml",
            r#"
title = "tools"

[[tool]]
name = "hex"
enabled = true

[[tool]]
name = "binary"
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(table.format, DataFormat::Toml);
        assert_eq!(table.columns, vec!["name", "enabled"]);
        assert_eq!(table.cell(1, "name"), "binary");
        assert_eq!(table.cell(1, "enabled"), "false");
    }

    #[test]
    fn test_toml_without_array_is_one_row() {
        let table = load_table("c.toml", "a = 1\nb = \"x\"\n").unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_upload_over_limit() {
        let limits = Limits { max_input_bytes: 8 };
        assert!(load_table_within("a.json", "[1, 2]", &limits).is_ok());
        assert!(matches!(
            load_table_within("a.json", "[1, 2, 3, 4]", &limits),
            Err(ViewerError::InputTooLarge(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            load_table("bad.json", "{"),
            Err(ViewerError::Json(_))
        ));
        assert!(matches!(
            load_table("bad.toml", "= nope"),
            Err(ViewerError::Toml(_))
        ));
        assert!(matches!(
            load_table("bad.yaml", "a: [1, 2"),
            Err(ViewerError::Yaml(_))
        ));
        assert!(load_table("bad.xml", "<a><b></a>").is_err());
    }
}
