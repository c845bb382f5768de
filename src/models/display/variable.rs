//! Variable display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{describe_visibility, format_date};
use crate::cli::OutputFormat;
use crate::client::models::Variable;
use crate::error::Result;
use crate::output::{Formattable, json, table};

/// Repository or environment variable row.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct VariableDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "VALUE")]
    pub value: String,

    #[tabled(rename = "UPDATED AT")]
    pub updated_at: String,
}

/// Organization variable row, with the visibility column.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgVariableDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "VALUE")]
    pub value: String,

    #[tabled(rename = "UPDATED AT")]
    pub updated_at: String,

    #[tabled(rename = "VISIBILITY")]
    pub visibility: String,
}

impl VariableDisplay {
    /// Human-friendly row: relative wording for the update time
    pub fn pretty(var: &Variable) -> Self {
        Self {
            name: var.name.clone(),
            value: var.value.clone(),
            updated_at: format!("Updated {}", format_date(&var.updated_at)),
        }
    }

    /// Machine-friendly row: bare date
    pub fn plain(var: &Variable) -> Self {
        Self {
            name: var.name.clone(),
            value: var.value.clone(),
            updated_at: format_date(&var.updated_at),
        }
    }
}

impl OrgVariableDisplay {
    /// Human-friendly row with the visibility spelled out
    pub fn pretty(var: &Variable) -> Self {
        let base = VariableDisplay::pretty(var);
        Self {
            name: base.name,
            value: base.value,
            updated_at: base.updated_at,
            visibility: describe_visibility(var),
        }
    }

    /// Machine-friendly row with the raw visibility in upper case
    pub fn plain(var: &Variable) -> Self {
        let base = VariableDisplay::plain(var);
        Self {
            name: base.name,
            value: base.value,
            updated_at: base.updated_at,
            visibility: var.visibility.as_str().to_uppercase(),
        }
    }
}

/// A fetched variable list ready to be rendered.
///
/// Organization listings get the extra visibility column.
#[derive(Debug, Clone)]
pub struct VariableListing {
    variables: Vec<Variable>,
    show_visibility: bool,
}

impl VariableListing {
    pub fn new(variables: Vec<Variable>, show_visibility: bool) -> Self {
        Self {
            variables,
            show_visibility,
        }
    }
}

impl Formattable for VariableListing {
    fn format(&self, format: OutputFormat) -> Result<String> {
        let vars = &self.variables;
        let rendered = match (format, self.show_visibility) {
            (OutputFormat::Json, _) => json::format_json(vars)?,
            (OutputFormat::Pretty, false) => {
                let rows: Vec<_> = vars.iter().map(VariableDisplay::pretty).collect();
                table::format_table(&rows)
            }
            (OutputFormat::Pretty, true) => {
                let rows: Vec<_> = vars.iter().map(OrgVariableDisplay::pretty).collect();
                table::format_table(&rows)
            }
            (OutputFormat::Table, false) => {
                let rows: Vec<_> = vars.iter().map(VariableDisplay::plain).collect();
                table::format_plain(&rows)
            }
            (OutputFormat::Table, true) => {
                let rows: Vec<_> = vars.iter().map(OrgVariableDisplay::plain).collect();
                table::format_plain(&rows)
            }
        };
        Ok(rendered)
    }
}
