use crate::config::CliConfig;
use crate::core::factory::BrickFactory;
use crate::domain::model::Brick;
use crate::utils::error::Result;
use crate::utils::prompt::{parse_dimension, prompt_line};
use crate::utils::validation::Validate;
use std::io::{BufRead, Write};

pub const TYPE_PROMPT: &str = "Enter the type of Lego brick (classic or duplo): ";
pub const COLUMNS_PROMPT: &str = "Enter the number of columns: ";
pub const ROWS_PROMPT: &str = "Enter the number of rows: ";

/// One interactive sizing run. Values already given on the command line are
/// used as-is; the rest are prompted for in order: type, columns, rows.
pub struct SizingSession<'a> {
    config: &'a CliConfig,
}

impl<'a> SizingSession<'a> {
    pub fn new(config: &'a CliConfig) -> Self {
        Self { config }
    }

    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Brick> {
        let brick_type = match &self.config.brick_type {
            Some(label) => label.clone(),
            None => prompt_line(input, output, TYPE_PROMPT)?,
        };
        let columns = match self.config.columns {
            Some(columns) => columns,
            None => parse_dimension("columns", &prompt_line(input, output, COLUMNS_PROMPT)?)?,
        };
        let rows = match self.config.rows {
            Some(rows) => rows,
            None => parse_dimension("rows", &prompt_line(input, output, ROWS_PROMPT)?)?,
        };

        tracing::debug!(
            "Sizing request: type={}, columns={}, rows={}",
            brick_type,
            columns,
            rows
        );

        let brick = BrickFactory::create(columns, rows, &brick_type)?;
        if self.config.strict {
            brick.validate()?;
        }

        Ok(brick)
    }
}

pub fn format_size(brick: &Brick) -> String {
    let (width, height) = brick.scale();
    format!("Size: {}x{} inches", width, height)
}
