use log::{debug, warn};
use std::io::{self, Write};
use thiserror::Error;

use crate::format::{format_line, OutputFormat};
use crate::store::{Parameter, ParameterStore, PathQuery, StoreError};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to list parameters under {path}")]
    List {
        path: String,
        #[source]
        source: StoreError,
    },

    #[error("Failed to write output")]
    Write(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub recursive: bool,
    pub format: OutputFormat,
}

/// Writes every parameter found under a set of store paths as assignment lines
pub struct Exporter<'a, S, W> {
    store: &'a S,
    options: ExportOptions,
    out: W,
}

impl<'a, S: ParameterStore, W: Write> Exporter<'a, S, W> {
    pub fn new(store: &'a S, options: ExportOptions, out: W) -> Self {
        Self { store, options, out }
    }

    /// Export each path in order, returning the number of lines written
    pub fn export_all(&mut self, paths: &[String]) -> Result<usize, ExportError> {
        let mut total = 0;
        for path in paths {
            total += self.export_path(path)?;
        }

        self.out.flush()?;
        debug!("Exported {} parameters from {} paths", total, paths.len());
        Ok(total)
    }

    pub fn export_path(&mut self, path: &str) -> Result<usize, ExportError> {
        debug!("Exporting parameters under: {}", path);

        let mut query = PathQuery::new(path, self.options.recursive);
        let mut count = 0;
        let mut received = 0;

        loop {
            let page = self
                .store
                .parameters_by_path(&query)
                .map_err(|source| ExportError::List {
                    path: path.to_string(),
                    source,
                })?;
            debug!(
                "Received {} parameters for {} (more pages: {})",
                page.parameters.len(),
                path,
                page.next_token.is_some()
            );

            received += page.parameters.len();
            for parameter in &page.parameters {
                count += self.emit(path, parameter)?;
            }

            match page.next_token {
                Some(token) => query.next_token = Some(token),
                None => break,
            }
        }

        if received == 0 {
            if let Some(parameter) = self.leaf_parameter(path) {
                count += self.emit(path, &parameter)?;
            }
        }

        Ok(count)
    }

    /// Look the path up as a single parameter. The returned name gets the
    /// path's last segment appended so it survives prefix stripping.
    fn leaf_parameter(&self, path: &str) -> Option<Parameter> {
        match self.store.parameter(path) {
            Ok(Some(parameter)) => {
                let basename = path.rsplit('/').next().unwrap_or(path);
                Some(Parameter::new(
                    format!("{}/{}", parameter.name, basename),
                    parameter.value,
                ))
            }
            Ok(None) => {
                debug!("No parameters found under: {}", path);
                None
            }
            Err(err) => {
                warn!("Ignoring failed lookup of {} as a single parameter: {}", path, err);
                None
            }
        }
    }

    fn emit(&mut self, path: &str, parameter: &Parameter) -> Result<usize, ExportError> {
        match format_line(path, &parameter.name, &parameter.value, self.options.format) {
            Some(line) => {
                writeln!(self.out, "{}", line)?;
                Ok(1)
            }
            None => {
                warn!("Skipping {}: no variable name left after removing {}", parameter.name, path);
                Ok(0)
            }
        }
    }
}
