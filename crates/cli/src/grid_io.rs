use anyhow::{bail, Context, Result};
use geomkern::array::NumericArray2D;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// JSON form of a grid: row-major values with explicit dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDoc {
    pub width: usize,
    pub height: usize,
    pub values: Vec<f64>,
}

impl From<&NumericArray2D<f64>> for GridDoc {
    fn from(grid: &NumericArray2D<f64>) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            values: grid.values().to_vec(),
        }
    }
}

/// Load a numeric CSV as a grid. Each CSV column becomes one grid column, so
/// the grid is `n_columns` wide and `n_rows` high.
pub fn load_csv_grid(path: &Path) -> Result<NumericArray2D<f64>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let (height, width) = df.shape();
    if width == 0 || height == 0 {
        bail!("{} holds no values", path.display());
    }

    let mut values = vec![0.0; width * height];
    for (x, series) in df.get_columns().iter().enumerate() {
        let cast = series
            .cast(&DataType::Float64)
            .with_context(|| format!("column {:?} is not numeric", series.name()))?;
        for (y, v) in cast.f64()?.into_iter().enumerate() {
            let Some(v) = v else {
                bail!("missing value in column {:?} at row {}", series.name(), y);
            };
            values[y * width + x] = v;
        }
    }
    tracing::debug!(width, height, "grid_loaded");
    Ok(NumericArray2D::from_vec(width, height, values)?)
}

pub fn write_grid_json(path: &Path, grid: &NumericArray2D<f64>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let doc = GridDoc::from(grid);
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))
}
