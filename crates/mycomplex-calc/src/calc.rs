//! Stream evaluation

use std::io::{BufRead, Write};

use mycomplex_core::{write_scalar, Complex, ComplexReader};
use tracing::{debug, info};

use crate::{CalcConfig, CalcResult};

/// Totals over every value read
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: u64,
    pub sum: Complex,
    pub product: Complex,
}

impl Default for Summary {
    fn default() -> Self {
        Summary {
            count: 0,
            sum: Complex::ZERO,
            product: Complex::ONE,
        }
    }
}

impl Summary {
    pub fn push(&mut self, z: Complex) {
        self.count += 1;
        self.sum += z;
        self.product *= z;
    }
}

/// Read every value from `input`, writing one report line per value and the
/// totals at the end.
///
/// Stops at the first malformed value; lines already written stay written.
pub fn run<R, W>(config: &CalcConfig, input: R, mut out: W) -> CalcResult<Summary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = Summary::default();
    let reader = ComplexReader::new(input);

    for value in reader {
        let z = value?;
        summary.push(z);
        debug!(count = summary.count, %z, "value read");
        writeln!(
            out,
            "z = {}  |z| = {}",
            format_complex(config, z),
            format_real(config, z.abs())
        )?;
    }

    writeln!(out, "sum = {}", format_complex(config, summary.sum))?;
    writeln!(out, "product = {}", format_complex(config, summary.product))?;
    out.flush()?;

    info!(count = summary.count, "input processed");
    Ok(summary)
}

fn format_complex(config: &CalcConfig, z: Complex) -> String {
    match config.precision {
        Some(p) => format!("{:.*}", p, z),
        None => z.to_string(),
    }
}

fn format_real(config: &CalcConfig, x: f64) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail
    let _ = write_scalar(&mut text, x, config.precision);
    text
}
