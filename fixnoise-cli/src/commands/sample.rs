//! `fixnoise sample`: evaluate the noise field over a grid and print it.

use std::io::{self, Write};

use anyhow::{Result, bail};
use fixnoise::fixed::{self, Fixed, ONE};
use fixnoise::{noise2d, noise3d};

use crate::config::SampleConfig;

/// Shades from lowest to highest, used by the ASCII map.
const SHADES: &[u8] = b" .:-=+*#%@";

/// Evaluates the configured grid. Rows are y, columns are x.
pub fn sample_grid(config: &SampleConfig) -> Result<Vec<Vec<Fixed>>> {
    let [ox, oy, oz] = config.origin.map(fixed::from_f64);
    let step = fixed::from_f64(config.step);

    let eval: fn(Fixed, Fixed, Fixed) -> Fixed = match config.dims {
        2 => |x, y, _| noise2d(x, y),
        3 => noise3d,
        other => bail!("unsupported dimension count {other}, expected 2 or 3"),
    };

    let rows = (0..config.height)
        .map(|j| {
            let y = oy.wrapping_add(step.wrapping_mul(j as Fixed));
            (0..config.width)
                .map(|i| eval(ox.wrapping_add(step.wrapping_mul(i as Fixed)), y, oz))
                .collect()
        })
        .collect();
    Ok(rows)
}

/// Maps a Q16.16 value in roughly `[-1, 1]` to a shade character.
fn shade(value: Fixed) -> char {
    let last = SHADES.len() as i64 - 1;
    let clamped = i64::from(value).clamp(-i64::from(ONE), i64::from(ONE));
    let level = (clamped + i64::from(ONE)) * last / (2 * i64::from(ONE));
    char::from(SHADES[level as usize])
}

/// Writes rows as raw Q16.16 comma-separated values.
pub fn write_csv(out: &mut impl Write, rows: &[Vec<Fixed>]) -> io::Result<()> {
    for row in rows {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    Ok(())
}

/// Writes rows as an ASCII shade map.
pub fn write_ascii(out: &mut impl Write, rows: &[Vec<Fixed>]) -> io::Result<()> {
    for row in rows {
        let line: String = row.iter().copied().map(shade).collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Runs the `sample` command.
pub fn run(config: &SampleConfig) -> Result<()> {
    let rows = sample_grid(config)?;
    let (min, max) = rows
        .iter()
        .flatten()
        .fold((Fixed::MAX, Fixed::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    tracing::info!(
        dims = config.dims,
        width = config.width,
        height = config.height,
        min = fixed::to_f64(min),
        max = fixed::to_f64(max),
        "sampled noise field"
    );

    let mut stdout = io::stdout().lock();
    if config.ascii {
        write_ascii(&mut stdout, &rows)?;
    } else {
        write_csv(&mut stdout, &rows)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dims: u8) -> SampleConfig {
        SampleConfig {
            dims,
            width: 5,
            height: 3,
            origin: [0.0, 0.0, 0.5],
            step: 1.0,
            ascii: false,
        }
    }

    #[test]
    fn lattice_grid_is_all_zero_in_2d() {
        let rows = sample_grid(&config(2)).expect("valid dims");
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 5));
        assert!(rows.iter().flatten().all(|&v| v == 0));
    }

    #[test]
    fn grid_matches_direct_evaluation_in_3d() {
        let mut cfg = config(3);
        cfg.step = 0.3;
        let rows = sample_grid(&cfg).expect("valid dims");
        let step = fixed::from_f64(0.3);
        assert_eq!(rows[2][4], noise3d(4 * step, 2 * step, ONE / 2));
    }

    #[test]
    fn rejects_other_dimensions() {
        assert!(sample_grid(&config(4)).is_err());
    }

    #[test]
    fn shade_covers_extremes() {
        assert_eq!(shade(-ONE), ' ');
        assert_eq!(shade(ONE), '@');
        assert_eq!(shade(i32::MAX), '@');
        assert_eq!(shade(0), '=');
    }

    #[test]
    fn csv_output_lists_raw_values() {
        let mut out = Vec::new();
        write_csv(&mut out, &[vec![1, -2], vec![3, 4]]).expect("write to vec");
        assert_eq!(String::from_utf8(out).expect("utf8"), "1,-2\n3,4\n");
    }
}
