//! Configuration snapshot I/O.
//!
//! Plain-text layout, physical units throughout: the first line holds the
//! atom count, the second the box edge length, then one line per atom with
//! position and velocity components.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::Error;

fn bad_cnf(path: &Path, line: usize, message: impl Into<String>) -> Error {
    Error::Cnf {
        file: path.display().to_string(),
        line,
        message: message.into(),
    }
}

fn parse_row(path: &Path, line_no: usize, text: &str, count: usize) -> Result<Vec<f64>, Error> {
    let fields: Result<Vec<f64>, _> = text.split_whitespace().map(str::parse).collect();
    match fields {
        Ok(values) if values.len() == count => Ok(values),
        Ok(values) => Err(bad_cnf(
            path,
            line_no,
            format!("expected {} fields, found {}", count, values.len()),
        )),
        Err(e) => Err(bad_cnf(path, line_no, e.to_string())),
    }
}

/// Read an atomic configuration with velocities.
///
/// Returns `(n, box_length, positions, velocities)`, positions in physical
/// units; callers convert to box-fraction units once at load.
pub fn read_cnf_atoms(
    path: impl AsRef<Path>,
) -> Result<(usize, f64, Vec<[f64; 3]>, Vec<[f64; 3]>), Error> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines().enumerate();

    let mut next_line = |expected: &str| -> Result<(usize, String), Error> {
        match lines.next() {
            Some((i, line)) => Ok((i + 1, line?)),
            None => Err(bad_cnf(path, 0, format!("missing {}", expected))),
        }
    };

    let (line_no, text) = next_line("atom count")?;
    let n: usize = text
        .trim()
        .parse()
        .map_err(|_| bad_cnf(path, line_no, "atom count should be an integer"))?;

    let (line_no, text) = next_line("box length")?;
    let box_length: f64 = text
        .trim()
        .parse()
        .map_err(|_| bad_cnf(path, line_no, "box length should be a real number"))?;
    if box_length <= 0.0 {
        return Err(bad_cnf(path, line_no, "box length should be positive"));
    }

    let mut positions = Vec::with_capacity(n);
    let mut velocities = Vec::with_capacity(n);
    for _ in 0..n {
        let (line_no, text) = next_line("atom row")?;
        let row = parse_row(path, line_no, &text, 6)?;
        positions.push([row[0], row[1], row[2]]);
        velocities.push([row[3], row[4], row[5]]);
    }

    Ok((n, box_length, positions, velocities))
}

/// Write an atomic configuration with velocities, physical units
pub fn write_cnf_atoms(
    path: impl AsRef<Path>,
    box_length: f64,
    positions: &[[f64; 3]],
    velocities: &[[f64; 3]],
) -> Result<(), Error> {
    assert_eq!(
        positions.len(),
        velocities.len(),
        "Position and velocity counts should match",
    );
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{:15}", positions.len())?;
    writeln!(writer, "{:15.8}", box_length)?;
    for (r, v) in positions.iter().zip(velocities) {
        writeln!(
            writer,
            "{:15.10} {:15.10} {:15.10} {:15.10} {:15.10} {:15.10}",
            r[0], r[1], r[2], v[0], v[1], v[2],
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bdmd_{}_{}", std::process::id(), name))
    }

    #[test]
    fn written_snapshot_reads_back() {
        let path = scratch_file("roundtrip");
        let positions = vec![[0.5, -1.25, 3.0], [2.0, 0.0, -0.125]];
        let velocities = vec![[0.1, 0.2, -0.3], [0.0, -1.5, 0.25]];
        write_cnf_atoms(&path, 6.75, &positions, &velocities).expect("write");

        let (n, box_length, r, v) = read_cnf_atoms(&path).expect("read");
        assert_eq!(n, 2);
        assert!((box_length - 6.75).abs() < 1e-12);
        for i in 0..2 {
            for k in 0..3 {
                assert!((r[i][k] - positions[i][k]).abs() < 1e-9);
                assert!((v[i][k] - velocities[i][k]).abs() < 1e-9);
            }
        }
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn truncated_file_reports_the_missing_row() {
        let path = scratch_file("truncated");
        std::fs::write(&path, "2\n10.0\n0 0 0 0 0 0\n").expect("write");
        let result = read_cnf_atoms(&path);
        assert!(matches!(result, Err(Error::Cnf { .. })));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn short_row_reports_file_and_line() {
        let path = scratch_file("short_row");
        std::fs::write(&path, "1\n10.0\n0 0 0\n").expect("write");
        match read_cnf_atoms(&path) {
            Err(Error::Cnf { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected Cnf error, got {:?}", other.map(|_| ())),
        }
        let _ = std::fs::remove_file(path);
    }
}
