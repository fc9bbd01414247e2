//! Array difference computation and reporting.

use std::io::{self, Write};

use anyhow::{ensure, Result};
use ndarray::{Array, ArrayBase, Data, Dimension, NdFloat};

/// Compare two sequences of arrays and report their differences.
///
/// For every index *i*, the element-wise difference
/// `original[i] - written[i]` is computed, along with the maximum
/// absolute value over all elements of the difference. One line per
/// pair is written to standard output:
///
/// `{label} - Max difference for tuple {i+1}: {max_diff}`
///
/// Pairs are numbered starting at 1 in the report. The difference
/// arrays and the maximum absolute differences are returned in input
/// order.
///
/// The sequences must have the same length and `original[i]` must have
/// the same shape as `written[i]` for every index. Both constraints
/// are validated before anything is computed or written, so a failing
/// call reports nothing.
pub fn compare_array_differences<S, A, D>(
    original: &[ArrayBase<S, D>],
    written: &[ArrayBase<S, D>],
    label: &str,
) -> Result<(Vec<Array<A, D>>, Vec<A>)>
where
    S: Data<Elem = A>,
    A: NdFloat,
    D: Dimension,
{
    let stdout = io::stdout();
    write_array_differences(original, written, label, &mut stdout.lock())
}

/// Compare two sequences of arrays, writing report lines to `write`.
///
/// This is `compare_array_differences` with the report destination as
/// an argument rather than standard output.
pub fn write_array_differences<S, A, D, W>(
    original: &[ArrayBase<S, D>],
    written: &[ArrayBase<S, D>],
    label: &str,
    write: &mut W,
) -> Result<(Vec<Array<A, D>>, Vec<A>)>
where
    S: Data<Elem = A>,
    A: NdFloat,
    D: Dimension,
    W: Write,
{
    ensure!(
        original.len() == written.len(),
        "Cannot compare {} original against {} written arrays",
        original.len(),
        written.len()
    );

    for (i, (original, written)) in original.iter().zip(written).enumerate() {
        ensure!(
            original.shape() == written.shape(),
            "Shape mismatch for tuple {}: {:?} versus {:?}",
            i + 1,
            original.shape(),
            written.shape()
        );
    }

    let mut diff_arrays = Vec::with_capacity(original.len());
    let mut max_diffs = Vec::with_capacity(original.len());

    for (i, (original, written)) in original.iter().zip(written).enumerate() {
        let diff = original - written;

        // Absolute values are non-negative, so the zero seed is only
        // observable for arrays without elements.
        let max_diff = diff.iter().fold(A::zero(), |max, &v| max.max(v.abs()));

        writeln!(
            write,
            "{} - Max difference for tuple {}: {:?}",
            label,
            i + 1,
            max_diff
        )?;

        diff_arrays.push(diff);
        max_diffs.push(max_diff);
    }

    Ok((diff_arrays, max_diffs))
}
