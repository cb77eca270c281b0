//! Shared output plumbing for the run binaries.

use std::path::Path;
use anyhow::Context;
use ndarray as nd;
use ndarray_npy::{ write_npy, WritableElement };

/// Create `dir` and any missing parents.
pub fn ensure_outdir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| {
            format!("couldn't create output directory {}", dir.display())
        })
}

/// Write an array to `dir/name.npy`.
pub fn dump_npy<S, A, D>(dir: &Path, name: &str, data: &nd::ArrayBase<S, D>)
    -> anyhow::Result<()>
where
    S: nd::Data<Elem = A>,
    A: WritableElement,
    D: nd::Dimension,
{
    let path = dir.join(name).with_extension("npy");
    write_npy(&path, data)
        .with_context(|| format!("couldn't write array to {}", path.display()))
}
